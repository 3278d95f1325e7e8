use crate::errors::QualityError;
use representation::measurement::{DEFAULT_CATALOG_PREFIX, DEFAULT_MEASUREMENT_BASE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use triplestore::remote::{DEFAULT_ENDPOINT, DEFAULT_PUBLISHER_FILTER};
use triplestore::retry::RetryPolicy;

pub const SHACL_REPORT_FILE: &str = "shacl_report.ttl";
pub const DQV_REPORT_FILE: &str = "dqv_report.ttl";

/// How several values of the same property on one distribution are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiValuePolicy {
    /// One measurement per distribution and metric. Values are evaluated in
    /// lexical order and each one replaces the previous result.
    #[default]
    LastWins,
    /// One measurement per value.
    PerValue,
}

/// Whether a shape violation on a URL property decides availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationPolicy {
    /// Only the live check decides.
    #[default]
    LiveCheckOnly,
    /// A violated URL property is unavailable without a live check.
    ShortCircuit,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QualityConfig {
    pub endpoint: String,
    pub publisher_filter: String,
    /// Local Turtle catalog used instead of querying the endpoint.
    pub input_path: Option<PathBuf>,
    pub shapes_path: PathBuf,
    pub metrics_path: PathBuf,
    pub output_dir: PathBuf,
    pub catalog_prefix: String,
    pub measurement_base: String,
    pub endpoint_timeout_secs: Option<u64>,
    pub probe_timeout_secs: u64,
    pub vocabulary_timeout_secs: Option<u64>,
    pub accept_invalid_certs: bool,
    pub retry: RetryPolicy,
    pub multi_value: MultiValuePolicy,
    pub violations: ViolationPolicy,
}

impl Default for QualityConfig {
    fn default() -> Self {
        QualityConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            publisher_filter: DEFAULT_PUBLISHER_FILTER.to_string(),
            input_path: None,
            shapes_path: PathBuf::from("input/shapes.ttl"),
            metrics_path: PathBuf::from("input/metrics.ttl"),
            output_dir: PathBuf::from("output"),
            catalog_prefix: DEFAULT_CATALOG_PREFIX.to_string(),
            measurement_base: DEFAULT_MEASUREMENT_BASE.to_string(),
            endpoint_timeout_secs: None,
            probe_timeout_secs: 5,
            vocabulary_timeout_secs: None,
            accept_invalid_certs: false,
            retry: RetryPolicy::default(),
            multi_value: MultiValuePolicy::default(),
            violations: ViolationPolicy::default(),
        }
    }
}

impl QualityConfig {
    pub fn from_toml_str(s: &str, path: &Path) -> Result<QualityConfig, QualityError> {
        toml::from_str(s).map_err(|source| QualityError::ConfigParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_path(path: &Path) -> Result<QualityConfig, QualityError> {
        let s = fs::read_to_string(path).map_err(|source| QualityError::ConfigReadError {
            path: path.to_path_buf(),
            source,
        })?;
        QualityConfig::from_toml_str(&s, path)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn endpoint_timeout(&self) -> Option<Duration> {
        self.endpoint_timeout_secs.map(Duration::from_secs)
    }

    pub fn vocabulary_timeout(&self) -> Option<Duration> {
        self.vocabulary_timeout_secs.map(Duration::from_secs)
    }

    pub fn shacl_report_path(&self) -> PathBuf {
        self.output_dir.join(SHACL_REPORT_FILE)
    }

    pub fn dqv_report_path(&self) -> PathBuf {
        self.output_dir.join(DQV_REPORT_FILE)
    }
}
