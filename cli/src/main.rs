//! Computes DQV quality measurements for the datasets of a DCAT catalog.
//!
//! ```bash
//! # Query the default endpoint and write output/shacl_report.ttl and output/dqv_report.ttl:
//! dcat-quality
//!
//! # Work offline on a local catalog, one measurement per URL:
//! dcat-quality --input catalog.ttl --per-value
//!
//! # Logging is controlled with RUST_LOG:
//! RUST_LOG=debug dcat-quality --config quality.toml
//! ```

use clap::Parser;
use log::error;
use quality::config::{MultiValuePolicy, QualityConfig, ViolationPolicy};
use quality::errors::QualityError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "dcat-quality", version)]
struct Cli {
    /// TOML configuration file. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Local Turtle catalog to assess instead of querying the endpoint.
    #[arg(long)]
    input: Option<PathBuf>,

    /// SPARQL endpoint the catalog is retrieved from.
    #[arg(long)]
    endpoint: Option<String>,

    /// Case-insensitive substring of the publisher name.
    #[arg(long)]
    publisher: Option<String>,

    #[arg(long)]
    shapes: Option<PathBuf>,

    /// Metric definitions the report is seeded with.
    #[arg(long)]
    metrics: Option<PathBuf>,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Emit one measurement per URL, format or media type instead of one per distribution.
    #[arg(long)]
    per_value: bool,

    /// Report URLs that violate the shapes as unavailable without checking them.
    #[arg(long)]
    short_circuit_violations: bool,

    /// Do not verify TLS certificates of remote endpoints.
    #[arg(long)]
    accept_invalid_certs: bool,
}

impl Cli {
    fn into_config(self) -> Result<QualityConfig, QualityError> {
        let mut config = match &self.config {
            Some(path) => QualityConfig::from_path(path)?,
            None => QualityConfig::default(),
        };
        if let Some(input) = self.input {
            config.input_path = Some(input);
        }
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(publisher) = self.publisher {
            config.publisher_filter = publisher;
        }
        if let Some(shapes) = self.shapes {
            config.shapes_path = shapes;
        }
        if let Some(metrics) = self.metrics {
            config.metrics_path = metrics;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if self.per_value {
            config.multi_value = MultiValuePolicy::PerValue;
        }
        if self.short_circuit_violations {
            config.violations = ViolationPolicy::ShortCircuit;
        }
        if self.accept_invalid_certs {
            config.accept_invalid_certs = true;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let result = Cli::parse()
        .into_config()
        .and_then(|config| quality::pipeline::run(&config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
