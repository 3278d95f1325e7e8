use crate::errors::RepresentationError;
use crate::vocab::{metrics, EX_PREFIX_IRI};
use log::debug;
use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNode, NamedNodeRef};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const DEFAULT_CATALOG_PREFIX: &str = "https://datos.gob.es/catalogo/";
pub const DEFAULT_MEASUREMENT_BASE: &str = EX_PREFIX_IRI;

/// The closed set of metrics a measurement can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    DatasetCompleteness,
    DistributionCompleteness,
    DownloadUrlAvailability,
    AccessUrlAvailability,
    FormatInControlledVocabulary,
    MediaTypeInControlledVocabulary,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::DatasetCompleteness,
        MetricKind::DistributionCompleteness,
        MetricKind::DownloadUrlAvailability,
        MetricKind::AccessUrlAvailability,
        MetricKind::FormatInControlledVocabulary,
        MetricKind::MediaTypeInControlledVocabulary,
    ];

    pub fn metric_iri(&self) -> NamedNodeRef<'static> {
        match self {
            MetricKind::DatasetCompleteness => metrics::DATASET_COMPLETENESS,
            MetricKind::DistributionCompleteness => metrics::DISTRIBUTION_COMPLETENESS,
            MetricKind::DownloadUrlAvailability => metrics::DOWNLOAD_URL_AVAILABILITY,
            MetricKind::AccessUrlAvailability => metrics::ACCESS_URL_AVAILABILITY,
            MetricKind::FormatInControlledVocabulary => metrics::FORMAT_IN_CONTROLLED_VOCABULARY,
            MetricKind::MediaTypeInControlledVocabulary => {
                metrics::MEDIA_TYPE_IN_CONTROLLED_VOCABULARY
            }
        }
    }

    /// Segment placed between the measurement base and the target-specific suffix.
    pub fn id_segment(&self) -> &'static str {
        match self {
            MetricKind::DatasetCompleteness => "measurement-",
            MetricKind::DistributionCompleteness => "completeness-measurement-",
            MetricKind::DownloadUrlAvailability => "download-accessibility-measurement-",
            MetricKind::AccessUrlAvailability => "access-accessibility-measurement-",
            MetricKind::FormatInControlledVocabulary => "format-interop-measurement-",
            MetricKind::MediaTypeInControlledVocabulary => "mediatype-interop-measurement-",
        }
    }

}

impl Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.metric_iri().as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementValue {
    Score(f64),
    Flag(bool),
}

impl MeasurementValue {
    /// Scores are typed `xsd:float`, flags `xsd:boolean`.
    pub fn to_literal(&self) -> Literal {
        match self {
            MeasurementValue::Score(s) => Literal::new_typed_literal(format!("{s:?}"), xsd::FLOAT),
            MeasurementValue::Flag(b) => Literal::from(*b),
        }
    }
}

/// Derives measurement identifiers from the entity they are computed on.
///
/// A target starting with the catalog prefix keeps its remainder, so
/// `https://datos.gob.es/catalogo/a` becomes `http://example.org/measurement-a`
/// for dataset completeness. Any other target is identified by a name-based
/// UUID of its full IRI. Every issued identifier is remembered, and minting the
/// same identifier for a different target or metric is an error.
#[derive(Debug, Clone)]
pub struct MeasurementIdMinter {
    catalog_prefix: String,
    measurement_base: String,
    issued: HashMap<NamedNode, (NamedNode, MetricKind)>,
}

impl Default for MeasurementIdMinter {
    fn default() -> Self {
        MeasurementIdMinter {
            catalog_prefix: DEFAULT_CATALOG_PREFIX.to_string(),
            measurement_base: DEFAULT_MEASUREMENT_BASE.to_string(),
            issued: HashMap::new(),
        }
    }
}

impl MeasurementIdMinter {
    pub fn new(
        catalog_prefix: &str,
        measurement_base: &str,
    ) -> Result<MeasurementIdMinter, RepresentationError> {
        NamedNode::new(measurement_base).map_err(|x| {
            RepresentationError::InvalidIriError(measurement_base.to_string(), x)
        })?;
        Ok(MeasurementIdMinter {
            catalog_prefix: catalog_prefix.to_string(),
            measurement_base: measurement_base.to_string(),
            issued: HashMap::new(),
        })
    }

    /// Identifier shared by every value of `metric` on `target`.
    pub fn mint(
        &mut self,
        target: NamedNodeRef<'_>,
        metric: MetricKind,
    ) -> Result<NamedNode, RepresentationError> {
        let iri = format!(
            "{}{}{}",
            self.measurement_base,
            metric.id_segment(),
            self.target_suffix(target)
        );
        self.register(iri, target, metric)
    }

    /// Identifier for one particular `value` of `metric` on `target`.
    pub fn mint_for_value(
        &mut self,
        target: NamedNodeRef<'_>,
        metric: MetricKind,
        value: &str,
    ) -> Result<NamedNode, RepresentationError> {
        let iri = format!(
            "{}{}{}-{}",
            self.measurement_base,
            metric.id_segment(),
            self.target_suffix(target),
            Uuid::new_v5(&Uuid::NAMESPACE_URL, value.as_bytes())
        );
        self.register(iri, target, metric)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    fn target_suffix(&self, target: NamedNodeRef<'_>) -> String {
        match target.as_str().strip_prefix(&self.catalog_prefix) {
            Some(rest) if !rest.is_empty() && !self.catalog_prefix.is_empty() => rest.to_string(),
            _ => {
                debug!(
                    "Target {} is outside catalog prefix {}, using a name based identifier",
                    target, self.catalog_prefix
                );
                Uuid::new_v5(&Uuid::NAMESPACE_URL, target.as_str().as_bytes()).to_string()
            }
        }
    }

    fn register(
        &mut self,
        iri: String,
        target: NamedNodeRef<'_>,
        metric: MetricKind,
    ) -> Result<NamedNode, RepresentationError> {
        let node =
            NamedNode::new(&iri).map_err(|x| RepresentationError::InvalidIriError(iri, x))?;
        if let Some((existing_target, existing_metric)) = self.issued.get(&node) {
            if existing_target.as_ref() != target || *existing_metric != metric {
                return Err(RepresentationError::MeasurementIdCollision {
                    iri: node.into_string(),
                    existing_target: existing_target.to_string(),
                    existing_metric: existing_metric.to_string(),
                    target: target.to_string(),
                    metric: metric.to_string(),
                });
            }
        } else {
            self.issued
                .insert(node.clone(), (target.into_owned(), metric));
        }
        Ok(node)
    }
}
