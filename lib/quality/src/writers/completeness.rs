use super::{MetricWriter, WriterContext};
use crate::errors::QualityError;
use crate::report::DqvReport;
use log::debug;
use oxrdf::vocab::rdf;
use oxrdf::{NamedNodeRef, TripleRef};
use representation::measurement::{MeasurementValue, MetricKind};
use representation::vocab::{dcat, dct};

pub const MISSING_KEYWORDS: &str = "Missing keywords (dcat:keyword).";
pub const MISSING_THEME: &str = "Missing category (dcat:theme).";
pub const MISSING_FORMAT: &str = "Missing format (dct:format).";
pub const MISSING_MEDIA_TYPE: &str = "Missing media type (dcat:mediaType).";

const PENALTY: f64 = 0.5;

/// Scores every instance of a class from the violations on two recommended
/// properties: 1.0, less 0.5 per violated property, with one comment per penalty.
pub struct CompletenessWriter {
    metric: MetricKind,
    class: NamedNodeRef<'static>,
    checks: [(NamedNodeRef<'static>, &'static str); 2],
    echo_distribution_links: bool,
}

impl CompletenessWriter {
    /// Checks `dcat:keyword` and `dcat:theme`, and echoes every `dcat:distribution` statement.
    pub fn datasets() -> CompletenessWriter {
        CompletenessWriter {
            metric: MetricKind::DatasetCompleteness,
            class: dcat::DATASET,
            checks: [(dcat::KEYWORD, MISSING_KEYWORDS), (dcat::THEME, MISSING_THEME)],
            echo_distribution_links: true,
        }
    }

    pub fn distributions() -> CompletenessWriter {
        CompletenessWriter {
            metric: MetricKind::DistributionCompleteness,
            class: dcat::DISTRIBUTION_CLASS,
            checks: [(dct::FORMAT, MISSING_FORMAT), (dcat::MEDIA_TYPE, MISSING_MEDIA_TYPE)],
            echo_distribution_links: false,
        }
    }
}

impl MetricWriter for CompletenessWriter {
    fn name(&self) -> &'static str {
        match self.metric {
            MetricKind::DatasetCompleteness => "dataset completeness",
            _ => "distribution completeness",
        }
    }

    fn write(&mut self, ctx: &WriterContext<'_>, report: &mut DqvReport) -> Result<(), QualityError> {
        let violated: Vec<_> = self
            .checks
            .iter()
            .map(|(path, comment)| (ctx.violations.lookup(*path), *comment))
            .collect();

        let entities = ctx.graph.subjects_of_type(self.class);
        debug!("Scoring {} instances of {}", entities.len(), self.class);
        for entity in &entities {
            report.echo(TripleRef::new(entity, rdf::TYPE, self.class));
            let mut value = 1.0;
            let mut comments = vec![];
            for (nodes, comment) in &violated {
                if nodes.contains(entity) {
                    value -= PENALTY;
                    comments.push(comment.to_string());
                }
            }
            report.record(
                entity.as_ref(),
                self.metric,
                MeasurementValue::Score(value),
                comments,
                None,
            )?;
        }

        if self.echo_distribution_links && !entities.is_empty() {
            for t in ctx.graph.triples_for_predicate(dcat::DISTRIBUTION) {
                report.echo(&t);
            }
        }
        Ok(())
    }
}
