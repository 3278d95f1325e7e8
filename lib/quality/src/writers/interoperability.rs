use super::{MetricWriter, WriterContext};
use crate::config::MultiValuePolicy;
use crate::errors::QualityError;
use crate::report::DqvReport;
use crate::vocabulary::{VocabularyClassifier, VocabularyResolver};
use log::warn;
use oxrdf::NamedNodeRef;
use representation::measurement::{MeasurementValue, MetricKind};
use representation::vocab::{dcat, dct};
use representation::{term_as_subject, term_lexical_form};

const TYPED_PROPERTIES: [(NamedNodeRef<'static>, MetricKind); 2] = [
    (dct::FORMAT, MetricKind::FormatInControlledVocabulary),
    (dcat::MEDIA_TYPE, MetricKind::MediaTypeInControlledVocabulary),
];

/// Checks whether the format and media type of every distribution are terms
/// of a controlled vocabulary, judged by the first declared type of the term.
pub struct InteroperabilityWriter<'a> {
    classifier: VocabularyClassifier<'a>,
    multi_value: MultiValuePolicy,
}

impl<'a> InteroperabilityWriter<'a> {
    pub fn new(
        resolver: &'a dyn VocabularyResolver,
        multi_value: MultiValuePolicy,
    ) -> InteroperabilityWriter<'a> {
        InteroperabilityWriter {
            classifier: VocabularyClassifier::new(resolver),
            multi_value,
        }
    }
}

impl MetricWriter for InteroperabilityWriter<'_> {
    fn name(&self) -> &'static str {
        "distribution interoperability"
    }

    fn write(&mut self, ctx: &WriterContext<'_>, report: &mut DqvReport) -> Result<(), QualityError> {
        for distribution in ctx.graph.subjects_of_type(dcat::DISTRIBUTION_CLASS) {
            for (property, metric) in TYPED_PROPERTIES {
                for value in ctx.graph.objects(&distribution, property) {
                    let lexical = term_lexical_form(value.as_ref());
                    let mut comments = vec![];
                    let declared_type = term_as_subject(value.as_ref())
                        .and_then(|s| ctx.graph.types_of(s).into_iter().next());
                    let in_vocabulary = match declared_type {
                        Some(t) => self.classifier.is_controlled_vocabulary(t.as_ref()),
                        None => {
                            warn!(
                                "{} of {} has no declared type, measuring it as not in a controlled vocabulary",
                                lexical, distribution
                            );
                            comments.push(format!("No declared type for {}.", lexical));
                            false
                        }
                    };
                    let distinguishing = match self.multi_value {
                        MultiValuePolicy::PerValue => {
                            comments.push(format!("Checked value {}.", lexical));
                            Some(lexical.as_str())
                        }
                        MultiValuePolicy::LastWins => None,
                    };
                    report.record(
                        distribution.as_ref(),
                        metric,
                        MeasurementValue::Flag(in_vocabulary),
                        comments,
                        distinguishing,
                    )?;
                }
            }
        }
        Ok(())
    }
}
