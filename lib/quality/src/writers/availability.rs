use super::{MetricWriter, WriterContext};
use crate::config::{MultiValuePolicy, ViolationPolicy};
use crate::errors::QualityError;
use crate::probe::{ProbeOutcome, UrlProbe};
use crate::report::DqvReport;
use log::debug;
use oxrdf::NamedNodeRef;
use representation::measurement::{MeasurementValue, MetricKind};
use representation::term_lexical_form;
use representation::vocab::dcat;

const URL_PROPERTIES: [(NamedNodeRef<'static>, MetricKind); 2] = [
    (dcat::DOWNLOAD_URL, MetricKind::DownloadUrlAvailability),
    (dcat::ACCESS_URL, MetricKind::AccessUrlAvailability),
];

/// Checks every download and access URL of every distribution with a live probe.
pub struct AvailabilityWriter<'a> {
    probe: &'a dyn UrlProbe,
    multi_value: MultiValuePolicy,
    violations: ViolationPolicy,
}

impl<'a> AvailabilityWriter<'a> {
    pub fn new(
        probe: &'a dyn UrlProbe,
        multi_value: MultiValuePolicy,
        violations: ViolationPolicy,
    ) -> AvailabilityWriter<'a> {
        AvailabilityWriter {
            probe,
            multi_value,
            violations,
        }
    }
}

impl MetricWriter for AvailabilityWriter<'_> {
    fn name(&self) -> &'static str {
        "distribution availability"
    }

    fn write(&mut self, ctx: &WriterContext<'_>, report: &mut DqvReport) -> Result<(), QualityError> {
        let violated: Vec<_> = URL_PROPERTIES
            .iter()
            .map(|(path, _)| ctx.violations.lookup(*path))
            .collect();

        for distribution in ctx.graph.subjects_of_type(dcat::DISTRIBUTION_CLASS) {
            for ((property, metric), violated) in URL_PROPERTIES.iter().zip(&violated) {
                for url in ctx.graph.objects(&distribution, *property) {
                    let url = term_lexical_form(url.as_ref());
                    let mut comments = vec![];
                    let available = if self.violations == ViolationPolicy::ShortCircuit
                        && violated.contains(&distribution)
                    {
                        comments.push(format!(
                            "Not checked, {} violates the shape constraints on {}.",
                            url, property
                        ));
                        false
                    } else {
                        let outcome = self.probe.probe(&url);
                        if let ProbeOutcome::Failed(reason) = &outcome {
                            debug!("{} is unreachable: {}", url, reason);
                        }
                        outcome.is_available()
                    };
                    let distinguishing = match self.multi_value {
                        MultiValuePolicy::PerValue => {
                            comments.push(format!("Checked URL {}.", url));
                            Some(url.as_str())
                        }
                        MultiValuePolicy::LastWins => None,
                    };
                    report.record(
                        distribution.as_ref(),
                        *metric,
                        MeasurementValue::Flag(available),
                        comments,
                        distinguishing,
                    )?;
                }
            }
        }
        Ok(())
    }
}
