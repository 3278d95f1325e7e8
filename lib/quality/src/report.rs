use crate::errors::QualityError;
use crate::writers::{MetricWriter, WriterContext};
use log::{debug, info};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Literal, NamedNode, NamedNodeRef, TripleRef};
use oxrdfio::RdfFormat;
use representation::measurement::{MeasurementIdMinter, MeasurementValue, MetricKind};
use representation::vocab::dqv;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;
use triplestore::Triplestore;

#[derive(Debug, Clone, PartialEq)]
pub struct QualityMeasurement {
    pub iri: NamedNode,
    pub computed_on: NamedNode,
    pub metric: MetricKind,
    pub value: MeasurementValue,
    pub comments: Vec<String>,
}

/// The output report: the metric template, statements echoed from the
/// catalog, and one entry per measurement identifier.
///
/// Recording a measurement under an identifier that already holds one
/// replaces it.
#[derive(Debug, Clone)]
pub struct DqvReport {
    base: Triplestore,
    measurements: BTreeMap<NamedNode, QualityMeasurement>,
    minter: MeasurementIdMinter,
}

impl DqvReport {
    pub fn new(template: Triplestore, minter: MeasurementIdMinter) -> DqvReport {
        DqvReport {
            base: template,
            measurements: BTreeMap::new(),
            minter,
        }
    }

    pub fn echo<'a>(&mut self, triple: impl Into<TripleRef<'a>>) {
        self.base.insert(triple);
    }

    /// Records `value` of `metric` on `target`. With `distinguishing_value` the
    /// measurement gets its own identifier for that value.
    pub fn record(
        &mut self,
        target: NamedNodeRef<'_>,
        metric: MetricKind,
        value: MeasurementValue,
        comments: Vec<String>,
        distinguishing_value: Option<&str>,
    ) -> Result<NamedNode, QualityError> {
        let iri = match distinguishing_value {
            Some(v) => self.minter.mint_for_value(target, metric, v)?,
            None => self.minter.mint(target, metric)?,
        };
        let measurement = QualityMeasurement {
            iri: iri.clone(),
            computed_on: target.into_owned(),
            metric,
            value,
            comments,
        };
        if let Some(previous) = self.measurements.insert(iri.clone(), measurement) {
            info!(
                "Measurement {} replaced, value {:?} superseded by {:?}",
                iri, previous.value, value
            );
        }
        Ok(iri)
    }

    pub fn measurement(&self, iri: NamedNodeRef<'_>) -> Option<&QualityMeasurement> {
        self.measurements.get(&iri.into_owned())
    }

    /// Measurements of `metric` computed on `target`, ordered by identifier.
    pub fn measurements_for(
        &self,
        target: NamedNodeRef<'_>,
        metric: MetricKind,
    ) -> Vec<&QualityMeasurement> {
        self.measurements
            .values()
            .filter(|m| m.computed_on.as_ref() == target && m.metric == metric)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn to_triplestore(&self) -> Triplestore {
        let mut ts = self.base.clone();
        for m in self.measurements.values() {
            ts.insert(TripleRef::new(
                &m.computed_on,
                dqv::HAS_QUALITY_MEASUREMENT,
                &m.iri,
            ));
            ts.insert(TripleRef::new(&m.iri, rdf::TYPE, dqv::QUALITY_MEASUREMENT));
            ts.insert(TripleRef::new(&m.iri, dqv::COMPUTED_ON, &m.computed_on));
            ts.insert(TripleRef::new(
                &m.iri,
                dqv::IS_MEASUREMENT_OF,
                m.metric.metric_iri(),
            ));
            ts.insert(TripleRef::new(&m.iri, dqv::VALUE, &m.value.to_literal()));
            for comment in &m.comments {
                ts.insert(TripleRef::new(
                    &m.iri,
                    rdfs::COMMENT,
                    &Literal::new_simple_literal(comment),
                ));
            }
        }
        ts
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), QualityError> {
        let ts = self.to_triplestore();
        ts.write_triples_to_path(path, RdfFormat::Turtle)?;
        info!("Wrote {} measurements to {}", self.len(), path.to_string_lossy());
        Ok(())
    }
}

/// Runs metric writers in a fixed order over one shared report.
pub struct ReportAssembler<'a> {
    writers: Vec<Box<dyn MetricWriter + 'a>>,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(writers: Vec<Box<dyn MetricWriter + 'a>>) -> ReportAssembler<'a> {
        ReportAssembler { writers }
    }

    pub fn assemble(
        &mut self,
        ctx: &WriterContext<'_>,
        template: Triplestore,
        minter: MeasurementIdMinter,
    ) -> Result<DqvReport, QualityError> {
        let mut report = DqvReport::new(template, minter);
        for writer in self.writers.iter_mut() {
            let now = Instant::now();
            let before = report.len();
            writer.write(ctx, &mut report)?;
            debug!(
                "Writer {} recorded {} measurements in {} seconds",
                writer.name(),
                report.len() - before,
                now.elapsed().as_secs_f32()
            );
        }
        Ok(report)
    }
}
