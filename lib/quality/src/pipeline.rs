use crate::config::QualityConfig;
use crate::errors::QualityError;
use crate::probe::{HttpUrlProbe, UrlProbe};
use crate::report::{DqvReport, ReportAssembler};
use crate::vocabulary::{HttpVocabularyResolver, VocabularyResolver};
use crate::writers::{
    AvailabilityWriter, CompletenessWriter, InteroperabilityWriter, MetricWriter, WriterContext,
};
use log::info;
use oxrdfio::RdfFormat;
use representation::measurement::MeasurementIdMinter;
use shacl::errors::ShaclError;
use shacl::{ValidationReport, ViolationIndex};
use std::path::Path;
use std::time::Instant;
use triplestore::http::{HttpClient, HttpClientOptions};
use triplestore::remote::CatalogLoader;
use triplestore::Triplestore;

/// Everything a run produces.
pub struct Assessment {
    pub validation: ValidationReport,
    pub validation_graph: Triplestore,
    pub report: DqvReport,
}

/// The four writers in the order their measurements are assembled.
pub fn standard_assembler<'a>(
    config: &QualityConfig,
    probe: &'a dyn UrlProbe,
    resolver: &'a dyn VocabularyResolver,
) -> ReportAssembler<'a> {
    let writers: Vec<Box<dyn MetricWriter + 'a>> = vec![
        Box::new(CompletenessWriter::datasets()),
        Box::new(CompletenessWriter::distributions()),
        Box::new(AvailabilityWriter::new(
            probe,
            config.multi_value,
            config.violations,
        )),
        Box::new(InteroperabilityWriter::new(resolver, config.multi_value)),
    ];
    ReportAssembler::new(writers)
}

pub fn http_client(config: &QualityConfig) -> Result<HttpClient, QualityError> {
    Ok(HttpClient::new(HttpClientOptions {
        retry: config.retry.clone(),
        accept_invalid_certs: config.accept_invalid_certs,
        ..HttpClientOptions::default()
    })?)
}

/// Reads the catalog from `input_path` when set, otherwise queries the endpoint.
pub fn load_catalog(config: &QualityConfig, http: &HttpClient) -> Result<Triplestore, QualityError> {
    let now = Instant::now();
    let graph = match &config.input_path {
        Some(path) => {
            info!("Reading datasets from {}", path.to_string_lossy());
            let mut ts = Triplestore::new();
            ts.read_triples_from_path(path, None, None)
                .map_err(QualityError::RetrievalError)?;
            ts
        }
        None => CatalogLoader::new(&config.endpoint, &config.publisher_filter, http.clone())
            .with_timeout(config.endpoint_timeout())
            .retrieve()
            .map_err(QualityError::RetrievalError)?,
    };
    info!(
        "Loaded {} triples in {} seconds",
        graph.len(),
        now.elapsed().as_secs_f32()
    );
    Ok(graph)
}

fn read_turtle_file(path: &Path) -> Result<Triplestore, QualityError> {
    let mut ts = Triplestore::new();
    ts.read_triples_from_path(path, Some(RdfFormat::Turtle), None)?;
    Ok(ts)
}

/// A shapes file that cannot be read or parsed is unusable for validation.
fn read_shapes(path: &Path) -> Result<Triplestore, QualityError> {
    let mut ts = Triplestore::new();
    ts.read_triples_from_path(path, Some(RdfFormat::Turtle), None)
        .map_err(ShaclError::TriplestoreError)?;
    Ok(ts)
}

/// Validates the catalog and derives the quality report. Nothing is written.
pub fn assess(
    config: &QualityConfig,
    graph: &Triplestore,
    shapes: &Triplestore,
    template: Triplestore,
    probe: &dyn UrlProbe,
    resolver: &dyn VocabularyResolver,
) -> Result<Assessment, QualityError> {
    info!("Running SHACL validation");
    let validation = shacl::validate(graph, shapes)?;
    let validation_graph = validation.to_triplestore();
    let violations = ViolationIndex::from_graph(&validation_graph);

    info!("Writing report");
    let now = Instant::now();
    let minter = MeasurementIdMinter::new(&config.catalog_prefix, &config.measurement_base)?;
    let ctx = WriterContext {
        graph,
        violations: &violations,
    };
    let report = standard_assembler(config, probe, resolver).assemble(&ctx, template, minter)?;
    info!(
        "Derived {} measurements in {} seconds",
        report.len(),
        now.elapsed().as_secs_f32()
    );
    Ok(Assessment {
        validation,
        validation_graph,
        report,
    })
}

pub fn write_outputs(config: &QualityConfig, assessment: &Assessment) -> Result<(), QualityError> {
    assessment
        .validation_graph
        .write_triples_to_path(&config.shacl_report_path(), RdfFormat::Turtle)?;
    assessment.report.write_to_path(&config.dqv_report_path())?;
    Ok(())
}

/// Retrieves, validates, measures and writes both reports.
pub fn run(config: &QualityConfig) -> Result<Assessment, QualityError> {
    let http = http_client(config)?;
    info!("Retrieving datasets");
    let graph = load_catalog(config, &http)?;
    let shapes = read_shapes(&config.shapes_path)?;
    let template = read_turtle_file(&config.metrics_path)?;
    let probe = HttpUrlProbe::new(http.clone(), config.probe_timeout());
    let resolver = HttpVocabularyResolver::new(http, config.vocabulary_timeout());
    let assessment = assess(config, &graph, &shapes, template, &probe, &resolver)?;
    write_outputs(config, &assessment)?;
    info!(
        "All done, find the reports in {}",
        config.output_dir.to_string_lossy()
    );
    Ok(assessment)
}
