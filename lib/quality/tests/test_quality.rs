use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Literal, NamedNode, NamedNodeRef, Term, TripleRef};
use quality::config::{MultiValuePolicy, QualityConfig, ViolationPolicy};
use quality::errors::QualityError;
use quality::pipeline::{assess, run, write_outputs, Assessment};
use quality::probe::{ProbeOutcome, UrlProbe};
use quality::vocabulary::VocabularyResolver;
use quality::writers::completeness::{MISSING_KEYWORDS, MISSING_THEME};
use representation::measurement::{MeasurementValue, MetricKind};
use representation::vocab::{dcam, dcat, dqv};
use rstest::*;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use triplestore::errors::TriplestoreError;
use triplestore::Triplestore;

const PREFIXES: &str = r#"
    @prefix dcat: <http://www.w3.org/ns/dcat#> .
    @prefix dct: <http://purl.org/dc/terms/> .
    @prefix ex: <http://example.net/> .
    @prefix cat: <https://datos.gob.es/catalogo/> .
"#;

struct FakeProbe {
    outcomes: HashMap<String, ProbeOutcome>,
    calls: RefCell<Vec<String>>,
}

impl FakeProbe {
    fn new(outcomes: &[(&str, ProbeOutcome)]) -> FakeProbe {
        FakeProbe {
            outcomes: outcomes
                .iter()
                .map(|(url, o)| (url.to_string(), o.clone()))
                .collect(),
            calls: RefCell::new(vec![]),
        }
    }
}

impl UrlProbe for FakeProbe {
    fn probe(&self, url: &str) -> ProbeOutcome {
        self.calls.borrow_mut().push(url.to_string());
        self.outcomes
            .get(url)
            .cloned()
            .unwrap_or(ProbeOutcome::Failed("operation timed out".to_string()))
    }
}

/// Type resources listed in `vocabularies` declare themselves vocabulary encoding schemes.
struct FakeResolver {
    vocabularies: HashSet<String>,
}

impl FakeResolver {
    fn new(vocabularies: &[&str]) -> FakeResolver {
        FakeResolver {
            vocabularies: vocabularies.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl VocabularyResolver for FakeResolver {
    fn declared_types(&self, resource: NamedNodeRef<'_>) -> Result<Vec<NamedNode>, TriplestoreError> {
        if self.vocabularies.contains(resource.as_str()) {
            Ok(vec![dcam::VOCABULARY_ENCODING_SCHEME.into_owned()])
        } else {
            Ok(vec![])
        }
    }
}

fn workspace_path() -> PathBuf {
    let manidir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::new();
    path.push(manidir);
    path.push("..");
    path.push("..");
    path
}

#[fixture]
fn testdata_path() -> PathBuf {
    let manidir = env!("CARGO_MANIFEST_DIR");
    let mut testdata_path = PathBuf::new();
    testdata_path.push(manidir);
    testdata_path.push("tests");
    testdata_path.push("testdata");
    testdata_path
}

fn read(path: PathBuf) -> Triplestore {
    let mut ts = Triplestore::new();
    ts.read_triples_from_path(&path, None, None).unwrap();
    ts
}

fn run_assessment(
    config: &QualityConfig,
    graph: &Triplestore,
    probe: &FakeProbe,
    resolver: &FakeResolver,
) -> Assessment {
    let root = workspace_path();
    assess(
        config,
        graph,
        &read(root.join("input").join("shapes.ttl")),
        read(root.join("input").join("metrics.ttl")),
        probe,
        resolver,
    )
    .unwrap()
}

fn catalog(body: &str) -> Triplestore {
    Triplestore::from_turtle(&format!("{}{}", PREFIXES, body)).unwrap()
}

fn iri(s: &str) -> NamedNode {
    NamedNode::new_unchecked(s)
}

fn single_value(assessment: &Assessment, target: &str, metric: MetricKind) -> MeasurementValue {
    let target = iri(target);
    let measurements = assessment.report.measurements_for(target.as_ref(), metric);
    assert_eq!(measurements.len(), 1, "{} measurements of {}", measurements.len(), metric);
    measurements[0].value
}

#[rstest]
fn test_end_to_end_scenario(testdata_path: PathBuf) {
    let graph = read(testdata_path.join("catalog.ttl"));
    let probe = FakeProbe::new(&[
        ("http://files.example.net/access", ProbeOutcome::Status(200)),
        ("http://files.example.net/download.csv", ProbeOutcome::Status(500)),
    ]);
    let resolver = FakeResolver::new(&["http://example.net/FileType"]);
    let assessment = run_assessment(&QualityConfig::default(), &graph, &probe, &resolver);

    let dataset = "https://datos.gob.es/catalogo/dataset/d1";
    let distribution = "https://datos.gob.es/catalogo/distribution/x1";
    let dataset_measurement = assessment
        .report
        .measurement(iri("http://example.org/measurement-dataset/d1").as_ref())
        .unwrap();
    assert_eq!(dataset_measurement.value, MeasurementValue::Score(0.5));
    assert_eq!(dataset_measurement.comments, vec![MISSING_THEME.to_string()]);
    assert_eq!(
        single_value(&assessment, distribution, MetricKind::DistributionCompleteness),
        MeasurementValue::Score(1.0)
    );
    assert_eq!(
        single_value(&assessment, distribution, MetricKind::DownloadUrlAvailability),
        MeasurementValue::Flag(false)
    );
    assert_eq!(
        single_value(&assessment, distribution, MetricKind::AccessUrlAvailability),
        MeasurementValue::Flag(true)
    );
    assert_eq!(
        single_value(&assessment, distribution, MetricKind::FormatInControlledVocabulary),
        MeasurementValue::Flag(true)
    );
    assert_eq!(
        single_value(&assessment, distribution, MetricKind::MediaTypeInControlledVocabulary),
        MeasurementValue::Flag(false)
    );
    assert_eq!(single_value(&assessment, dataset, MetricKind::DatasetCompleteness), MeasurementValue::Score(0.5));
    assert_eq!(assessment.report.len(), 6);
    assert!(!assessment.validation.conforms);
}

#[rstest]
fn test_report_graph_is_seeded_and_echoes_catalog(testdata_path: PathBuf) {
    let graph = read(testdata_path.join("catalog.ttl"));
    let probe = FakeProbe::new(&[]);
    let resolver = FakeResolver::new(&[]);
    let assessment = run_assessment(&QualityConfig::default(), &graph, &probe, &resolver);
    let rendered = assessment.report.to_triplestore();

    let dataset = iri("https://datos.gob.es/catalogo/dataset/d1");
    let distribution = iri("https://datos.gob.es/catalogo/distribution/x1");
    let measurement = iri("http://example.org/measurement-dataset/d1");
    let metric = iri("http://example.org/datasetCompletenessMetric");
    let dqv_metric = iri("http://www.w3.org/ns/dqv#Metric");
    assert!(rendered.contains(TripleRef::new(&metric, rdf::TYPE, &dqv_metric)));
    assert!(rendered.contains(TripleRef::new(&dataset, rdf::TYPE, dcat::DATASET)));
    assert!(rendered.contains(TripleRef::new(&distribution, rdf::TYPE, dcat::DISTRIBUTION_CLASS)));
    assert!(rendered.contains(TripleRef::new(&dataset, dcat::DISTRIBUTION, &distribution)));
    assert!(rendered.contains(TripleRef::new(&dataset, dqv::HAS_QUALITY_MEASUREMENT, &measurement)));
    assert!(rendered.contains(TripleRef::new(&measurement, rdf::TYPE, dqv::QUALITY_MEASUREMENT)));
    assert!(rendered.contains(TripleRef::new(&measurement, dqv::COMPUTED_ON, &dataset)));
    assert!(rendered.contains(TripleRef::new(&measurement, dqv::IS_MEASUREMENT_OF, &metric)));
    assert!(rendered.contains(TripleRef::new(
        &measurement,
        dqv::VALUE,
        &Literal::new_typed_literal("0.5", oxrdf::vocab::xsd::FLOAT)
    )));
    assert!(rendered.contains(TripleRef::new(
        &measurement,
        rdfs::COMMENT,
        &Literal::new_simple_literal(MISSING_THEME)
    )));
    // The publisher name is not part of the report.
    assert!(rendered
        .triples_for_predicate(representation::vocab::foaf::NAME)
        .is_empty());
}

#[test]
fn test_template_defines_every_metric() {
    let template = read(workspace_path().join("input").join("metrics.ttl"));
    let dqv_metric = iri("http://www.w3.org/ns/dqv#Metric");
    for metric in MetricKind::ALL {
        assert!(
            template.contains(TripleRef::new(metric.metric_iri(), rdf::TYPE, &dqv_metric)),
            "{} is not defined",
            metric
        );
    }
}

#[rstest]
#[case(true, true, 1.0, vec![])]
#[case(true, false, 0.5, vec![MISSING_THEME])]
#[case(false, true, 0.5, vec![MISSING_KEYWORDS])]
#[case(false, false, 0.0, vec![MISSING_KEYWORDS, MISSING_THEME])]
fn test_dataset_completeness_law(
    #[case] keyword: bool,
    #[case] theme: bool,
    #[case] expected: f64,
    #[case] expected_comments: Vec<&str>,
) {
    let mut body = "cat:d a dcat:Dataset ; dct:publisher ex:p".to_string();
    if keyword {
        body.push_str(" ; dcat:keyword \"k\"");
    }
    if theme {
        body.push_str(" ; dcat:theme ex:health");
    }
    body.push_str(" .");
    let assessment = run_assessment(
        &QualityConfig::default(),
        &catalog(&body),
        &FakeProbe::new(&[]),
        &FakeResolver::new(&[]),
    );
    let target = iri("https://datos.gob.es/catalogo/d");
    let measurements = assessment
        .report
        .measurements_for(target.as_ref(), MetricKind::DatasetCompleteness);
    assert_eq!(measurements.len(), 1);
    assert_eq!(measurements[0].value, MeasurementValue::Score(expected));
    assert_eq!(measurements[0].comments, expected_comments);
}

#[test]
fn test_keyword_and_theme_of_any_node_kind_count_as_present() {
    let assessment = run_assessment(
        &QualityConfig::default(),
        &catalog("cat:d a dcat:Dataset ; dct:publisher ex:p ; dcat:keyword ex:k ; dcat:theme \"health\" ."),
        &FakeProbe::new(&[]),
        &FakeResolver::new(&[]),
    );
    let target = iri("https://datos.gob.es/catalogo/d");
    let measurements = assessment
        .report
        .measurements_for(target.as_ref(), MetricKind::DatasetCompleteness);
    assert_eq!(measurements.len(), 1);
    assert_eq!(measurements[0].value, MeasurementValue::Score(1.0));
    assert!(measurements[0].comments.is_empty());
}

#[rstest]
#[case(true, true, 1.0)]
#[case(true, false, 0.5)]
#[case(false, true, 0.5)]
#[case(false, false, 0.0)]
fn test_distribution_completeness_law(
    #[case] format: bool,
    #[case] media_type: bool,
    #[case] expected: f64,
) {
    let mut body = "cat:x a dcat:Distribution ; dcat:accessURL <http://files.example.net/a>".to_string();
    if format {
        body.push_str(" ; dct:format ex:csv");
    }
    if media_type {
        body.push_str(" ; dcat:mediaType ex:text-csv");
    }
    body.push_str(" .");
    let assessment = run_assessment(
        &QualityConfig::default(),
        &catalog(&body),
        &FakeProbe::new(&[]),
        &FakeResolver::new(&[]),
    );
    assert_eq!(
        single_value(
            &assessment,
            "https://datos.gob.es/catalogo/x",
            MetricKind::DistributionCompleteness
        ),
        MeasurementValue::Score(expected)
    );
}

#[rstest]
#[case(ProbeOutcome::Status(200), true)]
#[case(ProbeOutcome::Status(404), false)]
#[case(ProbeOutcome::Status(301), false)]
#[case(ProbeOutcome::Failed("operation timed out".to_string()), false)]
fn test_download_availability(#[case] outcome: ProbeOutcome, #[case] expected: bool) {
    let graph = catalog(
        "cat:x a dcat:Distribution ; dcat:downloadURL <http://files.example.net/data.csv> .",
    );
    let probe = FakeProbe::new(&[("http://files.example.net/data.csv", outcome)]);
    let assessment = run_assessment(
        &QualityConfig::default(),
        &graph,
        &probe,
        &FakeResolver::new(&[]),
    );
    assert_eq!(
        single_value(
            &assessment,
            "https://datos.gob.es/catalogo/x",
            MetricKind::DownloadUrlAvailability
        ),
        MeasurementValue::Flag(expected)
    );
}

const MALFORMED_URL: &str = r#"cat:x a dcat:Distribution ; dcat:downloadURL "files.example.net/data.csv" ."#;

#[test]
fn test_violation_does_not_decide_availability_by_default() {
    let probe = FakeProbe::new(&[("files.example.net/data.csv", ProbeOutcome::Status(200))]);
    let assessment = run_assessment(
        &QualityConfig::default(),
        &catalog(MALFORMED_URL),
        &probe,
        &FakeResolver::new(&[]),
    );
    assert!(assessment
        .validation
        .results
        .iter()
        .any(|r| r.focus_node == Term::NamedNode(iri("https://datos.gob.es/catalogo/x"))));
    assert_eq!(
        single_value(
            &assessment,
            "https://datos.gob.es/catalogo/x",
            MetricKind::DownloadUrlAvailability
        ),
        MeasurementValue::Flag(true)
    );
    assert_eq!(probe.calls.borrow().len(), 1);
}

#[test]
fn test_short_circuit_skips_live_check() {
    let probe = FakeProbe::new(&[("files.example.net/data.csv", ProbeOutcome::Status(200))]);
    let config = QualityConfig {
        violations: ViolationPolicy::ShortCircuit,
        ..QualityConfig::default()
    };
    let assessment = run_assessment(
        &config,
        &catalog(MALFORMED_URL),
        &probe,
        &FakeResolver::new(&[]),
    );
    let target = iri("https://datos.gob.es/catalogo/x");
    let measurements = assessment
        .report
        .measurements_for(target.as_ref(), MetricKind::DownloadUrlAvailability);
    assert_eq!(measurements[0].value, MeasurementValue::Flag(false));
    assert_eq!(measurements[0].comments.len(), 1);
    assert!(probe.calls.borrow().is_empty());
}

const TWO_DOWNLOAD_URLS: &str = r#"
    cat:x a dcat:Distribution ;
        dcat:downloadURL <http://files.example.net/b.csv> , <http://files.example.net/a.csv> .
"#;

fn two_url_probe() -> FakeProbe {
    FakeProbe::new(&[
        ("http://files.example.net/a.csv", ProbeOutcome::Status(200)),
        ("http://files.example.net/b.csv", ProbeOutcome::Status(500)),
    ])
}

#[test]
fn test_last_download_url_wins() {
    let probe = two_url_probe();
    let assessment = run_assessment(
        &QualityConfig::default(),
        &catalog(TWO_DOWNLOAD_URLS),
        &probe,
        &FakeResolver::new(&[]),
    );
    assert_eq!(
        *probe.calls.borrow(),
        vec![
            "http://files.example.net/a.csv".to_string(),
            "http://files.example.net/b.csv".to_string()
        ]
    );
    assert_eq!(
        single_value(
            &assessment,
            "https://datos.gob.es/catalogo/x",
            MetricKind::DownloadUrlAvailability
        ),
        MeasurementValue::Flag(false)
    );
    let rendered = assessment.report.to_triplestore();
    let measurement = iri("http://example.org/download-accessibility-measurement-x");
    assert_eq!(rendered.objects(&measurement, dqv::VALUE).len(), 1);
}

#[test]
fn test_per_value_measurements() {
    let config = QualityConfig {
        multi_value: MultiValuePolicy::PerValue,
        ..QualityConfig::default()
    };
    let assessment = run_assessment(
        &config,
        &catalog(TWO_DOWNLOAD_URLS),
        &two_url_probe(),
        &FakeResolver::new(&[]),
    );
    let target = iri("https://datos.gob.es/catalogo/x");
    let measurements = assessment
        .report
        .measurements_for(target.as_ref(), MetricKind::DownloadUrlAvailability);
    assert_eq!(measurements.len(), 2);
    let mut values: Vec<_> = measurements
        .iter()
        .map(|m| (m.comments[0].clone(), m.value))
        .collect();
    values.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        values,
        vec![
            (
                "Checked URL http://files.example.net/a.csv.".to_string(),
                MeasurementValue::Flag(true)
            ),
            (
                "Checked URL http://files.example.net/b.csv.".to_string(),
                MeasurementValue::Flag(false)
            ),
        ]
    );
}

#[rstest]
#[case("ex:csv a ex:FileType .", &["http://example.net/FileType"], true, 0)]
#[case("ex:csv a ex:FileType .", &[], false, 0)]
#[case("", &["http://example.net/FileType"], false, 1)]
fn test_format_interoperability(
    #[case] format_description: &str,
    #[case] vocabularies: &[&str],
    #[case] expected: bool,
    #[case] expected_comments: usize,
) {
    let body = format!(
        "cat:x a dcat:Distribution ; dct:format ex:csv .\n{}",
        format_description
    );
    let assessment = run_assessment(
        &QualityConfig::default(),
        &catalog(&body),
        &FakeProbe::new(&[]),
        &FakeResolver::new(vocabularies),
    );
    let target = iri("https://datos.gob.es/catalogo/x");
    let measurements = assessment
        .report
        .measurements_for(target.as_ref(), MetricKind::FormatInControlledVocabulary);
    assert_eq!(measurements.len(), 1);
    assert_eq!(measurements[0].value, MeasurementValue::Flag(expected));
    assert_eq!(measurements[0].comments.len(), expected_comments);
}

#[test]
fn test_first_declared_type_is_classified() {
    let assessment = run_assessment(
        &QualityConfig::default(),
        &catalog("cat:x a dcat:Distribution ; dcat:mediaType ex:csv .\nex:csv a ex:B , ex:A ."),
        &FakeProbe::new(&[]),
        &FakeResolver::new(&["http://example.net/A"]),
    );
    assert_eq!(
        single_value(
            &assessment,
            "https://datos.gob.es/catalogo/x",
            MetricKind::MediaTypeInControlledVocabulary
        ),
        MeasurementValue::Flag(true)
    );
}

#[test]
fn test_entities_outside_catalog_get_uuid_identifiers() {
    let assessment = run_assessment(
        &QualityConfig::default(),
        &catalog("ex:d a dcat:Dataset ; dcat:keyword \"k\" ; dcat:theme ex:t ."),
        &FakeProbe::new(&[]),
        &FakeResolver::new(&[]),
    );
    let target = iri("http://example.net/d");
    let measurements = assessment
        .report
        .measurements_for(target.as_ref(), MetricKind::DatasetCompleteness);
    assert_eq!(measurements.len(), 1);
    let id = measurements[0].iri.as_str();
    assert!(id.starts_with("http://example.org/measurement-"));
    assert!(!id.contains("example.net"));
}

#[rstest]
fn test_outputs_are_written(testdata_path: PathBuf) {
    let output_dir = std::env::temp_dir().join(format!("dcat-quality-test-{}", std::process::id()));
    let config = QualityConfig {
        output_dir: output_dir.clone(),
        ..QualityConfig::default()
    };
    let assessment = run_assessment(
        &config,
        &read(testdata_path.join("catalog.ttl")),
        &FakeProbe::new(&[]),
        &FakeResolver::new(&[]),
    );
    write_outputs(&config, &assessment).unwrap();

    let shacl_report = read(config.shacl_report_path());
    assert_eq!(shacl_report.len(), assessment.validation_graph.len());
    let dqv_report = read(config.dqv_report_path());
    assert_eq!(dqv_report.graph(), assessment.report.to_triplestore().graph());
    std::fs::remove_dir_all(output_dir).unwrap();
}

#[rstest]
#[case::truncated(Some("@prefix sh: <http://www.w3.org/ns/shacl#> .\nex:DatasetShape a sh:NodeShape ; sh:property [ sh:path"))]
#[case::missing(None)]
fn test_unusable_shapes_file_is_validation_error(
    testdata_path: PathBuf,
    #[case] shapes: Option<&str>,
) {
    let output_dir = std::env::temp_dir().join(format!(
        "dcat-quality-shapes-{}-{}",
        std::process::id(),
        shapes.is_some()
    ));
    std::fs::create_dir_all(&output_dir).unwrap();
    let shapes_path = output_dir.join("shapes.ttl");
    if let Some(shapes) = shapes {
        std::fs::write(&shapes_path, shapes).unwrap();
    }
    let config = QualityConfig {
        input_path: Some(testdata_path.join("catalog.ttl")),
        shapes_path,
        metrics_path: workspace_path().join("input").join("metrics.ttl"),
        output_dir: output_dir.clone(),
        ..QualityConfig::default()
    };
    let result = run(&config);
    std::fs::remove_dir_all(&output_dir).unwrap();
    assert!(
        matches!(result, Err(QualityError::ValidationError(_))),
        "{:?}",
        result.err()
    );
}
