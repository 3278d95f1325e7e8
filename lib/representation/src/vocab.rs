//! Vocabulary terms used when reading DCAT catalogs and writing DQV reports.
//!
//! Terms from RDF, RDFS and XSD are taken from [`oxrdf::vocab`].

pub const DCAT_PREFIX: &str = "dcat";
pub const DCAT_PREFIX_IRI: &str = "http://www.w3.org/ns/dcat#";
pub const DCT_PREFIX: &str = "dct";
pub const DCT_PREFIX_IRI: &str = "http://purl.org/dc/terms/";
pub const DQV_PREFIX: &str = "dqv";
pub const DQV_PREFIX_IRI: &str = "http://www.w3.org/ns/dqv#";
pub const SHACL_PREFIX: &str = "sh";
pub const SHACL_PREFIX_IRI: &str = "http://www.w3.org/ns/shacl#";
pub const FOAF_PREFIX: &str = "foaf";
pub const FOAF_PREFIX_IRI: &str = "http://xmlns.com/foaf/0.1/";
pub const DCAM_PREFIX: &str = "dcam";
pub const DCAM_PREFIX_IRI: &str = "http://purl.org/dc/dcam/";
pub const RDF_PREFIX: &str = "rdf";
pub const RDF_PREFIX_IRI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_PREFIX: &str = "rdfs";
pub const RDFS_PREFIX_IRI: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_PREFIX: &str = "xsd";
pub const XSD_PREFIX_IRI: &str = "http://www.w3.org/2001/XMLSchema#";
pub const EX_PREFIX: &str = "ex";
pub const EX_PREFIX_IRI: &str = "http://example.org/";

/// Prefixes written at the top of every serialized graph.
pub const DEFAULT_PREFIXES: [(&str, &str); 10] = [
    (RDF_PREFIX, RDF_PREFIX_IRI),
    (RDFS_PREFIX, RDFS_PREFIX_IRI),
    (XSD_PREFIX, XSD_PREFIX_IRI),
    (DCAT_PREFIX, DCAT_PREFIX_IRI),
    (DCT_PREFIX, DCT_PREFIX_IRI),
    (DQV_PREFIX, DQV_PREFIX_IRI),
    (SHACL_PREFIX, SHACL_PREFIX_IRI),
    (FOAF_PREFIX, FOAF_PREFIX_IRI),
    (DCAM_PREFIX, DCAM_PREFIX_IRI),
    (EX_PREFIX, EX_PREFIX_IRI),
];

pub mod dcat {
    use oxrdf::NamedNodeRef;

    pub const DATASET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#Dataset");

    pub const DISTRIBUTION_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#Distribution");

    pub const DISTRIBUTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#distribution");

    pub const KEYWORD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#keyword");

    pub const THEME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#theme");

    pub const MEDIA_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#mediaType");

    pub const ACCESS_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#accessURL");

    pub const DOWNLOAD_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#downloadURL");
}

pub mod dct {
    use oxrdf::NamedNodeRef;

    pub const FORMAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/format");
}

pub mod dqv {
    use oxrdf::NamedNodeRef;

    pub const QUALITY_MEASUREMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dqv#QualityMeasurement");

    pub const HAS_QUALITY_MEASUREMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dqv#hasQualityMeasurement");

    pub const COMPUTED_ON: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dqv#computedOn");

    pub const IS_MEASUREMENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dqv#isMeasurementOf");

    pub const VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dqv#value");
}

pub mod dcam {
    use oxrdf::NamedNodeRef;

    pub const VOCABULARY_ENCODING_SCHEME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/dcam/VocabularyEncodingScheme");
}

pub mod foaf {
    use oxrdf::NamedNodeRef;

    pub const NAME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");
}

/// Metric definitions referenced by measurements. Their descriptions live in the metric template.
pub mod metrics {
    use oxrdf::NamedNodeRef;

    pub const DATASET_COMPLETENESS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/datasetCompletenessMetric");

    pub const DISTRIBUTION_COMPLETENESS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/distributionCompletenessMetric");

    pub const DOWNLOAD_URL_AVAILABILITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/downloadURLAvailabilityMetric");

    pub const ACCESS_URL_AVAILABILITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/accessURLAvailabilityMetric");

    pub const FORMAT_IN_CONTROLLED_VOCABULARY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/formatInControlledVocabularyMetric");

    pub const MEDIA_TYPE_IN_CONTROLLED_VOCABULARY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/mediaTypeInControlledVocabularyMetric");
}

pub mod shacl {
    use oxrdf::NamedNodeRef;

    pub const NODE_SHAPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#NodeShape");
    pub const PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#property");
    pub const PATH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#path");
    pub const INVERSE_PATH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#inversePath");
    pub const TARGET_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetClass");
    pub const TARGET_NODE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetNode");
    pub const TARGET_SUBJECTS_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetSubjectsOf");
    pub const TARGET_OBJECTS_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetObjectsOf");
    pub const DEACTIVATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#deactivated");
    pub const MESSAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#message");

    pub const MIN_COUNT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#minCount");
    pub const MAX_COUNT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#maxCount");
    pub const NODE_KIND: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#nodeKind");
    pub const DATATYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#datatype");
    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#class");
    pub const PATTERN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#pattern");
    pub const FLAGS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#flags");

    pub const IRI: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#IRI");
    pub const BLANK_NODE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#BlankNode");
    pub const LITERAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#Literal");
    pub const BLANK_NODE_OR_IRI: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#BlankNodeOrIRI");
    pub const BLANK_NODE_OR_LITERAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#BlankNodeOrLiteral");
    pub const IRI_OR_LITERAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#IRIOrLiteral");

    pub const VALIDATION_REPORT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#ValidationReport");
    pub const VALIDATION_RESULT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#ValidationResult");
    pub const CONFORMS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#conforms");
    pub const RESULT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#result");
    pub const FOCUS_NODE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#focusNode");
    pub const RESULT_PATH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#resultPath");
    pub const RESULT_SEVERITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#resultSeverity");
    pub const RESULT_MESSAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#resultMessage");
    pub const SOURCE_SHAPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#sourceShape");
    pub const SOURCE_CONSTRAINT_COMPONENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#sourceConstraintComponent");
    pub const VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#value");
    pub const VIOLATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#Violation");

    pub const MIN_COUNT_CONSTRAINT_COMPONENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#MinCountConstraintComponent");
    pub const MAX_COUNT_CONSTRAINT_COMPONENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#MaxCountConstraintComponent");
    pub const NODE_KIND_CONSTRAINT_COMPONENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#NodeKindConstraintComponent");
    pub const DATATYPE_CONSTRAINT_COMPONENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#DatatypeConstraintComponent");
    pub const CLASS_CONSTRAINT_COMPONENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#ClassConstraintComponent");
    pub const PATTERN_CONSTRAINT_COMPONENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#PatternConstraintComponent");
}
