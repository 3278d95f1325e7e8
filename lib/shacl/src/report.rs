use crate::shapes::Path;
use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Literal, NamedNode, Subject, Term, TripleRef};
use triplestore::Triplestore;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub focus_node: Term,
    pub path: Path,
    pub source_shape: Subject,
    pub source_constraint_component: NamedNode,
    pub value: Option<Term>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub conforms: bool,
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(results: Vec<ValidationResult>) -> ValidationReport {
        ValidationReport {
            conforms: results.is_empty(),
            results,
        }
    }

    /// Renders the report as a `sh:ValidationReport` graph. Every result has severity `sh:Violation`.
    pub fn to_triplestore(&self) -> Triplestore {
        use representation::vocab::shacl;

        let mut ts = Triplestore::new();
        let report = BlankNode::default();
        ts.insert(TripleRef::new(&report, rdf::TYPE, shacl::VALIDATION_REPORT));
        ts.insert(TripleRef::new(
            &report,
            shacl::CONFORMS,
            &Literal::from(self.conforms),
        ));
        for r in &self.results {
            let result = BlankNode::default();
            ts.insert(TripleRef::new(&report, shacl::RESULT, &result));
            ts.insert(TripleRef::new(&result, rdf::TYPE, shacl::VALIDATION_RESULT));
            ts.insert(TripleRef::new(&result, shacl::FOCUS_NODE, &r.focus_node));
            match &r.path {
                Path::Predicate(p) => {
                    ts.insert(TripleRef::new(&result, shacl::RESULT_PATH, p));
                }
                Path::Inverse(p) => {
                    let path = BlankNode::default();
                    ts.insert(TripleRef::new(&result, shacl::RESULT_PATH, &path));
                    ts.insert(TripleRef::new(&path, shacl::INVERSE_PATH, p));
                }
            }
            ts.insert(TripleRef::new(&result, shacl::RESULT_SEVERITY, shacl::VIOLATION));
            ts.insert(TripleRef::new(
                &result,
                shacl::SOURCE_CONSTRAINT_COMPONENT,
                &r.source_constraint_component,
            ));
            ts.insert(TripleRef::new(
                &result,
                shacl::SOURCE_SHAPE,
                r.source_shape.as_ref(),
            ));
            if let Some(value) = &r.value {
                ts.insert(TripleRef::new(&result, shacl::VALUE, value));
            }
            ts.insert(TripleRef::new(
                &result,
                shacl::RESULT_MESSAGE,
                &Literal::new_simple_literal(&r.message),
            ));
        }
        ts
    }
}
