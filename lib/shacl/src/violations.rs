use oxrdf::vocab::rdf;
use oxrdf::{NamedNode, NamedNodeRef, SubjectRef, TermRef};
use representation::vocab::shacl;
use std::collections::{HashMap, HashSet};
use triplestore::Triplestore;

/// Focus nodes with at least one violation, keyed by the violated property.
///
/// Built from a `sh:ValidationReport` graph. Only results whose `sh:resultPath`
/// is a predicate IRI and whose focus node is an IRI are indexed, so an inverse
/// path result never shows up under its forward predicate.
#[derive(Debug, Clone, Default)]
pub struct ViolationIndex {
    by_path: HashMap<NamedNode, HashSet<NamedNode>>,
}

impl ViolationIndex {
    pub fn from_graph(report: &Triplestore) -> ViolationIndex {
        let mut by_path: HashMap<NamedNode, HashSet<NamedNode>> = HashMap::new();
        for result in report
            .graph()
            .subjects_for_predicate_object(rdf::TYPE, shacl::VALIDATION_RESULT)
        {
            let Some(path) = single_named(report, result, shacl::RESULT_PATH) else {
                continue;
            };
            let Some(focus) = single_named(report, result, shacl::FOCUS_NODE) else {
                continue;
            };
            by_path.entry(path).or_default().insert(focus);
        }
        ViolationIndex { by_path }
    }

    /// Every focus node violating `path`, empty when there is none.
    pub fn lookup(&self, path: NamedNodeRef<'_>) -> HashSet<NamedNode> {
        self.by_path
            .get(&path.into_owned())
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, path: NamedNodeRef<'_>, node: NamedNodeRef<'_>) -> bool {
        self.by_path
            .get(&path.into_owned())
            .is_some_and(|nodes| nodes.contains(&node.into_owned()))
    }

    pub fn len(&self) -> usize {
        self.by_path.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

fn single_named(
    report: &Triplestore,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
) -> Option<NamedNode> {
    match report.graph().object_for_subject_predicate(subject, predicate) {
        Some(TermRef::NamedNode(nn)) => Some(nn.into_owned()),
        _ => None,
    }
}
