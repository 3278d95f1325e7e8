pub mod errors;
pub mod http;
pub mod rdfs_inferencing;
pub mod remote;
pub mod retry;
pub mod triples_read;
pub mod triples_write;

use oxrdf::vocab::rdf;
use oxrdf::{Graph, NamedNode, NamedNodeRef, SubjectRef, Term, TermRef, Triple, TripleRef};
use representation::vocab::DEFAULT_PREFIXES;

/// An in-memory RDF graph with the prefixes used when it is written back out.
#[derive(Debug, Clone)]
pub struct Triplestore {
    graph: Graph,
    prefixes: Vec<(String, String)>,
}

impl Default for Triplestore {
    fn default() -> Self {
        Triplestore::new()
    }
}

impl Triplestore {
    pub fn new() -> Triplestore {
        Triplestore {
            graph: Graph::new(),
            prefixes: DEFAULT_PREFIXES
                .iter()
                .map(|(p, i)| (p.to_string(), i.to_string()))
                .collect(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn insert<'a>(&mut self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.graph.insert(triple)
    }

    pub fn contains<'a>(&self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.graph.contains(triple)
    }

    pub fn extend(&mut self, triples: impl IntoIterator<Item = Triple>) {
        for t in triples {
            self.graph.insert(&t);
        }
    }

    /// Named subjects typed `class`, ordered by IRI.
    pub fn subjects_of_type(&self, class: NamedNodeRef<'_>) -> Vec<NamedNode> {
        let mut subjects: Vec<NamedNode> = self
            .graph
            .subjects_for_predicate_object(rdf::TYPE, class)
            .filter_map(|s| match s {
                SubjectRef::NamedNode(nn) => Some(nn.into_owned()),
                _ => None,
            })
            .collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }

    /// Objects of `predicate` on `subject`, ordered by their N-Triples form.
    pub fn objects<'a>(
        &self,
        subject: impl Into<SubjectRef<'a>>,
        predicate: impl Into<NamedNodeRef<'a>>,
    ) -> Vec<Term> {
        let subject = subject.into();
        let predicate = predicate.into();
        let mut objects: Vec<Term> = self
            .graph
            .objects_for_subject_predicate(subject, predicate)
            .map(|o| o.into_owned())
            .collect();
        objects.sort_by_key(|o| o.to_string());
        objects
    }

    /// Declared `rdf:type` IRIs of `subject`, ordered by IRI.
    pub fn types_of<'a>(&self, subject: impl Into<SubjectRef<'a>>) -> Vec<NamedNode> {
        let subject = subject.into();
        let mut types: Vec<NamedNode> = self
            .graph
            .objects_for_subject_predicate(subject, rdf::TYPE)
            .filter_map(|o| match o {
                TermRef::NamedNode(nn) => Some(nn.into_owned()),
                _ => None,
            })
            .collect();
        types.sort();
        types
    }

    /// All triples with `predicate`, ordered by their N-Triples form.
    pub fn triples_for_predicate(&self, predicate: NamedNodeRef<'_>) -> Vec<Triple> {
        let mut triples: Vec<Triple> = self
            .graph
            .triples_for_predicate(predicate)
            .map(|t| t.into_owned())
            .collect();
        triples.sort_by_key(|t| t.to_string());
        triples
    }
}
