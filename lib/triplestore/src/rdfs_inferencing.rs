use super::Triplestore;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{NamedNode, NamedNodeRef, Subject, SubjectRef};
use std::collections::BTreeSet;

impl Triplestore {
    /// `class` and every class that reaches it through `rdfs:subClassOf+`.
    pub fn subclass_closure(&self, class: NamedNodeRef<'_>) -> BTreeSet<NamedNode> {
        let mut closure = BTreeSet::from([class.into_owned()]);
        let mut frontier = vec![class.into_owned()];
        while let Some(c) = frontier.pop() {
            for s in self
                .graph()
                .subjects_for_predicate_object(rdfs::SUB_CLASS_OF, &c)
            {
                if let SubjectRef::NamedNode(nn) = s {
                    if closure.insert(nn.into_owned()) {
                        frontier.push(nn.into_owned());
                    }
                }
            }
        }
        closure
    }

    /// Instances of `class` or any of its subclasses, blank nodes included,
    /// in lexical order.
    pub fn instances_of(&self, class: NamedNodeRef<'_>) -> Vec<Subject> {
        let mut instances: Vec<Subject> = vec![];
        for c in self.subclass_closure(class) {
            instances.extend(
                self.graph()
                    .subjects_for_predicate_object(rdf::TYPE, &c)
                    .map(SubjectRef::into_owned),
            );
        }
        instances.sort_by_key(|s| s.to_string());
        instances.dedup();
        instances
    }
}
