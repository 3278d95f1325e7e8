use crate::constraints::{Constraint, NodeKind};
use crate::errors::ShaclError;
use log::{debug, warn};
use oxrdf::vocab::rdf;
use oxrdf::{NamedNode, Subject, SubjectRef, Term};
use representation::vocab::shacl;
use representation::{subject_to_term, term_as_subject};
use triplestore::Triplestore;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    Predicate(NamedNode),
    Inverse(NamedNode),
}

impl Path {
    /// Value nodes reached from `focus`.
    pub fn values(&self, data: &Triplestore, focus: &Term) -> Vec<Term> {
        match self {
            Path::Predicate(p) => match term_as_subject(focus.as_ref()) {
                Some(s) => data.objects(s, p.as_ref()),
                None => vec![],
            },
            Path::Inverse(p) => {
                let mut subjects: Vec<Term> = data
                    .graph()
                    .subjects_for_predicate_object(p, focus)
                    .filter_map(subject_to_term)
                    .collect();
                subjects.sort_by_key(|s| s.to_string());
                subjects
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Class(NamedNode),
    Node(Term),
    SubjectsOf(NamedNode),
    ObjectsOf(NamedNode),
}

#[derive(Debug, Clone)]
pub struct PropertyShape {
    pub id: Subject,
    pub path: Path,
    pub message: Option<String>,
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone)]
pub struct Shape {
    pub id: Subject,
    pub targets: Vec<Target>,
    pub properties: Vec<PropertyShape>,
}

impl Shape {
    /// Reads every active node shape in `shapes`, ordered by identifier.
    ///
    /// A node shape is a subject typed `sh:NodeShape` or declaring a target.
    /// Paths other than a predicate or `[ sh:inversePath <p> ]` are rejected,
    /// as are constraint values of the wrong kind.
    pub fn parse_all(shapes: &Triplestore) -> Result<Vec<Shape>, ShaclError> {
        let mut ids: Vec<Subject> = shapes
            .graph()
            .subjects_for_predicate_object(rdf::TYPE, shacl::NODE_SHAPE)
            .map(|s| s.into_owned())
            .collect();
        for p in [
            shacl::TARGET_CLASS,
            shacl::TARGET_NODE,
            shacl::TARGET_SUBJECTS_OF,
            shacl::TARGET_OBJECTS_OF,
        ] {
            ids.extend(
                shapes
                    .graph()
                    .triples_for_predicate(p)
                    .map(|t| t.subject.into_owned()),
            );
        }
        ids.sort_by_key(|s| s.to_string());
        ids.dedup();

        let mut parsed = vec![];
        for id in ids {
            if is_deactivated(shapes, id.as_ref()) {
                debug!("Skipping deactivated shape {}", id);
                continue;
            }
            parsed.push(Shape::parse(shapes, id)?);
        }
        Ok(parsed)
    }

    fn parse(shapes: &Triplestore, id: Subject) -> Result<Shape, ShaclError> {
        let mut targets = vec![];
        for o in shapes.objects(id.as_ref(), shacl::TARGET_CLASS) {
            targets.push(Target::Class(named(&id, "sh:targetClass", o)?));
        }
        for o in shapes.objects(id.as_ref(), shacl::TARGET_NODE) {
            targets.push(Target::Node(o));
        }
        for o in shapes.objects(id.as_ref(), shacl::TARGET_SUBJECTS_OF) {
            targets.push(Target::SubjectsOf(named(&id, "sh:targetSubjectsOf", o)?));
        }
        for o in shapes.objects(id.as_ref(), shacl::TARGET_OBJECTS_OF) {
            targets.push(Target::ObjectsOf(named(&id, "sh:targetObjectsOf", o)?));
        }
        if targets.is_empty() {
            warn!("Shape {} has no targets and will not be checked", id);
        }

        let mut properties = vec![];
        for o in shapes.objects(id.as_ref(), shacl::PROPERTY) {
            let Some(property_id) = term_as_subject(o.as_ref()).map(|s| s.into_owned()) else {
                return Err(invalid(&id, "sh:property", &o));
            };
            if is_deactivated(shapes, property_id.as_ref()) {
                debug!("Skipping deactivated property shape {}", property_id);
                continue;
            }
            properties.push(PropertyShape::parse(shapes, property_id)?);
        }
        Ok(Shape {
            id,
            targets,
            properties,
        })
    }

    /// Focus nodes selected by the targets of this shape, without duplicates.
    pub fn focus_nodes(&self, data: &Triplestore) -> Vec<Term> {
        let mut focus = vec![];
        for target in &self.targets {
            match target {
                Target::Class(c) => focus.extend(
                    data.instances_of(c.as_ref())
                        .iter()
                        .filter_map(|s| subject_to_term(s.as_ref())),
                ),
                Target::Node(t) => focus.push(t.clone()),
                Target::SubjectsOf(p) => focus.extend(
                    data.graph()
                        .triples_for_predicate(p)
                        .filter_map(|t| subject_to_term(t.subject)),
                ),
                Target::ObjectsOf(p) => focus.extend(
                    data.graph()
                        .triples_for_predicate(p)
                        .map(|t| t.object.into_owned()),
                ),
            }
        }
        focus.sort_by_key(|t| t.to_string());
        focus.dedup();
        focus
    }
}

impl PropertyShape {
    fn parse(shapes: &Triplestore, id: Subject) -> Result<PropertyShape, ShaclError> {
        let path = parse_path(shapes, &id)?;
        let message = shapes
            .objects(id.as_ref(), shacl::MESSAGE)
            .into_iter()
            .find_map(literal_value);

        let mut constraints = vec![];
        for o in shapes.objects(id.as_ref(), shacl::MIN_COUNT) {
            constraints.push(Constraint::MinCount(count(&id, "sh:minCount", &o)?));
        }
        for o in shapes.objects(id.as_ref(), shacl::MAX_COUNT) {
            constraints.push(Constraint::MaxCount(count(&id, "sh:maxCount", &o)?));
        }
        for o in shapes.objects(id.as_ref(), shacl::NODE_KIND) {
            let kind = match &o {
                Term::NamedNode(nn) => NodeKind::from_iri(nn.as_ref()),
                _ => None,
            };
            match kind {
                Some(kind) => constraints.push(Constraint::NodeKind(kind)),
                None => return Err(invalid(&id, "sh:nodeKind", &o)),
            }
        }
        for o in shapes.objects(id.as_ref(), shacl::DATATYPE) {
            constraints.push(Constraint::Datatype(named(&id, "sh:datatype", o)?));
        }
        for o in shapes.objects(id.as_ref(), shacl::CLASS) {
            constraints.push(Constraint::Class(named(&id, "sh:class", o)?));
        }
        let flags = shapes
            .objects(id.as_ref(), shacl::FLAGS)
            .into_iter()
            .find_map(literal_value);
        for o in shapes.objects(id.as_ref(), shacl::PATTERN) {
            let Some(pattern) = literal_value(o.clone()) else {
                return Err(invalid(&id, "sh:pattern", &o));
            };
            constraints.push(Constraint::pattern(
                &id.to_string(),
                &pattern,
                flags.as_deref(),
            )?);
        }

        Ok(PropertyShape {
            id,
            path,
            message,
            constraints,
        })
    }
}

fn parse_path(shapes: &Triplestore, id: &Subject) -> Result<Path, ShaclError> {
    let unsupported = |reason: String| ShaclError::UnsupportedPath {
        shape: id.to_string(),
        reason,
    };
    let mut paths = shapes.objects(id.as_ref(), shacl::PATH);
    if paths.len() != 1 {
        return Err(unsupported(format!(
            "expected exactly one sh:path, found {}",
            paths.len()
        )));
    }
    match paths.remove(0) {
        Term::NamedNode(nn) => Ok(Path::Predicate(nn)),
        Term::BlankNode(bn) => {
            let inverse = shapes.objects(&bn, shacl::INVERSE_PATH);
            match inverse.as_slice() {
                [Term::NamedNode(nn)] => Ok(Path::Inverse(nn.clone())),
                _ => Err(unsupported(
                    "only predicate paths and inverse predicate paths are supported".to_string(),
                )),
            }
        }
        other => Err(unsupported(format!("{} is not a path", other))),
    }
}

fn is_deactivated(shapes: &Triplestore, id: SubjectRef<'_>) -> bool {
    shapes
        .objects(id, shacl::DEACTIVATED)
        .iter()
        .any(|o| matches!(o, Term::Literal(l) if l.value() == "true" || l.value() == "1"))
}

fn literal_value(t: Term) -> Option<String> {
    match t {
        Term::Literal(l) => Some(l.value().to_string()),
        _ => None,
    }
}

fn named(id: &Subject, constraint: &str, t: Term) -> Result<NamedNode, ShaclError> {
    match t {
        Term::NamedNode(nn) => Ok(nn),
        other => Err(invalid(id, constraint, &other)),
    }
}

fn count(id: &Subject, constraint: &str, t: &Term) -> Result<usize, ShaclError> {
    match t {
        Term::Literal(l) => l.value().parse().map_err(|_| invalid(id, constraint, t)),
        _ => Err(invalid(id, constraint, t)),
    }
}

fn invalid(id: &Subject, constraint: &str, t: &Term) -> ShaclError {
    ShaclError::InvalidConstraintValue {
        shape: id.to_string(),
        constraint: constraint.to_string(),
        value: t.to_string(),
    }
}
