use crate::errors::ShaclError;
use oxrdf::{NamedNode, NamedNodeRef, Term, TermRef};
use regex::{Regex, RegexBuilder};
use representation::term_lexical_form;
use representation::vocab::shacl;
use std::fmt::{Display, Formatter};
use triplestore::Triplestore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Iri,
    BlankNode,
    Literal,
    BlankNodeOrIri,
    BlankNodeOrLiteral,
    IriOrLiteral,
}

impl NodeKind {
    pub fn from_iri(iri: NamedNodeRef<'_>) -> Option<NodeKind> {
        Some(if iri == shacl::IRI {
            NodeKind::Iri
        } else if iri == shacl::BLANK_NODE {
            NodeKind::BlankNode
        } else if iri == shacl::LITERAL {
            NodeKind::Literal
        } else if iri == shacl::BLANK_NODE_OR_IRI {
            NodeKind::BlankNodeOrIri
        } else if iri == shacl::BLANK_NODE_OR_LITERAL {
            NodeKind::BlankNodeOrLiteral
        } else if iri == shacl::IRI_OR_LITERAL {
            NodeKind::IriOrLiteral
        } else {
            return None;
        })
    }

    pub fn matches(&self, t: TermRef<'_>) -> bool {
        let (iri, blank, literal) = match t {
            TermRef::NamedNode(_) => (true, false, false),
            TermRef::BlankNode(_) => (false, true, false),
            TermRef::Literal(_) => (false, false, true),
            #[allow(unreachable_patterns)]
            _ => (false, false, false),
        };
        match self {
            NodeKind::Iri => iri,
            NodeKind::BlankNode => blank,
            NodeKind::Literal => literal,
            NodeKind::BlankNodeOrIri => blank || iri,
            NodeKind::BlankNodeOrLiteral => blank || literal,
            NodeKind::IriOrLiteral => iri || literal,
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeKind::Iri => "sh:IRI",
            NodeKind::BlankNode => "sh:BlankNode",
            NodeKind::Literal => "sh:Literal",
            NodeKind::BlankNodeOrIri => "sh:BlankNodeOrIRI",
            NodeKind::BlankNodeOrLiteral => "sh:BlankNodeOrLiteral",
            NodeKind::IriOrLiteral => "sh:IRIOrLiteral",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub enum Constraint {
    MinCount(usize),
    MaxCount(usize),
    NodeKind(NodeKind),
    Datatype(NamedNode),
    Class(NamedNode),
    Pattern { pattern: String, regex: Regex },
}

/// One failed check. `value` is the offending value node, absent for count constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    pub value: Option<Term>,
    pub message: String,
}

impl Constraint {
    /// Compiles `sh:pattern` with the `sh:flags` supported by the regex crate.
    pub fn pattern(shape: &str, pattern: &str, flags: Option<&str>) -> Result<Constraint, ShaclError> {
        let mut builder = RegexBuilder::new(pattern);
        for flag in flags.unwrap_or_default().chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                's' => builder.dot_matches_new_line(true),
                'm' => builder.multi_line(true),
                'x' => builder.ignore_whitespace(true),
                other => {
                    return Err(ShaclError::InvalidConstraintValue {
                        shape: shape.to_string(),
                        constraint: "sh:flags".to_string(),
                        value: other.to_string(),
                    })
                }
            };
        }
        let regex = builder.build().map_err(|source| ShaclError::InvalidPattern {
            shape: shape.to_string(),
            source,
        })?;
        Ok(Constraint::Pattern {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn component(&self) -> NamedNodeRef<'static> {
        match self {
            Constraint::MinCount(_) => shacl::MIN_COUNT_CONSTRAINT_COMPONENT,
            Constraint::MaxCount(_) => shacl::MAX_COUNT_CONSTRAINT_COMPONENT,
            Constraint::NodeKind(_) => shacl::NODE_KIND_CONSTRAINT_COMPONENT,
            Constraint::Datatype(_) => shacl::DATATYPE_CONSTRAINT_COMPONENT,
            Constraint::Class(_) => shacl::CLASS_CONSTRAINT_COMPONENT,
            Constraint::Pattern { .. } => shacl::PATTERN_CONSTRAINT_COMPONENT,
        }
    }

    /// Checks the value nodes reached from one focus node.
    pub fn evaluate(&self, data: &Triplestore, values: &[Term]) -> Vec<ConstraintViolation> {
        match self {
            Constraint::MinCount(min) => {
                if values.len() < *min {
                    vec![ConstraintViolation {
                        value: None,
                        message: format!("Less than {} values", min),
                    }]
                } else {
                    vec![]
                }
            }
            Constraint::MaxCount(max) => {
                if values.len() > *max {
                    vec![ConstraintViolation {
                        value: None,
                        message: format!("More than {} values", max),
                    }]
                } else {
                    vec![]
                }
            }
            Constraint::NodeKind(kind) => per_value(values, |v| kind.matches(v.as_ref()), |v| {
                format!("Value {} is not of node kind {}", v, kind)
            }),
            Constraint::Datatype(datatype) => per_value(
                values,
                |v| matches!(v, Term::Literal(l) if l.datatype() == datatype.as_ref()),
                |v| format!("Value {} does not have datatype {}", v, datatype),
            ),
            Constraint::Class(class) => {
                let accepted = data.subclass_closure(class.as_ref());
                per_value(
                    values,
                    |v| match representation::term_as_subject(v.as_ref()) {
                        Some(s) => data.types_of(s).iter().any(|t| accepted.contains(t)),
                        None => false,
                    },
                    |v| format!("Value {} is not an instance of {}", v, class),
                )
            }
            Constraint::Pattern { pattern, regex } => per_value(
                values,
                |v| !v.is_blank_node() && regex.is_match(&term_lexical_form(v.as_ref())),
                |v| format!("Value {} does not match pattern \"{}\"", v, pattern),
            ),
        }
    }
}

fn per_value(
    values: &[Term],
    conforms: impl Fn(&Term) -> bool,
    message: impl Fn(&Term) -> String,
) -> Vec<ConstraintViolation> {
    values
        .iter()
        .filter(|v| !conforms(v))
        .map(|v| ConstraintViolation {
            value: Some(v.clone()),
            message: message(v),
        })
        .collect()
}
