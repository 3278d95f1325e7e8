pub mod errors;
pub mod measurement;
pub mod vocab;

use oxrdf::{SubjectRef, Term, TermRef};

/// The lexical form of a term: the IRI of a named node, the value of a literal,
/// the identifier of a blank node.
pub fn term_lexical_form(t: TermRef<'_>) -> String {
    match t {
        TermRef::NamedNode(nn) => nn.as_str().to_string(),
        TermRef::BlankNode(bn) => bn.as_str().to_string(),
        TermRef::Literal(l) => l.value().to_string(),
        #[allow(unreachable_patterns)]
        _ => t.to_string(),
    }
}

/// A term usable in subject position, literals excluded.
pub fn term_as_subject(t: TermRef<'_>) -> Option<SubjectRef<'_>> {
    match t {
        TermRef::NamedNode(nn) => Some(SubjectRef::NamedNode(nn)),
        TermRef::BlankNode(bn) => Some(SubjectRef::BlankNode(bn)),
        _ => None,
    }
}

pub fn subject_to_term(s: SubjectRef<'_>) -> Option<Term> {
    match s {
        SubjectRef::NamedNode(nn) => Some(Term::NamedNode(nn.into_owned())),
        SubjectRef::BlankNode(bn) => Some(Term::BlankNode(bn.into_owned())),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}
