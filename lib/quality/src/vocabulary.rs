use log::{debug, warn};
use oxrdf::{NamedNode, NamedNodeRef};
use oxrdfio::RdfFormat;
use representation::vocab::dcam;
use std::collections::HashMap;
use std::time::Duration;
use triplestore::errors::TriplestoreError;
use triplestore::http::HttpClient;
use triplestore::Triplestore;

/// Looks up the declared `rdf:type`s of a resource from its own description.
pub trait VocabularyResolver {
    fn declared_types(&self, resource: NamedNodeRef<'_>) -> Result<Vec<NamedNode>, TriplestoreError>;
}

/// Dereferences the resource IRI as Turtle.
pub struct HttpVocabularyResolver {
    http: HttpClient,
    timeout: Option<Duration>,
}

impl HttpVocabularyResolver {
    pub fn new(http: HttpClient, timeout: Option<Duration>) -> HttpVocabularyResolver {
        HttpVocabularyResolver { http, timeout }
    }
}

impl VocabularyResolver for HttpVocabularyResolver {
    fn declared_types(&self, resource: NamedNodeRef<'_>) -> Result<Vec<NamedNode>, TriplestoreError> {
        let body = self.http.get_turtle(resource.as_str(), &[], self.timeout)?;
        let mut ts = Triplestore::new();
        ts.read_triples_from_string(&body, RdfFormat::Turtle, Some(resource.as_str().to_string()))?;
        Ok(ts.types_of(resource))
    }
}

/// Decides whether a type resource is a controlled vocabulary, remembering
/// every answer for the lifetime of the classifier.
pub struct VocabularyClassifier<'a> {
    resolver: &'a dyn VocabularyResolver,
    known: HashMap<NamedNode, bool>,
}

impl<'a> VocabularyClassifier<'a> {
    pub fn new(resolver: &'a dyn VocabularyResolver) -> VocabularyClassifier<'a> {
        VocabularyClassifier {
            resolver,
            known: HashMap::new(),
        }
    }

    /// True iff the resource declares itself a `dcam:VocabularyEncodingScheme`.
    /// A resource that cannot be fetched or parsed is not a controlled vocabulary.
    pub fn is_controlled_vocabulary(&mut self, type_iri: NamedNodeRef<'_>) -> bool {
        if let Some(known) = self.known.get(&type_iri.into_owned()) {
            return *known;
        }
        let is_vocabulary = match self.resolver.declared_types(type_iri) {
            Ok(types) => types.iter().any(|t| t.as_ref() == dcam::VOCABULARY_ENCODING_SCHEME),
            Err(e) => {
                warn!("Could not classify {}: {}", type_iri, e);
                false
            }
        };
        debug!("{} is a controlled vocabulary: {}", type_iri, is_vocabulary);
        self.known.insert(type_iri.into_owned(), is_vocabulary);
        is_vocabulary
    }

    pub fn classified_count(&self) -> usize {
        self.known.len()
    }
}
