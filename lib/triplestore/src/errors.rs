use oxiri::IriParseError;
use oxrdfio::RdfParseError;
use spargebra::SparqlSyntaxError;
use std::fmt::{Display, Formatter};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriplestoreError {
    PathDoesNotExist(String),
    FolderCreateIOError(io::Error),
    ReadTriplesFileError(io::Error),
    WriteTriplesError(io::Error),
    TurtleParsingError(RdfParseError),
    InvalidBaseIri(IriParseError),
    InvalidPrefixIri(IriParseError),
    QueryBuildError(SparqlSyntaxError),
    RetrievalError { url: String, message: String },
    HttpClientBuildError(reqwest::Error),
}

impl Display for TriplestoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TriplestoreError::PathDoesNotExist(p) => {
                write!(f, "Path {} does not exist", p)
            }
            TriplestoreError::FolderCreateIOError(e) => {
                write!(f, "Creating folder resulted in an error: {}", e)
            }
            TriplestoreError::ReadTriplesFileError(e) => {
                write!(f, "Read triples file error {}", e)
            }
            TriplestoreError::WriteTriplesError(e) => {
                write!(f, "Error writing triples {}", e)
            }
            TriplestoreError::TurtleParsingError(e) => {
                write!(f, "Turtle parsing error {}", e)
            }
            TriplestoreError::InvalidBaseIri(e) => {
                write!(f, "Invalid base iri {}", e)
            }
            TriplestoreError::InvalidPrefixIri(e) => {
                write!(f, "Invalid prefix iri {}", e)
            }
            TriplestoreError::QueryBuildError(e) => {
                write!(f, "Catalog query is not valid SPARQL: {}", e)
            }
            TriplestoreError::RetrievalError { url, message } => {
                write!(f, "Could not retrieve triples from {}: {}", url, message)
            }
            TriplestoreError::HttpClientBuildError(e) => {
                write!(f, "Could not build HTTP client: {}", e)
            }
        }
    }
}

impl TriplestoreError {
    pub fn is_retrieval_error(&self) -> bool {
        matches!(self, TriplestoreError::RetrievalError { .. })
    }
}
