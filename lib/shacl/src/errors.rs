use thiserror::Error;
use triplestore::errors::TriplestoreError;

#[derive(Error, Debug)]
pub enum ShaclError {
    #[error("Shape {shape} has an unsupported path: {reason}")]
    UnsupportedPath { shape: String, reason: String },
    #[error("Shape {shape} has an invalid value for {constraint}: {value}")]
    InvalidConstraintValue {
        shape: String,
        constraint: String,
        value: String,
    },
    #[error("Shape {shape} has an invalid pattern: {source}")]
    InvalidPattern {
        shape: String,
        #[source]
        source: regex::Error,
    },
    #[error(transparent)]
    TriplestoreError(#[from] TriplestoreError),
}
