use representation::errors::RepresentationError;
use shacl::errors::ShaclError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use triplestore::errors::TriplestoreError;

#[derive(Error, Debug)]
pub enum QualityError {
    #[error("Could not retrieve the catalog: {0}")]
    RetrievalError(#[source] TriplestoreError),
    #[error("Shapes could not be used for validation: {0}")]
    ValidationError(#[from] ShaclError),
    #[error(transparent)]
    TriplestoreError(#[from] TriplestoreError),
    #[error(transparent)]
    RepresentationError(#[from] RepresentationError),
    #[error("Could not read config file {path:?}: {source}")]
    ConfigReadError { path: PathBuf, source: io::Error },
    #[error("Invalid config file {path:?}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}
