use oxiri::IriParseError;
use thiserror::*;

#[derive(Debug, Error)]
pub enum RepresentationError {
    #[error("Invalid IRI `{0}`: {1}")]
    InvalidIriError(String, IriParseError),
    #[error(
        "Measurement identifier {iri} is already issued for {existing_target} ({existing_metric}), cannot reuse it for {target} ({metric})"
    )]
    MeasurementIdCollision {
        iri: String,
        existing_target: String,
        existing_metric: String,
        target: String,
        metric: String,
    },
}
