pub mod constraints;
pub mod errors;
pub mod report;
pub mod shapes;
pub mod validate;
pub mod violations;

pub use report::{ValidationReport, ValidationResult};
pub use validate::{validate, validate_shapes};
pub use violations::ViolationIndex;
