//! Data quality measurements for DCAT catalogs.
//!
//! A catalog is validated against SHACL shapes, the violations are indexed by
//! property, and four writers derive DQV measurements of completeness,
//! availability and interoperability into one report.

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod probe;
pub mod report;
pub mod vocabulary;
pub mod writers;

pub use config::{MultiValuePolicy, QualityConfig, ViolationPolicy};
pub use report::{DqvReport, QualityMeasurement, ReportAssembler};
