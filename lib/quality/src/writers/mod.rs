pub mod availability;
pub mod completeness;
pub mod interoperability;

use crate::errors::QualityError;
use crate::report::DqvReport;
use shacl::ViolationIndex;
use triplestore::Triplestore;

pub use availability::AvailabilityWriter;
pub use completeness::CompletenessWriter;
pub use interoperability::InteroperabilityWriter;

/// What every writer reads. Writers never read each other's output.
pub struct WriterContext<'a> {
    pub graph: &'a Triplestore,
    pub violations: &'a ViolationIndex,
}

pub trait MetricWriter {
    fn name(&self) -> &'static str;
    fn write(&mut self, ctx: &WriterContext<'_>, report: &mut DqvReport) -> Result<(), QualityError>;
}
