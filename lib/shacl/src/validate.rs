use crate::errors::ShaclError;
use crate::report::{ValidationReport, ValidationResult};
use crate::shapes::Shape;
use log::{debug, info};
use std::time::Instant;
use triplestore::Triplestore;

/// Validates `data` against the node shapes found in `shapes`.
///
/// The shapes graph is only compiled, never validated itself. Every shape is
/// checked against every focus node, so the report holds all violations.
pub fn validate(data: &Triplestore, shapes: &Triplestore) -> Result<ValidationReport, ShaclError> {
    let shapes = Shape::parse_all(shapes)?;
    debug!("Compiled {} shapes", shapes.len());
    Ok(validate_shapes(data, &shapes))
}

pub fn validate_shapes(data: &Triplestore, shapes: &[Shape]) -> ValidationReport {
    let now = Instant::now();
    let mut results = vec![];
    for shape in shapes {
        let focus_nodes = shape.focus_nodes(data);
        debug!("Shape {} has {} focus nodes", shape.id, focus_nodes.len());
        for focus in &focus_nodes {
            for property in &shape.properties {
                let values = property.path.values(data, focus);
                for constraint in &property.constraints {
                    for violation in constraint.evaluate(data, &values) {
                        results.push(ValidationResult {
                            focus_node: focus.clone(),
                            path: property.path.clone(),
                            source_shape: property.id.clone(),
                            source_constraint_component: constraint.component().into_owned(),
                            value: violation.value,
                            message: property.message.clone().unwrap_or(violation.message),
                        });
                    }
                }
            }
        }
    }
    info!(
        "Validation found {} violations in {} seconds",
        results.len(),
        now.elapsed().as_secs_f32()
    );
    ValidationReport::new(results)
}
