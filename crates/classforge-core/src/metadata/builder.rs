use std::time::Instant;

use crate::errors::Result;
use crate::metadata::{ClassDescriptor, Parameter};
use crate::model::{ClassDef, ClassModel, Multiplicity};
use crate::{log_op_end, log_op_error, log_op_start};

/// Describe every declared class, in declaration order
///
/// Unlike [`build_tree`](crate::tree::build_tree) this covers unreachable
/// classes too and does not require a root.
///
/// # Errors
///
/// Returns `InvalidMultiplicity` if a `sourceMultiplicity` of an edge
/// targeting some class is malformed.
pub fn build_metadata(model: &ClassModel) -> Result<Vec<ClassDescriptor>> {
    log_op_start!(
        "build_metadata",
        class_count = model.class_count(),
        edge_count = model.edge_count()
    );
    let start = Instant::now();

    let descriptors = model
        .classes()
        .map(|class| describe_class(model, class))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| {
            log_op_error!(
                "build_metadata",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "build_metadata",
        duration_ms = start.elapsed().as_millis() as u64,
        descriptor_count = descriptors.len()
    );

    Ok(descriptors)
}

fn describe_class(model: &ClassModel, class: &ClassDef) -> Result<ClassDescriptor> {
    let mut descriptor = ClassDescriptor {
        class: class.name.clone(),
        documentation: class.documentation.clone(),
        is_root: class.is_root,
        parameters: class
            .attributes
            .iter()
            .map(|a| Parameter::attribute(&a.name, &a.type_name))
            .collect(),
        min: None,
        max: None,
    };

    // Cardinality is per class, not per nested class: each edge overwrites.
    let mut cardinality = None;
    let mut child_edges = 0usize;
    for edge in model.children_of(&class.name) {
        descriptor.parameters.push(Parameter::class_ref(&edge.source));
        cardinality = Some(edge.source_cardinality()?);
        child_edges += 1;
    }

    if child_edges > 1 {
        tracing::debug!(
            class_name = class.name.as_str(),
            child_edges,
            "several nested classes; cardinality taken from the last edge"
        );
    }

    let cardinality = match cardinality {
        Some(from_edge) => Some(from_edge),
        None if class.is_root => None,
        None => Some(Multiplicity::exactly_one()),
    };
    if let Some(cardinality) = cardinality {
        descriptor.set_cardinality(cardinality);
    }

    Ok(descriptor)
}
