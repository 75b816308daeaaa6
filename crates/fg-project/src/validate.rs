//! Case-spec validation logic.

use std::collections::HashSet;

use crate::schema::{CaseSpec, MeshDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Missing canonical face: {face}")]
    MissingFace { face: String },

    #[error("Missing reference: {name} in {context}")]
    MissingReference { name: String, context: String },

    #[error("Invalid value: {field} ({reason})")]
    InvalidValue { field: String, reason: String },
}

pub fn validate_spec(spec: &CaseSpec) -> Result<(), ValidationError> {
    if spec.version > crate::schema::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: spec.version,
        });
    }

    if spec.name.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    validate_mesh(&spec.mesh)?;

    let declared: HashSet<String> = spec.mesh.declared_boundary_names().into_iter().collect();
    let mut field_names = HashSet::new();
    for field in &spec.fields {
        if !field_names.insert(&field.name) {
            return Err(ValidationError::DuplicateName {
                name: field.name.clone(),
                context: "fields".to_string(),
            });
        }

        let mut condition_boundaries = HashSet::new();
        for condition in &field.conditions {
            if !condition_boundaries.insert(&condition.boundary) {
                return Err(ValidationError::DuplicateName {
                    name: condition.boundary.clone(),
                    context: format!("field '{}' conditions", field.name),
                });
            }
            if condition.kind.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: format!("field '{}' condition '{}'", field.name, condition.boundary),
                    reason: "condition type must not be empty".to_string(),
                });
            }
            if !declared.contains(&condition.boundary) {
                return Err(ValidationError::MissingReference {
                    name: condition.boundary.clone(),
                    context: format!("field '{}' conditions", field.name),
                });
            }
        }
    }

    Ok(())
}

fn validate_mesh(mesh: &MeshDef) -> Result<(), ValidationError> {
    let MeshDef::SnappyHex {
        block, boundaries, ..
    } = mesh;

    let mut names = HashSet::new();
    for boundary in boundaries {
        if !names.insert(&boundary.name) {
            return Err(ValidationError::DuplicateName {
                name: boundary.name.clone(),
                context: "mesh boundaries".to_string(),
            });
        }
        if boundary.kind.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("boundary '{}'", boundary.name),
                reason: "boundary type must not be empty".to_string(),
            });
        }
    }

    for face in fg_mesh::CANONICAL_FACES {
        if !names.contains(&face.to_string()) {
            return Err(ValidationError::MissingFace {
                face: face.to_string(),
            });
        }
    }

    for (axis, range) in [
        ("x_range", block.x_range),
        ("y_range", block.y_range),
        ("z_range", block.z_range),
    ] {
        if range[0] >= range[1] {
            return Err(ValidationError::InvalidValue {
                field: axis.to_string(),
                reason: "lower bound must be below upper bound".to_string(),
            });
        }
    }

    if block.cells.iter().any(|&n| n == 0) {
        return Err(ValidationError::InvalidValue {
            field: "cells".to_string(),
            reason: "cell counts must be positive".to_string(),
        });
    }

    Ok(())
}
