//! Initial/boundary-condition field files under `0/`.

use std::fmt;

use fg_dict::{FoamDict, FoamHeader, render_tuple, write_block, write_entry};

use crate::case::Case;
use crate::error::CaseResult;

/// Fixed 7-slot SI exponent vector, rendered `[0 2 -2 0 0 0 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions(pub [i8; 7]);

impl Dimensions {
    /// Kinematic pressure, m²/s².
    pub const KINEMATIC_PRESSURE: Dimensions = Dimensions([0, 2, -2, 0, 0, 0, 0]);
    /// Velocity, m/s.
    pub const VELOCITY: Dimensions = Dimensions([0, 1, -1, 0, 0, 0, 0]);
    /// Acceleration, m/s².
    pub const ACCELERATION: Dimensions = Dimensions([0, 1, -2, 0, 0, 0, 0]);
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "[{}]", body.join(" "))
    }
}

/// A named rule applied at a mesh boundary: a condition type plus an
/// optional value token.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCondition {
    pub kind: String,
    pub value: Option<String>,
}

impl BoundaryCondition {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
        }
    }

    pub fn with_value(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: Some(value.into()),
        }
    }

    fn to_dict(&self) -> FoamDict {
        let mut dict = FoamDict::new();
        dict.set("type", self.kind.as_str());
        if let Some(value) = &self.value {
            dict.set("value", value.as_str());
        }
        dict
    }
}

fn field_body(
    dimensions: Dimensions,
    internal: &str,
    boundaries: &[(String, BoundaryCondition)],
) -> String {
    let mut body = String::new();
    write_entry(&mut body, "dimensions", dimensions);
    write_entry(&mut body, "internalField", format!("uniform {internal}"));
    body.push_str("boundaryField\n{\n");
    for (name, bc) in boundaries {
        write_block(&mut body, name, &bc.to_dict());
    }
    body.push_str("}\n");
    body
}

/// Write a scalar field file at `0/<name>` with a uniform internal value and
/// one boundary block per entry, in the caller-supplied order.
pub fn write_scalar_field(
    case: &Case,
    name: &str,
    dimensions: Dimensions,
    internal: f64,
    boundaries: &[(String, BoundaryCondition)],
) -> CaseResult<()> {
    case.write_dict(
        format!("0/{name}"),
        &FoamHeader::field("volScalarField", name),
        &field_body(dimensions, &internal.to_string(), boundaries),
    )
}

/// Write a vector field file at `0/<name>`.
pub fn write_vector_field(
    case: &Case,
    name: &str,
    dimensions: Dimensions,
    internal: [f64; 3],
    boundaries: &[(String, BoundaryCondition)],
) -> CaseResult<()> {
    case.write_dict(
        format!("0/{name}"),
        &FoamHeader::field("volVectorField", name),
        &field_body(dimensions, &render_tuple(&internal), boundaries),
    )
}
