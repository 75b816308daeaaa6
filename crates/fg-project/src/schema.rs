//! Case-spec schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// Declarative description of one solver case: which solver with which
/// parameters, how to mesh the domain, and the boundary conditions of every
/// physical field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseSpec {
    pub version: u32,
    pub name: String,
    pub solver: SolverDef,
    #[serde(default)]
    pub control: ControlOverridesDef,
    pub mesh: MeshDef,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<[f64; 3]>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SolverDef {
    IcoFoam {
        #[serde(default = "default_nu")]
        nu: f64,
    },
    SimpleFoam {
        #[serde(default = "default_nu")]
        nu: f64,
    },
}

fn default_nu() -> f64 {
    1.5e-5
}

/// Partial overrides of the solver's run-control defaults. Absent fields
/// keep the default; there is no wholesale table replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ControlOverridesDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_t: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_interval: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purge_write: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MeshDef {
    SnappyHex {
        surface: PathBuf,
        location_in_mesh: [f64; 3],
        block: BlockDef,
        boundaries: Vec<BoundaryTypeDef>,
    },
}

impl MeshDef {
    /// Base name of the input surface geometry (file stem).
    pub fn surface_name(&self) -> String {
        let MeshDef::SnappyHex { surface, .. } = self;
        surface
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// All boundary names the generated mesh will declare: the canonical
    /// block faces plus one synthesized `<surface>_<region>` name per
    /// non-canonical boundary entry.
    pub fn declared_boundary_names(&self) -> Vec<String> {
        let MeshDef::SnappyHex { boundaries, .. } = self;
        let surface_name = self.surface_name();
        let mut names: Vec<String> = fg_mesh::CANONICAL_FACES
            .iter()
            .map(|s| s.to_string())
            .collect();
        for boundary in boundaries {
            if !fg_mesh::CANONICAL_FACES.contains(&boundary.name.as_str()) {
                names.push(format!("{}_{}", surface_name, boundary.name));
            }
        }
        names
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockDef {
    #[serde(default = "default_scale")]
    pub scale: f64,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub z_range: [f64; 2],
    pub cells: [u32; 3],
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundaryTypeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    pub name: String,
    #[serde(default)]
    pub internal: InternalValueDef,
    #[serde(default)]
    pub conditions: Vec<ConditionDef>,
}

/// Uniform internal-field value: a scalar or a vector triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InternalValueDef {
    Scalar(f64),
    Vector([f64; 3]),
}

impl Default for InternalValueDef {
    fn default() -> Self {
        InternalValueDef::Scalar(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionDef {
    pub boundary: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
