//! Mesh-quality dictionary writer (`system/meshQualityDict`).

use fg_case::Case;
use fg_dict::{FoamHeader, write_entry};

use crate::error::MeshResult;

pub const DEFAULT_MIN_FACE_WEIGHT: f64 = 0.02;

/// Write the quality thresholds the surface-conforming stage checks against.
/// Everything except `minFaceWeight` comes from the toolchain's stock table.
pub fn write_mesh_quality(case: &Case, min_face_weight: f64) -> MeshResult<()> {
    let mut body = String::new();
    body.push_str("#includeEtc \"caseDicts/meshQualityDict\"\n");
    write_entry(&mut body, "minFaceWeight", min_face_weight);
    case.write_dict(
        "system/meshQualityDict",
        &FoamHeader::bare_dictionary("meshQualityDict"),
        &body,
    )?;
    Ok(())
}
