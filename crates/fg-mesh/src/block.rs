//! Block-structured hexahedral mesh writer (`system/blockMeshDict`).

use fg_case::{Case, run_case_tool};
use fg_dict::{FoamHeader, render_tuple, write_entry, write_list};

use crate::error::{MeshError, MeshResult};
use crate::CANONICAL_FACES;

/// One axis-aligned hexahedral block defined by three axis ranges and
/// per-axis cell counts, with uniform grading.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMesh {
    pub scale: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub z_range: (f64, f64),
    pub x_cells: u32,
    pub y_cells: u32,
    pub z_cells: u32,
}

// Vertex indices of each canonical face, outward-oriented.
const FACE_VERTICES: [(&str, [u8; 4]); 6] = [
    ("top", [4, 5, 6, 7]),
    ("bottom", [0, 3, 2, 1]),
    ("north", [3, 7, 6, 2]),
    ("south", [1, 5, 4, 0]),
    ("east", [0, 4, 7, 3]),
    ("west", [2, 6, 5, 1]),
];

impl BlockMesh {
    /// The eight corner vertices computed from the three axis ranges:
    /// the z-min quad counter-clockwise from (x0, y0), then the z-max quad.
    pub fn vertices(&self) -> [[f64; 3]; 8] {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        let (z0, z1) = self.z_range;
        [
            [x0, y0, z0],
            [x1, y0, z0],
            [x1, y1, z0],
            [x0, y1, z0],
            [x0, y0, z1],
            [x1, y0, z1],
            [x1, y1, z1],
            [x0, y1, z1],
        ]
    }

    /// Write `system/blockMeshDict`. `faces` maps every canonical face name
    /// to its boundary type, in emission order; a missing or unknown face
    /// name fails before anything is written.
    pub fn write(&self, case: &Case, faces: &[(String, String)]) -> MeshResult<()> {
        for canonical in CANONICAL_FACES {
            if !faces.iter().any(|(name, _)| name == canonical) {
                return Err(MeshError::MissingFace { face: canonical });
            }
        }

        let mut body = String::new();
        write_entry(&mut body, "scale", self.scale);

        let vertex_tokens: Vec<String> =
            self.vertices().iter().map(|v| render_tuple(v)).collect();
        write_list(&mut body, "vertices", &vertex_tokens)?;
        write_list(
            &mut body,
            "blocks",
            &[
                "hex".to_string(),
                "(0 1 2 3 4 5 6 7)".to_string(),
                format!(
                    "({} {} {}) simpleGrading (1 1 1)",
                    self.x_cells, self.y_cells, self.z_cells
                ),
            ],
        )?;
        body.push_str("edges ( );\n");

        body.push_str("boundary (\n");
        for (name, kind) in faces {
            let vertices = FACE_VERTICES
                .iter()
                .find(|(face, _)| face == name)
                .map(|(_, v)| v)
                .ok_or_else(|| MeshError::UnknownFace { face: name.clone() })?;
            body.push_str(name);
            body.push('{');
            body.push_str("type\t");
            body.push_str(kind);
            body.push_str(";faces ( ");
            body.push_str(&render_tuple(vertices));
            body.push_str(" );}\n");
        }
        body.push_str(" );\n");
        body.push_str("mergePatchPairs ( );\n");

        case.write_dict(
            "system/blockMeshDict",
            &FoamHeader::dictionary("system", "blockMeshDict"),
            &body,
        )?;
        Ok(())
    }
}

/// Invoke the external block-mesh generator against the case.
pub fn run_block_mesh(case: &Case, verbose: bool) -> MeshResult<()> {
    run_case_tool("blockMesh", &[], case, verbose)?;
    Ok(())
}
