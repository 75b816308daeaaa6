//! Surface-conforming mesh refinement (`system/snappyHexMeshDict`).
//!
//! Builds a background block mesh, then refines and snaps it against an
//! input surface geometry via the external `snappyHexMesh` generator.

use std::path::PathBuf;

use fg_case::{Case, run_case_tool};
use fg_dict::{FoamDict, FoamHeader, render_tuple, write_block, write_entry};

use crate::block::{BlockMesh, run_block_mesh};
use crate::error::{MeshError, MeshResult};
use crate::quality::{DEFAULT_MIN_FACE_WEIGHT, write_mesh_quality};
use crate::{CANONICAL_FACES, Mesher};

/// Stage toggles for the three refinement phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnappyStages {
    pub castellated: bool,
    pub snap: bool,
    pub add_layers: bool,
}

impl Default for SnappyStages {
    fn default() -> Self {
        Self {
            castellated: true,
            snap: true,
            add_layers: false,
        }
    }
}

/// Block-structured background mesh plus surface-conforming refinement.
///
/// The boundary-type table holds the six canonical block faces and any named
/// regions of the input surface, in caller order. Control tables default to
/// the stock values and can be replaced per table.
#[derive(Debug, Clone)]
pub struct SnappyHexMesh {
    boundary_types: Vec<(String, String)>,
    surface: PathBuf,
    surface_file: String,
    surface_name: String,
    location_in_mesh: [f64; 3],
    block: BlockMesh,
    pub stages: SnappyStages,
    pub castellated_controls: FoamDict,
    pub snap_controls: FoamDict,
    pub add_layers_controls: FoamDict,
    pub min_face_weight: f64,
}

impl SnappyHexMesh {
    pub fn new(
        boundary_types: Vec<(String, String)>,
        surface: impl Into<PathBuf>,
        location_in_mesh: [f64; 3],
        block: BlockMesh,
    ) -> Self {
        let surface = surface.into();
        let surface_file = surface
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let surface_name = surface
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut mesher = Self {
            boundary_types,
            surface,
            surface_file,
            surface_name,
            location_in_mesh,
            block,
            stages: SnappyStages::default(),
            castellated_controls: FoamDict::new(),
            snap_controls: FoamDict::new(),
            add_layers_controls: FoamDict::new(),
            min_face_weight: DEFAULT_MIN_FACE_WEIGHT,
        };
        mesher.castellated_controls = mesher.default_castellated_controls();
        mesher.snap_controls = default_snap_controls();
        mesher.add_layers_controls = default_add_layers_controls();
        mesher
    }

    pub fn block(&self) -> &BlockMesh {
        &self.block
    }

    /// Boundary-type entries that name surface regions rather than canonical
    /// block faces.
    fn surface_regions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.boundary_types
            .iter()
            .filter(|(name, _)| !CANONICAL_FACES.contains(&name.as_str()))
            .map(|(name, kind)| (name.as_str(), kind.as_str()))
    }

    /// The six canonical faces with their types, in canonical order. A face
    /// absent from the table is caught by the block-mesh writer.
    fn block_faces(&self) -> Vec<(String, String)> {
        CANONICAL_FACES
            .iter()
            .filter_map(|face| {
                self.boundary_types
                    .iter()
                    .find(|(name, _)| name == face)
                    .cloned()
            })
            .collect()
    }

    fn default_castellated_controls(&self) -> FoamDict {
        let mut regions = FoamDict::new();
        for (region, kind) in self.surface_regions() {
            let mut region_dict = FoamDict::new();
            region_dict.set("level", "(0 0)");
            region_dict.set("patchInfo", FoamDict::from([("type", kind)]));
            regions.set(region, region_dict);
        }

        let mut surface = FoamDict::new();
        surface.set("level", "(0 0)");
        surface.set("regions", regions);
        let mut refinement_surfaces = FoamDict::new();
        refinement_surfaces.set(self.surface_name.as_str(), surface);

        let mut controls = FoamDict::new();
        controls.set("maxLocalCells", 100_000);
        controls.set("maxGlobalCells", 2_000_000);
        controls.set("minRefinementCells", 10);
        controls.set("maxLoadUnbalance", 0.10);
        controls.set("nCellsBetweenLevels", 2);
        controls.set("features", "( )");
        controls.set("refinementSurfaces", refinement_surfaces);
        controls.set("resolveFeatureAngle", 30.0);
        controls.set("refinementRegions", FoamDict::new());
        controls.set("allowFreeStandingZoneFaces", "true");
        controls.set("locationInMesh", render_tuple(&self.location_in_mesh));
        controls
    }

    fn write_snappy_dict(&self, case: &Case) -> MeshResult<()> {
        let mut body = String::new();
        write_entry(&mut body, "castellatedMesh", bool_token(self.stages.castellated));
        write_entry(&mut body, "snap", bool_token(self.stages.snap));
        write_entry(&mut body, "addLayers", bool_token(self.stages.add_layers));

        let mut geometry = FoamDict::new();
        geometry.set(
            self.surface_file.as_str(),
            FoamDict::from([
                ("type", "triSurfaceMesh"),
                ("name", self.surface_name.as_str()),
            ]),
        );
        write_block(&mut body, "geometry", &geometry);

        write_block(&mut body, "castellatedMeshControls", &self.castellated_controls);
        write_block(&mut body, "snapControls", &self.snap_controls);
        write_block(&mut body, "addLayersControls", &self.add_layers_controls);

        body.push_str("meshQualityControls\n{\n");
        body.push_str("#include \"meshQualityDict\"\n");
        write_entry(&mut body, "nSmoothScale", 4);
        write_entry(&mut body, "errorReduction", 0.75);
        body.push_str("}\n");
        write_entry(&mut body, "mergeTolerance", "1e-6");

        case.write_dict(
            "system/snappyHexMeshDict",
            &FoamHeader::dictionary("system", "snappyHexMeshDict"),
            &body,
        )?;
        Ok(())
    }
}

impl Mesher for SnappyHexMesh {
    fn boundary_names(&self) -> Vec<String> {
        let mut names: Vec<String> = CANONICAL_FACES.iter().map(|s| s.to_string()).collect();
        for (region, _) in self.surface_regions() {
            names.push(format!("{}_{}", self.surface_name, region));
        }
        names
    }

    fn write(&self, case: &Case) -> MeshResult<()> {
        case.import_surface(&self.surface)?;
        self.block.write(case, &self.block_faces())?;
        write_mesh_quality(case, self.min_face_weight)?;
        self.write_snappy_dict(case)
    }

    fn generate(&self, case: &Case, verbose: bool) -> MeshResult<()> {
        tracing::info!(case = %case.root().display(), "generating surface-conforming mesh");
        self.write(case)?;
        run_block_mesh(case, verbose)?;
        run_case_tool("snappyHexMesh", &["-overwrite"], case, verbose)?;
        Ok(())
    }

    fn clean(&self, _case: &Case) -> MeshResult<()> {
        Err(MeshError::Unsupported { what: "clean" })
    }
}

fn bool_token(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn default_snap_controls() -> FoamDict {
    let mut controls = FoamDict::new();
    controls.set("nSmoothPatch", 3);
    controls.set("tolerance", 2.0);
    controls.set("nSolveIter", 30);
    controls.set("nRelaxIter", 5);
    controls.set("nFeatureSnapIter", 10);
    controls.set("implicitFeatureSnap", "false");
    controls.set("explicitFeatureSnap", "true");
    controls.set("multiRegionFeatureSnap", "false");
    controls
}

fn default_add_layers_controls() -> FoamDict {
    let mut controls = FoamDict::new();
    controls.set("relativeSizes", "true");
    controls.set("layers", FoamDict::new());
    controls.set("expansionRatio", 1.0);
    controls.set("finalLayerThickness", 0.3);
    controls.set("minThickness", 0.1);
    controls.set("nGrow", 0);
    controls.set("featureAngle", 60);
    controls.set("slipFeatureAngle", 30);
    controls.set("nRelaxIter", 3);
    controls.set("nSmoothSurfaceNormals", 1);
    controls.set("nSmoothNormals", 3);
    controls.set("nSmoothThickness", 10);
    controls.set("maxFaceThicknessRatio", 0.5);
    controls.set("maxThicknessToMedialRatio", 0.3);
    controls.set("minMedialAxisAngle", 90);
    controls.set("nBufferCellsNoExtrude", 0);
    controls.set("nLayerIter", 50);
    controls
}
