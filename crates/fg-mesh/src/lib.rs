//! fg-mesh: mesh-generation configuration and external-generator invocation.

pub mod block;
pub mod error;
pub mod quality;
pub mod snappy;

pub use block::{BlockMesh, run_block_mesh};
pub use error::{MeshError, MeshResult};
pub use quality::{DEFAULT_MIN_FACE_WEIGHT, write_mesh_quality};
pub use snappy::{SnappyHexMesh, SnappyStages};

use fg_case::Case;

/// The six faces of the background block mesh, in emission order.
pub const CANONICAL_FACES: [&str; 6] = ["top", "bottom", "north", "south", "east", "west"];

/// Capability set of a mesh generator.
///
/// A variant that cannot support an optional capability reports a typed
/// [`MeshError::Unsupported`] instead of silently doing nothing.
pub trait Mesher {
    /// Declared boundary names, in the order field writers emit them.
    fn boundary_names(&self) -> Vec<String>;

    /// Emit the mesher's control files into the case and copy any geometry
    /// inputs it needs. Repeatable.
    fn write(&self, case: &Case) -> MeshResult<()>;

    /// Write configuration, then invoke the external generator(s) against
    /// the case as blocking subprocesses.
    fn generate(&self, case: &Case, verbose: bool) -> MeshResult<()>;

    /// Remove generated mesh artifacts, leaving the configuration in place.
    fn clean(&self, case: &Case) -> MeshResult<()>;
}
