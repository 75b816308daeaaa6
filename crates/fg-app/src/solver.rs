//! Capability trait for solver applications.

use fg_case::{Case, ControlDict, Dimensions};
use fg_dict::FoamDict;

use crate::application::ResolvedBoundaries;
use crate::error::AppResult;

/// Kind of a physical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Vector,
}

/// A physical field a solver reads from `0/`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub dimensions: Dimensions,
}

/// Capability set of a solver application.
///
/// Every method is required, so an incomplete variant is a compile error
/// rather than a runtime failure. Concrete variants differ in their field
/// set, executable name, and default setting tables.
pub trait Solver {
    /// Name of the external solver executable.
    fn application(&self) -> &str;

    /// Physical fields this solver owns.
    fn fields(&self) -> Vec<FieldSpec>;

    fn default_control(&self) -> ControlDict;

    fn default_schemes(&self) -> FoamDict;

    fn default_solution(&self) -> FoamDict;

    /// Write `constant/transportProperties`.
    fn write_transport(&self, case: &Case) -> AppResult<()>;

    /// Write the `0/<field>` files from fully resolved boundary tables.
    fn write_fields(&self, case: &Case, boundaries: &ResolvedBoundaries) -> AppResult<()>;
}
