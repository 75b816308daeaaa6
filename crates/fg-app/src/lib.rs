//! fg-app: solver applications and case orchestration.
//!
//! An [`Application`] pairs a concrete [`Solver`] with a mesher, seeds the
//! per-field boundary-condition table, and drives the case lifecycle:
//! `setup()` writes every configuration file, `create_mesh()` delegates to
//! the mesher, `run()` invokes the external solver.

pub mod application;
pub mod compile;
pub mod error;
pub mod ico_foam;
pub mod simple_foam;
pub mod solver;

pub use application::{Application, BoundaryTable, ResolvedBoundaries};
pub use compile::build_application;
pub use error::{AppError, AppResult};
pub use ico_foam::IcoFoam;
pub use simple_foam::SimpleFoam;
pub use solver::{FieldKind, FieldSpec, Solver};
