//! fg-case: case directory lifecycle and the dictionary/field writers that
//! populate a case for the external solver toolchain.

pub mod case;
pub mod control;
pub mod error;
pub mod exec;
pub mod fields;
pub mod gravity;
pub mod system;
pub mod transport;

pub use case::Case;
pub use control::{ControlDict, StartFrom, StopAt, WriteControl};
pub use error::{CaseError, CaseResult};
pub use exec::run_case_tool;
pub use fields::{BoundaryCondition, Dimensions, write_scalar_field, write_vector_field};
pub use gravity::write_gravity;
pub use system::write_system_dict;
pub use transport::write_newtonian;
