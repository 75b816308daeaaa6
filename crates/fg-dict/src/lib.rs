//! fg-dict: ordered dictionary model and serializer for the OpenFOAM
//! text dictionary format.
//!
//! Contains:
//! - value (FoamValue + FoamDict, insertion-ordered)
//! - write (block serializer, tuple/list/entry renderers)
//! - header (FoamFile header block)

pub mod header;
pub mod value;
pub mod write;

pub use header::FoamHeader;
pub use value::{FoamDict, FoamValue};
pub use write::{render_tuple, write_block, write_entry, write_list};

pub type DictResult<T> = Result<T, DictError>;

#[derive(thiserror::Error, Debug)]
pub enum DictError {
    #[error("Empty token list for list '{name}'")]
    EmptyList { name: String },
}
