//! Error types for mesh configuration and generation.

use thiserror::Error;

pub type MeshResult<T> = Result<T, MeshError>;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Missing canonical face '{face}' in boundary-type mapping")]
    MissingFace { face: &'static str },

    #[error("Unknown face '{face}' in block-mesh boundary-type mapping")]
    UnknownFace { face: String },

    #[error("Capability not supported by this mesher: {what}")]
    Unsupported { what: &'static str },

    #[error("Case error: {0}")]
    Case(#[from] fg_case::CaseError),

    #[error("Dictionary error: {0}")]
    Dict(#[from] fg_dict::DictError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
