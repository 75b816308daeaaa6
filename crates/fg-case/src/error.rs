//! Error types for case operations.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Case already initialized: time-zero directory exists at {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("Missing required parameter: {what}")]
    MissingParameter { what: &'static str },

    #[error("Surface geometry file not found: {path}")]
    SurfaceNotFound { path: PathBuf },

    #[error("External tool '{program}' failed: {status}")]
    ToolFailed { program: String, status: ExitStatus },

    #[error("Dictionary error: {0}")]
    Dict(#[from] fg_dict::DictError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
