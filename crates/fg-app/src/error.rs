//! Error types for the application layer.

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Unknown boundary '{boundary}' for field '{field}'")]
    UnknownBoundary { field: String, boundary: String },

    #[error("Boundary condition not set for field '{field}' at '{boundary}'")]
    UnsetBoundary { field: String, boundary: String },

    #[error("Invalid internal value for field '{field}': {reason}")]
    InvalidInternal { field: String, reason: String },

    #[error("Case spec error: {0}")]
    Spec(String),

    #[error("Case error: {0}")]
    Case(#[from] fg_case::CaseError),

    #[error("Mesh error: {0}")]
    Mesh(#[from] fg_mesh::MeshError),
}

impl From<fg_project::SpecError> for AppError {
    fn from(err: fg_project::SpecError) -> Self {
        AppError::Spec(err.to_string())
    }
}

impl From<fg_project::ValidationError> for AppError {
    fn from(err: fg_project::ValidationError) -> Self {
        AppError::Spec(err.to_string())
    }
}
