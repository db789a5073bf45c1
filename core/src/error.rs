use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing or invalid field: {0}")]
    Validation(String),

    #[error("Unknown reference: {0}")]
    Reference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Delete blocked: {0}")]
    Conflict(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeskError {
    /// Stable kind tag for the presentation layer's error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            DeskError::Storage(_) => "storage",
            DeskError::Serialization(_) => "serialization",
            DeskError::Validation(_) => "validation",
            DeskError::Reference(_) => "reference",
            DeskError::NotFound(_) => "not_found",
            DeskError::Conflict(_) => "conflict",
            DeskError::Other(_) => "other",
        }
    }
}

pub type DeskResult<T> = Result<T, DeskError>;
