use thiserror::Error;

/// Caller-supplied input that violates a precondition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Invalid recipe id: '{value}'")]
    InvalidId { value: String },
}

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Refused(String),
}

impl RecipeError {
    /// True when the caller can fix the failure by correcting its input.
    pub fn is_validation(&self) -> bool {
        matches!(self, RecipeError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
