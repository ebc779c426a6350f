use thiserror::Error;

/// Error for MakeName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MakeNameError {
    #[error("Make name is empty")]
    Empty,

    #[error("Make name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for make operations
#[derive(Debug, Clone, Error)]
pub enum MakeError {
    #[error("Invalid make name: {0}")]
    InvalidName(#[from] MakeNameError),

    #[error("Make already exists: {0}")]
    NameAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
