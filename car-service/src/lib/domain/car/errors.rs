use thiserror::Error;

use crate::domain::car::models::CarId;
use crate::domain::make::models::MakeId;

/// Error for CoolFactor validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoolFactorError {
    #[error("Cool factor must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i16, max: i16, actual: i64 },
}

/// Error for CarDetails validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CarDetailsError {
    #[error("Car {0} is empty")]
    EmptyField(&'static str),

    #[error("Car {field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Invalid cool factor: {0}")]
    CoolFactor(#[from] CoolFactorError),
}

/// Top-level error for car operations
#[derive(Debug, Clone, Error)]
pub enum CarError {
    #[error("Invalid car: {0}")]
    InvalidDetails(#[from] CarDetailsError),

    #[error("Car not found: {0}")]
    NotFound(CarId),

    #[error("Unknown make: {0}")]
    UnknownMake(MakeId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
