//! Error types for HAR validation

use thiserror::Error;

use crate::violation::Violation;

/// Errors raised by the validator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Strict validation stopped at an error-severity finding
    #[error("Validation failed: {0}")]
    Failed(Violation),
}

impl ValidationError {
    /// The finding that stopped validation
    pub fn violation(&self) -> &Violation {
        match self {
            ValidationError::Failed(violation) => violation,
        }
    }
}

/// Result type for validation
pub type Result<T> = std::result::Result<T, ValidationError>;
