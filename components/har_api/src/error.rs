//! Error types for the HAR API

use har_codec::CodecError;
use har_validator::{ValidationError, Violation};
use thiserror::Error;

/// Errors that can occur in HAR API operations
#[derive(Error, Debug)]
pub enum HarError {
    /// Reading or writing failed
    #[error("HAR codec error: {0}")]
    Codec(#[from] CodecError),

    /// Strict validation rejected the document
    #[error("HAR validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Other errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HarError {
    /// The finding that failed strict validation, if that is what happened
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            HarError::Validation(err) => Some(err.violation()),
            _ => None,
        }
    }
}

/// Result type for HAR API operations
pub type Result<T> = std::result::Result<T, HarError>;
