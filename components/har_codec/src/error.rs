//! Error types for reading and writing HAR documents

use thiserror::Error;

/// Errors that can occur while reading or writing a HAR document
#[derive(Error, Debug)]
pub enum CodecError {
    /// Input is not syntactically valid JSON
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// A structurally mandatory part of the document is missing or has the
    /// wrong shape
    #[error("Schema violation at {path}: {message}")]
    SchemaViolation { path: String, message: String },

    /// Input exceeds the configured size limit
    #[error("Document size {0} exceeds limit {1}")]
    DocumentTooLarge(usize, usize),

    /// IO error on a caller-supplied reader or writer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl CodecError {
    pub(crate) fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the input could not be read as JSON at all
    pub fn is_malformed_json(&self) -> bool {
        matches!(self, CodecError::MalformedJson(_))
    }

    /// Whether the input was JSON but lacked required HAR structure
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, CodecError::SchemaViolation { .. })
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
