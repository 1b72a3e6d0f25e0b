//! HAR document validation
//!
//! Checks a parsed [`har_types::Document`] against the HAR format and
//! reports each non-conformance as a [`Violation`] with an entity path, a
//! rule id and a severity.
//!
//! # Example
//!
//! ```
//! use har_types::{Creator, Document};
//! use har_validator::{validate_document, RuleId, ValidationMode};
//!
//! let doc = Document::new(Creator::new("corten-har", "0.1.0"));
//! let found = validate_document(&doc, ValidationMode::Lenient).unwrap();
//! assert_eq!(found[0].rule, RuleId::EmptyEntries);
//! ```

// Public modules
pub mod error;
pub mod validator;
pub mod violation;

// Re-export main types
pub use error::{Result, ValidationError};
pub use validator::{
    validate_detailed, validate_document, ValidationMode, ValidationReport, Validator,
    ValidatorConfig,
};
pub use violation::{RuleId, Severity, Violation};
