//! Public API for CortenBrowser HAR tooling
//!
//! This crate ties the HAR model, the lenient reader/writer and the
//! validator together behind one configuration.
//!
//! # Example
//!
//! ```
//! use har_api::{HarConfig, HarReader, HarWriter, ValidationMode};
//!
//! fn main() -> har_api::Result<()> {
//!     let config = HarConfig::builder()
//!         .validation_mode(ValidationMode::Lenient)
//!         .validate_on_read(true)
//!         .build();
//!
//!     let reader = HarReader::new(config.clone())?;
//!     let doc = reader.read_from_str(r#"{"log": {"version": "1.2", "entries": []}}"#)?;
//!
//!     for violation in reader.validate(&doc)? {
//!         println!("{}", violation);
//!     }
//!
//!     let text = HarWriter::new(config)?.write_as_string(&doc)?;
//!     assert!(text.starts_with(r#"{"log":"#));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod reader;
mod writer;

pub use config::{HarConfig, HarConfigBuilder};
pub use error::{HarError, Result};
pub use reader::HarReader;
pub use writer::HarWriter;

// Re-export the underlying crates and their most used types
pub use har_codec::{self, CodecError};
pub use har_types::{self, Document, HttpStatus};
pub use har_validator::{
    self, RuleId, Severity, ValidationError, ValidationMode, ValidationReport, Violation,
};
