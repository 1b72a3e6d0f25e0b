//! HAR reading and writing
//!
//! The reader is lenient: it recovers every entity it can, keeps unknown
//! and unreadable properties in each entity's `additional` map, and fails
//! only on malformed JSON or a document without a log, entries, or
//! request/response pairs. The writer emits those preserved properties
//! back out next to the known ones.
//!
//! # Example
//!
//! ```
//! let doc = har_codec::parse_str(r#"{"log": {"entries": []}}"#).unwrap();
//! let text = har_codec::to_string(&doc).unwrap();
//! assert_eq!(text, r#"{"log":{"entries":[],"pages":[]}}"#);
//! ```

mod fields;

// Public modules
pub mod error;
pub mod reader;
pub mod writer;

// Re-export main types
pub use error::{CodecError, Result};
pub use reader::{from_reader, parse, parse_str, parse_value, validate_document_size, Reader};
pub use writer::{serialize, to_string, to_string_pretty, to_value, Writer};
