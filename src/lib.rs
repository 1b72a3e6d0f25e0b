//! CortenBrowser HAR tooling
//!
//! Reads, validates and writes HTTP Archive (HAR) documents. See [`har_api`]
//! for the configured reader and writer.

pub use har_api::*;
