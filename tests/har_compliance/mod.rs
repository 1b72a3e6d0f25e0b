//! HAR Compliance Test Suite
//!
//! Behaviour required of a HAR 1.2 reader, validator and writer: status
//! handling, tolerance of real-world files, validation rules and output
//! shape.

mod reader_tolerance_tests;
mod serializer_shape_tests;
mod status_handling_tests;
mod validation_rule_tests;
