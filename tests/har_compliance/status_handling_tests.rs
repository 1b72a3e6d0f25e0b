//! Status Handling Tests
//!
//! Raw status codes are kept exactly as recorded while the resolved status
//! follows the registry.

use har_codec::{parse_str, to_value};
use har_types::{HttpStatus, StatusCategory};
use serde_json::json;

fn with_status(status: serde_json::Value) -> String {
    json!({"log": {"entries": [{"request": {}, "response": {"status": status}}]}}).to_string()
}

// ============================================================================
// Duality
// ============================================================================

#[test]
fn test_registered_codes_resolve() {
    for (code, expected) in [
        (100, HttpStatus::Continue),
        (204, HttpStatus::NoContent),
        (304, HttpStatus::NotModified),
        (418, HttpStatus::ImATeapot),
        (503, HttpStatus::ServiceUnavailable),
    ] {
        let doc = parse_str(&with_status(json!(code))).unwrap();
        let response = &doc.log.entries[0].response;
        assert_eq!(response.raw_status(), code);
        assert_eq!(response.status(), code);
        assert_eq!(response.http_status(), expected);
    }
}

#[test]
fn test_unregistered_codes_use_sentinel() {
    for code in [0, -1, 99, 299, 600, 999] {
        let doc = parse_str(&with_status(json!(code))).unwrap();
        let response = &doc.log.entries[0].response;
        assert_eq!(response.raw_status(), code);
        assert_eq!(response.status(), 0);
        assert_eq!(response.http_status(), HttpStatus::Unknown);
        assert_eq!(response.http_status().category(), StatusCategory::Unknown);
    }
}

#[test]
fn test_missing_status_reads_as_zero() {
    let doc = parse_str(r#"{"log": {"entries": [{"request": {}, "response": {}}]}}"#).unwrap();
    let response = &doc.log.entries[0].response;
    assert_eq!(response.raw_status(), 0);
    assert!(response.http_status().is_unknown());
}

#[test]
fn test_setter_recomputes_immediately() {
    let mut doc = parse_str(&with_status(json!(200))).unwrap();
    let response = &mut doc.log.entries[0].response;

    response.set_raw_status(451);
    assert_eq!(response.http_status(), HttpStatus::UnavailableForLegalReasons);
    response.set_raw_status(452);
    assert_eq!(response.http_status(), HttpStatus::Unknown);
    assert_eq!(response.raw_status(), 452);
}

// ============================================================================
// Round-trip of the raw value
// ============================================================================

#[test]
fn test_raw_status_is_written_back() {
    for code in [0, -3, 200, 777] {
        let doc = parse_str(&with_status(json!(code))).unwrap();
        let value = to_value(&doc).unwrap();
        assert_eq!(value["log"]["entries"][0]["response"]["status"], json!(code));
    }
}

#[test]
fn test_integral_float_status_is_accepted() {
    let doc = parse_str(&with_status(json!(404.0))).unwrap();
    assert_eq!(doc.log.entries[0].response.http_status(), HttpStatus::NotFound);
}
