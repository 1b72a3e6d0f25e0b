//! Reader Tolerance Tests
//!
//! Files from forgiving or outdated tools must still be readable; only a
//! document without its core structure is rejected.

use har_codec::{parse_str, parse_value, CodecError};
use serde_json::json;

// ============================================================================
// Accepted deviations
// ============================================================================

#[test]
fn test_har_1_1_file_without_optional_parts() {
    let doc = parse_value(json!({
        "log": {
            "version": "1.1",
            "creator": {"name": "legacy"},
            "entries": [{
                "startedDateTime": "2010-06-01T12:00:00.000+02:00",
                "request": {"method": "GET", "url": "http://old"},
                "response": {"status": 200}
            }]
        }
    }))
    .unwrap();

    let entry = &doc.log.entries[0];
    assert!(doc.log.pages.is_empty());
    assert!(entry.cache.is_none());
    assert_eq!(entry.timings.send(), -1.0);
    assert_eq!(entry.request.body_size(), -1);
    assert_eq!(entry.response.content.size(), -1);
}

#[test]
fn test_unknown_keys_everywhere_are_kept() {
    let doc = parse_value(json!({
        "log": {
            "pages": [{"id": "p", "_x": 1, "pageTimings": {"_y": 2}}],
            "entries": [{
                "request": {"postData": {"params": [{"name": "a", "_z": 3}]}},
                "response": {"content": {"_w": 4}},
                "cache": {"beforeRequest": {"_v": 5}},
                "timings": {"_u": 6}
            }]
        }
    }))
    .unwrap();

    let page = &doc.log.pages[0];
    assert_eq!(page.additional.get("_x"), Some(&json!(1)));
    assert_eq!(
        page.page_timings.as_ref().unwrap().additional.get("_y"),
        Some(&json!(2))
    );

    let entry = &doc.log.entries[0];
    let params = &entry.request.post_data.as_ref().unwrap().params;
    assert_eq!(params[0].additional.get("_z"), Some(&json!(3)));
    assert_eq!(entry.response.content.additional.get("_w"), Some(&json!(4)));
    let before = entry.cache.as_ref().unwrap().before_request.as_ref().unwrap();
    assert_eq!(before.additional.get("_v"), Some(&json!(5)));
    assert_eq!(entry.timings.additional.get("_u"), Some(&json!(6)));
}

#[test]
fn test_explicit_nulls_read_as_unset() {
    let doc = parse_value(json!({
        "log": {
            "version": null,
            "pages": null,
            "entries": [{"pageref": null, "request": {"headers": null}, "response": {"status": null}}]
        }
    }))
    .unwrap();

    assert!(doc.log.version.is_none());
    assert!(doc.log.pages.is_empty());
    assert!(doc.log.entries[0].page_ref.is_none());
    assert!(doc.log.entries[0].request.headers.is_empty());
    assert_eq!(doc.log.entries[0].response.raw_status(), 0);
    assert!(doc.log.entries[0].response.additional.is_empty());
}

#[test]
fn test_duplicate_headers_keep_order() {
    let doc = parse_value(json!({"log": {"entries": [{
        "request": {},
        "response": {"headers": [
            {"name": "Set-Cookie", "value": "a=1"},
            {"name": "Vary", "value": "Accept"},
            {"name": "Set-Cookie", "value": "b=2"}
        ]}
    }]}}))
    .unwrap();

    let values: Vec<&str> = doc.log.entries[0]
        .response
        .headers
        .iter()
        .filter(|h| h.has_name("set-cookie"))
        .filter_map(|h| h.value.as_deref())
        .collect();
    assert_eq!(values, vec!["a=1", "b=2"]);
}

// ============================================================================
// Rejected documents
// ============================================================================

#[test]
fn test_rejected_structures() {
    let cases = [
        (r#""just a string""#, "document"),
        (r#"{"log": []}"#, "log"),
        (r#"{"log": {"entries": {}}}"#, "log.entries"),
        (r#"{"log": {"entries": ["x"]}}"#, "log.entries[0]"),
        (r#"{"log": {"entries": [{"response": {}}]}}"#, "log.entries[0].request"),
        (
            r#"{"log": {"entries": [{"request": {}, "response": 5}]}}"#,
            "log.entries[0].response",
        ),
    ];

    for (input, expected_path) in cases {
        match parse_str(input) {
            Err(CodecError::SchemaViolation { path, .. }) => {
                assert_eq!(path, expected_path, "input {}", input)
            }
            other => panic!("input {} gave {:?}", input, other.map(|_| ())),
        }
    }
}

#[test]
fn test_syntax_errors() {
    for input in ["", "{\"log\": {\"entries\": []}", "{'log': {}}", "[1,]"] {
        let err = parse_str(input).unwrap_err();
        assert!(err.is_malformed_json(), "input {:?} gave {}", input, err);
    }
}
