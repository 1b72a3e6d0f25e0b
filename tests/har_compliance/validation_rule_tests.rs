//! Validation Rule Tests
//!
//! Each rule is triggered from a parsed document, and strict mode is
//! checked to stop at the first error in document order.

use har_codec::parse_value;
use har_types::Document;
use har_validator::{
    validate_document, RuleId, Severity, ValidationMode, Validator, ValidatorConfig, Violation,
};
use serde_json::{json, Value};

fn entry(overrides: Value) -> Value {
    let mut base = json!({
        "pageref": "page_1",
        "startedDateTime": "2024-01-01T00:00:00Z",
        "time": 3.0,
        "request": {"method": "GET", "url": "http://a", "httpVersion": "HTTP/1.1"},
        "response": {"status": 200, "httpVersion": "HTTP/1.1", "content": {"mimeType": "text/plain"}},
        "timings": {"send": 1.0, "wait": 1.0, "receive": 1.0}
    });
    if let (Some(target), Value::Object(changes)) = (base.as_object_mut(), overrides) {
        for (key, value) in changes {
            target.insert(key, value);
        }
    }
    base
}

fn document(entries: Vec<Value>) -> Document {
    parse_value(json!({
        "log": {
            "version": "1.2",
            "creator": {"name": "x", "version": "1"},
            "pages": [{"id": "page_1", "title": "t", "startedDateTime": "2024-01-01T00:00:00Z"}],
            "entries": entries
        }
    }))
    .unwrap()
}

fn lenient(doc: &Document) -> Vec<Violation> {
    validate_document(doc, ValidationMode::Lenient).unwrap()
}

// ============================================================================
// Individual rules
// ============================================================================

#[test]
fn test_baseline_is_clean() {
    let doc = document(vec![entry(json!({}))]);
    assert!(lenient(&doc).is_empty());
    assert!(validate_document(&doc, ValidationMode::Strict).unwrap().is_empty());
}

#[test]
fn test_rule_severities() {
    let cases = [
        (json!({"pageref": "page_2"}), RuleId::DanglingPageRef, Severity::Error),
        (json!({"time": -3.0}), RuleId::NegativeTime, Severity::Error),
        (json!({"time": 9.0}), RuleId::TimingsMismatch, Severity::Warning),
        (json!({"startedDateTime": "01/01/2024"}), RuleId::InvalidDatetime, Severity::Warning),
        (
            json!({"timings": {"send": 1.0, "wait": 1.0, "receive": 1.0, "dns": -0.5}}),
            RuleId::NegativeTiming,
            Severity::Error,
        ),
        (
            json!({"request": {"method": "GET", "url": "http://a", "httpVersion": "HTTP/1.1", "headersSize": -2}}),
            RuleId::NegativeSize,
            Severity::Error,
        ),
        (
            json!({"request": {"url": "http://a", "httpVersion": "HTTP/1.1"}}),
            RuleId::MissingField,
            Severity::Warning,
        ),
        (
            json!({"request": {"method": 1, "url": "http://a", "httpVersion": "HTTP/1.1"}}),
            RuleId::ShadowedField,
            Severity::Warning,
        ),
    ];

    for (overrides, rule, severity) in cases {
        let doc = document(vec![entry(overrides.clone())]);
        let found = lenient(&doc);
        let hit = found.iter().find(|v| v.rule == rule);
        assert!(hit.is_some(), "{} not reported for {}", rule, overrides);
        assert_eq!(hit.map(|v| v.severity), Some(severity), "{}", overrides);
    }
}

#[test]
fn test_version_drift() {
    for version in [json!("1.3"), json!(1.2), Value::Null] {
        let doc = parse_value(json!({
            "log": {"version": version, "creator": {"name": "x", "version": "1"}, "entries": [entry(json!({"pageref": null}))]}
        }))
        .unwrap();
        let found = lenient(&doc);
        assert!(
            found.iter().any(|v| v.rule == RuleId::UnsupportedVersion),
            "version {}",
            version
        );
        assert!(found.iter().all(|v| v.severity == Severity::Warning));
    }
}

#[test]
fn test_custom_tolerance() {
    let doc = document(vec![entry(json!({"time": 4.5}))]);
    assert!(lenient(&doc).iter().any(|v| v.rule == RuleId::TimingsMismatch));

    let validator = Validator::new(ValidatorConfig {
        timings_tolerance_ms: 2.0,
        ..Default::default()
    });
    assert!(validator
        .validate(&doc, ValidationMode::Lenient)
        .unwrap()
        .is_empty());
}

// ============================================================================
// Strict mode
// ============================================================================

#[test]
fn test_strict_reports_first_error_in_document_order() {
    let doc = document(vec![
        entry(json!({"time": 50.0})),
        entry(json!({"response": {"status": 0, "httpVersion": "HTTP/1.1", "content": {"mimeType": "x"}}})),
        entry(json!({"pageref": "nowhere"})),
    ]);

    let err = validate_document(&doc, ValidationMode::Strict).unwrap_err();
    assert_eq!(err.violation().path, "log.entries[1].response.status");

    let found = lenient(&doc);
    let order: Vec<(RuleId, &str)> = found.iter().map(|v| (v.rule, v.path.as_str())).collect();
    assert_eq!(
        order,
        vec![
            (RuleId::TimingsMismatch, "log.entries[0].time"),
            (RuleId::StatusOutOfRange, "log.entries[1].response.status"),
            (RuleId::DanglingPageRef, "log.entries[2].pageref"),
        ]
    );
}

#[test]
fn test_repeated_validation_is_identical() {
    let doc = document(vec![
        entry(json!({"time": -1.0})),
        entry(json!({"response": {"status": 9000}})),
    ]);
    let runs: Vec<Vec<Violation>> = (0..5).map(|_| lenient(&doc)).collect();
    assert!(runs.windows(2).all(|pair| pair[0] == pair[1]));
}
