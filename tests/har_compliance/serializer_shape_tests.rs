//! Serializer Shape Tests
//!
//! Output follows the HAR property names, omits what was never set and
//! keeps mandatory lists even when empty.

use har_codec::{parse_value, to_value};
use har_types::{Content, Creator, Document, Entry, Request, Response};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn test_empty_document_shape() {
    let value = to_value(&Document::default()).unwrap();
    assert_eq!(value, json!({"log": {"pages": [], "entries": []}}));
}

#[test]
fn test_minimal_entry_shape() {
    let mut doc = Document::new(Creator::new("x", "1"));
    doc.log
        .entries
        .push(Entry::new(Request::new("GET", "http://a"), Response::new(204)));

    let value = to_value(&doc).unwrap();
    assert_eq!(
        value["log"]["entries"][0],
        json!({
            "request": {
                "method": "GET",
                "url": "http://a",
                "cookies": [],
                "headers": [],
                "queryString": []
            },
            "response": {
                "status": 204,
                "cookies": [],
                "headers": [],
                "content": {}
            },
            "timings": {}
        })
    );
}

#[test]
fn test_zero_is_not_unset() {
    let mut response = Response::new(200);
    response.body_size = Some(0);
    response.content = Content {
        size: Some(0),
        ..Default::default()
    };
    let mut doc = Document::default();
    doc.log.entries.push(Entry::new(Request::default(), response));

    let value = to_value(&doc).unwrap();
    let response = &value["log"]["entries"][0]["response"];
    assert_eq!(response["bodySize"], json!(0));
    assert_eq!(response["content"]["size"], json!(0));
    assert!(response.get("headersSize").is_none());
}

#[test]
fn test_additional_fields_are_siblings_at_each_level() {
    let input = json!({
        "log": {
            "entries": [{
                "request": {"_a": 1},
                "response": {"status": 200, "content": {"_b": true}},
                "_c": "entry"
            }],
            "_d": null
        },
        "_e": []
    });
    let value = to_value(&parse_value(input).unwrap()).unwrap();

    assert_eq!(value["_e"], json!([]));
    assert_eq!(value["log"]["_d"], Value::Null);
    assert!(value["log"].as_object().unwrap().contains_key("_d"));
    assert_eq!(value["log"]["entries"][0]["_c"], json!("entry"));
    assert_eq!(value["log"]["entries"][0]["request"]["_a"], json!(1));
    assert_eq!(value["log"]["entries"][0]["response"]["content"]["_b"], json!(true));
    assert!(value["log"]["entries"][0].get("additional").is_none());
}

#[test]
fn test_normalized_keys_are_written_canonically() {
    let input = json!({"log": {"entries": [{
        "request": {"HttpVersion": "HTTP/1.1"},
        "response": {"status": 301, "redirect_url": "/next"},
        "serverIpAddress": "::1"
    }]}});
    let value = to_value(&parse_value(input).unwrap()).unwrap();
    let entry = &value["log"]["entries"][0];

    assert_eq!(entry["request"]["httpVersion"], json!("HTTP/1.1"));
    assert_eq!(entry["response"]["redirectURL"], json!("/next"));
    assert_eq!(entry["serverIPAddress"], json!("::1"));
    assert!(entry.get("serverIpAddress").is_none());
}
