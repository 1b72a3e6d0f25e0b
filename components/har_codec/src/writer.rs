//! HAR serializer

use std::io::Write;

use har_types::Document;
use serde_json::Value;
use tracing::debug;

use crate::error::{CodecError, Result};

/// HAR writer
///
/// Output goes through an intermediate [`Value`] so that an additional
/// property spelled like a known field ends up as a single key, carrying
/// the preserved original value. Keys are written in sorted order.
///
/// Millisecond timings and `time` are `f64` in the model, so an integer
/// literal read into one of them (`"time": 10`) is written back as `10.0`.
/// The value is numerically equal but not the same JSON token.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    pretty: bool,
}

impl Writer {
    /// Compact writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented writer
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Document as a JSON value
    pub fn to_value(&self, document: &Document) -> Result<Value> {
        serde_json::to_value(document).map_err(CodecError::Serialization)
    }

    /// Document as UTF-8 JSON bytes
    pub fn serialize(&self, document: &Document) -> Result<Vec<u8>> {
        let value = self.to_value(document)?;
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&value)
        } else {
            serde_json::to_vec(&value)
        }
        .map_err(CodecError::Serialization)?;

        debug!(
            "Serialized HAR document: {} entries, {} bytes",
            document.log.entries.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Document as JSON text
    pub fn to_string(&self, document: &Document) -> Result<String> {
        let value = self.to_value(document)?;
        if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        }
        .map_err(CodecError::Serialization)
    }

    /// Write the document to a caller-supplied byte sink
    pub fn write_to<W: Write>(&self, document: &Document, mut writer: W) -> Result<()> {
        let bytes = self.serialize(document)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}

/// Serialize a document to compact JSON bytes
pub fn serialize(document: &Document) -> Result<Vec<u8>> {
    Writer::new().serialize(document)
}

/// Serialize a document to compact JSON text
pub fn to_string(document: &Document) -> Result<String> {
    Writer::new().to_string(document)
}

/// Serialize a document to indented JSON text
pub fn to_string_pretty(document: &Document) -> Result<String> {
    Writer::pretty().to_string(document)
}

/// Serialize a document to a JSON value
pub fn to_value(document: &Document) -> Result<Value> {
    Writer::new().to_value(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use har_types::{Creator, Entry, Request, Response};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io;

    fn sample() -> Document {
        let mut doc = Document::new(Creator::new("corten-har", "0.1.0"));
        doc.log
            .entries
            .push(Entry::new(Request::new("GET", "http://a"), Response::new(0)));
        doc
    }

    #[test]
    fn test_serialize_compact() {
        let text = to_string(&sample()).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.contains(r#""status":0"#));
    }

    #[test]
    fn test_serialize_pretty() {
        let text = to_string_pretty(&sample()).unwrap();
        assert!(text.contains("\n  \"log\""));
        let compact = serialize(&sample()).unwrap();
        let a: Value = serde_json::from_str(&text).unwrap();
        let b: Value = serde_json::from_slice(&compact).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let value = to_value(&sample()).unwrap();
        let entry = &value["log"]["entries"][0];

        assert!(entry.get("pageref").is_none());
        assert!(entry.get("cache").is_none());
        assert!(entry["response"].get("statusText").is_none());
        assert_eq!(entry["request"]["headers"], json!([]));
        assert_eq!(entry["timings"], json!({}));
    }

    #[test]
    fn test_preserved_value_replaces_known_key() {
        let mut doc = sample();
        doc.log.entries[0]
            .response
            .additional
            .insert("status".into(), json!("200 OK"));

        let text = to_string(&doc).unwrap();
        assert_eq!(text.matches("\"status\"").count(), 1);

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["log"]["entries"][0]["response"]["status"], "200 OK");
    }

    #[test]
    fn test_float_fields_are_written_as_floats() {
        let input = json!({"log": {"entries": [{
            "time": 10,
            "request": {"bodySize": 0},
            "response": {"status": 200},
            "timings": {"send": 0, "wait": 10}
        }]}});
        let doc = crate::parse_value(input).unwrap();
        let entry = &Writer::new().to_value(&doc).unwrap()["log"]["entries"][0];

        assert_eq!(entry["time"], json!(10.0));
        assert_eq!(entry["timings"], json!({"send": 0.0, "wait": 10.0}));
        assert_eq!(entry["request"]["bodySize"], json!(0));
        assert!(entry["time"].is_f64());
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        Writer::new().write_to(&sample(), &mut out).unwrap();
        assert_eq!(out, serialize(&sample()).unwrap());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_failing_sink() {
        let err = Writer::new().write_to(&sample(), FailingSink).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
