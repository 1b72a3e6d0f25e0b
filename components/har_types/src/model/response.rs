// Response-side objects

use serde::Serialize;

use super::{Additional, Cookie, Header, NOT_AVAILABLE};
use crate::status::HttpStatus;

/// Detailed information about a received response
///
/// The status is held twice: the raw code exactly as recorded (which may be
/// 0, negative or otherwise malformed) and the status it resolves to in the
/// registry. Both are updated together by [`Response::set_raw_status`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(rename = "status")]
    raw_status: i64,
    #[serde(skip)]
    parsed_status: HttpStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_version: Option<String>,
    pub cookies: Vec<Cookie>,
    pub headers: Vec<Header>,
    pub content: Content,
    /// Redirection target from the Location header
    #[serde(rename = "redirectURL", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers_size: Option<i64>,
    /// Received body size; 0 for responses served from cache (304)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Response,
    "response",
    [
        "status",
        "statusText",
        "httpVersion",
        "cookies",
        "headers",
        "content",
        "redirectURL",
        "headersSize",
        "bodySize",
        "comment"
    ]
);

impl Response {
    pub fn new(status: i64) -> Self {
        let mut response = Self::default();
        response.set_raw_status(status);
        response
    }

    /// Resolved status code; 0 when the raw code has no registry entry
    pub fn status(&self) -> i64 {
        self.parsed_status.code()
    }

    /// Status code exactly as recorded
    pub fn raw_status(&self) -> i64 {
        self.raw_status
    }

    /// Resolved status
    pub fn http_status(&self) -> HttpStatus {
        self.parsed_status
    }

    /// Store the recorded code and re-resolve it.
    ///
    /// No range check happens here; out-of-range codes are a validation
    /// concern.
    pub fn set_raw_status(&mut self, code: i64) {
        self.raw_status = code;
        self.parsed_status = HttpStatus::resolve(code);
    }

    /// Same as [`Response::set_raw_status`]
    pub fn set_status(&mut self, code: i64) {
        self.set_raw_status(code);
    }

    /// Header size, -1 when not available
    pub fn headers_size(&self) -> i64 {
        self.headers_size.unwrap_or(NOT_AVAILABLE)
    }

    /// Body size, -1 when not available
    pub fn body_size(&self) -> i64 {
        self.body_size.unwrap_or(NOT_AVAILABLE)
    }
}

/// Response body details
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Length of the returned content in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    /// Bytes saved by compression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Encoding of `text`, e.g. "base64"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Content,
    "content",
    ["size", "compression", "mimeType", "text", "encoding", "comment"]
);

impl Content {
    /// Content size, -1 when not available
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(NOT_AVAILABLE)
    }

    pub fn is_base64(&self) -> bool {
        self.encoding
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case("base64"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_status_is_sentinel() {
        let response = Response::default();
        assert_eq!(response.raw_status(), 0);
        assert_eq!(response.status(), 0);
        assert_eq!(response.http_status(), HttpStatus::Unknown);
    }

    #[test]
    fn test_status_duality() {
        let mut response = Response::default();

        response.set_raw_status(404);
        assert_eq!(response.raw_status(), 404);
        assert_eq!(response.status(), 404);
        assert_eq!(response.http_status(), HttpStatus::NotFound);

        response.set_raw_status(-7);
        assert_eq!(response.raw_status(), -7);
        assert_eq!(response.status(), HttpStatus::Unknown.code());

        response.set_status(299);
        assert_eq!(response.raw_status(), 299);
        assert_eq!(response.status(), 0);
    }

    #[test]
    fn test_raw_status_is_serialized() {
        let response = Response::new(999);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], 999);
        assert_eq!(value["content"], json!({}));
        assert_eq!(value["headers"], json!([]));
        assert!(value.get("parsedStatus").is_none());
    }

    #[test]
    fn test_content_defaults() {
        let mut content = Content::default();
        assert_eq!(content.size(), -1);
        assert!(!content.is_base64());

        content.encoding = Some("BASE64".into());
        assert!(content.is_base64());
    }
}
