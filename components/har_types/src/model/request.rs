// Request-side objects

use serde::Serialize;

use super::{Additional, Cookie, Header, NOT_AVAILABLE};
use crate::method::HttpMethod;

/// Detailed information about a performed request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_version: Option<String>,
    pub cookies: Vec<Cookie>,
    pub headers: Vec<Header>,
    pub query_string: Vec<QueryParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,
    /// Bytes from the start of the request up to and including the blank
    /// line before the body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Request,
    "request",
    [
        "method",
        "url",
        "httpVersion",
        "cookies",
        "headers",
        "queryString",
        "postData",
        "headersSize",
        "bodySize",
        "comment"
    ]
);

impl Request {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Parsed request method; `Unknown` when absent or unrecognised
    pub fn http_method(&self) -> HttpMethod {
        self.method
            .as_deref()
            .map(HttpMethod::parse)
            .unwrap_or_default()
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

/// Parameter parsed from the request URL's query string
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(QueryParam, "queryParam", ["name", "value", "comment"]);

impl QueryParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// Posted request body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub params: Vec<Param>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(PostData, "postData", ["mimeType", "params", "text", "comment"]);

/// Posted parameter (form field or uploaded file)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Param,
    "param",
    ["name", "value", "fileName", "contentType", "comment"]
);

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}
