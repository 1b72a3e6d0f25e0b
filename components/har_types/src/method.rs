// HTTP request method

use serde::{Deserialize, Serialize};

/// Request method resolved from the recorded method string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
    Trace,
    Connect,
    /// Anything else, including an absent method
    #[default]
    Unknown,
}

impl HttpMethod {
    /// Resolve a method token, ignoring ASCII case
    pub fn parse(method: &str) -> HttpMethod {
        const TABLE: &[(&str, HttpMethod)] = &[
            ("GET", HttpMethod::Get),
            ("POST", HttpMethod::Post),
            ("PUT", HttpMethod::Put),
            ("DELETE", HttpMethod::Delete),
            ("HEAD", HttpMethod::Head),
            ("OPTIONS", HttpMethod::Options),
            ("PATCH", HttpMethod::Patch),
            ("TRACE", HttpMethod::Trace),
            ("CONNECT", HttpMethod::Connect),
        ];

        TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(method.trim()))
            .map(|(_, m)| *m)
            .unwrap_or(HttpMethod::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for HttpMethod {
    fn from(method: &str) -> Self {
        HttpMethod::parse(method)
    }
}
