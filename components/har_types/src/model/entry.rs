// Entry, timings and cache objects

use serde::Serialize;

use super::{Additional, Request, Response, NOT_APPLICABLE};

/// One captured request/response exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Id of the parent page; a logical link that may dangle
    #[serde(rename = "pageref", skip_serializing_if = "Option::is_none")]
    pub page_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_date_time: Option<String>,
    /// Total elapsed time of the request in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    pub request: Request,
    pub response: Response,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<Cache>,
    pub timings: Timings,
    #[serde(rename = "serverIPAddress", skip_serializing_if = "Option::is_none")]
    pub server_ip_address: Option<String>,
    /// Client port or connection id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Entry,
    "entry",
    [
        "pageref",
        "startedDateTime",
        "time",
        "request",
        "response",
        "cache",
        "timings",
        "serverIPAddress",
        "connection",
        "comment"
    ]
);

impl Entry {
    pub fn new(request: Request, response: Response) -> Self {
        Self {
            request,
            response,
            ..Default::default()
        }
    }
}

/// Durations of the phases of a request, in milliseconds
///
/// -1 marks a phase that does not apply; an unset phase reads as -1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive: Option<f64>,
    /// Included in `connect` for HAR 1.2 producers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Timings,
    "timings",
    [
        "blocked", "dns", "connect", "send", "wait", "receive", "ssl", "comment"
    ]
);

impl Timings {
    pub fn blocked(&self) -> f64 {
        self.blocked.unwrap_or(NOT_APPLICABLE)
    }

    pub fn dns(&self) -> f64 {
        self.dns.unwrap_or(NOT_APPLICABLE)
    }

    pub fn connect(&self) -> f64 {
        self.connect.unwrap_or(NOT_APPLICABLE)
    }

    pub fn send(&self) -> f64 {
        self.send.unwrap_or(NOT_APPLICABLE)
    }

    pub fn wait(&self) -> f64 {
        self.wait.unwrap_or(NOT_APPLICABLE)
    }

    pub fn receive(&self) -> f64 {
        self.receive.unwrap_or(NOT_APPLICABLE)
    }

    pub fn ssl(&self) -> f64 {
        self.ssl.unwrap_or(NOT_APPLICABLE)
    }

    /// Every phase by its JSON name, in declaration order
    pub fn phases(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("blocked", self.blocked),
            ("dns", self.dns),
            ("connect", self.connect),
            ("send", self.send),
            ("wait", self.wait),
            ("receive", self.receive),
            ("ssl", self.ssl),
        ]
    }

    /// Sum of the phases that apply.
    ///
    /// `ssl` is left out because it is already counted inside `connect`.
    pub fn total(&self) -> f64 {
        self.phases()
            .iter()
            .filter(|(name, _)| *name != "ssl")
            .filter_map(|(_, value)| *value)
            .filter(|value| *value >= 0.0)
            .sum()
    }
}

/// Cache usage for an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cache {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_request: Option<CacheState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_request: Option<CacheState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Cache,
    "cache",
    ["beforeRequest", "afterRequest", "comment"]
);

/// Snapshot of a cache entry before or after the request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    CacheState,
    "cacheState",
    ["expires", "lastAccess", "eTag", "hitCount", "comment"]
);
