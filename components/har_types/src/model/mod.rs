// HAR entity model
//
// Every entity derives `Serialize` directly. Unset optional fields are
// skipped, list fields are always written, and the `additional` map is
// flattened so unknown properties come back out as sibling keys.

macro_rules! har_entity {
    ($ty:ty, $name:literal, [$($field:literal),* $(,)?]) => {
        impl $crate::model::HarEntity for $ty {
            const FIELDS: &'static [&'static str] = &[$($field),*];
            const NAME: &'static str = $name;

            fn additional(&self) -> &$crate::model::Additional {
                &self.additional
            }

            fn additional_mut(&mut self) -> &mut $crate::model::Additional {
                &mut self.additional
            }
        }
    };
}

mod common;
mod entry;
mod log;
mod request;
mod response;

pub use common::{Cookie, Header};
pub use entry::{Cache, CacheState, Entry, Timings};
pub use log::{Creator, Document, Log, Page, PageTimings};
pub use request::{Param, PostData, QueryParam, Request};
pub use response::{Content, Response};

use serde_json::{Map, Value};

/// Properties present in the source JSON that the schema does not model
///
/// Keys that [`field_key_matches`] pairs with one of the entity's own
/// fields (`Value` on a header, `mime_type` on content) are read back into
/// that field when the canonical key is absent. Such keys only survive a
/// write/read cycle unchanged when the field itself is set.
pub type Additional = Map<String, Value>;

/// Sentinel for sizes and timings that are not available
pub const NOT_AVAILABLE: i64 = -1;

/// Sentinel for durations that do not apply to a request
pub const NOT_APPLICABLE: f64 = -1.0;

/// Alternate spellings some HAR producers write, keyed by canonical name
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("afterRequest", "after_request"),
    ("beforeRequest", "before_request"),
    ("bodySize", "body_size"),
    ("headersSize", "headers_size"),
    ("hitCount", "hit_count"),
    ("httpOnly", "http_only"),
    ("httpVersion", "http_version"),
    ("lastAccess", "last_access"),
    ("mimeType", "mime_type"),
    ("onContentLoad", "on_content_load"),
    ("onLoad", "on_load"),
    ("pageTimings", "page_timings"),
    ("pageref", "page_ref"),
    ("postData", "post_data"),
    ("queryString", "query_string"),
    ("redirectURL", "redirect_url"),
    ("serverIPAddress", "server_ip_address"),
    ("startedDateTime", "started_date_time"),
    ("statusText", "status_text"),
];

/// Whether a property name found in a document spells the canonical field
/// name `canonical`.
///
/// Matching ignores ASCII case (`redirectUrl`, `ETag`, `pageRef`) and
/// accepts the snake_case spellings in a fixed alias table (`mime_type`,
/// `server_ip_address`). Keys with a leading underscore are custom fields
/// by HAR convention and only ever match exactly.
pub fn field_key_matches(key: &str, canonical: &str) -> bool {
    if key == canonical {
        return true;
    }
    if key.starts_with('_') {
        return false;
    }
    if key.eq_ignore_ascii_case(canonical) {
        return true;
    }

    FIELD_ALIASES
        .iter()
        .any(|(name, alias)| *name == canonical && key.eq_ignore_ascii_case(alias))
}

/// Common surface of every HAR object
pub trait HarEntity {
    /// Canonical JSON property names modelled by this entity
    const FIELDS: &'static [&'static str];

    /// HAR object name, used in diagnostics
    const NAME: &'static str;

    fn additional(&self) -> &Additional;

    fn additional_mut(&mut self) -> &mut Additional;

    /// Whether `key` names one of this entity's canonical properties,
    /// allowing for the spelling drift accepted by [`field_key_matches`]
    fn is_known_field(key: &str) -> bool {
        Self::FIELDS.iter().any(|field| field_key_matches(key, field))
    }

    /// Additional keys that collide with a canonical property name.
    ///
    /// The reader only produces these when a known field held a value it
    /// could not interpret; the original is kept under its own key.
    fn shadowed_fields(&self) -> Vec<&str> {
        self.additional()
            .keys()
            .map(String::as_str)
            .filter(|key| Self::is_known_field(key))
            .collect()
    }
}
