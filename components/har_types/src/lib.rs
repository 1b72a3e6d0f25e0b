// HAR document model and HTTP status registry
//
// This crate is part of the CortenBrowser HAR tooling. It holds the typed
// entity graph only; reading, writing and validation live in the sibling
// `har_codec` and `har_validator` crates.

pub mod method;
pub mod model;
pub mod status;

// Re-export commonly used types
pub use method::HttpMethod;
pub use model::{
    field_key_matches, Additional, Cache, CacheState, Content, Cookie, Creator, Document, Entry, HarEntity, Header,
    Log, Page, PageTimings, Param, PostData, QueryParam, Request, Response, Timings,
    NOT_APPLICABLE, NOT_AVAILABLE,
};
pub use status::{HttpStatus, StatusCategory};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_model_is_thread_safe() {
        assert_send_sync::<Document>();
        assert_send_sync::<HttpStatus>();
    }

    #[test]
    fn test_document_is_cloneable_and_comparable() {
        let mut doc = Document::new(Creator::new("corten-har", "0.1.0"));
        doc.log
            .entries
            .push(Entry::new(Request::new("GET", "http://a"), Response::new(200)));

        let copy = doc.clone();
        assert_eq!(doc, copy);

        doc.log.entries[0].response.set_raw_status(500);
        assert_ne!(doc, copy);
    }
}
