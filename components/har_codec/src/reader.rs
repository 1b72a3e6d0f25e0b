//! Lenient HAR deserializer
//!
//! Reading fails only when the input is not JSON, or when the parts of a
//! document that nothing else can stand in for are missing: the `log`
//! object, its `entries` array, and the `request`/`response` of each entry.
//! Every other deviation is absorbed into the model and left for the
//! validator to report.

use std::io::Read;

use har_types::{
    Cache, CacheState, Content, Cookie, Creator, Document, Entry, Header, Log, Page, PageTimings,
    Param, PostData, QueryParam, Request, Response, Timings,
};
use serde_json::Value;
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::fields::Fields;

/// Lenient HAR reader
#[derive(Debug, Clone)]
pub struct Reader {
    max_document_size: usize,
}

impl Default for Reader {
    fn default() -> Self {
        Self {
            max_document_size: usize::MAX,
        }
    }
}

impl Reader {
    /// Reader without a size limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inputs larger than `limit` bytes before parsing them
    pub fn with_max_document_size(mut self, limit: usize) -> Self {
        self.max_document_size = limit;
        self
    }

    pub fn max_document_size(&self) -> usize {
        self.max_document_size
    }

    /// Parse a HAR document from UTF-8 JSON bytes
    pub fn parse(&self, bytes: &[u8]) -> Result<Document> {
        validate_document_size(bytes.len(), self.max_document_size)?;
        debug!("Parsing HAR document ({} bytes)", bytes.len());

        let value: Value = serde_json::from_slice(bytes).map_err(CodecError::MalformedJson)?;
        self.parse_value(value)
    }

    /// Parse a HAR document from JSON text
    pub fn parse_str(&self, text: &str) -> Result<Document> {
        self.parse(text.as_bytes())
    }

    /// Read a whole HAR document from an open byte channel
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Document> {
        let limit = u64::try_from(self.max_document_size)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        let mut bytes = Vec::new();
        reader.take(limit).read_to_end(&mut bytes)?;
        self.parse(&bytes)
    }

    /// Build a document from an already parsed JSON value
    pub fn parse_value(&self, value: Value) -> Result<Document> {
        let map = match value {
            Value::Object(map) => map,
            _ => {
                return Err(CodecError::schema(
                    "document",
                    "document root must be a JSON object",
                ))
            }
        };

        let document = read_document(Fields::new(String::new(), map))?;
        debug!(
            "Parsed HAR document: version {:?}, {} page(s), {} entries",
            document.log.version,
            document.log.pages.len(),
            document.log.entries.len()
        );
        Ok(document)
    }
}

/// Parse a HAR document from bytes with the default reader
pub fn parse(bytes: &[u8]) -> Result<Document> {
    Reader::default().parse(bytes)
}

/// Parse a HAR document from text with the default reader
pub fn parse_str(text: &str) -> Result<Document> {
    Reader::default().parse_str(text)
}

/// Build a document from a JSON value with the default reader
pub fn parse_value(value: Value) -> Result<Document> {
    Reader::default().parse_value(value)
}

/// Read a HAR document from a byte channel with the default reader
pub fn from_reader<R: Read>(reader: R) -> Result<Document> {
    Reader::default().from_reader(reader)
}

/// Validate document size
pub fn validate_document_size(size: usize, max_size: usize) -> Result<()> {
    if size > max_size {
        Err(CodecError::DocumentTooLarge(size, max_size))
    } else {
        Ok(())
    }
}

fn read_document(mut f: Fields) -> Result<Document> {
    Ok(Document {
        log: f.required_object("log", read_log)?,
        additional: f.finish(),
    })
}

fn read_log(mut f: Fields) -> Result<Log> {
    Ok(Log {
        version: f.string("version"),
        creator: f.object("creator", read_creator)?,
        browser: f.object("browser", read_creator)?,
        pages: f.list("pages", read_page)?,
        entries: f.required_list("entries", read_entry)?,
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_creator(mut f: Fields) -> Result<Creator> {
    Ok(Creator {
        name: f.string("name"),
        version: f.string("version"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_page(mut f: Fields) -> Result<Page> {
    Ok(Page {
        started_date_time: f.string("startedDateTime"),
        id: f.string("id"),
        title: f.string("title"),
        page_timings: f.object("pageTimings", read_page_timings)?,
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_page_timings(mut f: Fields) -> Result<PageTimings> {
    Ok(PageTimings {
        on_content_load: f.number("onContentLoad"),
        on_load: f.number("onLoad"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_entry(mut f: Fields) -> Result<Entry> {
    Ok(Entry {
        page_ref: f.string("pageref"),
        started_date_time: f.string("startedDateTime"),
        time: f.number("time"),
        request: f.required_object("request", read_request)?,
        response: f.required_object("response", read_response)?,
        cache: f.object("cache", read_cache)?,
        timings: f.object("timings", read_timings)?.unwrap_or_default(),
        server_ip_address: f.string("serverIPAddress"),
        connection: f.string("connection"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_request(mut f: Fields) -> Result<Request> {
    Ok(Request {
        method: f.string("method"),
        url: f.string("url"),
        http_version: f.string("httpVersion"),
        cookies: f.list("cookies", read_cookie)?,
        headers: f.list("headers", read_header)?,
        query_string: f.list("queryString", read_query_param)?,
        post_data: f.object("postData", read_post_data)?,
        headers_size: f.integer("headersSize"),
        body_size: f.integer("bodySize"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_response(mut f: Fields) -> Result<Response> {
    let mut response = Response::default();
    if let Some(status) = f.integer("status") {
        response.set_raw_status(status);
    }
    response.status_text = f.string("statusText");
    response.http_version = f.string("httpVersion");
    response.cookies = f.list("cookies", read_cookie)?;
    response.headers = f.list("headers", read_header)?;
    response.content = f.object("content", read_content)?.unwrap_or_default();
    response.redirect_url = f.string("redirectURL");
    response.headers_size = f.integer("headersSize");
    response.body_size = f.integer("bodySize");
    response.comment = f.string("comment");
    response.additional = f.finish();
    Ok(response)
}

fn read_cookie(mut f: Fields) -> Result<Cookie> {
    Ok(Cookie {
        name: f.string("name"),
        value: f.string("value"),
        path: f.string("path"),
        domain: f.string("domain"),
        expires: f.string("expires"),
        http_only: f.boolean("httpOnly"),
        secure: f.boolean("secure"),
        same_site: f.string("sameSite"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_header(mut f: Fields) -> Result<Header> {
    Ok(Header {
        name: f.string("name"),
        value: f.string("value"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_query_param(mut f: Fields) -> Result<QueryParam> {
    Ok(QueryParam {
        name: f.string("name"),
        value: f.string("value"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_post_data(mut f: Fields) -> Result<PostData> {
    Ok(PostData {
        mime_type: f.string("mimeType"),
        params: f.list("params", read_param)?,
        text: f.string("text"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_param(mut f: Fields) -> Result<Param> {
    Ok(Param {
        name: f.string("name"),
        value: f.string("value"),
        file_name: f.string("fileName"),
        content_type: f.string("contentType"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_content(mut f: Fields) -> Result<Content> {
    Ok(Content {
        size: f.integer("size"),
        compression: f.integer("compression"),
        mime_type: f.string("mimeType"),
        text: f.string("text"),
        encoding: f.string("encoding"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_cache(mut f: Fields) -> Result<Cache> {
    Ok(Cache {
        before_request: f.object("beforeRequest", read_cache_state)?,
        after_request: f.object("afterRequest", read_cache_state)?,
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_cache_state(mut f: Fields) -> Result<CacheState> {
    Ok(CacheState {
        expires: f.string("expires"),
        last_access: f.string("lastAccess"),
        e_tag: f.string("eTag"),
        hit_count: f.integer("hitCount"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}

fn read_timings(mut f: Fields) -> Result<Timings> {
    Ok(Timings {
        blocked: f.number("blocked"),
        dns: f.number("dns"),
        connect: f.number("connect"),
        send: f.number("send"),
        wait: f.number("wait"),
        receive: f.number("receive"),
        ssl: f.number("ssl"),
        comment: f.string("comment"),
        additional: f.finish(),
    })
}
