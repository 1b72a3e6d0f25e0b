//! HAR document validation
//!
//! The validator walks a parsed document in a fixed order (log, then pages,
//! then entries and their nested objects) and checks it against the HAR
//! format. In strict mode the first error-severity finding stops the walk;
//! in lenient mode every finding is collected.

use std::collections::HashSet;
use std::fmt;

use chrono::DateTime;
use har_types::{
    Cache, Content, Creator, Document, Entry, HarEntity, Log, Page, PageTimings, PostData,
    Request, Response, Timings, NOT_APPLICABLE, NOT_AVAILABLE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, ValidationError};
use crate::violation::{RuleId, Violation};

/// Conventional range of HTTP status codes
const STATUS_RANGE: std::ops::RangeInclusive<i64> = 100..=599;

/// How findings are acted on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Stop at the first error-severity finding
    Strict,
    /// Collect every finding
    #[default]
    Lenient,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => f.write_str("strict"),
            ValidationMode::Lenient => f.write_str("lenient"),
        }
    }
}

/// HAR validation configuration
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Accepted values of `log.version`
    pub supported_versions: Vec<String>,
    /// Allowed difference between entry `time` and the sum of its timings
    pub timings_tolerance_ms: f64,
    /// Whether to compare entry `time` with its timings
    pub check_timings_sum: bool,
    /// Whether to check `startedDateTime` values
    pub check_datetimes: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            supported_versions: vec!["1.1".to_string(), "1.2".to_string()],
            timings_tolerance_ms: 1.0,
            check_timings_sum: true,
            check_datetimes: true,
        }
    }
}

/// HAR document validator
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    supported_versions: HashSet<String>,
}

impl Validator {
    /// Create a new validator with the given configuration
    pub fn new(config: ValidatorConfig) -> Self {
        let supported_versions = config.supported_versions.iter().cloned().collect();
        Self {
            config,
            supported_versions,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a document.
    ///
    /// Strict mode returns `Err` with the first error-severity finding and
    /// otherwise the warnings found. Lenient mode always returns every
    /// finding, in document order.
    pub fn validate(&self, document: &Document, mode: ValidationMode) -> Result<Vec<Violation>> {
        debug!(
            "Validating HAR document with {} entries in {} mode",
            document.log.entries.len(),
            mode
        );

        let mut walk = Walk {
            validator: self,
            mode,
            found: Vec::new(),
        };
        match walk.log(&document.log) {
            Ok(()) => {
                debug!("Validation finished with {} finding(s)", walk.found.len());
                Ok(walk.found)
            }
            Err(violation) => {
                warn!("Strict validation stopped: {}", violation);
                Err(ValidationError::Failed(violation))
            }
        }
    }

    /// Every finding, split by severity
    pub fn report(&self, document: &Document) -> ValidationReport {
        let found = match self.validate(document, ValidationMode::Lenient) {
            Ok(found) => found,
            Err(ValidationError::Failed(violation)) => vec![violation],
        };
        let (errors, warnings): (Vec<_>, Vec<_>) = found.into_iter().partition(Violation::is_error);

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn is_supported_version(&self, version: &str) -> bool {
        self.supported_versions.contains(version)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

/// Validate a document with the default configuration
pub fn validate_document(document: &Document, mode: ValidationMode) -> Result<Vec<Violation>> {
    Validator::default().validate(document, mode)
}

/// Detailed validation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

/// Validate a document with the default configuration and collect a report
pub fn validate_detailed(document: &Document) -> ValidationReport {
    Validator::default().report(document)
}

/// `Err` carries the finding that ends a strict walk
type Step = std::result::Result<(), Violation>;

struct Walk<'a> {
    validator: &'a Validator,
    mode: ValidationMode,
    found: Vec<Violation>,
}

impl Walk<'_> {
    fn report(&mut self, violation: Violation) -> Step {
        if self.mode == ValidationMode::Strict && violation.is_error() {
            return Err(violation);
        }
        self.found.push(violation);
        Ok(())
    }

    fn warning(&mut self, path: String, rule: RuleId, message: String) -> Step {
        self.report(Violation::warning(path, rule, message))
    }

    fn error(&mut self, path: String, rule: RuleId, message: String) -> Step {
        self.report(Violation::error(path, rule, message))
    }

    fn require<T>(&mut self, value: &Option<T>, path: &str, field: &str) -> Step {
        if value.is_some() {
            return Ok(());
        }
        self.warning(
            format!("{}.{}", path, field),
            RuleId::MissingField,
            format!("required field '{}' is missing", field),
        )
    }

    fn shadowed<E: HarEntity>(&mut self, entity: &E, path: &str) -> Step {
        for key in entity.shadowed_fields() {
            self.warning(
                format!("{}.{}", path, key),
                RuleId::ShadowedField,
                format!(
                    "value of {} field '{}' could not be read and was kept as-is",
                    E::NAME,
                    key
                ),
            )?;
        }
        Ok(())
    }

    fn size(&mut self, value: Option<i64>, path: &str, field: &str) -> Step {
        match value {
            Some(size) if size < 0 && size != NOT_AVAILABLE => self.error(
                format!("{}.{}", path, field),
                RuleId::NegativeSize,
                format!("{} is {}; only -1 may be negative", field, size),
            ),
            _ => Ok(()),
        }
    }

    fn duration(&mut self, value: Option<f64>, path: &str, field: &str) -> Step {
        match value {
            Some(ms) if ms < 0.0 && ms != NOT_APPLICABLE => self.error(
                format!("{}.{}", path, field),
                RuleId::NegativeTiming,
                format!("{} is {} ms; only -1 may be negative", field, ms),
            ),
            _ => Ok(()),
        }
    }

    fn datetime(&mut self, value: Option<&str>, path: &str, field: &str) -> Step {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.validator.config.check_datetimes || is_iso8601(value) {
            return Ok(());
        }
        self.warning(
            format!("{}.{}", path, field),
            RuleId::InvalidDatetime,
            format!("'{}' is not an ISO 8601 date-time", value),
        )
    }

    fn log(&mut self, log: &Log) -> Step {
        let path = "log";
        self.shadowed(log, path)?;

        match log.version.as_deref() {
            Some(version) if self.validator.is_supported_version(version) => {}
            Some(version) => self.warning(
                "log.version".to_string(),
                RuleId::UnsupportedVersion,
                format!("HAR version '{}' is not supported", version),
            )?,
            None => self.warning(
                "log.version".to_string(),
                RuleId::UnsupportedVersion,
                "HAR version is missing".to_string(),
            )?,
        }

        self.require(&log.creator, path, "creator")?;
        if let Some(creator) = &log.creator {
            self.creator(creator, "log.creator")?;
        }
        if let Some(browser) = &log.browser {
            self.creator(browser, "log.browser")?;
        }

        if log.entries.is_empty() {
            self.warning(
                "log.entries".to_string(),
                RuleId::EmptyEntries,
                "log contains no entries".to_string(),
            )?;
        }

        let mut page_ids = HashSet::new();
        for (index, page) in log.pages.iter().enumerate() {
            let page_path = format!("log.pages[{}]", index);
            self.page(page, &page_path)?;

            if let Some(id) = page.id.as_deref() {
                if !page_ids.insert(id) {
                    self.warning(
                        format!("{}.id", page_path),
                        RuleId::DuplicatePageId,
                        format!("page id '{}' is used by more than one page", id),
                    )?;
                }
            }
        }

        for (index, entry) in log.entries.iter().enumerate() {
            self.entry(entry, &format!("log.entries[{}]", index), &page_ids)?;
        }
        Ok(())
    }

    fn creator(&mut self, creator: &Creator, path: &str) -> Step {
        self.shadowed(creator, path)?;
        self.require(&creator.name, path, "name")?;
        self.require(&creator.version, path, "version")
    }

    fn page(&mut self, page: &Page, path: &str) -> Step {
        self.shadowed(page, path)?;
        self.require(&page.started_date_time, path, "startedDateTime")?;
        self.datetime(page.started_date_time.as_deref(), path, "startedDateTime")?;
        self.require(&page.id, path, "id")?;
        self.require(&page.title, path, "title")?;
        if let Some(timings) = &page.page_timings {
            self.page_timings(timings, &format!("{}.pageTimings", path))?;
        }
        Ok(())
    }

    fn page_timings(&mut self, timings: &PageTimings, path: &str) -> Step {
        self.shadowed(timings, path)?;
        self.duration(timings.on_content_load, path, "onContentLoad")?;
        self.duration(timings.on_load, path, "onLoad")
    }

    fn entry(&mut self, entry: &Entry, path: &str, page_ids: &HashSet<&str>) -> Step {
        self.shadowed(entry, path)?;
        self.require(&entry.started_date_time, path, "startedDateTime")?;
        self.datetime(entry.started_date_time.as_deref(), path, "startedDateTime")?;
        self.require(&entry.time, path, "time")?;
        if let Some(time) = entry.time {
            if time < 0.0 {
                self.error(
                    format!("{}.time", path),
                    RuleId::NegativeTime,
                    format!("entry time is {} ms", time),
                )?;
            }
        }

        if let Some(page_ref) = entry.page_ref.as_deref() {
            if !page_ids.contains(page_ref) {
                self.error(
                    format!("{}.pageref", path),
                    RuleId::DanglingPageRef,
                    format!("pageref '{}' does not match any page", page_ref),
                )?;
            }
        }

        self.request(&entry.request, &format!("{}.request", path))?;
        self.response(&entry.response, &format!("{}.response", path))?;
        if let Some(cache) = &entry.cache {
            self.cache(cache, &format!("{}.cache", path))?;
        }
        self.timings(&entry.timings, &format!("{}.timings", path))?;
        self.timings_sum(entry, path)
    }

    fn request(&mut self, request: &Request, path: &str) -> Step {
        self.shadowed(request, path)?;
        self.require(&request.method, path, "method")?;
        self.require(&request.url, path, "url")?;
        self.require(&request.http_version, path, "httpVersion")?;

        for (index, cookie) in request.cookies.iter().enumerate() {
            self.shadowed(cookie, &format!("{}.cookies[{}]", path, index))?;
        }
        for (index, header) in request.headers.iter().enumerate() {
            self.shadowed(header, &format!("{}.headers[{}]", path, index))?;
        }
        for (index, param) in request.query_string.iter().enumerate() {
            self.shadowed(param, &format!("{}.queryString[{}]", path, index))?;
        }
        if let Some(post_data) = &request.post_data {
            self.post_data(post_data, &format!("{}.postData", path))?;
        }

        self.size(request.headers_size, path, "headersSize")?;
        self.size(request.body_size, path, "bodySize")
    }

    fn post_data(&mut self, post_data: &PostData, path: &str) -> Step {
        self.shadowed(post_data, path)?;
        for (index, param) in post_data.params.iter().enumerate() {
            self.shadowed(param, &format!("{}.params[{}]", path, index))?;
        }
        Ok(())
    }

    fn response(&mut self, response: &Response, path: &str) -> Step {
        self.shadowed(response, path)?;

        let status = response.raw_status();
        if !STATUS_RANGE.contains(&status) {
            let message = format!("status {} is outside 100-599", status);
            let status_path = format!("{}.status", path);
            match self.mode {
                ValidationMode::Strict => {
                    self.error(status_path, RuleId::StatusOutOfRange, message)?
                }
                ValidationMode::Lenient => {
                    self.warning(status_path, RuleId::StatusOutOfRange, message)?
                }
            }
        }

        self.require(&response.http_version, path, "httpVersion")?;
        for (index, cookie) in response.cookies.iter().enumerate() {
            self.shadowed(cookie, &format!("{}.cookies[{}]", path, index))?;
        }
        for (index, header) in response.headers.iter().enumerate() {
            self.shadowed(header, &format!("{}.headers[{}]", path, index))?;
        }
        self.content(&response.content, &format!("{}.content", path))?;

        self.size(response.headers_size, path, "headersSize")?;
        self.size(response.body_size, path, "bodySize")
    }

    fn content(&mut self, content: &Content, path: &str) -> Step {
        self.shadowed(content, path)?;
        self.require(&content.mime_type, path, "mimeType")?;
        self.size(content.size, path, "size")
    }

    fn cache(&mut self, cache: &Cache, path: &str) -> Step {
        self.shadowed(cache, path)?;
        if let Some(state) = &cache.before_request {
            self.shadowed(state, &format!("{}.beforeRequest", path))?;
        }
        if let Some(state) = &cache.after_request {
            self.shadowed(state, &format!("{}.afterRequest", path))?;
        }
        Ok(())
    }

    fn timings(&mut self, timings: &Timings, path: &str) -> Step {
        self.shadowed(timings, path)?;
        self.require(&timings.send, path, "send")?;
        self.require(&timings.wait, path, "wait")?;
        self.require(&timings.receive, path, "receive")?;
        for (name, value) in timings.phases() {
            self.duration(value, path, name)?;
        }
        Ok(())
    }

    fn timings_sum(&mut self, entry: &Entry, path: &str) -> Step {
        if !self.validator.config.check_timings_sum {
            return Ok(());
        }
        let Some(time) = entry.time.filter(|time| *time >= 0.0) else {
            return Ok(());
        };
        let measured = entry
            .timings
            .phases()
            .iter()
            .any(|(name, value)| *name != "ssl" && value.is_some_and(|ms| ms >= 0.0));
        if !measured {
            return Ok(());
        }

        let total = entry.timings.total();
        if (time - total).abs() > self.validator.config.timings_tolerance_ms {
            self.warning(
                format!("{}.time", path),
                RuleId::TimingsMismatch,
                format!(
                    "entry time {} ms differs from the sum of its timings ({} ms)",
                    time, total
                ),
            )?;
        }
        Ok(())
    }
}

/// RFC 3339, or ISO 8601 with an offset written without a colon
fn is_iso8601(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z").is_ok()
}
