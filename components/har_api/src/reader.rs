//! Reading HAR documents under a configuration

use std::io::Read;

use har_codec::Reader;
use har_types::Document;
use har_validator::{ValidationMode, ValidationReport, Validator, Violation};
use tracing::{debug, info, warn};

use crate::config::HarConfig;
use crate::error::Result;

/// Configured HAR reader
///
/// Parses documents leniently and, when the configuration asks for it,
/// validates each one before handing it back.
#[derive(Debug, Clone)]
pub struct HarReader {
    config: HarConfig,
    reader: Reader,
    validator: Validator,
}

impl HarReader {
    /// Create a new reader
    ///
    /// # Example
    ///
    /// ```
    /// use har_api::{HarConfig, HarReader};
    ///
    /// let reader = HarReader::new(HarConfig::default()).unwrap();
    /// let doc = reader.read_from_str(r#"{"log": {"entries": []}}"#).unwrap();
    /// assert!(doc.log.entries.is_empty());
    /// ```
    pub fn new(config: HarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: HarConfig) -> Self {
        Self {
            reader: Reader::new().with_max_document_size(config.max_document_size()),
            validator: Validator::new(config.validator_config()),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &HarConfig {
        &self.config
    }

    /// Read a document from UTF-8 JSON bytes
    pub fn read_from_slice(&self, bytes: &[u8]) -> Result<Document> {
        let document = self.reader.parse(bytes)?;
        self.finish_read(document)
    }

    /// Read a document from JSON text
    pub fn read_from_str(&self, text: &str) -> Result<Document> {
        let document = self.reader.parse_str(text)?;
        self.finish_read(document)
    }

    /// Read a document from a byte channel
    pub fn read_from_reader<R: Read>(&self, reader: R) -> Result<Document> {
        let document = self.reader.from_reader(reader)?;
        self.finish_read(document)
    }

    /// Read a document from UTF-8 JSON bytes and validate it in the
    /// configured mode, whatever `validate_on_read` says.
    ///
    /// In lenient mode every finding comes back alongside the document; in
    /// strict mode the first error is returned as
    /// [`HarError::Validation`](crate::HarError::Validation) and the
    /// remaining warnings are returned on success.
    ///
    /// # Example
    ///
    /// ```
    /// use har_api::{HarReader, RuleId};
    ///
    /// let reader = HarReader::default();
    /// let (doc, found) = reader
    ///     .read_validated_from_str(r#"{"log": {"version": "1.2", "creator": {"name": "x", "version": "1"}, "entries": []}}"#)
    ///     .unwrap();
    /// assert!(doc.log.entries.is_empty());
    /// assert_eq!(found[0].rule, RuleId::EmptyEntries);
    /// ```
    pub fn read_validated_from_slice(&self, bytes: &[u8]) -> Result<(Document, Vec<Violation>)> {
        let document = self.reader.parse(bytes)?;
        self.finish_validated_read(document)
    }

    /// Read and validate a document from JSON text
    pub fn read_validated_from_str(&self, text: &str) -> Result<(Document, Vec<Violation>)> {
        let document = self.reader.parse_str(text)?;
        self.finish_validated_read(document)
    }

    /// Read and validate a document from a byte channel
    pub fn read_validated_from_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<(Document, Vec<Violation>)> {
        let document = self.reader.from_reader(reader)?;
        self.finish_validated_read(document)
    }

    /// Validate a document in the configured mode
    pub fn validate(&self, document: &Document) -> Result<Vec<Violation>> {
        self.validate_with_mode(document, self.config.validation_mode())
    }

    /// Validate a document in the given mode
    pub fn validate_with_mode(
        &self,
        document: &Document,
        mode: ValidationMode,
    ) -> Result<Vec<Violation>> {
        Ok(self.validator.validate(document, mode)?)
    }

    /// Collect every finding, split by severity
    pub fn validate_report(&self, document: &Document) -> ValidationReport {
        self.validator.report(document)
    }

    fn finish_read(&self, document: Document) -> Result<Document> {
        self.log_read(&document);
        if self.config.validate_on_read() {
            self.checked(&document)?;
        }
        Ok(document)
    }

    fn finish_validated_read(&self, document: Document) -> Result<(Document, Vec<Violation>)> {
        self.log_read(&document);
        let found = self.checked(&document)?;
        Ok((document, found))
    }

    fn log_read(&self, document: &Document) {
        info!(
            "Read HAR document with {} page(s) and {} entries",
            document.log.pages.len(),
            document.log.entries.len()
        );
    }

    fn checked(&self, document: &Document) -> Result<Vec<Violation>> {
        let found = self.validate(document)?;
        debug!(
            "Validation on read ({} mode) found {} issue(s)",
            self.config.validation_mode(),
            found.len()
        );
        for violation in &found {
            warn!("{}", violation);
        }
        Ok(found)
    }
}

impl Default for HarReader {
    fn default() -> Self {
        Self::with_config(HarConfig::default())
    }
}
