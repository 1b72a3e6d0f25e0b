//! Configuration for HAR reading, validation and writing

use anyhow::Context;
use har_validator::{ValidationMode, ValidatorConfig};
use serde::{Deserialize, Serialize};

use crate::error::{HarError, Result};

/// Configuration for HAR readers and writers
///
/// This struct holds the input size limit, the validation policy applied
/// to parsed documents, and output formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarConfig {
    /// Largest accepted input in bytes
    max_document_size: usize,

    /// Mode used by `HarReader::validate` and validate-on-read
    validation_mode: ValidationMode,

    /// Whether every read document is validated before it is returned
    validate_on_read: bool,

    /// Accepted values of `log.version`
    supported_versions: Vec<String>,

    /// Allowed difference between entry time and the sum of its timings
    timings_tolerance_ms: f64,

    /// Whether output is indented
    pretty_output: bool,
}

impl HarConfig {
    /// Create a new builder for HarConfig
    ///
    /// # Example
    ///
    /// ```
    /// use har_api::{HarConfig, ValidationMode};
    ///
    /// let config = HarConfig::builder()
    ///     .validation_mode(ValidationMode::Strict)
    ///     .validate_on_read(true)
    ///     .build();
    /// assert!(config.validate_on_read());
    /// ```
    pub fn builder() -> HarConfigBuilder {
        HarConfigBuilder::default()
    }

    /// Load a configuration from JSON; absent keys take their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        let config: HarConfig =
            serde_json::from_str(text).context("Failed to parse HAR configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Get the maximum document size
    pub fn max_document_size(&self) -> usize {
        self.max_document_size
    }

    /// Get the validation mode
    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode
    }

    /// Get whether documents are validated on read
    pub fn validate_on_read(&self) -> bool {
        self.validate_on_read
    }

    /// Get the supported HAR versions
    pub fn supported_versions(&self) -> &[String] {
        &self.supported_versions
    }

    /// Get the timings tolerance in milliseconds
    pub fn timings_tolerance_ms(&self) -> f64 {
        self.timings_tolerance_ms
    }

    /// Get whether output is indented
    pub fn pretty_output(&self) -> bool {
        self.pretty_output
    }

    /// Check that the values can be used
    pub fn validate(&self) -> Result<()> {
        if self.max_document_size == 0 {
            return Err(HarError::InvalidConfiguration(
                "max_document_size must be greater than zero".to_string(),
            ));
        }
        if !self.timings_tolerance_ms.is_finite() || self.timings_tolerance_ms < 0.0 {
            return Err(HarError::InvalidConfiguration(format!(
                "timings_tolerance_ms must be a non-negative number, got {}",
                self.timings_tolerance_ms
            )));
        }
        if self.supported_versions.is_empty() {
            return Err(HarError::InvalidConfiguration(
                "at least one supported HAR version is required".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            supported_versions: self.supported_versions.clone(),
            timings_tolerance_ms: self.timings_tolerance_ms,
            ..Default::default()
        }
    }
}

impl Default for HarConfig {
    /// Create a default configuration
    ///
    /// Default values:
    /// - max_document_size: 512 MB
    /// - validation_mode: lenient
    /// - validate_on_read: false
    /// - supported_versions: ["1.1", "1.2"]
    /// - timings_tolerance_ms: 1.0
    /// - pretty_output: false
    fn default() -> Self {
        Self {
            max_document_size: 512 * 1024 * 1024, // 512 MB
            validation_mode: ValidationMode::Lenient,
            validate_on_read: false,
            supported_versions: vec!["1.1".to_string(), "1.2".to_string()],
            timings_tolerance_ms: 1.0,
            pretty_output: false,
        }
    }
}

/// Builder for HarConfig
#[derive(Debug, Clone, Default)]
pub struct HarConfigBuilder {
    max_document_size: Option<usize>,
    validation_mode: Option<ValidationMode>,
    validate_on_read: Option<bool>,
    supported_versions: Vec<String>,
    timings_tolerance_ms: Option<f64>,
    pretty_output: Option<bool>,
}

impl HarConfigBuilder {
    /// Set the maximum document size in bytes
    pub fn max_document_size(mut self, size: usize) -> Self {
        self.max_document_size = Some(size);
        self
    }

    /// Set the validation mode
    pub fn validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = Some(mode);
        self
    }

    /// Validate every document as it is read
    pub fn validate_on_read(mut self, enabled: bool) -> Self {
        self.validate_on_read = Some(enabled);
        self
    }

    /// Add a supported HAR version
    ///
    /// Once any version is added, the defaults no longer apply.
    pub fn supported_version(mut self, version: impl Into<String>) -> Self {
        self.supported_versions.push(version.into());
        self
    }

    /// Set the timings tolerance in milliseconds
    pub fn timings_tolerance_ms(mut self, tolerance: f64) -> Self {
        self.timings_tolerance_ms = Some(tolerance);
        self
    }

    /// Indent written documents
    pub fn pretty_output(mut self, enabled: bool) -> Self {
        self.pretty_output = Some(enabled);
        self
    }

    /// Build the HarConfig
    ///
    /// Uses default values for any options not explicitly set.
    pub fn build(self) -> HarConfig {
        let default = HarConfig::default();

        let mut supported_versions = default.supported_versions;
        if !self.supported_versions.is_empty() {
            supported_versions = self.supported_versions;
        }

        HarConfig {
            max_document_size: self.max_document_size.unwrap_or(default.max_document_size),
            validation_mode: self.validation_mode.unwrap_or(default.validation_mode),
            validate_on_read: self.validate_on_read.unwrap_or(default.validate_on_read),
            supported_versions,
            timings_tolerance_ms: self
                .timings_tolerance_ms
                .unwrap_or(default.timings_tolerance_ms),
            pretty_output: self.pretty_output.unwrap_or(default.pretty_output),
        }
    }
}
