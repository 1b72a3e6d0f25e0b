//! Writing HAR documents under a configuration

use std::io::Write;

use har_codec::Writer;
use har_types::Document;
use tracing::debug;

use crate::config::HarConfig;
use crate::error::Result;

/// Configured HAR writer
#[derive(Debug, Clone)]
pub struct HarWriter {
    config: HarConfig,
    writer: Writer,
}

impl HarWriter {
    /// Create a new writer
    pub fn new(config: HarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: HarConfig) -> Self {
        let writer = if config.pretty_output() {
            Writer::pretty()
        } else {
            Writer::new()
        };
        Self { config, writer }
    }

    /// Get the configuration
    pub fn config(&self) -> &HarConfig {
        &self.config
    }

    /// Serialize a document to UTF-8 JSON bytes
    pub fn write_as_bytes(&self, document: &Document) -> Result<Vec<u8>> {
        Ok(self.writer.serialize(document)?)
    }

    /// Serialize a document to JSON text
    pub fn write_as_string(&self, document: &Document) -> Result<String> {
        Ok(self.writer.to_string(document)?)
    }

    /// Serialize a document into a byte sink
    pub fn write_to<W: Write>(&self, document: &Document, writer: W) -> Result<()> {
        debug!(
            "Writing HAR document with {} entries",
            document.log.entries.len()
        );
        self.writer.write_to(document, writer)?;
        Ok(())
    }
}

impl Default for HarWriter {
    fn default() -> Self {
        Self::with_config(HarConfig::default())
    }
}
