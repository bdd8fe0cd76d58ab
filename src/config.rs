//! Export configuration
//!
//! One immutable value describing where output goes, which fields and
//! formats to write, and per-format encoder settings. Loadable from YAML:
//!
//! ```yaml
//! output_dir: dist
//! fields: [name, cca2, capital]
//! formats: [json, csv]
//! csv:
//!   glue: '";"'
//! xml:
//!   format_output: true
//! yaml:
//!   inline: 2
//! ```

use crate::encode::{
    CsvEncoder, CsvEncoderConfig, JsonEncoder, JsonEncoderConfig, RecordEncoder, XmlEncoder,
    XmlEncoderConfig, YamlEncoder, YamlEncoderConfig,
};
use crate::error::{Error, Result, ResultExt};
use crate::output::default_output_dir;
use crate::record::FieldSpec;
use crate::types::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Export Config
// ============================================================================

/// Complete export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory output files are written to
    pub output_dir: PathBuf,

    /// Fields every record is projected to
    pub fields: FieldSpec,

    /// Formats to write, in order
    pub formats: Vec<OutputFormat>,

    /// JSON settings (both variants)
    pub json: JsonEncoderConfig,

    /// CSV settings
    pub csv: CsvEncoderConfig,

    /// XML settings
    pub xml: XmlEncoderConfig,

    /// YAML settings
    pub yaml: YamlEncoderConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            fields: FieldSpec::all(),
            formats: OutputFormat::ALL.to_vec(),
            json: JsonEncoderConfig::default(),
            csv: CsvEncoderConfig::default(),
            xml: XmlEncoderConfig::default(),
            yaml: YamlEncoderConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "config file '{}' does not exist",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse a config from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ExportConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(Error::invalid_value("formats", "at least one format is required"));
        }
        if self.csv.glue.is_empty() {
            return Err(Error::invalid_value("csv.glue", "glue cannot be empty"));
        }
        if self.xml.root_element.is_empty() || self.xml.record_element.is_empty() {
            return Err(Error::invalid_value("xml", "element names cannot be empty"));
        }
        if self.yaml.indent < 2 {
            return Err(Error::invalid_value("yaml.indent", "must be at least 2"));
        }
        Ok(())
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the field projection
    #[must_use]
    pub fn with_fields(mut self, fields: FieldSpec) -> Self {
        self.fields = fields;
        self
    }

    /// Set the formats to write
    #[must_use]
    pub fn with_formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Build the encoder for one format from these settings
    pub fn encoder(&self, format: OutputFormat) -> Box<dyn RecordEncoder> {
        let fields = self.fields.clone();
        match format {
            OutputFormat::Json => Box::new(
                JsonEncoder::new()
                    .with_config(self.json.clone())
                    .with_fields(fields),
            ),
            OutputFormat::JsonUnescaped => Box::new(
                JsonEncoder::unescaped()
                    .with_config(self.json.clone())
                    .with_fields(fields),
            ),
            OutputFormat::Csv => {
                Box::new(CsvEncoder::with_config(self.csv.clone()).with_fields(fields))
            }
            OutputFormat::Xml => {
                Box::new(XmlEncoder::with_config(self.xml.clone()).with_fields(fields))
            }
            OutputFormat::Yaml => {
                Box::new(YamlEncoder::with_config(self.yaml.clone()).with_fields(fields))
            }
        }
    }

    /// Encoders for every configured format, in order
    pub fn encoders(&self) -> Vec<Box<dyn RecordEncoder>> {
        self.formats.iter().map(|f| self.encoder(*f)).collect()
    }
}
