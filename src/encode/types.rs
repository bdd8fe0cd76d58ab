//! Encoder types and traits
//!
//! Defines the core encoder abstraction and per-format settings.

use crate::error::Result;
use crate::record::{FieldSpec, RecordSet};
use crate::types::OutputFormat;
use serde::{Deserialize, Serialize};

/// Trait for rendering a record set into one output format
pub trait RecordEncoder: Send + Sync {
    /// Format this encoder produces
    fn format(&self) -> OutputFormat;

    /// Fields records are projected to before encoding
    fn fields(&self) -> &FieldSpec;

    /// Render the records as-is
    fn encode(&self, records: &RecordSet) -> Result<String>;

    /// Project the records to `fields()`, then render them
    fn encode_projected(&self, records: &RecordSet) -> Result<String> {
        if self.fields().is_all() {
            self.encode(records)
        } else {
            self.encode(&records.project(self.fields()))
        }
    }
}

// ============================================================================
// JSON
// ============================================================================

fn default_object_fields() -> Vec<String> {
    vec!["languages".to_string()]
}

/// Settings shared by both JSON encoders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonEncoderConfig {
    /// Fields rendered as `{}` when empty or null, never `[]`
    pub object_fields: Vec<String>,
}

impl Default for JsonEncoderConfig {
    fn default() -> Self {
        Self {
            object_fields: default_object_fields(),
        }
    }
}

impl JsonEncoderConfig {
    /// Replace the fields normalized to an empty object
    #[must_use]
    pub fn with_object_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.object_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

// ============================================================================
// CSV
// ============================================================================

/// Default CSV glue: quote, semicolon, quote
pub const DEFAULT_CSV_GLUE: &str = "\";\"";

/// CSV settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvEncoderConfig {
    /// Joins cells in a row and nested values inside a cell
    pub glue: String,
}

impl Default for CsvEncoderConfig {
    fn default() -> Self {
        Self {
            glue: DEFAULT_CSV_GLUE.to_string(),
        }
    }
}

impl CsvEncoderConfig {
    /// Set the glue
    #[must_use]
    pub fn with_glue(mut self, glue: impl Into<String>) -> Self {
        self.glue = glue.into();
        self
    }
}

// ============================================================================
// XML
// ============================================================================

/// XML settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlEncoderConfig {
    /// Joins nested values inside an attribute
    pub glue: String,
    /// Indent the document
    pub format_output: bool,
    /// Keep whitespace as written; suppresses indentation
    pub preserve_whitespace: bool,
    /// Spaces per indentation level
    pub indent: usize,
    /// Document element name
    pub root_element: String,
    /// Element name for each record
    pub record_element: String,
}

impl Default for XmlEncoderConfig {
    fn default() -> Self {
        Self {
            glue: ",".to_string(),
            format_output: true,
            preserve_whitespace: false,
            indent: 2,
            root_element: "countries".to_string(),
            record_element: "country".to_string(),
        }
    }
}

impl XmlEncoderConfig {
    /// Set the glue
    #[must_use]
    pub fn with_glue(mut self, glue: impl Into<String>) -> Self {
        self.glue = glue.into();
        self
    }

    /// Enable or disable indentation
    #[must_use]
    pub fn with_format_output(mut self, enabled: bool) -> Self {
        self.format_output = enabled;
        self
    }

    /// Enable or disable whitespace preservation
    #[must_use]
    pub fn with_preserve_whitespace(mut self, enabled: bool) -> Self {
        self.preserve_whitespace = enabled;
        self
    }

    /// Set root and record element names
    #[must_use]
    pub fn with_elements(mut self, root: impl Into<String>, record: impl Into<String>) -> Self {
        self.root_element = root.into();
        self.record_element = record.into();
        self
    }

    /// Whether the writer should indent
    pub fn is_indented(&self) -> bool {
        self.format_output && !self.preserve_whitespace
    }
}

// ============================================================================
// YAML
// ============================================================================

/// YAML settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YamlEncoderConfig {
    /// Collections at this depth or deeper render in flow style
    pub inline: usize,
    /// Spaces per block level (minimum 2)
    pub indent: usize,
}

impl Default for YamlEncoderConfig {
    fn default() -> Self {
        Self {
            inline: 2,
            indent: 2,
        }
    }
}

impl YamlEncoderConfig {
    /// Set the inline depth threshold
    #[must_use]
    pub fn with_inline(mut self, inline: usize) -> Self {
        self.inline = inline;
        self
    }

    /// Set the indentation width
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
