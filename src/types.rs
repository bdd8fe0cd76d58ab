//! Common types used throughout country-export
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, keys kept in insertion order
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single record: field name to value, in field order
pub type Record = JsonObject;

// ============================================================================
// Output Format
// ============================================================================

/// Output format produced by an encoder
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Compact JSON, non-ASCII escaped as `\uXXXX`
    Json,
    /// Compact JSON with UTF-8 emitted literally
    JsonUnescaped,
    /// Quoted, glue-separated CSV
    Csv,
    /// XML with one element per record
    Xml,
    /// YAML with inline collections past a depth threshold
    Yaml,
}

impl OutputFormat {
    /// Every supported format, in the order the driver writes them
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Json,
        OutputFormat::JsonUnescaped,
        OutputFormat::Csv,
        OutputFormat::Xml,
        OutputFormat::Yaml,
    ];

    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::JsonUnescaped => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
            OutputFormat::Yaml => "yml",
        }
    }

    /// File name the driver writes this format to
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Json => "countries.json",
            OutputFormat::JsonUnescaped => "countries-unescaped.json",
            OutputFormat::Csv => "countries.csv",
            OutputFormat::Xml => "countries.xml",
            OutputFormat::Yaml => "countries.yml",
        }
    }

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::JsonUnescaped => "json-unescaped",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_file_names() {
        let names: Vec<_> = OutputFormat::ALL
            .iter()
            .map(|f| f.default_file_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "countries.json",
                "countries-unescaped.json",
                "countries.csv",
                "countries.xml",
                "countries.yml",
            ]
        );
    }

    #[test]
    fn test_output_format_serde_names() {
        let format: OutputFormat = serde_yaml::from_str("json-unescaped").unwrap();
        assert_eq!(format, OutputFormat::JsonUnescaped);
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
        assert_eq!(OutputFormat::Yaml.extension(), "yml");
    }
}
