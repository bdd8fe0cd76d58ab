//! Encoder implementations
//!
//! Each encoder handles a specific output format.

use super::types::{CsvEncoderConfig, JsonEncoderConfig, RecordEncoder, XmlEncoderConfig};
use crate::error::{Error, Result};
use crate::record::{flatten, FieldSpec, RecordSet};
use crate::types::{JsonObject, JsonValue, OutputFormat, Record};
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::borrow::Cow;
use std::io;

// ============================================================================
// JSON Encoder
// ============================================================================

/// JSON encoder writing one record per line
#[derive(Debug, Clone)]
pub struct JsonEncoder {
    /// Escape non-ASCII as `\uXXXX`
    escape_unicode: bool,
    config: JsonEncoderConfig,
    fields: FieldSpec,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    /// Create the compact encoder (non-ASCII escaped)
    pub fn new() -> Self {
        Self {
            escape_unicode: true,
            config: JsonEncoderConfig::default(),
            fields: FieldSpec::all(),
        }
    }

    /// Create the Unicode-preserving encoder
    pub fn unescaped() -> Self {
        Self {
            escape_unicode: false,
            ..Self::new()
        }
    }

    /// Replace the JSON settings
    #[must_use]
    pub fn with_config(mut self, config: JsonEncoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Project records to `fields` when saving
    #[must_use]
    pub fn with_fields(mut self, fields: FieldSpec) -> Self {
        self.fields = fields;
        self
    }

    fn serialize(&self, records: &[JsonValue]) -> Result<String> {
        if !self.escape_unicode {
            return Ok(serde_json::to_string(records)?);
        }
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
        records.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| Error::encode(OutputFormat::Json.name(), e.to_string()))
    }
}

impl RecordEncoder for JsonEncoder {
    fn format(&self) -> OutputFormat {
        if self.escape_unicode {
            OutputFormat::Json
        } else {
            OutputFormat::JsonUnescaped
        }
    }

    fn fields(&self) -> &FieldSpec {
        &self.fields
    }

    fn encode(&self, records: &RecordSet) -> Result<String> {
        let normalized: Vec<JsonValue> = records
            .iter()
            .map(|r| JsonValue::Object(normalize_empty_objects(r, &self.config.object_fields)))
            .collect();
        let text = self.serialize(&normalized)?;
        tracing::debug!(
            format = %self.format(),
            records = records.len(),
            "encoded JSON"
        );
        Ok(split_records(&text))
    }
}

/// Copy of `record` with empty or null `fields` replaced by `{}`
///
/// Fields the record does not carry stay absent.
pub fn normalize_empty_objects(record: &Record, fields: &[String]) -> Record {
    let mut out = record.clone();
    for field in fields {
        if let Some(value) = out.get_mut(field) {
            let empty = match value {
                JsonValue::Null => true,
                JsonValue::Array(items) => items.is_empty(),
                JsonValue::Object(map) => map.is_empty(),
                _ => false,
            };
            if empty {
                *value = JsonValue::Object(JsonObject::new());
            }
        }
    }
    out
}

/// Put each top-level record of compact JSON text on its own line
fn split_records(text: &str) -> String {
    let mut out = text.replace("},{", "},\n{");
    out.push('\n');
    out
}

/// Compact formatter that escapes every non-ASCII character
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

// ============================================================================
// CSV Encoder
// ============================================================================

/// CSV encoder: quoted cells joined by the configured glue
#[derive(Debug, Clone, Default)]
pub struct CsvEncoder {
    config: CsvEncoderConfig,
    fields: FieldSpec,
}

impl CsvEncoder {
    /// Create a CSV encoder with the default `";"` glue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV encoder with custom settings
    pub fn with_config(config: CsvEncoderConfig) -> Self {
        Self {
            config,
            fields: FieldSpec::all(),
        }
    }

    /// Project records to `fields` when saving
    #[must_use]
    pub fn with_fields(mut self, fields: FieldSpec) -> Self {
        self.fields = fields;
        self
    }

    /// Current glue
    pub fn glue(&self) -> &str {
        &self.config.glue
    }
}

impl RecordEncoder for CsvEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn fields(&self) -> &FieldSpec {
        &self.fields
    }

    fn encode(&self, records: &RecordSet) -> Result<String> {
        let first = records.first().ok_or(Error::EmptyRecordSet)?;
        let glue = self.glue();

        let header = quoted_row(first.keys().cloned(), glue);
        let body = records.iter().fold(header, |mut out, record| {
            let cells = record.values().map(|v| flatten(v, glue));
            out.push_str(&quoted_row(cells, glue));
            out
        });

        tracing::debug!(records = records.len(), "encoded CSV");
        Ok(body)
    }
}

/// `"` + cells joined by glue + `"` + newline
fn quoted_row(cells: impl Iterator<Item = String>, glue: &str) -> String {
    let joined = cells.collect::<Vec<_>>().join(glue);
    format!("\"{joined}\"\n")
}

// ============================================================================
// XML Encoder
// ============================================================================

/// XML encoder: one empty element per record, fields as attributes
#[derive(Debug, Clone, Default)]
pub struct XmlEncoder {
    config: XmlEncoderConfig,
    fields: FieldSpec,
}

impl XmlEncoder {
    /// Create an XML encoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an XML encoder with custom settings
    pub fn with_config(config: XmlEncoderConfig) -> Self {
        Self {
            config,
            fields: FieldSpec::all(),
        }
    }

    /// Project records to `fields` when saving
    #[must_use]
    pub fn with_fields(mut self, fields: FieldSpec) -> Self {
        self.fields = fields;
        self
    }

    /// Current settings
    pub fn config(&self) -> &XmlEncoderConfig {
        &self.config
    }

    fn record_element(&self, record: &Record) -> Result<BytesStart<'static>> {
        let mut element = BytesStart::new(self.config.record_element.clone());
        for (name, value) in record {
            if !is_xml_name(name) {
                return Err(Error::encode(
                    OutputFormat::Xml.name(),
                    format!(
                        "'{name}' is not a valid attribute name \
                         (letters, digits, '_', '-', '.' and ':' only)"
                    ),
                ));
            }
            let text = escape_attribute(&flatten(value, &self.config.glue));
            element.push_attribute(Attribute {
                key: QName(name.as_bytes()),
                value: Cow::Owned(text.into_bytes()),
            });
        }
        Ok(element)
    }
}

impl RecordEncoder for XmlEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Xml
    }

    fn fields(&self) -> &FieldSpec {
        &self.fields
    }

    fn encode(&self, records: &RecordSet) -> Result<String> {
        let root = self.config.root_element.as_str();
        let indented = self.config.is_indented();

        let mut writer = if indented {
            Writer::new_with_indent(Vec::new(), b' ', self.config.indent)
        } else {
            Writer::new(Vec::new())
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        if !indented {
            writer.get_mut().push(b'\n');
        }

        if records.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new(root)))?;
        } else {
            writer.write_event(Event::Start(BytesStart::new(root)))?;
            for record in records {
                writer.write_event(Event::Empty(self.record_element(record)?))?;
            }
            writer.write_event(Event::End(BytesEnd::new(root)))?;
        }

        let mut text = String::from_utf8(writer.into_inner())
            .map_err(|e| Error::encode(OutputFormat::Xml.name(), e.to_string()))?;
        text.push('\n');

        tracing::debug!(records = records.len(), indented, "encoded XML");
        Ok(text)
    }
}

/// Escape an attribute value, keeping line breaks and tabs as character
/// references so parsers do not normalize them to spaces
fn escape_attribute(value: &str) -> String {
    let escaped = escape(value);
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c => out.push(c),
        }
    }
    out
}

/// Check for an XML attribute name.
///
/// Conservative: names must start with a letter or `_` and continue with
/// letters, digits, `_`, `-`, `.` or `:` (so prefixed names like `ns:attr`
/// pass). Other characters the XML grammar allows are rejected.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}
