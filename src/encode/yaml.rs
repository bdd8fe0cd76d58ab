//! YAML encoder
//!
//! Collections shallower than the inline threshold are written in block
//! style; deeper ones, and every empty collection, in flow style. Scalars go
//! through `serde_yaml` so quoting matches the standard serializer.

use super::types::{RecordEncoder, YamlEncoderConfig};
use crate::error::Result;
use crate::record::{FieldSpec, RecordSet};
use crate::types::{JsonValue, OutputFormat};

/// Characters that end a plain scalar inside `[...]` or `{...}`
const FLOW_INDICATORS: [char; 5] = [',', '[', ']', '{', '}'];

/// YAML encoder with a configurable inline depth
#[derive(Debug, Clone, Default)]
pub struct YamlEncoder {
    config: YamlEncoderConfig,
    fields: FieldSpec,
}

impl YamlEncoder {
    /// Create a YAML encoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a YAML encoder with custom settings
    pub fn with_config(config: YamlEncoderConfig) -> Self {
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

    fn step(&self) -> usize {
        self.config.indent.max(2)
    }

    fn renders_inline(&self, value: &JsonValue, level: usize) -> bool {
        match value {
            JsonValue::Array(items) => items.is_empty() || level >= self.config.inline,
            JsonValue::Object(map) => map.is_empty() || level >= self.config.inline,
            _ => true,
        }
    }

    fn write_block(
        &self,
        out: &mut String,
        value: &JsonValue,
        level: usize,
        indent: usize,
    ) -> Result<()> {
        let pad = " ".repeat(indent);
        match value {
            JsonValue::Array(items) => {
                for item in items {
                    out.push_str(&pad);
                    out.push('-');
                    self.write_entry(out, item, level + 1, indent, true)?;
                }
            }
            JsonValue::Object(map) => {
                for (key, item) in map {
                    out.push_str(&pad);
                    out.push_str(&scalar(&JsonValue::String(key.clone()), false)?);
                    out.push(':');
                    self.write_entry(out, item, level + 1, indent, false)?;
                }
            }
            scalar_value => {
                out.push_str(&pad);
                out.push_str(&inline(scalar_value, false)?);
                out.push('\n');
            }
        }
        Ok(())
    }

    /// Write the value after a `-` or `key:` marker
    fn write_entry(
        &self,
        out: &mut String,
        value: &JsonValue,
        level: usize,
        indent: usize,
        in_sequence: bool,
    ) -> Result<()> {
        if self.renders_inline(value, level) {
            out.push(' ');
            out.push_str(&inline(value, false)?);
            out.push('\n');
            return Ok(());
        }

        let child_indent = indent + self.step();
        if in_sequence {
            // First line shares the dash: "- key: value"
            let mut nested = String::new();
            self.write_block(&mut nested, value, level, child_indent)?;
            out.push_str(&" ".repeat(self.step() - 1));
            out.push_str(&nested[child_indent..]);
        } else {
            out.push('\n');
            self.write_block(out, value, level, child_indent)?;
        }
        Ok(())
    }
}

impl RecordEncoder for YamlEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Yaml
    }

    fn fields(&self) -> &FieldSpec {
        &self.fields
    }

    fn encode(&self, records: &RecordSet) -> Result<String> {
        let document = JsonValue::Array(
            records
                .iter()
                .cloned()
                .map(JsonValue::Object)
                .collect(),
        );

        let mut out = String::new();
        if self.renders_inline(&document, 0) {
            out.push_str(&inline(&document, false)?);
            out.push('\n');
        } else {
            self.write_block(&mut out, &document, 0, 0)?;
        }

        tracing::debug!(
            records = records.len(),
            inline = self.config.inline,
            "encoded YAML"
        );
        Ok(out)
    }
}

/// Render a value on one line, collections in flow style
fn inline(value: &JsonValue, in_flow: bool) -> Result<String> {
    match value {
        JsonValue::Array(items) => {
            let parts = items
                .iter()
                .map(|item| inline(item, true))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("[{}]", parts.join(", ")))
        }
        JsonValue::Object(map) if map.is_empty() => Ok("{}".to_string()),
        JsonValue::Object(map) => {
            let parts = map
                .iter()
                .map(|(key, item)| {
                    Ok(format!(
                        "{}: {}",
                        scalar(&JsonValue::String(key.clone()), true)?,
                        inline(item, true)?
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("{{ {} }}", parts.join(", ")))
        }
        _ => scalar(value, in_flow),
    }
}

/// Render a scalar through serde_yaml, falling back to a double-quoted
/// string where the plain or block form would not fit on one line
fn scalar(value: &JsonValue, in_flow: bool) -> Result<String> {
    if let JsonValue::String(s) = value {
        if s.contains('\n') || s.contains('\r') {
            return Ok(serde_json::to_string(s)?);
        }
    }

    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.trim_end_matches('\n');

    let quoted = rendered.starts_with('\'') || rendered.starts_with('"');
    if in_flow && value.is_string() && !quoted && rendered.contains(FLOW_INDICATORS) {
        return Ok(serde_json::to_string(value)?);
    }
    Ok(rendered.to_string())
}
