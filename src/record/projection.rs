//! Field projection

use crate::types::Record;
use serde::{Deserialize, Serialize};

/// Optional set of field names every record is restricted to
///
/// An unset or empty spec keeps every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSpec {
    fields: Option<Vec<String>>,
}

impl FieldSpec {
    /// Keep every field
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep only the named fields
    pub fn only<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: Some(fields.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse a comma-separated list such as `name,cca2,capital`
    pub fn parse(list: &str) -> Self {
        let fields: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect();
        Self::only(fields)
    }

    /// True when no projection applies
    pub fn is_all(&self) -> bool {
        self.fields.as_ref().map_or(true, Vec::is_empty)
    }

    /// Whether a field survives projection
    pub fn contains(&self, field: &str) -> bool {
        match &self.fields {
            Some(fields) if !fields.is_empty() => fields.iter().any(|f| f == field),
            _ => true,
        }
    }

    /// Configured field names, empty when every field is kept
    pub fn names(&self) -> &[String] {
        self.fields.as_deref().unwrap_or(&[])
    }
}

/// Restrict a record to the fields in `spec`, keeping the record's own order
///
/// Names in `spec` that the record does not carry are ignored.
pub fn project_record(record: &Record, spec: &FieldSpec) -> Record {
    if spec.is_all() {
        return record.clone();
    }
    record
        .iter()
        .filter(|(key, _)| spec.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
