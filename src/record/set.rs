//! Record set: ordered records sharing one field layout

use super::projection::{project_record, FieldSpec};
use crate::error::{Error, Result};
use crate::types::{JsonValue, Record};

/// Ordered collection of records with identical keys in identical order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Build a record set, checking every record shares the first one's fields
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if let Some((first, rest)) = records.split_first() {
            for (offset, record) in rest.iter().enumerate() {
                if !record.keys().eq(first.keys()) {
                    return Err(Error::malformed(format!(
                        "record {} has fields [{}], expected [{}]",
                        offset + 1,
                        join_keys(record),
                        join_keys(first)
                    )));
                }
            }
        }
        Ok(Self { records })
    }

    /// Build a record set from JSON values, each of which must be an object
    pub fn from_values(values: Vec<JsonValue>) -> Result<Self> {
        let records = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                JsonValue::Object(record) => Ok(record),
                other => Err(Error::malformed(format!(
                    "record {index} is a {}, expected an object",
                    kind_of(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(records)
    }

    /// Records in order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record, whose keys define the field layout
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Field names in order, taken from the first record
    pub fn field_names(&self) -> Vec<&str> {
        self.first()
            .map(|r| r.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// New record set restricted to `spec`
    pub fn project(&self, spec: &FieldSpec) -> RecordSet {
        if spec.is_all() {
            return self.clone();
        }
        RecordSet {
            records: self
                .records
                .iter()
                .map(|r| project_record(r, spec))
                .collect(),
        }
    }

    /// Consume into the underlying records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn join_keys(record: &Record) -> String {
    record.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
