//! JSON parser for record sets
//!
//! The input document must be an array of objects that all share the same
//! fields in the same order.

use crate::error::{Error, Result, ResultExt};
use crate::record::RecordSet;
use crate::types::JsonValue;
use std::fs;
use std::path::Path;

/// Load a record set from a JSON file
///
/// # Examples
///
/// ```ignore
/// let records = load_records("data/countries.json")?;
/// ```
pub fn load_records(path: impl AsRef<Path>) -> Result<RecordSet> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        read => {
            read.with_context(|| format!("Failed to read input file '{}'", path.display()))?
        }
    };

    let records = load_records_from_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "loaded records"
    );
    Ok(records)
}

/// Load a record set from JSON text
pub fn load_records_from_str(json: &str) -> Result<RecordSet> {
    let value: JsonValue = serde_json::from_str(json)?;

    match value {
        JsonValue::Array(items) => RecordSet::from_values(items),
        JsonValue::Object(_) => Err(Error::malformed(
            "expected a JSON array of records, found a single object",
        )),
        other => Err(Error::malformed(format!(
            "expected a JSON array of records, found {other}"
        ))),
    }
}
