//! Scalar flattening for formats with flat cells (CSV, XML attributes)

use serde_json::Value;

/// Flatten a value into a single string.
///
/// Scalars render as their plain text (`null` is empty). Sequences and
/// mappings flatten each child first, drop children that came out empty,
/// then join the rest with `glue`.
///
/// ```
/// use country_export::record::flatten;
/// use serde_json::json;
///
/// assert_eq!(flatten(&json!(["a", [], {"x": null}, "b"]), ","), "a,b");
/// ```
pub fn flatten(value: &Value, glue: &str) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => join_non_empty(items.iter(), glue),
        Value::Object(map) => join_non_empty(map.values(), glue),
    }
}

fn join_non_empty<'a>(values: impl Iterator<Item = &'a Value>, glue: &str) -> String {
    values
        .map(|v| flatten(v, glue))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(glue)
}
