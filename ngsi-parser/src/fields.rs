//! Field accessors over decoded JSON objects.

use crate::error::{ParseResult, missing};
use ngsi_types::stringify;
use serde_json::{Map, Value};

/// Reads a field that must be present and a string.
pub(crate) fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    context: impl FnOnce() -> String,
) -> ParseResult<&'a str> {
    obj.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(field, context()))
}

/// Reads an optional field as text. Absent and `null` read as empty;
/// non-string values read as their JSON text.
pub(crate) fn optional_text(obj: &Map<String, Value>, field: &str) -> String {
    match obj.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(value) => stringify(value),
    }
}
