//! Attribute values and their textual form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Renders a JSON value as text without losing structure.
///
/// Strings come out verbatim (no surrounding quotes); every other value is
/// its compact JSON text, so `23.5` becomes `"23.5"` and an object becomes
/// `{"a":1}`.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The resolved value of an NGSI-LD attribute or sub-attribute.
///
/// Relationships resolve to the related entity reference as text; Properties
/// keep the native JSON shape of their `value`; a top-level GeoProperty keeps
/// its whole attribute object for downstream geo-decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LdValue {
    Text(String),
    Json(Value),
}

impl LdValue {
    /// Textual form of the value, see [`stringify`].
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Json(v) => stringify(v),
        }
    }

    /// Returns true if this is the JSON `null` literal.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }

    /// Borrows the structured value, if any.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    /// Borrows the text value, if this is a string of either kind.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Json(v) => v.as_str(),
        }
    }
}

impl From<Value> for LdValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<String> for LdValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for LdValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
