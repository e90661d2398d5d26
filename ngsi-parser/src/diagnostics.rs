//! Non-fatal findings recorded while parsing.
//!
//! A diagnostic means one attribute or sub-attribute was skipped. The rest
//! of the entity is still parsed. Every diagnostic is logged at warn level
//! when recorded and handed back to the caller in a [`ParseOutcome`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// The shape of a JSON value, for error and diagnostic messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonShape {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonShape {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        };
        f.write_str(name)
    }
}

/// Why an attribute was skipped.
///
/// `attribute` is the source key; for sub-attributes it is
/// `parent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The `type` was neither Property, Relationship nor GeoProperty.
    UnrecognizedAttributeType {
        entity_id: String,
        attribute: String,
        attr_type: String,
    },

    /// The value was neither an object nor an array of objects.
    UnexpectedValueShape {
        entity_id: String,
        attribute: String,
        shape: JsonShape,
    },
}

impl Diagnostic {
    #[must_use]
    pub fn entity_id(&self) -> &str {
        match self {
            Self::UnrecognizedAttributeType { entity_id, .. }
            | Self::UnexpectedValueShape { entity_id, .. } => entity_id,
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        match self {
            Self::UnrecognizedAttributeType { attribute, .. }
            | Self::UnexpectedValueShape { attribute, .. } => attribute,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedAttributeType {
                entity_id,
                attribute,
                attr_type,
            } => write!(
                f,
                "entity {entity_id}: attribute {attribute} has unrecognized type {attr_type:?}"
            ),
            Self::UnexpectedValueShape {
                entity_id,
                attribute,
                shape,
            } => write!(
                f,
                "entity {entity_id}: attribute {attribute} has unexpected value type: {shape}"
            ),
        }
    }
}

/// A parse result together with the diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> ParseOutcome<T> {
    #[must_use]
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// An outcome with nothing to report.
    #[must_use]
    pub fn clean(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        ParseOutcome {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }
}

/// Collects diagnostics for a single parse call, logging each one.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub(crate) fn unrecognized_type(&mut self, entity_id: &str, attribute: String, attr_type: String) {
        warn!(
            entity_id = %entity_id,
            attribute = %attribute,
            attr_type = %attr_type,
            "Unrecognized attribute type"
        );
        self.0.push(Diagnostic::UnrecognizedAttributeType {
            entity_id: entity_id.to_string(),
            attribute,
            attr_type,
        });
    }

    pub(crate) fn unexpected_shape(&mut self, entity_id: &str, attribute: String, value: &Value) {
        let shape = JsonShape::of(value);
        warn!(
            entity_id = %entity_id,
            attribute = %attribute,
            "Attribute has unexpected value type: {}",
            shape
        );
        self.0.push(Diagnostic::UnexpectedValueShape {
            entity_id: entity_id.to_string(),
            attribute,
            shape,
        });
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}
