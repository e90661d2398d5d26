//! NGSI v2 attribute model.

use serde::{Deserialize, Serialize};

/// A single v2 metadata entry attached to an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(rename = "type")]
    pub metadata_type: String,
    /// Stringified value, see [`crate::stringify`].
    pub value: String,
}

impl Metadata {
    pub fn new(name: impl Into<String>, metadata_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata_type: metadata_type.into(),
            value: value.into(),
        }
    }
}

/// A v2 attribute: a named, typed, stringified value with optional metadata.
///
/// Names keep their source casing. `metadata` is empty exactly when the
/// notification carried no metadata keys for this attribute, in which case
/// `raw_metadata_json` is the empty string as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: String,
    pub value: String,
    #[serde(default)]
    pub metadata: Vec<Metadata>,
    /// The `metadata` object exactly as it appeared on the wire.
    #[serde(default)]
    pub raw_metadata_json: String,
}

impl Attribute {
    /// Creates an attribute without metadata.
    pub fn new(name: impl Into<String>, attr_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attr_type: attr_type.into(),
            value: value.into(),
            metadata: Vec::new(),
            raw_metadata_json: String::new(),
        }
    }

    /// Attaches metadata along with its raw JSON text.
    ///
    /// An empty list clears the raw text too, keeping the two in step.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Vec<Metadata>, raw_metadata_json: impl Into<String>) -> Self {
        if metadata.is_empty() {
            self.raw_metadata_json = String::new();
        } else {
            self.raw_metadata_json = raw_metadata_json.into();
        }
        self.metadata = metadata;
        self
    }

    /// Returns true if any metadata is attached.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Looks up a metadata entry by name.
    #[must_use]
    pub fn metadata(&self, name: &str) -> Option<&Metadata> {
        self.metadata.iter().find(|m| m.name == name)
    }
}
