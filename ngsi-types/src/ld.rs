//! NGSI-LD attribute model.
//!
//! LD attributes are typed as Property, Relationship or GeoProperty and may
//! carry sub-attributes exactly one level deep. Temporal representations
//! also carry `datasetId`, `observedAt`, `createdAt` and `modifiedAt`.

use crate::LdValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The NGSI-LD type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LdAttrType {
    Property,
    Relationship,
    GeoProperty,
    /// The source carried an empty (or no) type. Happens in temporal
    /// exports where an attribute has no history in the requested range.
    #[serde(rename = "")]
    Unset,
}

impl LdAttrType {
    /// Maps a wire type string. Returns `None` for anything unrecognized;
    /// the empty string maps to [`LdAttrType::Unset`].
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "Property" => Some(Self::Property),
            "Relationship" => Some(Self::Relationship),
            "GeoProperty" => Some(Self::GeoProperty),
            "" => Some(Self::Unset),
            _ => None,
        }
    }

    /// The wire spelling; empty for [`LdAttrType::Unset`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Property => "Property",
            Self::Relationship => "Relationship",
            Self::GeoProperty => "GeoProperty",
            Self::Unset => "",
        }
    }
}

impl fmt::Display for LdAttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sub-attribute of an [`AttributeLd`].
///
/// Sub-attributes never carry temporal fields or sub-attributes of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAttributeLd {
    /// Lower-cased source key.
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: LdAttrType,
    pub value: Option<LdValue>,
}

impl SubAttributeLd {
    /// Creates a sub-attribute. The name is lower-cased.
    pub fn new(name: &str, attr_type: LdAttrType, value: Option<LdValue>) -> Self {
        Self {
            name: name.to_lowercase(),
            attr_type,
            value,
        }
    }

    /// Returns true if the value is present and not JSON `null`.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value.as_ref().is_some_and(|v| !v.is_null())
    }
}

/// An NGSI-LD attribute of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeLd {
    /// Lower-cased source key. Several attributes may share a name when the
    /// source used the multi-attribute (array) form.
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: LdAttrType,
    pub dataset_id: String,
    pub observed_at: String,
    pub created_at: String,
    pub modified_at: String,
    pub value: Option<LdValue>,
    #[serde(default)]
    pub sub_attributes: Vec<SubAttributeLd>,
}

impl AttributeLd {
    /// Creates an attribute with empty temporal fields and no sub-attributes.
    /// The name is lower-cased.
    pub fn new(name: &str, attr_type: LdAttrType, value: Option<LdValue>) -> Self {
        Self {
            name: name.to_lowercase(),
            attr_type,
            dataset_id: String::new(),
            observed_at: String::new(),
            created_at: String::new(),
            modified_at: String::new(),
            value,
            sub_attributes: Vec::new(),
        }
    }

    /// Returns true if the value is present and not JSON `null`.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value.as_ref().is_some_and(|v| !v.is_null())
    }

    #[must_use]
    pub fn has_sub_attributes(&self) -> bool {
        !self.sub_attributes.is_empty()
    }

    /// Looks up a sub-attribute by (case-insensitive) name.
    #[must_use]
    pub fn sub_attribute(&self, name: &str) -> Option<&SubAttributeLd> {
        let name = name.to_lowercase();
        self.sub_attributes.iter().find(|s| s.name == name)
    }
}
