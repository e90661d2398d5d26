use crate::{Attribute, AttributeLd};
use serde::{Deserialize, Serialize};

/// The attributes of an entity, in source key order.
///
/// An entity is either wholly v2 or wholly NGSI-LD; the two attribute kinds
/// never mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dialect", content = "items", rename_all = "lowercase")]
pub enum EntityAttributes {
    V2(Vec<Attribute>),
    Ld(Vec<AttributeLd>),
}

/// A context entity carried by a notification.
///
/// Identity is `(id, entity_type)`. Two entities with the same id in one
/// payload stay separate; nothing merges them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub attributes: EntityAttributes,
}

impl Entity {
    /// Creates an NGSI v2 entity.
    pub fn v2(id: impl Into<String>, entity_type: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            attributes: EntityAttributes::V2(attributes),
        }
    }

    /// Creates an NGSI-LD entity.
    pub fn ld(id: impl Into<String>, entity_type: impl Into<String>, attributes: Vec<AttributeLd>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            attributes: EntityAttributes::Ld(attributes),
        }
    }

    #[must_use]
    pub fn is_linked_data(&self) -> bool {
        matches!(self.attributes, EntityAttributes::Ld(_))
    }

    /// Number of attributes, counting each multi-attribute instance.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        match &self.attributes {
            EntityAttributes::V2(attrs) => attrs.len(),
            EntityAttributes::Ld(attrs) => attrs.len(),
        }
    }

    /// The v2 attributes; empty for an LD entity.
    #[must_use]
    pub fn v2_attributes(&self) -> &[Attribute] {
        match &self.attributes {
            EntityAttributes::V2(attrs) => attrs,
            EntityAttributes::Ld(_) => &[],
        }
    }

    /// The LD attributes; empty for a v2 entity.
    #[must_use]
    pub fn ld_attributes(&self) -> &[AttributeLd] {
        match &self.attributes {
            EntityAttributes::Ld(attrs) => attrs,
            EntityAttributes::V2(_) => &[],
        }
    }

    /// Looks up a v2 attribute by its exact (case-sensitive) name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.v2_attributes().iter().find(|a| a.name == name)
    }

    /// All LD attribute instances with the given (case-insensitive) name.
    pub fn ld_attributes_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a AttributeLd> + 'a {
        let name = name.to_lowercase();
        self.ld_attributes().iter().filter(move |a| a.name == name)
    }
}
