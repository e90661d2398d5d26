//! NGSI-LD notification parsing.
//!
//! An LD body is an array of entities, either instantaneous or temporal.
//! Every non-reserved entity key is an attribute object, or an array of
//! them (a multi-attribute, one instance per `datasetId`). Attributes can
//! carry sub-attributes one level deep:
//!
//! ```json
//! [{
//!   "id": "urn:ngsi-ld:Vehicle:U1",
//!   "type": "Vehicle",
//!   "speed": {
//!     "type": "Property",
//!     "value": 80,
//!     "unitCode": "KMH",
//!     "observedAt": "2024-03-01T10:00:00Z",
//!     "reliability": { "type": "Property", "value": 0.9 }
//!   },
//!   "isParked": { "type": "Relationship", "object": "urn:ngsi-ld:Lot:1" }
//! }]
//! ```
//!
//! Missing ids, types and sub-attribute types abort the parse. Attributes
//! with an unrecognized type or an unexpected JSON shape are skipped and
//! reported as [`Diagnostic`](crate::Diagnostic)s. Attributes whose value is
//! absent or `null` are dropped silently.

use crate::diagnostics::{Diagnostics, ParseOutcome};
use crate::error::{ParseError, ParseResult, missing};
use crate::fields::{optional_text, required_str};
use crate::JsonShape;
use ngsi_types::{AttributeLd, Entity, LdAttrType, LdValue, SubAttributeLd, keys, stringify};
use serde_json::{Map, Value};
use tracing::debug;

/// Parses an NGSI-LD entity array. Diagnostics are logged and dropped.
pub fn parse_ld_entities(json: &str) -> ParseResult<Vec<Entity>> {
    parse_ld_entities_with_diagnostics(json).map(|outcome| outcome.value)
}

/// Parses an NGSI-LD entity array, returning the diagnostics as well.
pub fn parse_ld_entities_with_diagnostics(json: &str) -> ParseResult<ParseOutcome<Vec<Entity>>> {
    let root: Value = serde_json::from_str(json)?;
    let Value::Array(items) = &root else {
        return Err(ParseError::MalformedJson(format!(
            "expected an array of entities, found {}",
            JsonShape::of(&root)
        )));
    };
    debug!("Received an NGSI-LD notification with {} entities", items.len());

    let mut parser = LdParser::default();
    let entities = items
        .iter()
        .enumerate()
        .map(|(index, item)| parser.parse_entity(index, item))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(ParseOutcome::new(entities, parser.diagnostics.into_vec()))
}

/// State for one parse call. Only the diagnostics accumulate.
#[derive(Debug, Default)]
struct LdParser {
    diagnostics: Diagnostics,
}

impl LdParser {
    fn parse_entity(&mut self, index: usize, item: &Value) -> ParseResult<Entity> {
        let obj = item.as_object().ok_or_else(|| ParseError::InvalidShape {
            context: format!("entity at index {index}"),
            expected: "an object",
            found: JsonShape::of(item),
        })?;
        let id = required_str(obj, "id", || format!("entity at index {index}"))?;
        let entity_type = required_str(obj, "type", || format!("entity `{id}`"))?;
        debug!("Dealing with entity {} of type {}", id, entity_type);

        let mut attributes = Vec::new();
        for (key, value) in obj {
            if keys::is_ignored_on_entity(key) {
                continue;
            }
            match value {
                Value::Array(instances) => {
                    for instance in instances {
                        match instance {
                            Value::Object(attr) => {
                                retain(&mut attributes, self.parse_attribute(id, key, attr)?);
                            }
                            other => self.diagnostics.unexpected_shape(id, key.clone(), other),
                        }
                    }
                }
                Value::Object(attr) => {
                    retain(&mut attributes, self.parse_attribute(id, key, attr)?);
                }
                Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                    self.diagnostics.unexpected_shape(id, key.clone(), value);
                }
            }
        }

        Ok(Entity::ld(id, entity_type, attributes))
    }

    /// Extracts one attribute. `Ok(None)` means the type was unrecognized
    /// and a diagnostic has been recorded.
    fn parse_attribute(
        &mut self,
        entity_id: &str,
        key: &str,
        obj: &Map<String, Value>,
    ) -> ParseResult<Option<AttributeLd>> {
        // Temporal exports may send an attribute with no history and no type.
        let wire_type = optional_text(obj, "type");
        let Some(attr_type) = LdAttrType::from_wire(&wire_type) else {
            self.diagnostics.unrecognized_type(entity_id, key.to_string(), wire_type);
            return Ok(None);
        };

        let value = match attr_type {
            LdAttrType::Relationship => text_value(obj.get("object")),
            LdAttrType::Property => obj.get("value").cloned().map(LdValue::Json),
            LdAttrType::GeoProperty => Some(LdValue::Json(Value::Object(obj.clone()))),
            LdAttrType::Unset => None,
        };

        let mut attribute = AttributeLd {
            dataset_id: optional_text(obj, "datasetId"),
            observed_at: optional_text(obj, "observedAt"),
            created_at: optional_text(obj, "createdAt"),
            modified_at: optional_text(obj, "modifiedAt"),
            ..AttributeLd::new(key, attr_type, value)
        };

        for (sub_key, sub_value) in obj {
            if attr_type == LdAttrType::Property && sub_key == keys::UNIT_CODE_KEY {
                if let Value::String(unit) = sub_value {
                    attribute.sub_attributes.push(SubAttributeLd::new(
                        sub_key,
                        LdAttrType::Property,
                        Some(LdValue::Text(unit.clone())),
                    ));
                }
            } else if keys::is_relationship_detail(sub_key) {
                self.parse_relationship_details(entity_id, key, sub_key, sub_value, &mut attribute.sub_attributes)?;
            } else if !keys::is_ignored_on_attribute(sub_key) {
                self.collect_sub_attributes(entity_id, key, sub_key, sub_value, &mut attribute.sub_attributes)?;
            }
        }

        Ok(Some(attribute))
    }

    /// Lifts the keys of a relationship-details object (minus `id` and
    /// `type`) into the parent's sub-attributes.
    fn parse_relationship_details(
        &mut self,
        entity_id: &str,
        parent: &str,
        key: &str,
        value: &Value,
        out: &mut Vec<SubAttributeLd>,
    ) -> ParseResult<()> {
        let Value::Object(details) = value else {
            self.diagnostics
                .unexpected_shape(entity_id, format!("{parent}.{key}"), value);
            return Ok(());
        };
        for (detail_key, detail_value) in details {
            if keys::IGNORED_KEYS_ON_RELATIONSHIP_DETAILS.contains(&detail_key.as_str()) {
                continue;
            }
            self.collect_sub_attributes(entity_id, parent, detail_key, detail_value, out)?;
        }
        Ok(())
    }

    /// Array values yield one sub-attribute per object element; object
    /// values yield one sub-attribute.
    fn collect_sub_attributes(
        &mut self,
        entity_id: &str,
        parent: &str,
        key: &str,
        value: &Value,
        out: &mut Vec<SubAttributeLd>,
    ) -> ParseResult<()> {
        match value {
            Value::Array(instances) => {
                for instance in instances {
                    match instance {
                        Value::Object(obj) => {
                            retain_sub(out, self.parse_sub_attribute(entity_id, parent, key, obj)?);
                        }
                        other => {
                            self.diagnostics
                                .unexpected_shape(entity_id, format!("{parent}.{key}"), other);
                        }
                    }
                }
            }
            Value::Object(obj) => {
                retain_sub(out, self.parse_sub_attribute(entity_id, parent, key, obj)?);
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                self.diagnostics
                    .unexpected_shape(entity_id, format!("{parent}.{key}"), value);
            }
        }
        Ok(())
    }

    /// Extracts one sub-attribute. Unlike a top-level attribute the `type`
    /// is mandatory and may not be empty.
    fn parse_sub_attribute(
        &mut self,
        entity_id: &str,
        parent: &str,
        key: &str,
        obj: &Map<String, Value>,
    ) -> ParseResult<Option<SubAttributeLd>> {
        let wire_type = obj.get("type").map(stringify).ok_or_else(|| {
            missing(
                "type",
                format!("sub-attribute `{key}` of attribute `{parent}` on entity `{entity_id}`"),
            )
        })?;

        let (attr_type, value) = match LdAttrType::from_wire(&wire_type) {
            Some(t @ LdAttrType::Relationship) => (t, text_value(obj.get("object"))),
            Some(t @ LdAttrType::Property) => (t, obj.get("value").cloned().map(LdValue::Json)),
            Some(t @ LdAttrType::GeoProperty) => (t, text_value(obj.get("value"))),
            Some(LdAttrType::Unset) | None => {
                self.diagnostics
                    .unrecognized_type(entity_id, format!("{parent}.{key}"), wire_type);
                return Ok(None);
            }
        };

        Ok(Some(SubAttributeLd::new(key, attr_type, value)))
    }
}

/// Stringifies a value that must become text. `null` counts as absent.
fn text_value(value: Option<&Value>) -> Option<LdValue> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => Some(LdValue::Text(stringify(value))),
    }
}

// NGSI-LD forbids null-valued properties, so absent and null values are
// dropped rather than kept as placeholders.
fn retain(attributes: &mut Vec<AttributeLd>, candidate: Option<AttributeLd>) {
    if let Some(attribute) = candidate.filter(AttributeLd::has_value) {
        attributes.push(attribute);
    }
}

fn retain_sub(sub_attributes: &mut Vec<SubAttributeLd>, candidate: Option<SubAttributeLd>) {
    if let Some(sub_attribute) = candidate.filter(SubAttributeLd::has_value) {
        sub_attributes.push(sub_attribute);
    }
}
