//! NGSI v2 notification parsing.
//!
//! A v2 notification body looks like:
//!
//! ```json
//! {
//!   "subscriptionId": "...",
//!   "data": [
//!     {
//!       "id": "Room1",
//!       "type": "Room",
//!       "temperature": {
//!         "type": "Float",
//!         "value": 23.5,
//!         "metadata": { "accuracy": { "type": "Float", "value": 0.5 } }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Every anomaly in a v2 body is structural: the first one aborts the parse.

use crate::error::{ParseError, ParseResult, missing};
use crate::fields::required_str;
use crate::JsonShape;
use ngsi_types::{Attribute, Entity, Metadata, keys, stringify};
use serde_json::{Map, Value};
use tracing::debug;

/// Parses the `data` array of a v2 notification into entities.
///
/// Entities come out in array order and attributes in source key order.
pub fn parse_v2_entities(json: &str) -> ParseResult<Vec<Entity>> {
    let root: Value = serde_json::from_str(json)?;
    let data = root.get("data").and_then(Value::as_array).ok_or_else(|| {
        ParseError::MalformedJson(format!(
            "expected an object with a `data` array, found {}",
            JsonShape::of(&root)
        ))
    })?;
    debug!("Received an NGSI v2 notification with {} entities", data.len());

    data.iter()
        .enumerate()
        .map(|(index, item)| parse_entity(index, item))
        .collect()
}

fn parse_entity(index: usize, item: &Value) -> ParseResult<Entity> {
    let obj = item.as_object().ok_or_else(|| ParseError::InvalidShape {
        context: format!("data[{index}]"),
        expected: "an object",
        found: JsonShape::of(item),
    })?;
    let id = required_str(obj, "id", || format!("entity data[{index}]"))?;
    let entity_type = required_str(obj, "type", || format!("entity `{id}`"))?;

    let attributes = obj
        .iter()
        .filter(|(key, _)| !keys::is_ignored_on_entity(key))
        .map(|(key, value)| parse_attribute(id, key, value))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(Entity::v2(id, entity_type, attributes))
}

fn parse_attribute(entity_id: &str, name: &str, value: &Value) -> ParseResult<Attribute> {
    let context = || format!("attribute `{name}` of entity `{entity_id}`");
    let obj = value.as_object().ok_or_else(|| ParseError::InvalidShape {
        context: context(),
        expected: "an object",
        found: JsonShape::of(value),
    })?;
    let attr_type = required_str(obj, "type", context)?;
    let attr_value = obj.get("value").ok_or_else(|| missing("value", context()))?;
    let attribute = Attribute::new(name, attr_type, stringify(attr_value));

    match obj.get("metadata") {
        None | Some(Value::Null) => Ok(attribute),
        Some(Value::Object(metadata)) => {
            let entries = parse_metadata(entity_id, name, metadata)?;
            let raw = serde_json::to_string(metadata)?;
            Ok(attribute.with_metadata(entries, raw))
        }
        Some(other) => Err(ParseError::InvalidShape {
            context: format!("metadata of attribute `{name}` on entity `{entity_id}`"),
            expected: "an object",
            found: JsonShape::of(other),
        }),
    }
}

fn parse_metadata(
    entity_id: &str,
    attribute: &str,
    metadata: &Map<String, Value>,
) -> ParseResult<Vec<Metadata>> {
    metadata
        .iter()
        .map(|(name, value)| {
            let context = || format!("metadata `{name}` of attribute `{attribute}` on entity `{entity_id}`");
            let obj = value.as_object().ok_or_else(|| ParseError::InvalidShape {
                context: context(),
                expected: "an object",
                found: JsonShape::of(value),
            })?;
            let metadata_type = required_str(obj, "type", context)?;
            let metadata_value = obj.get("value").ok_or_else(|| missing("value", context()))?;
            Ok(Metadata::new(name.as_str(), metadata_type, stringify(metadata_value)))
        })
        .collect()
}
