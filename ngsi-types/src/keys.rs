//! Reserved key sets.
//!
//! These are immutable, process-wide constants. Both parsers reference them
//! directly; nothing rebuilds them per call.

/// Keys on an entity object that are never attributes.
// createdAt/modifiedAt should not appear at entity level, but brokers send them.
pub const IGNORED_KEYS_ON_ENTITIES: &[&str] = &["id", "type", "@context", "createdAt", "modifiedAt"];

/// Keys on an NGSI-LD attribute object that are never sub-attributes.
pub const IGNORED_KEYS_ON_ATTRIBUTES: &[&str] = &[
    "type",
    "value",
    "object",
    "datasetId",
    "createdAt",
    "modifiedAt",
    "instanceId",
    "observedAt",
];

/// Keys whose object value carries relationship details. Its own keys
/// (minus `id` and `type`) are lifted into the parent's sub-attributes.
pub const RELATIONSHIP_DETAIL_KEYS: &[&str] = &["RelationshipDetails"];

/// Keys stripped from a relationship-details object before extraction.
pub const IGNORED_KEYS_ON_RELATIONSHIP_DETAILS: &[&str] = &["id", "type"];

/// Unit of measure on a Property, promoted to a synthetic sub-attribute.
pub const UNIT_CODE_KEY: &str = "unitCode";

/// Returns true if `key` is reserved at entity level.
#[must_use]
pub fn is_ignored_on_entity(key: &str) -> bool {
    IGNORED_KEYS_ON_ENTITIES.contains(&key)
}

/// Returns true if `key` is reserved at attribute level.
#[must_use]
pub fn is_ignored_on_attribute(key: &str) -> bool {
    IGNORED_KEYS_ON_ATTRIBUTES.contains(&key)
}

/// Returns true if `key` holds relationship details.
#[must_use]
pub fn is_relationship_detail(key: &str) -> bool {
    RELATIONSHIP_DETAIL_KEYS.contains(&key)
}
