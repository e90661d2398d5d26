use ngsi_types::{Attribute, CreationTime, Dialect, Entity, NotificationEvent};
use pretty_assertions::assert_eq;

fn rooms() -> Vec<Entity> {
    vec![
        Entity::v2("Room1", "Room", vec![Attribute::new("temperature", "Float", "23.5")]),
        Entity::v2("Room2", "Room", vec![]),
    ]
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn v2_event_carries_tenant_path() {
    let event = NotificationEvent::v2(CreationTime::from_millis(10), "smartcity", "/rooms", rooms());
    assert_eq!(event.dialect, Dialect::V2);
    assert_eq!(event.tenant, "smartcity");
    assert_eq!(event.tenant_path.as_deref(), Some("/rooms"));
    assert_eq!(event.creation_time.as_millis(), 10);
    assert!(!event.is_linked_data());
}

#[test]
fn ld_event_has_no_tenant_path() {
    let event = NotificationEvent::ld(CreationTime::from_millis(10), "fleet", vec![]);
    assert_eq!(event.dialect, Dialect::Ld);
    assert_eq!(event.tenant_path, None);
    assert!(event.is_linked_data());
    assert_eq!(event.entity_count(), 0);
}

#[test]
fn entity_lookup_returns_first_match() {
    let mut entities = rooms();
    entities.push(Entity::v2("Room1", "Room", vec![]));
    let event = NotificationEvent::v2(CreationTime::from_millis(1), "s", "/p", entities);

    assert_eq!(event.entity_count(), 3);
    assert_eq!(event.entity("Room1").unwrap().attribute_count(), 1);
    assert!(event.entity("Room9").is_none());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serde_roundtrip_v2() {
    let event = NotificationEvent::v2(CreationTime::from_millis(5), "s", "/p", rooms());
    let json = serde_json::to_string(&event).unwrap();
    let parsed: NotificationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, parsed);
}

#[test]
fn ld_event_omits_tenant_path() {
    let event = NotificationEvent::ld(CreationTime::from_millis(5), "fleet", vec![]);
    let value = serde_json::to_value(&event).unwrap();
    assert!(value.get("tenant_path").is_none());
    assert_eq!(value["dialect"], "ld");
}
