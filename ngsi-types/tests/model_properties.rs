//! Property-based tests for the model types.
//!
//! - Dialect tags parse regardless of ASCII case
//! - `stringify` is the identity on strings and JSON text otherwise
//! - LD names always come out lower-cased
//! - Timestamps survive their text form

use ngsi_types::{AttributeLd, CreationTime, Dialect, LdAttrType, LdValue, stringify};
use proptest::prelude::*;
use serde_json::{Value, json};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn dialect_tag() -> impl Strategy<Value = (String, Dialect)> {
    prop_oneof![
        "[vV]2".prop_map(|s| (s, Dialect::V2)),
        "[lL][dD]".prop_map(|s| (s, Dialect::Ld)),
    ]
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<u32>().prop_map(|n| json!(f64::from(n) / 4.0)),
    ]
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn dialect_ignores_case((tag, expected) in dialect_tag()) {
        prop_assert_eq!(tag.parse::<Dialect>().unwrap(), expected);
    }

    #[test]
    fn stringify_string_is_identity(s in ".*") {
        prop_assert_eq!(stringify(&Value::String(s.clone())), s);
    }

    #[test]
    fn stringify_scalar_is_json_text(value in scalar()) {
        let text = stringify(&value);
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn ld_names_are_lower_case(name in "[a-zA-Z][a-zA-Z0-9_]{0,16}") {
        let attr = AttributeLd::new(&name, LdAttrType::Property, Some(LdValue::from("x")));
        prop_assert_eq!(attr.name, name.to_lowercase());
    }

    #[test]
    fn timestamp_text_roundtrip(millis in any::<u64>()) {
        let ts = CreationTime::from_millis(millis);
        prop_assert_eq!(ts.to_string().parse::<CreationTime>().unwrap(), ts);
    }
}
