use ngsi_parser::{JsonShape, ParseError, parse_v2_entities};
use ngsi_types::{Attribute, Metadata};
use pretty_assertions::assert_eq;

// ── Basic decoding ───────────────────────────────────────────────

#[test]
fn single_entity_with_empty_metadata() {
    let json = r#"{"data":[{"id":"E1","type":"Room","temperature":{"type":"Float","value":23.5,"metadata":{}}}]}"#;
    let entities = parse_v2_entities(json).unwrap();

    assert_eq!(entities.len(), 1);
    let entity = &entities[0];
    assert_eq!(entity.id, "E1");
    assert_eq!(entity.entity_type, "Room");
    assert!(!entity.is_linked_data());
    assert_eq!(entity.v2_attributes(), &[Attribute::new("temperature", "Float", "23.5")]);
    assert_eq!(entity.v2_attributes()[0].raw_metadata_json, "");
}

#[test]
fn missing_metadata_is_zero_entries() {
    let json = r#"{"data":[{"id":"E1","type":"Room","pressure":{"type":"Integer","value":720}}]}"#;
    let entities = parse_v2_entities(json).unwrap();
    let attr = entities[0].attribute("pressure").unwrap();
    assert!(!attr.has_metadata());
    assert_eq!(attr.value, "720");
}

#[test]
fn null_metadata_is_zero_entries() {
    let json = r#"{"data":[{"id":"E1","type":"Room","pressure":{"type":"Integer","value":720,"metadata":null}}]}"#;
    let entities = parse_v2_entities(json).unwrap();
    assert!(entities[0].attribute("pressure").unwrap().metadata.is_empty());
}

#[test]
fn metadata_entries_are_decoded_in_order() {
    let json = r#"{"data":[{"id":"E1","type":"Room","temperature":{
        "type":"Float","value":21,
        "metadata":{
            "accuracy":{"type":"Float","value":0.5},
            "unitCode":{"type":"Text","value":"CEL"},
            "location":{"type":"geo:json","value":{"type":"Point","coordinates":[1,2]}}
        }}}]}"#;
    let entities = parse_v2_entities(json).unwrap();
    let attr = entities[0].attribute("temperature").unwrap();

    assert_eq!(
        attr.metadata,
        vec![
            Metadata::new("accuracy", "Float", "0.5"),
            Metadata::new("unitCode", "Text", "CEL"),
            Metadata::new("location", "geo:json", r#"{"type":"Point","coordinates":[1,2]}"#),
        ]
    );
    assert_eq!(
        attr.raw_metadata_json,
        r#"{"accuracy":{"type":"Float","value":0.5},"unitCode":{"type":"Text","value":"CEL"},"location":{"type":"geo:json","value":{"type":"Point","coordinates":[1,2]}}}"#
    );
}

#[test]
fn values_are_stringified_losslessly() {
    let json = r#"{"data":[{"id":"E1","type":"T",
        "s":{"type":"Text","value":"hello"},
        "b":{"type":"Boolean","value":true},
        "n":{"type":"None","value":null},
        "o":{"type":"StructuredValue","value":{"a":[1,"x"],"b":{"c":null}}},
        "l":{"type":"List","value":[1,2,3]}
    }]}"#;
    let entities = parse_v2_entities(json).unwrap();
    let e = &entities[0];

    assert_eq!(e.attribute("s").unwrap().value, "hello");
    assert_eq!(e.attribute("b").unwrap().value, "true");
    assert_eq!(e.attribute("n").unwrap().value, "null");
    assert_eq!(e.attribute("o").unwrap().value, r#"{"a":[1,"x"],"b":{"c":null}}"#);
    assert_eq!(e.attribute("l").unwrap().value, "[1,2,3]");
}

#[test]
fn attribute_order_follows_source_keys() {
    let json = r#"{"data":[{"zeta":{"type":"T","value":1},"id":"E1","alpha":{"type":"T","value":2},"type":"Room","Mid":{"type":"T","value":3}}]}"#;
    let entities = parse_v2_entities(json).unwrap();
    let names: Vec<_> = entities[0].v2_attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "Mid"]);
}

#[test]
fn attribute_names_keep_their_casing() {
    let json = r#"{"data":[{"id":"E1","type":"Room","RelativeHumidity":{"type":"Float","value":40}}]}"#;
    let entities = parse_v2_entities(json).unwrap();
    assert!(entities[0].attribute("RelativeHumidity").is_some());
    assert!(entities[0].attribute("relativehumidity").is_none());
}

#[test]
fn one_entity_per_data_element_without_merging() {
    let json = r#"{"data":[
        {"id":"E1","type":"Room","t":{"type":"Float","value":1}},
        {"id":"E1","type":"Room","t":{"type":"Float","value":2}},
        {"id":"E2","type":"Room"}
    ]}"#;
    let entities = parse_v2_entities(json).unwrap();
    assert_eq!(entities.len(), 3);
    assert_eq!(entities[0].attribute("t").unwrap().value, "1");
    assert_eq!(entities[1].attribute("t").unwrap().value, "2");
    assert_eq!(entities[2].attribute_count(), 0);
}

#[test]
fn empty_data_array() {
    let entities = parse_v2_entities(r#"{"subscriptionId":"s1","data":[]}"#).unwrap();
    assert!(entities.is_empty());
}

// ── Structural failures ──────────────────────────────────────────

#[test]
fn invalid_json_is_malformed() {
    let err = parse_v2_entities("{not json").unwrap_err();
    assert!(matches!(err, ParseError::MalformedJson(_)));
}

#[test]
fn missing_data_is_malformed() {
    let err = parse_v2_entities(r#"{"subscriptionId":"s1"}"#).unwrap_err();
    assert!(matches!(err, ParseError::MalformedJson(_)));
}

#[test]
fn top_level_array_is_malformed() {
    let err = parse_v2_entities(r#"[{"id":"E1","type":"Room"}]"#).unwrap_err();
    assert!(matches!(err, ParseError::MalformedJson(ref msg) if msg.contains("an array")));
}

#[test]
fn data_not_an_array_is_malformed() {
    let err = parse_v2_entities(r#"{"data":{"id":"E1"}}"#).unwrap_err();
    assert!(matches!(err, ParseError::MalformedJson(_)));
}

#[test]
fn missing_entity_id() {
    let err = parse_v2_entities(r#"{"data":[{"type":"Room"}]}"#).unwrap_err();
    assert!(matches!(err, ParseError::MissingRequiredField { field: "id", .. }));
}

#[test]
fn non_string_entity_type() {
    let err = parse_v2_entities(r#"{"data":[{"id":"E1","type":5}]}"#).unwrap_err();
    assert!(matches!(err, ParseError::MissingRequiredField { field: "type", .. }));
}

#[test]
fn missing_attribute_type() {
    let err = parse_v2_entities(r#"{"data":[{"id":"E1","type":"Room","t":{"value":1}}]}"#).unwrap_err();
    match err {
        ParseError::MissingRequiredField { field, context } => {
            assert_eq!(field, "type");
            assert!(context.contains("`t`"));
            assert!(context.contains("`E1`"));
        }
        other => panic!("expected MissingRequiredField, got {:?}", other),
    }
}

#[test]
fn missing_attribute_value() {
    let err = parse_v2_entities(r#"{"data":[{"id":"E1","type":"Room","t":{"type":"Float"}}]}"#).unwrap_err();
    assert!(matches!(err, ParseError::MissingRequiredField { field: "value", .. }));
}

#[test]
fn scalar_attribute_is_invalid_shape() {
    let err = parse_v2_entities(r#"{"data":[{"id":"E1","type":"Room","t":21}]}"#).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidShape {
            context: "attribute `t` of entity `E1`".into(),
            expected: "an object",
            found: JsonShape::Number,
        }
    );
}

#[test]
fn metadata_entry_missing_value() {
    let json = r#"{"data":[{"id":"E1","type":"Room","t":{"type":"Float","value":1,"metadata":{"accuracy":{"type":"Float"}}}}]}"#;
    let err = parse_v2_entities(json).unwrap_err();
    assert!(matches!(err, ParseError::MissingRequiredField { field: "value", ref context } if context.contains("accuracy")));
}

#[test]
fn metadata_not_an_object() {
    let json = r#"{"data":[{"id":"E1","type":"Room","t":{"type":"Float","value":1,"metadata":[]}}]}"#;
    let err = parse_v2_entities(json).unwrap_err();
    assert!(matches!(err, ParseError::InvalidShape { found: JsonShape::Array, .. }));
}

#[test]
fn one_bad_entity_fails_the_whole_payload() {
    let json = r#"{"data":[{"id":"E1","type":"Room"},{"id":"E2"}]}"#;
    assert!(parse_v2_entities(json).is_err());
}
