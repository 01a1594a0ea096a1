use patmap_model::{MappingConfig, MappingRule, ResolvedValue};

#[test]
fn config_accepts_wrapped_form() {
    let json = r#"{
        "mappings": [
            {"json_field": "id", "xml_fields": ["ID"], "transform": "to_int"},
            {"json_field": "name", "xml_fields": [], "children": [
                {"json_field": "first", "xml_fields": ["FirstName"]}
            ]}
        ]
    }"#;
    let config: MappingConfig = serde_json::from_str(json).expect("parse config");

    assert_eq!(config.mappings.len(), 2);
    assert_eq!(config.mappings[0].transform.as_deref(), Some("to_int"));
    assert_eq!(config.mappings[1].children[0].xml_fields, vec!["FirstName"]);
    assert_eq!(config.rule_count(), 3);
    assert_eq!(config.depth(), 2);
}

#[test]
fn config_accepts_bare_array() {
    let json = r#"[{"json_field": "id", "xml_fields": ["ID"]}]"#;
    let config: MappingConfig = serde_json::from_str(json).expect("parse config");
    assert_eq!(config.mappings, vec![MappingRule::new("id").with_sources(["ID"])]);
}

#[test]
fn config_without_mappings_is_empty() {
    for json in [r#"{}"#, r#"{"mappings": null}"#, r#"{"version": 2, "mappings": []}"#] {
        let config: MappingConfig = serde_json::from_str(json).expect(json);
        assert!(config.mappings.is_empty(), "{json}");
    }
}

#[test]
fn config_errors_keep_field_and_position() {
    let json = "{\n  \"mappings\": [\n    {\"json_field\": 5}\n  ]\n}";
    let err = serde_json::from_str::<MappingConfig>(json).unwrap_err();
    assert_eq!(err.line(), 3);
    assert!(err.column() > 0);
    assert!(err.to_string().contains("invalid type"), "{err}");

    let err = serde_json::from_str::<MappingConfig>(r#"[{"json_field": "a", "children": 7}]"#)
        .unwrap_err();
    assert_eq!(err.line(), 1);
    assert!(err.column() > 0);
    assert!(err.to_string().contains("invalid type"), "{err}");
}

#[test]
fn config_rejects_scalar_document() {
    let err = serde_json::from_str::<MappingConfig>("42").unwrap_err();
    assert!(err.to_string().contains("mappings"), "{err}");
}

#[test]
fn config_rejects_rule_without_json_field() {
    let json = r#"{"mappings": [{"xml_fields": ["ID"]}]}"#;
    assert!(serde_json::from_str::<MappingConfig>(json).is_err());
}

#[test]
fn resolved_value_serializes_untagged() {
    let mut nested = std::collections::BTreeMap::new();
    nested.insert("first".to_string(), ResolvedValue::from("Jane"));
    let values = vec![
        ResolvedValue::Integer(42),
        ResolvedValue::from("abc"),
        ResolvedValue::Object(nested),
    ];
    let json = serde_json::to_value(&values).unwrap();
    assert_eq!(json, serde_json::json!([42, "abc", {"first": "Jane"}]));
}

#[test]
fn resolved_value_accessors() {
    assert_eq!(ResolvedValue::Integer(7).as_integer(), Some(7));
    assert_eq!(ResolvedValue::from("x").as_str(), Some("x"));
    assert!(ResolvedValue::from("x").as_object().is_none());
    assert_eq!(ResolvedValue::Integer(7).kind(), "integer");
}
