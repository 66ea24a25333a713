use liveform::{
    FieldKind, FormSchema, SchemaError, SchemaErrorKind,
    io::{self, DocumentFormat},
    parse_schema_str, project_survey,
};
use serde_json::json;

fn survey_with_every_kind() -> FormSchema {
    parse_schema_str(
        &json!({
            "formTitle": "Every kind",
            "formDescription": "One field of each type",
            "fields": [
                {"id": "name", "type": "text", "label": "Name", "required": true, "placeholder": "Jane"},
                {"id": "email", "type": "email", "label": "Email",
                 "validation": {"pattern": "^\\S+@\\S+$", "message": "Bad email"}},
                {"id": "size", "type": "select", "label": "Size",
                 "options": [{"value": "s", "label": "Small"}, {"value": "s", "label": "Also small"}]},
                {"id": "tier", "type": "radio", "label": "Tier", "options": [{"value": "a", "label": "A"}]},
                {"id": "notes", "type": "textarea", "label": "Notes"},
                {"id": "when", "type": "date", "label": "When"}
            ]
        })
        .to_string(),
    )
    .unwrap()
}

#[test]
fn serialized_schema_parses_back_unchanged() {
    for schema in [project_survey(), survey_with_every_kind()] {
        let pretty = serde_json::to_string_pretty(&schema).unwrap();
        assert_eq!(parse_schema_str(&pretty).unwrap(), schema);
        let compact = serde_json::to_string(&schema).unwrap();
        assert_eq!(parse_schema_str(&compact).unwrap(), schema);
    }
}

#[test]
fn unrecognized_kind_keeps_its_tag() {
    let schema = survey_with_every_kind();
    let when = schema.fields.last().unwrap();
    assert_eq!(when.kind, FieldKind::Unrecognized("date".into()));
    let text = serde_json::to_value(&schema).unwrap();
    assert_eq!(text["fields"][5]["type"], "date");
}

#[test]
fn duplicate_option_values_are_kept() {
    let schema = survey_with_every_kind();
    assert_eq!(schema.fields[2].options().len(), 2);
}

#[test]
fn structure_errors_use_the_fixed_message() {
    let err = parse_schema_str(r#"{"formTitle": "x", "fields": null}"#).unwrap_err();
    assert_eq!(err, SchemaError::Structure);
    assert_eq!(err.kind(), SchemaErrorKind::Structural);
    assert_eq!(err.to_string(), "Invalid schema structure");
}

#[test]
fn syntax_errors_carry_the_parser_message() {
    let err = parse_schema_str("{\n  \"formTitle\": }").unwrap_err();
    assert_eq!(err.kind(), SchemaErrorKind::Syntax);
    let SchemaError::Syntax { line, column, .. } = err else {
        panic!("expected a syntax error");
    };
    assert_eq!(line, 2);
    assert!(column > 0);
}

#[test]
fn documents_load_through_io() {
    let text = serde_json::to_string(&project_survey()).unwrap();
    let schema = io::load_schema_str(&text, DocumentFormat::Json).unwrap();
    assert_eq!(schema, project_survey());

    let err = io::load_schema_str(r#"{"title": "nope"}"#, DocumentFormat::Json).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid schema structure"));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_documents_load_through_io() {
    let yaml = "formTitle: From YAML\nfields:\n  - id: name\n    type: text\n    label: Name\n";
    let schema = io::load_schema_str(yaml, DocumentFormat::Yaml).unwrap();
    assert_eq!(schema.form_title, "From YAML");
    assert_eq!(schema.fields[0].kind, FieldKind::Text);
}
