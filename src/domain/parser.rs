use std::sync::LazyLock;

use jsonschema::Validator;
use serde_json::{Map, Value, json};

use super::error::SchemaError;
use super::schema::{
    FieldKind, FormField, FormFieldOption, FormFieldValidation, FormSchema, Pattern,
};

const DEFAULT_PATTERN_MESSAGE: &str = "Invalid input";

/// Top-level shape every form document must have. Field entries are not
/// constrained here; they are read leniently below.
static SHAPE: LazyLock<Validator> = LazyLock::new(|| {
    let shape = json!({
        "type": "object",
        "required": ["formTitle", "fields"],
        "properties": {
            "formTitle": { "type": "string", "pattern": "\\S" },
            "fields": { "type": "array" }
        }
    });
    jsonschema::validator_for(&shape).expect("form shape schema must compile")
});

/// Parse editor text into a form schema.
pub fn parse_schema_str(text: &str) -> Result<FormSchema, SchemaError> {
    let candidate: Value =
        serde_json::from_str(text).map_err(|err| SchemaError::from_json(&err))?;
    validate(&candidate)
}

/// Accept an already-parsed document as a form schema.
///
/// Only the top-level shape is enforced. Field entries fall back to empty
/// defaults for missing data, so a malformed field never rejects the whole
/// document; an uncompilable `validation.pattern` does.
pub fn validate(candidate: &Value) -> Result<FormSchema, SchemaError> {
    if !SHAPE.is_valid(candidate) {
        return Err(SchemaError::Structure);
    }
    let Some(root) = candidate.as_object() else {
        return Err(SchemaError::Structure);
    };

    let fields = root
        .get("fields")
        .and_then(Value::as_array)
        .ok_or(SchemaError::Structure)?
        .iter()
        .map(read_field)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FormSchema {
        form_title: string_at(root, "formTitle").unwrap_or_default(),
        form_description: string_at(root, "formDescription").unwrap_or_default(),
        fields,
    })
}

fn read_field(value: &Value) -> Result<FormField, SchemaError> {
    let Some(obj) = value.as_object() else {
        return Ok(FormField {
            id: String::new(),
            kind: FieldKind::Unrecognized(String::new()),
            label: String::new(),
            required: false,
            placeholder: None,
            options: None,
            validation: None,
        });
    };

    let id = string_at(obj, "id").unwrap_or_default();
    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .map(FieldKind::from_tag)
        .unwrap_or_else(|| FieldKind::Unrecognized(String::new()));
    let validation = match obj.get("validation").and_then(Value::as_object) {
        Some(rule) => read_validation(&id, &kind, rule)?,
        None => None,
    };

    Ok(FormField {
        label: string_at(obj, "label").unwrap_or_default(),
        required: obj.get("required").and_then(Value::as_bool).unwrap_or(false),
        placeholder: string_at(obj, "placeholder"),
        options: obj.get("options").and_then(Value::as_array).map(|items| {
            items.iter().filter_map(read_option).collect()
        }),
        validation,
        id,
        kind,
    })
}

/// Only kinds that check patterns get them compiled; the rest keep the
/// source as written.
fn read_validation(
    field_id: &str,
    kind: &FieldKind,
    rule: &Map<String, Value>,
) -> Result<Option<FormFieldValidation>, SchemaError> {
    let Some(source) = rule.get("pattern").and_then(Value::as_str) else {
        return Ok(None);
    };
    let pattern = if kind.accepts_pattern() {
        Pattern::new(source).map_err(|err| SchemaError::from_regex(field_id, &err))?
    } else {
        Pattern::verbatim(source)
    };
    Ok(Some(FormFieldValidation {
        pattern,
        message: string_at(rule, "message")
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_PATTERN_MESSAGE.to_string()),
    }))
}

fn read_option(value: &Value) -> Option<FormFieldOption> {
    let obj = value.as_object()?;
    Some(FormFieldOption {
        value: obj.get("value").map(scalar_to_string).unwrap_or_default(),
        label: obj.get("label").map(scalar_to_string).unwrap_or_default(),
    })
}

fn string_at(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(num) => num.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}
