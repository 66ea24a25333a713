use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

/// A form document: title, description and the ordered list of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub form_title: String,
    pub form_description: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FormFieldOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FormFieldValidation>,
}

impl FormField {
    /// Options of a choice field, or an empty slice when none were given.
    pub fn options(&self) -> &[FormFieldOption] {
        self.options.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// The five control kinds a form can render. Any other tag is kept verbatim
/// in `Unrecognized` so the document survives a round trip; such fields are
/// never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select,
    Radio,
    Textarea,
    Unrecognized(String),
}

impl FieldKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "select" => FieldKind::Select,
            "radio" => FieldKind::Radio,
            "textarea" => FieldKind::Textarea,
            other => FieldKind::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::Textarea => "textarea",
            FieldKind::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, FieldKind::Unrecognized(_))
    }

    /// Whether `validation.pattern` applies to this kind.
    pub fn accepts_pattern(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Email)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldOption {
    pub value: String,
    pub label: String,
}

impl FormFieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldValidation {
    pub pattern: Pattern,
    pub message: String,
}

/// A regular expression kept together with the source it was compiled from.
///
/// Patterns on kinds that never check them are kept as source only, so a
/// document still round-trips. Equality and serialization use the source
/// text only.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self {
            source,
            regex: Some(regex),
        })
    }

    /// Keep `source` without compiling it.
    pub fn verbatim(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            regex: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_compiled(&self) -> bool {
        self.regex.is_some()
    }

    /// A pattern kept verbatim matches everything.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.as_ref().is_none_or(|regex| regex.is_match(value))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}
