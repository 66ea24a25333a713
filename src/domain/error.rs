use thiserror::Error;

/// Message reported when a document parses but lacks a title or field list.
pub const STRUCTURE_MESSAGE: &str = "Invalid schema structure";

/// Why a candidate document was not accepted as a form schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The text is not well-formed JSON.
    #[error("{message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
    /// The document is missing a non-empty `formTitle` or a `fields` array.
    #[error("Invalid schema structure")]
    Structure,
    /// A `validation.pattern` does not compile.
    #[error("Invalid pattern for field `{field}`: {message}")]
    Pattern { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    Syntax,
    Structural,
}

impl SchemaError {
    pub fn kind(&self) -> SchemaErrorKind {
        match self {
            SchemaError::Syntax { .. } => SchemaErrorKind::Syntax,
            SchemaError::Structure | SchemaError::Pattern { .. } => SchemaErrorKind::Structural,
        }
    }

    pub(crate) fn from_json(err: &serde_json::Error) -> Self {
        SchemaError::Syntax {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    pub(crate) fn from_regex(field: &str, err: &regex::Error) -> Self {
        let message = match err {
            regex::Error::Syntax(detail) => detail
                .lines()
                .last()
                .unwrap_or(detail.as_str())
                .trim()
                .to_string(),
            other => other.to_string(),
        };
        SchemaError::Pattern {
            field: field.to_string(),
            message,
        }
    }
}
