use std::fmt;

/// What the footer reports after the last user action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    SchemaApplied {
        revision: u64,
        fields: usize,
    },
    SchemaRejected,
    EditingSchema,
    FillingForm,
    EditingField(String),
    Submitted(usize),
    IssuesRemaining(usize),
    PendingExit,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => f.write_str("Ready. Edit the schema, Ctrl+W to fill in the form."),
            Status::SchemaApplied { revision, fields } => {
                write!(f, "Schema applied (revision {revision}, {fields} field(s))")
            }
            Status::SchemaRejected => {
                f.write_str("Schema has errors; preview shows the last valid version")
            }
            Status::EditingSchema => f.write_str("Editing schema"),
            Status::FillingForm => f.write_str("Filling in form"),
            Status::EditingField(label) => write!(f, "Editing {label}"),
            Status::Submitted(entries) => write!(f, "Form submitted ({entries} value(s))"),
            Status::IssuesRemaining(count) => write!(f, "{count} issue(s) remaining"),
            Status::PendingExit => {
                f.write_str("Unsubmitted form input. Press Ctrl+Q again to quit.")
            }
        }
    }
}

/// Rendered text of the most recent status.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: Status::Ready.to_string(),
        }
    }
}

impl StatusLine {
    pub fn set(&mut self, status: Status) {
        self.message = status.to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
