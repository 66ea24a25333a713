use crate::{form::SubmissionRecord, presentation::PopupRender};

/// Confirmation shown after a successful submit, listing what was sent.
pub(crate) struct ConfirmationPopup {
    title: String,
    lines: Vec<String>,
}

impl ConfirmationPopup {
    pub(crate) fn from_record(record: &SubmissionRecord) -> Self {
        let lines = if record.is_empty() {
            vec!["(no values)".to_string()]
        } else {
            record
                .iter()
                .map(|(id, value)| format!("{id}: {}", value.replace('\n', " ⏎ ")))
                .collect()
        };
        Self {
            title: "Form submitted successfully!".to_string(),
            lines,
        }
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            lines: &self.lines,
        }
    }
}
