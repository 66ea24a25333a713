mod buffer;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::domain::{FormSchema, SchemaError, parse_schema_str};
use crate::store::SchemaStore;

pub use buffer::{Position, TextBuffer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorStatus {
    /// The text parsed and the store holds the schema it describes.
    Valid,
    /// The text was rejected; the store still holds the last valid schema.
    Invalid(SchemaError),
}

/// What a single editor event did to the shared schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// No text change (cursor movement, ignored key).
    Unchanged,
    /// The new text was accepted and committed as `revision`.
    Committed { revision: u64 },
    /// The new text was rejected; the store was not touched.
    Rejected,
}

/// Raw schema text plus the outcome of its most recent validation.
#[derive(Debug, Clone)]
pub struct SchemaEditor {
    buffer: TextBuffer,
    status: EditorStatus,
    tab_width: usize,
}

impl SchemaEditor {
    /// Open the pretty-printed form of an accepted schema.
    pub fn from_schema(schema: &FormSchema) -> Self {
        let text = serde_json::to_string_pretty(schema).unwrap_or_default();
        Self {
            buffer: TextBuffer::from_text(&text),
            status: EditorStatus::Valid,
            tab_width: 2,
        }
    }

    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width.max(1);
        self
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn status(&self) -> &EditorStatus {
        &self.status
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.status, EditorStatus::Valid)
    }

    pub fn error(&self) -> Option<&SchemaError> {
        match &self.status {
            EditorStatus::Valid => None,
            EditorStatus::Invalid(err) => Some(err),
        }
    }

    /// Replace the whole text, as a paste-over or programmatic load would.
    pub fn set_text(&mut self, text: &str, store: &mut SchemaStore) -> EditOutcome {
        self.buffer = TextBuffer::from_text(text);
        self.on_text_changed(store)
    }

    /// Insert pasted text at the cursor.
    pub fn paste(&mut self, text: &str, store: &mut SchemaStore) -> EditOutcome {
        if text.is_empty() {
            return EditOutcome::Unchanged;
        }
        self.buffer.insert_str(text);
        self.on_text_changed(store)
    }

    pub fn handle_key(&mut self, key: &KeyEvent, store: &mut SchemaStore) -> EditOutcome {
        let changed = match key.code {
            KeyCode::Char(ch) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return EditOutcome::Unchanged;
                }
                self.buffer.insert_char(ch);
                true
            }
            KeyCode::Enter => {
                self.buffer.insert_newline(true);
                true
            }
            KeyCode::Tab => {
                self.buffer.insert_str(&" ".repeat(self.tab_width));
                true
            }
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete(),
            KeyCode::Left => {
                self.buffer.move_left();
                false
            }
            KeyCode::Right => {
                self.buffer.move_right();
                false
            }
            KeyCode::Up => {
                self.buffer.move_up();
                false
            }
            KeyCode::Down => {
                self.buffer.move_down();
                false
            }
            KeyCode::Home => {
                self.buffer.move_home();
                false
            }
            KeyCode::End => {
                self.buffer.move_end();
                false
            }
            _ => false,
        };

        if changed {
            self.on_text_changed(store)
        } else {
            EditOutcome::Unchanged
        }
    }

    fn on_text_changed(&mut self, store: &mut SchemaStore) -> EditOutcome {
        match parse_schema_str(&self.buffer.text()) {
            Ok(schema) => {
                let revision = store.replace(schema);
                debug!(revision, "schema text accepted");
                self.status = EditorStatus::Valid;
                EditOutcome::Committed { revision }
            }
            Err(err) => {
                debug!(error = %err, "schema text rejected");
                self.status = EditorStatus::Invalid(err);
                EditOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SchemaErrorKind, project_survey};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (SchemaEditor, SchemaStore) {
        let schema = project_survey();
        (SchemaEditor::from_schema(&schema), SchemaStore::new(schema))
    }

    #[test]
    fn starts_valid_with_pretty_text() {
        let (editor, _) = setup();
        assert!(editor.is_valid());
        assert!(editor.text().starts_with("{\n  \"formTitle\""));
    }

    #[test]
    fn malformed_text_keeps_previous_schema() {
        let (mut editor, mut store) = setup();
        let before = store.current();
        // Typing at the very start produces `x{...`, which is not JSON.
        let outcome = editor.handle_key(&key(KeyCode::Char('x')), &mut store);
        assert_eq!(outcome, EditOutcome::Rejected);
        assert_eq!(
            editor.error().map(SchemaError::kind),
            Some(SchemaErrorKind::Syntax)
        );
        assert_eq!(store.revision(), 0);
        assert_eq!(store.current(), before);
    }

    #[test]
    fn structural_error_reports_fixed_message() {
        let (mut editor, mut store) = setup();
        let outcome = editor.set_text(r#"{"formTitle": "Only a title"}"#, &mut store);
        assert_eq!(outcome, EditOutcome::Rejected);
        assert_eq!(
            editor.error().map(ToString::to_string).as_deref(),
            Some("Invalid schema structure")
        );
        assert_eq!(store.current().form_title, "Project Requirements Survey");
    }

    #[test]
    fn fixing_the_text_commits_exactly_once() {
        let (mut editor, mut store) = setup();
        editor.handle_key(&key(KeyCode::Char('x')), &mut store);
        assert!(!editor.is_valid());
        let outcome = editor.handle_key(&key(KeyCode::Backspace), &mut store);
        assert_eq!(outcome, EditOutcome::Committed { revision: 1 });
        assert!(editor.is_valid());
        assert_eq!(store.revision(), 1);
        assert_eq!(*store.current(), project_survey());
    }

    #[test]
    fn navigation_does_not_revalidate() {
        let (mut editor, mut store) = setup();
        for code in [KeyCode::Down, KeyCode::End, KeyCode::Left, KeyCode::Up] {
            assert_eq!(
                editor.handle_key(&key(code), &mut store),
                EditOutcome::Unchanged
            );
        }
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn control_chords_are_not_text() {
        let (mut editor, mut store) = setup();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(editor.handle_key(&ctrl_s, &mut store), EditOutcome::Unchanged);
        assert_eq!(editor.text(), SchemaEditor::from_schema(&project_survey()).text());
    }

    #[test]
    fn paste_replaces_schema_when_valid() {
        let (mut editor, mut store) = setup();
        editor.set_text("", &mut store);
        let outcome = editor.paste(r#"{"formTitle": "Pasted", "fields": []}"#, &mut store);
        assert_eq!(outcome, EditOutcome::Committed { revision: 1 });
        assert_eq!(store.current().form_title, "Pasted");
    }
}
