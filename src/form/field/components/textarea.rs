use crossterm::event::{KeyCode, KeyEvent};

use super::helpers::handle_text_edit;
use super::{ComponentKind, FieldComponent};

#[derive(Debug, Clone, Default)]
pub struct TextAreaComponent {
    buffer: String,
}

impl TextAreaComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldComponent for TextAreaComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TextArea
    }

    fn value(&self) -> &str {
        &self.buffer
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.buffer.push('\n');
                true
            }
            _ => handle_text_edit(&mut self.buffer, key),
        }
    }

    fn set_value(&mut self, value: &str) -> bool {
        if self.buffer == value {
            return false;
        }
        self.buffer = value.to_string();
        true
    }
}
