use crossterm::event::KeyEvent;

use super::helpers::handle_text_edit;
use super::{ComponentKind, FieldComponent};

/// Single-line input used by `text` and `email` fields.
#[derive(Debug, Clone, Default)]
pub struct TextComponent {
    buffer: String,
}

impl TextComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldComponent for TextComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TextInput
    }

    fn value(&self) -> &str {
        &self.buffer
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        handle_text_edit(&mut self.buffer, key)
    }

    fn set_value(&mut self, value: &str) -> bool {
        let single_line = value.lines().next().unwrap_or("");
        if self.buffer == single_line {
            return false;
        }
        self.buffer = single_line.to_string();
        true
    }
}
