use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::FormField;

use super::helpers::ChoiceList;
use super::{ChoiceStateRef, ComponentKind, FieldComponent};

/// Dropdown over the field's options, headed by a "Select {label}" entry
/// that submits the empty string.
#[derive(Debug, Clone)]
pub struct SelectComponent {
    choices: ChoiceList,
}

impl SelectComponent {
    pub fn new(field: &FormField) -> Self {
        let placeholder = format!("Select {}", field.display_label());
        Self {
            choices: ChoiceList::new(field.options()).with_placeholder(placeholder),
        }
    }
}

impl FieldComponent for SelectComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Select
    }

    fn value(&self) -> &str {
        self.choices.value()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.choices.step(-1),
            KeyCode::Right | KeyCode::Char(' ') => self.choices.step(1),
            _ => false,
        }
    }

    fn set_value(&mut self, value: &str) -> bool {
        let before = self.choices.value().to_string();
        self.choices.select_value(value) && before != value
    }

    fn choices(&self) -> Option<ChoiceStateRef<'_>> {
        Some(self.choices.view())
    }

    fn select_choice(&mut self, index: usize) -> bool {
        self.choices.select(index)
    }
}
