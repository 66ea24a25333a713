use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::FormField;

use super::helpers::ChoiceList;
use super::{ChoiceStateRef, ComponentKind, FieldComponent};

/// One mutually exclusive choice per option; nothing is selected until the
/// user picks one.
#[derive(Debug, Clone)]
pub struct RadioComponent {
    choices: ChoiceList,
}

impl RadioComponent {
    pub fn new(field: &FormField) -> Self {
        Self {
            choices: ChoiceList::new(field.options()),
        }
    }
}

impl FieldComponent for RadioComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Radio
    }

    fn value(&self) -> &str {
        self.choices.value()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.choices.step(-1),
            KeyCode::Right => self.choices.step(1),
            KeyCode::Char(' ') if self.choices.view().selected.is_none() => self.choices.step(1),
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
