pub mod components;

use crossterm::event::KeyEvent;

use crate::domain::{FieldKind, FormField};

use super::rules::FieldRules;
use components::{
    ChoiceStateRef, ComponentKind, FieldComponent, RadioComponent, SelectComponent,
    TextAreaComponent, TextComponent,
};

/// A rendered field: its description, its control and its live error.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub field: FormField,
    pub(crate) component: Box<dyn FieldComponent>,
    rules: FieldRules,
    /// Changed since the last successful submit.
    pub dirty: bool,
    /// Changed at least once; survives submits.
    pub edited: bool,
    pub error: Option<String>,
}

impl FieldState {
    /// Build the control for `field`, or `None` when its type is not one of
    /// the five renderable kinds.
    pub fn from_field(field: &FormField) -> Option<Self> {
        let component: Box<dyn FieldComponent> = match &field.kind {
            FieldKind::Text | FieldKind::Email => Box::new(TextComponent::new()),
            FieldKind::Textarea => Box::new(TextAreaComponent::new()),
            FieldKind::Select => Box::new(SelectComponent::new(field)),
            FieldKind::Radio => Box::new(RadioComponent::new(field)),
            FieldKind::Unrecognized(_) => return None,
        };
        Some(Self {
            field: field.clone(),
            component,
            rules: FieldRules::for_field(field),
            dirty: false,
            edited: false,
            error: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.field.id
    }

    pub fn value(&self) -> &str {
        self.component.value()
    }

    pub fn component_kind(&self) -> ComponentKind {
        self.component.kind()
    }

    pub fn choices(&self) -> Option<ChoiceStateRef<'_>> {
        self.component.choices()
    }

    pub fn is_required(&self) -> bool {
        self.rules.is_required()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let changed = self.component.handle_key(key);
        if changed {
            self.dirty = true;
            self.edited = true;
        }
        changed
    }

    pub fn set_value(&mut self, value: &str) -> bool {
        let changed = self.component.set_value(value);
        if changed {
            self.dirty = true;
            self.edited = true;
        }
        changed
    }

    pub fn select_choice(&mut self, index: usize) -> bool {
        let changed = self.component.select_choice(index);
        if changed {
            self.dirty = true;
            self.edited = true;
        }
        changed
    }

    /// Run the rules against the current value and record the outcome.
    pub fn validate(&mut self) -> bool {
        match self.rules.check(self.component.value()) {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
