use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::domain::FormSchema;

use super::{error::SubmitError, field::FieldState, submission::SubmissionRecord};

/// The preview form built from one schema version.
#[derive(Debug, Clone)]
pub struct FormState {
    title: String,
    description: String,
    fields: Vec<FieldState>,
    skipped: usize,
    focus: usize,
    live_validation: bool,
}

impl FormState {
    /// One field state per renderable field; unrecognized types are left out.
    pub fn from_schema(schema: &FormSchema) -> Self {
        let fields: Vec<FieldState> = schema
            .fields
            .iter()
            .filter_map(FieldState::from_field)
            .collect();
        let skipped = schema.fields.len() - fields.len();
        if skipped > 0 {
            debug!(skipped, "fields with unrecognized types were not rendered");
        }
        Self {
            title: schema.form_title.clone(),
            description: schema.form_description.clone(),
            fields,
            skipped,
            focus: 0,
            live_validation: true,
        }
    }

    pub fn with_live_validation(mut self, enabled: bool) -> Self {
        self.live_validation = enabled;
        self
    }

    /// Build the form for a newer schema, keeping what the user already
    /// entered in fields that still exist with the same id and type.
    pub fn rebuild(&self, schema: &FormSchema) -> Self {
        let mut next = Self::from_schema(schema).with_live_validation(self.live_validation);
        for field in &mut next.fields {
            let Some(previous) = self
                .fields
                .iter()
                .rev()
                .find(|old| old.id() == field.id() && old.field.kind == field.field.kind)
            else {
                continue;
            };
            if previous.edited {
                field.set_value(previous.value());
                field.edited = true;
                field.dirty = previous.dirty;
                if next.live_validation {
                    field.validate();
                }
            }
        }
        next.focus = self.focus.min(next.fields.len().saturating_sub(1));
        next
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// How many schema fields had no renderable type.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.fields.get(self.focus)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        self.fields.get_mut(self.focus)
    }

    pub fn focus_next_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = if self.focus == 0 {
            self.fields.len() - 1
        } else {
            self.focus - 1
        };
    }

    /// Route a key to the focused control. Returns whether its value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let live = self.live_validation;
        let Some(field) = self.focused_field_mut() else {
            return false;
        };
        let changed = field.handle_key(key);
        if changed && live {
            field.validate();
        }
        changed
    }

    pub fn set_value_at(&mut self, index: usize, value: &str) -> bool {
        let live = self.live_validation;
        let Some(field) = self.fields.get_mut(index) else {
            return false;
        };
        let changed = field.set_value(value);
        if changed && live {
            field.validate();
        }
        changed
    }

    /// Set the first field with `id`.
    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.fields.iter().position(|field| field.id() == id) {
            Some(index) => self.set_value_at(index, value),
            None => false,
        }
    }

    /// Validate every field and return how many failed.
    pub fn validate_all(&mut self) -> usize {
        self.fields
            .iter_mut()
            .map(|field| field.validate())
            .filter(|passed| !passed)
            .count()
    }

    /// Re-check every field. On success returns the submission record; on
    /// failure every failing field carries its message and focus moves to
    /// the first of them.
    pub fn submit(&mut self) -> Result<SubmissionRecord, SubmitError> {
        let issues = self.validate_all();
        if issues > 0 {
            if let Some(first) = self.fields.iter().position(|field| field.error.is_some()) {
                self.focus = first;
            }
            debug!(issues, "submission blocked");
            return Err(SubmitError::Blocked { issues });
        }

        let mut record = SubmissionRecord::default();
        for field in &mut self.fields {
            record.insert(field.id(), field.value());
            field.dirty = false;
        }
        info!(entries = record.len(), title = %self.title, "form submitted");
        Ok(record)
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| field.dirty)
    }

    pub fn error_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| field.error.is_some())
            .count()
    }
}
