use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::FormFieldOption;

use super::ChoiceStateRef;

/// Single-line text editing shared by the text-like controls.
pub(crate) fn handle_text_edit(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}

/// Parallel option values/labels with an optional selection.
#[derive(Debug, Clone)]
pub(crate) struct ChoiceList {
    values: Vec<String>,
    labels: Vec<String>,
    selected: Option<usize>,
}

impl ChoiceList {
    pub(crate) fn new(options: &[FormFieldOption]) -> Self {
        Self {
            values: options.iter().map(|option| option.value.clone()).collect(),
            labels: options.iter().map(|option| option.label.clone()).collect(),
            selected: None,
        }
    }

    /// Prepend an entry submitting the empty string, selected initially.
    pub(crate) fn with_placeholder(mut self, label: String) -> Self {
        self.values.insert(0, String::new());
        self.labels.insert(0, label);
        self.selected = Some(0);
        self
    }

    pub(crate) fn value(&self) -> &str {
        self.selected
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub(crate) fn view(&self) -> ChoiceStateRef<'_> {
        ChoiceStateRef {
            labels: &self.labels,
            selected: self.selected,
        }
    }

    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index >= self.values.len() || self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub(crate) fn select_value(&mut self, value: &str) -> bool {
        match self.values.iter().rposition(|candidate| candidate == value) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Move the selection by `delta`, wrapping. With nothing selected the
    /// first step lands on the first or last entry.
    pub(crate) fn step(&mut self, delta: i32) -> bool {
        let len = self.values.len() as i32;
        if len == 0 {
            return false;
        }
        let next = match self.selected {
            Some(current) => ((current as i32 + delta) % len + len) % len,
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.select(next as usize)
    }
}
