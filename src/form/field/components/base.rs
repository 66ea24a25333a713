use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    TextInput,
    TextArea,
    Select,
    Radio,
}

/// The editable control behind one rendered field.
pub(crate) trait FieldComponent: FieldComponentClone + std::fmt::Debug {
    fn kind(&self) -> ComponentKind;

    /// The value that goes into the submission record.
    fn value(&self) -> &str;

    fn handle_key(&mut self, key: &KeyEvent) -> bool;

    /// Set the value directly. Choice controls refuse values that are not
    /// one of their options.
    fn set_value(&mut self, value: &str) -> bool;

    fn choices(&self) -> Option<ChoiceStateRef<'_>> {
        None
    }

    fn select_choice(&mut self, _index: usize) -> bool {
        false
    }
}

pub(crate) trait FieldComponentClone {
    fn clone_box(&self) -> Box<dyn FieldComponent>;
}

impl<T> FieldComponentClone for T
where
    T: 'static + FieldComponent + Clone,
{
    fn clone_box(&self) -> Box<dyn FieldComponent> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn FieldComponent> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone)]
pub struct ChoiceStateRef<'a> {
    pub labels: &'a [String],
    pub selected: Option<usize>,
}
