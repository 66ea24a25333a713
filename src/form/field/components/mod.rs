mod base;
pub(crate) mod helpers;
mod radio;
mod select;
mod text;
mod textarea;

pub(crate) use base::FieldComponent;
pub use base::{ChoiceStateRef, ComponentKind};
pub use radio::RadioComponent;
pub use select::SelectComponent;
pub use text::TextComponent;
pub use textarea::TextAreaComponent;

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::domain::{FieldKind, FormField, FormFieldOption};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn choice_field(kind: FieldKind) -> FormField {
        FormField {
            id: "size".into(),
            kind,
            label: "Company Size".into(),
            required: true,
            placeholder: None,
            options: Some(vec![
                FormFieldOption::new("1-50", "1-50 employees"),
                FormFieldOption::new("51-200", "51-200 employees"),
            ]),
            validation: None,
        }
    }

    #[test]
    fn text_component_ignores_control_chords() {
        let mut text = TextComponent::new();
        assert!(text.handle_key(&key(KeyCode::Char('a'))));
        let ctrl_b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL);
        assert!(!text.handle_key(&ctrl_b));
        assert!(!text.handle_key(&key(KeyCode::Enter)));
        assert_eq!(text.value(), "a");
        assert!(text.handle_key(&key(KeyCode::Backspace)));
        assert!(!text.handle_key(&key(KeyCode::Backspace)));
    }

    #[test]
    fn textarea_accepts_newlines() {
        let mut area = TextAreaComponent::new();
        area.handle_key(&key(KeyCode::Char('a')));
        area.handle_key(&key(KeyCode::Enter));
        area.handle_key(&key(KeyCode::Char('b')));
        assert_eq!(area.value(), "a\nb");
        assert_eq!(area.kind(), ComponentKind::TextArea);
    }

    #[test]
    fn select_starts_on_placeholder_and_wraps() {
        let mut select = SelectComponent::new(&choice_field(FieldKind::Select));
        let view = select.choices().unwrap();
        assert_eq!(view.labels[0], "Select Company Size");
        assert_eq!(view.selected, Some(0));
        assert_eq!(select.value(), "");
        assert!(select.handle_key(&key(KeyCode::Right)));
        assert_eq!(select.value(), "1-50");
        assert!(select.handle_key(&key(KeyCode::Left)));
        assert!(select.handle_key(&key(KeyCode::Left)));
        assert_eq!(select.value(), "51-200");
    }

    #[test]
    fn unlabeled_select_names_itself_by_id() {
        let mut field = choice_field(FieldKind::Select);
        field.label.clear();
        let select = SelectComponent::new(&field);
        assert_eq!(select.choices().unwrap().labels[0], "Select size");
        assert_eq!(
            crate::form::FieldRules::for_field(&field).check(""),
            Err("size is required".to_string())
        );
    }

    #[test]
    fn select_refuses_unknown_values() {
        let mut select = SelectComponent::new(&choice_field(FieldKind::Select));
        assert!(!select.set_value("9000"));
        assert!(select.set_value("51-200"));
        assert!(!select.set_value("51-200"));
        assert!(select.set_value(""));
        assert_eq!(select.value(), "");
    }

    #[test]
    fn radio_has_no_initial_selection() {
        let mut radio = RadioComponent::new(&choice_field(FieldKind::Radio));
        assert_eq!(radio.choices().unwrap().selected, None);
        assert_eq!(radio.value(), "");
        assert!(radio.handle_key(&key(KeyCode::Char(' '))));
        assert_eq!(radio.value(), "1-50");
        assert!(!radio.handle_key(&key(KeyCode::Char(' '))));
        assert!(radio.select_choice(1));
        assert_eq!(radio.value(), "51-200");
    }
}
