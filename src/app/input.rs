use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::Pane;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Submit,
    Quit,
    SwitchPane,
    ResetStatus,
    NextField,
    PrevField,
    Edit(KeyEvent),
    None,
}

pub const HELP_TEXT: &str =
    "Ctrl+W switch pane • Tab/Shift+Tab next/prev field • ←/→ change choice • Ctrl+S submit • Ctrl+Q quit";

pub fn classify(key: &KeyEvent, pane: Pane) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            KeyCode::Char('w') | KeyCode::Char('W') => KeyCommand::SwitchPane,
            _ => KeyCommand::None,
        };
    }

    match (pane, key.code) {
        (_, KeyCode::Esc) => KeyCommand::ResetStatus,
        (_, KeyCode::F(2)) => KeyCommand::SwitchPane,
        (Pane::Form, KeyCode::Tab | KeyCode::Down) => KeyCommand::NextField,
        (Pane::Form, KeyCode::BackTab | KeyCode::Up) => KeyCommand::PrevField,
        _ => KeyCommand::Edit(*key),
    }
}
