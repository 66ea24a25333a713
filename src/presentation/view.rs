use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{editor::SchemaEditor, form::FormState};

use super::components::{render_editor, render_footer, render_form, render_popup};

/// Which half of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Editor,
    Form,
}

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub editor: &'a SchemaEditor,
    pub form: &'a FormState,
    pub pane: Pane,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub lines: &'a [String],
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let header_height = if ctx.title.is_some() { 1 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(7),
            Constraint::Length(4),
        ])
        .split(frame.area());

    if let Some(title) = ctx.title {
        let header = Paragraph::new(Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(header, rows[0]);
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let cursor_enabled = ctx.popup.is_none();
    render_editor(
        frame,
        panes[0],
        ctx.editor,
        cursor_enabled && ctx.pane == Pane::Editor,
    );
    render_form(
        frame,
        panes[1],
        ctx.form,
        cursor_enabled && ctx.pane == Pane::Form,
    );
    render_footer(frame, rows[2], &ctx);

    if let Some(popup) = ctx.popup {
        render_popup(frame, popup);
    }
}
