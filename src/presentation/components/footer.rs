use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    if let Some(help) = ctx.help {
        let actions = Paragraph::new(format!("Actions: {help}"))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(actions, rows[0]);
    }

    let error_count = ctx.form.error_count();
    let mut status = ctx.status_message.to_string();
    if ctx.form.is_dirty() {
        status.push_str(" • unsubmitted input");
    }
    if !ctx.editor.is_valid() {
        status.push_str(" • schema: invalid");
    }
    if ctx.form.skipped() > 0 {
        status.push_str(&format!(" • skipped: {}", ctx.form.skipped()));
    }
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }

    let badge = if error_count > 0 {
        Span::styled(
            format!("[! {error_count}]"),
            Style::default().fg(Color::Red).bg(Color::Black),
        )
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };

    let status_widget = Paragraph::new(Line::from(vec![
        Span::raw("Status: "),
        Span::raw(status),
        Span::raw(" "),
        badge,
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(status_widget, rows[1]);
}
