use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::editor::SchemaEditor;

pub fn render_editor(frame: &mut Frame<'_>, area: Rect, editor: &SchemaEditor, focused: bool) {
    let error = editor.error().map(ToString::to_string);
    let (text_area, error_area) = match &error {
        Some(message) => {
            let width = area.width.saturating_sub(2).max(1) as usize;
            let wrapped = textwrap::wrap(message, width).len().max(1) as u16;
            let height = (wrapped + 2).min(area.height / 2).max(3);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(height)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        }
        None => (area, None),
    };

    let marker = if editor.is_valid() {
        Span::styled(" valid ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" invalid ", Style::default().fg(Color::Red))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(Line::from(vec![Span::raw(" JSON Schema "), marker]));
    let inner = block.inner(text_area);
    frame.render_widget(block, text_area);

    let buffer = editor.buffer();
    let cursor = buffer.cursor();
    let gutter = buffer.line_count().to_string().len();
    let height = inner.height as usize;
    let offset = scroll_offset(cursor.row, height);

    let lines: Vec<Line<'_>> = buffer
        .lines()
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(row, text)| {
            let number_style = if row == cursor.row {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("{:>gutter$} ", row + 1), number_style),
                Span::raw(text.as_str()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused && inner.width > 0 && inner.height > 0 {
        let line = buffer.lines().get(cursor.row).map(String::as_str).unwrap_or("");
        let before: String = line.chars().take(cursor.col).collect();
        let x = (gutter + 1 + UnicodeWidthStr::width(before.as_str())) as u16;
        let y = (cursor.row - offset) as u16;
        frame.set_cursor_position(Position::new(
            inner.x + x.min(inner.width - 1),
            inner.y + y,
        ));
    }

    if let (Some(message), Some(area)) = (error, error_area) {
        let widget = Paragraph::new(message)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(Span::styled(
                        " Error ",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
            );
        frame.render_widget(widget, area);
    }
}

pub(super) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// First visible row so that `cursor_row` stays inside a window of `height` rows.
pub(super) fn scroll_offset(cursor_row: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        cursor_row.saturating_sub(height - 1)
    }
}
