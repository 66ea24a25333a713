use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::super::view::PopupRender;

const CLOSE_HINT: &str = "Press any key to close";

pub fn render_popup(frame: &mut Frame<'_>, popup: PopupRender<'_>) {
    let content_width = popup
        .lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .chain([
            UnicodeWidthStr::width(popup.title),
            UnicodeWidthStr::width(CLOSE_HINT),
        ])
        .max()
        .unwrap_or(10) as u16;
    let width = content_width.saturating_add(4);
    let height = (popup.lines.len() as u16).saturating_add(4);
    let area = centered(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line<'static>> = popup
        .lines
        .iter()
        .map(|line| Line::from(line.clone()))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        CLOSE_HINT,
        Style::default().fg(Color::DarkGray),
    )));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(popup.title.to_string())
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
        );
    frame.render_widget(body, area);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
