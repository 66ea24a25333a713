use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::form::{ComponentKind, FieldState, FormState};

use super::editor::border_style;

const INDENT: &str = "  ";
const TEXT_PREFIX: &str = "  > ";
const AREA_PREFIX: &str = "  │ ";
const TEXTAREA_ROWS: usize = 4;

pub fn render_form(frame: &mut Frame<'_>, area: Rect, form: &FormState, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(" Form Preview ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let layout = form_lines(form, inner.width as usize);
    let height = inner.height as usize;
    let offset = match layout.focus_span {
        Some((start, end)) if end > height => (end - height).min(start),
        _ => 0,
    };
    let paragraph = Paragraph::new(layout.lines).scroll((offset as u16, 0));
    frame.render_widget(paragraph, inner);

    if focused
        && let Some((row, col)) = layout.cursor
        && row >= offset
        && row - offset < height
    {
        frame.set_cursor_position(Position::new(
            inner.x + (col as u16).min(inner.width - 1),
            inner.y + (row - offset) as u16,
        ));
    }
}

pub(super) struct FormLayout {
    pub lines: Vec<Line<'static>>,
    /// Line range `[start, end)` covered by the focused field.
    pub focus_span: Option<(usize, usize)>,
    /// Line and display column of the text cursor in the focused field.
    pub cursor: Option<(usize, usize)>,
}

pub(super) fn form_lines(form: &FormState, width: usize) -> FormLayout {
    let mut lines = Vec::new();
    let mut focus_span = None;
    let mut cursor = None;

    let title_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    for row in textwrap::wrap(form.title(), width.max(1)) {
        lines.push(Line::from(Span::styled(row.into_owned(), title_style)));
    }
    if !form.description().is_empty() {
        for row in textwrap::wrap(form.description(), width.max(1)) {
            lines.push(Line::from(Span::styled(
                row.into_owned(),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    lines.push(Line::default());

    if form.is_empty() {
        lines.push(Line::from(Span::styled(
            "This schema has no fields to show.",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }

    for (index, field) in form.fields().iter().enumerate() {
        let focused = index == form.focus_index();
        let start = lines.len();
        let rendered = field_lines(field, focused, width);
        if focused {
            cursor = rendered.cursor.map(|(row, col)| (start + row, col));
        }
        lines.extend(rendered.lines);
        if focused {
            focus_span = Some((start, lines.len()));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled(
            "[ Submit ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Ctrl+S", Style::default().fg(Color::DarkGray)),
    ]));

    FormLayout {
        lines,
        focus_span,
        cursor,
    }
}

struct FieldLines {
    lines: Vec<Line<'static>>,
    cursor: Option<(usize, usize)>,
}

fn field_lines(field: &FieldState, focused: bool, width: usize) -> FieldLines {
    let mut lines = Vec::new();
    let mut cursor = None;

    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let mut label = vec![
        Span::raw(if focused { "» " } else { INDENT }),
        Span::styled(field.field.display_label().to_string(), label_style),
    ];
    if field.is_required() {
        label.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    lines.push(Line::from(label));

    let placeholder = field.field.placeholder.as_deref().unwrap_or("");
    let hint = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let value = field.value();

    match field.component_kind() {
        ComponentKind::TextInput => {
            let text = if value.is_empty() {
                Span::styled(placeholder.to_string(), hint)
            } else {
                Span::raw(value.to_string())
            };
            cursor = Some((
                lines.len(),
                UnicodeWidthStr::width(TEXT_PREFIX) + UnicodeWidthStr::width(value),
            ));
            lines.push(Line::from(vec![Span::raw(TEXT_PREFIX), text]));
        }
        ComponentKind::TextArea => {
            let rows: Vec<&str> = if value.is_empty() {
                Vec::new()
            } else {
                value.split('\n').collect()
            };
            let first = lines.len();
            for index in 0..rows.len().max(TEXTAREA_ROWS) {
                let text = match rows.get(index) {
                    Some(row) => Span::raw(row.to_string()),
                    None if index == 0 && rows.is_empty() => {
                        Span::styled(placeholder.to_string(), hint)
                    }
                    None => Span::raw(""),
                };
                lines.push(Line::from(vec![Span::raw(AREA_PREFIX), text]));
            }
            let last = rows.len().saturating_sub(1);
            let tail = rows.last().copied().unwrap_or("");
            cursor = Some((
                first + last,
                UnicodeWidthStr::width(AREA_PREFIX) + UnicodeWidthStr::width(tail),
            ));
        }
        ComponentKind::Select => {
            if let Some(choices) = field.choices() {
                let shown = choices
                    .selected
                    .and_then(|index| choices.labels.get(index))
                    .or_else(|| choices.labels.first())
                    .cloned()
                    .unwrap_or_default();
                let style = if value.is_empty() {
                    hint
                } else {
                    Style::default().fg(Color::White)
                };
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(shown, style),
                    Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
                ]));
            }
        }
        ComponentKind::Radio => {
            if let Some(choices) = field.choices() {
                let mut row: Vec<Span<'static>> = vec![Span::raw(INDENT)];
                let mut used = INDENT.len();
                for (index, label) in choices.labels.iter().enumerate() {
                    let picked = choices.selected == Some(index);
                    let item = format!("{} {label}", if picked { "(•)" } else { "( )" });
                    let item_width = UnicodeWidthStr::width(item.as_str()) + 2;
                    if used + item_width > width && row.len() > 1 {
                        lines.push(Line::from(std::mem::take(&mut row)));
                        row.push(Span::raw(INDENT));
                        used = INDENT.len();
                    }
                    let style = if picked {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                    };
                    row.push(Span::styled(item, style));
                    row.push(Span::raw("  "));
                    used += item_width;
                }
                lines.push(Line::from(row));
            }
        }
    }

    if let Some(error) = &field.error {
        for row in textwrap::wrap(error, width.saturating_sub(4).max(1)) {
            lines.push(Line::from(Span::styled(
                format!("  ! {row}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    FieldLines { lines, cursor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project_survey;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn focused_field_span_and_cursor() {
        let mut form = FormState::from_schema(&project_survey());
        form.focus_next_field();
        form.set_value("email", "ada@example.com");
        let layout = form_lines(&form, 60);
        let (start, end) = layout.focus_span.unwrap();
        assert_eq!(plain(&layout.lines[start]), "» Email Address *");
        assert_eq!(end - start, 2);
        assert_eq!(layout.cursor, Some((start + 1, 19)));
    }

    #[test]
    fn errors_render_under_the_field() {
        let mut form = FormState::from_schema(&project_survey());
        assert!(form.submit().is_err());
        let text: Vec<String> = form_lines(&form, 60).lines.iter().map(plain).collect();
        assert!(text.iter().any(|line| line == "  ! Full Name is required"));
        assert!(text.iter().any(|line| line == "  ◂ Select Company Size ▸"));
        assert_eq!(text.last().map(String::as_str), Some("[ Submit ]  Ctrl+S"));
    }
}
