//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered single-line input
pub const FIELD_HEIGHT: u16 = 3;

/// Everything needed to draw one input
pub struct FieldView<'a> {
    /// Shown as the border title and, dimmed, inside an empty input
    pub placeholder: &'a str,
    /// Text to draw (already masked for secure fields)
    pub value: &'a str,
    pub is_active: bool,
    pub has_error: bool,
}

/// Draw a single-line input box
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let border_color = if field.is_active {
        Color::Cyan
    } else if field.has_error {
        Color::Red
    } else {
        Color::DarkGray
    };

    let mut spans = if field.value.is_empty() && !field.is_active {
        vec![Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(field.value)]
    };
    if field.is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.placeholder))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the validation message under a field
pub fn draw_error_message(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line), area);
    }
}
