//! Layout components (centered column, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form column grows on large terminals
const MAX_FORM_WIDTH: u16 = 60;

/// Split the screen into the main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Horizontally center a column of at most `MAX_FORM_WIDTH` cells
pub fn centered_column(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(MAX_FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    column
}

/// Draw the key binding hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::DarkGray);

    let spans = if app.state.alerts.is_showing() {
        vec![
            Span::styled("Enter/Esc", key_style),
            Span::styled(" dismiss", text_style),
        ]
    } else {
        vec![
            Span::styled("Tab", key_style),
            Span::styled(" next  ", text_style),
            Span::styled("Shift+Tab", key_style),
            Span::styled(" previous  ", text_style),
            Span::styled(SUBMIT_SHORTCUT, key_style),
            Span::styled(" submit  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" quit", text_style),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_centered_column_caps_width() {
        let column = centered_column(Rect::new(0, 0, 100, 20));
        assert_eq!(column.width, MAX_FORM_WIDTH);
        assert_eq!(column.x, 20);
    }

    #[test]
    fn test_centered_column_uses_narrow_width() {
        let column = centered_column(Rect::new(0, 0, 40, 20));
        assert_eq!(column.width, 40);
        assert_eq!(column.x, 0);
    }
}
