//! Sign-up form rendering

use super::field_renderer::{draw_error_message, draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const HEADING_HEIGHT: u16 = 2;
const ERROR_HEIGHT: u16 = 1;

/// Draw the heading, the three inputs with their errors and the submit button
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let snapshot = state.form.snapshot();

    let mut constraints = vec![Constraint::Length(HEADING_HEIGHT)];
    for _ in FieldName::ALL {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::vertical(constraints)
        .flex(Flex::Center)
        .split(area);

    let heading = Paragraph::new(state.heading.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    for name in FieldName::ALL {
        let row = 1 + name.index() * 2;
        let value = state.display_value(name);
        let error = snapshot.errors.get(name);

        draw_field(
            frame,
            chunks[row],
            &FieldView {
                placeholder: name.placeholder(),
                value: &value,
                is_active: state.active_field == name.index(),
                has_error: error.is_some(),
            },
        );
        draw_error_message(frame, chunks[row + 1], error);
    }

    render_button(
        frame,
        chunks[chunks.len() - 1],
        "Submit",
        state.is_submit_active(),
    );
}
