//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_signup_form(frame, layout::centered_column(main_area), app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal alert goes on top of everything
    if let Some(alert) = app.state.alerts.current() {
        components::render_alert_dialog(frame, alert);
    }
}
