//! Application state and core logic

use crate::config::FormConfig;
use crate::notify::Notifier;
use crate::state::{AppState, SignupData, SignupForm};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Title of the alert shown after a successful submit
pub const SUCCESS_TITLE: &str = "Successful";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Alert dialog is modal
        if self.state.alerts.is_showing() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return Ok(());
        }

        let on_submit_button = self.state.is_submit_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Char('s') if ctrl => self.submit()?,
            KeyCode::Enter if on_submit_button => self.submit()?,
            // Enter on a field behaves like the "next" key on a soft keyboard
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Char(c) if !ctrl && !on_submit_button => self.state.form_input_char(c),
            KeyCode::Backspace if !on_submit_button => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Close the current alert. Closing the success alert starts a fresh form.
    fn dismiss_alert(&mut self) {
        let Some(alert) = self.state.alerts.dismiss() else {
            return;
        };
        if alert.title == SUCCESS_TITLE {
            self.state.form.reset();
            self.state.active_field = 0;
            tracing::debug!("Form reset after successful submit");
        }
    }

    /// Blur the focused field and submit the form
    pub fn submit(&mut self) -> Result<()> {
        self.state.blur_active_field();
        let AppState { form, alerts, .. } = &mut self.state;
        submit_form(form, alerts)?;
        Ok(())
    }
}

/// Submit `form`, reporting valid data through `notifier`.
///
/// Returns whether the form passed validation.
pub fn submit_form(form: &mut SignupForm, notifier: &mut dyn Notifier) -> Result<bool> {
    match form.handle_submit(|data| on_submit(&data, notifier)) {
        Some(outcome) => {
            outcome?;
            Ok(true)
        }
        None => {
            tracing::debug!("Submit blocked by {} invalid field(s)", form.errors().len());
            Ok(false)
        }
    }
}

fn on_submit(data: &SignupData, notifier: &mut dyn Notifier) -> Result<()> {
    let body = data.to_json()?;
    notifier.notify(SUCCESS_TITLE, &body);
    Ok(())
}
