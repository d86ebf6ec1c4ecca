//! Application state definitions

use super::alerts::AlertQueue;
use super::forms::{FieldName, SignupForm};
use crate::config::FormConfig;

/// Heading shown above the form when none is configured
pub const DEFAULT_HEADING: &str = "Simple Login Form";

/// Focus index of the submit button (after the three fields)
pub const SUBMIT_BUTTON_INDEX: usize = 3;

/// Number of focusable rows: three fields plus the submit button
pub const FOCUS_COUNT: usize = SUBMIT_BUTTON_INDEX + 1;

/// Character drawn in place of each password character
pub const MASK_CHAR: char = '•';

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: SignupForm,
    pub alerts: AlertQueue,
    /// Focused row (0-2 = fields, 3 = submit button)
    pub active_field: usize,
    pub mask_password: bool,
    pub heading: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: SignupForm::new(),
            alerts: AlertQueue::default(),
            active_field: 0,
            mask_password: true,
            heading: DEFAULT_HEADING.to_string(),
        }
    }
}

impl AppState {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            mask_password: config.mask_password.unwrap_or(true),
            heading: config
                .heading
                .clone()
                .unwrap_or_else(|| DEFAULT_HEADING.to_string()),
            ..Default::default()
        }
    }

    /// Field under focus, or `None` when the submit button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field == SUBMIT_BUTTON_INDEX
    }

    /// Blur the focused field, if any
    pub fn blur_active_field(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.form.mark_touched(name);
        }
    }

    /// Move focus forward, blurring the field being left
    pub fn next_form_field(&mut self) {
        self.blur_active_field();
        self.active_field = (self.active_field + 1) % FOCUS_COUNT;
    }

    /// Move focus backward, blurring the field being left
    pub fn prev_form_field(&mut self) {
        self.blur_active_field();
        self.active_field = if self.active_field == 0 {
            FOCUS_COUNT - 1
        } else {
            self.active_field - 1
        };
    }

    /// Append a character to the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            let mut value = self.form.value(name).to_string();
            value.push(c);
            self.form.set_field(name, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn form_backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            let mut value = self.form.value(name).to_string();
            if value.pop().is_some() {
                self.form.set_field(name, value);
            }
        }
    }

    /// Text to draw for a field, masked for secure fields
    pub fn display_value(&self, name: FieldName) -> String {
        let value = self.form.value(name);
        if name.is_secure() && self.mask_password {
            value.chars().map(|_| MASK_CHAR).collect()
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod focus {
        use super::*;

        #[test]
        fn test_default_focuses_email() {
            let state = AppState::default();
            assert_eq!(state.active_field, 0);
            assert_eq!(state.active_field_name(), Some(FieldName::Email));
            assert!(!state.is_submit_active());
        }

        #[test]
        fn test_next_field_cycles_through_submit() {
            let mut state = AppState::default();
            for _ in 0..3 {
                state.next_form_field();
            }
            assert!(state.is_submit_active());
            assert_eq!(state.active_field_name(), None);
            state.next_form_field();
            assert_eq!(state.active_field, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut state = AppState::default();
            state.prev_form_field();
            assert_eq!(state.active_field, SUBMIT_BUTTON_INDEX);
        }

        #[test]
        fn test_leaving_a_field_blurs_it() {
            let mut state = AppState::default();
            state.next_form_field();
            assert!(state.form.is_touched(FieldName::Email));
            assert!(state.form.error(FieldName::Email).is_some());
            assert!(!state.form.is_touched(FieldName::FullName));
        }

        #[test]
        fn test_leaving_submit_blurs_nothing() {
            let mut state = AppState {
                active_field: SUBMIT_BUTTON_INDEX,
                ..Default::default()
            };
            state.next_form_field();
            assert!(state.form.errors().is_empty());
        }
    }

    mod input {
        use super::*;

        #[test]
        fn test_input_char_appends_to_active_field() {
            let mut state = AppState::default();
            state.form_input_char('a');
            state.form_input_char('@');
            assert_eq!(state.form.value(FieldName::Email), "a@");
            assert!(state.form.is_dirty(FieldName::Email));
        }

        #[test]
        fn test_input_char_on_submit_is_ignored() {
            let mut state = AppState {
                active_field: SUBMIT_BUTTON_INDEX,
                ..Default::default()
            };
            state.form_input_char('x');
            for name in FieldName::ALL {
                assert_eq!(state.form.value(name), "");
            }
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut state = AppState::default();
            state.form.set_field(FieldName::Email, "ab");
            state.form_backspace();
            assert_eq!(state.form.value(FieldName::Email), "a");
        }

        #[test]
        fn test_backspace_on_empty_field_keeps_it_clean() {
            let mut state = AppState::default();
            state.form_backspace();
            assert!(!state.form.is_dirty(FieldName::Email));
        }

        #[test]
        fn test_backspace_handles_multibyte_chars() {
            let mut state = AppState::default();
            state.active_field = FieldName::FullName.index();
            state.form.set_field(FieldName::FullName, "Zoë");
            state.form_backspace();
            assert_eq!(state.form.value(FieldName::FullName), "Zo");
        }
    }

    mod display {
        use super::*;

        #[test]
        fn test_password_is_masked_by_default() {
            let mut state = AppState::default();
            state.form.set_field(FieldName::Password, "secret");
            assert_eq!(state.display_value(FieldName::Password), "••••••");
        }

        #[test]
        fn test_password_shown_when_masking_disabled() {
            let mut state = AppState {
                mask_password: false,
                ..Default::default()
            };
            state.form.set_field(FieldName::Password, "secret");
            assert_eq!(state.display_value(FieldName::Password), "secret");
        }

        #[test]
        fn test_plain_fields_are_never_masked() {
            let mut state = AppState::default();
            state.form.set_field(FieldName::Email, "a@b.com");
            assert_eq!(state.display_value(FieldName::Email), "a@b.com");
        }
    }

    mod from_config {
        use super::*;

        #[test]
        fn test_defaults_when_config_empty() {
            let state = AppState::from_config(&FormConfig::default());
            assert!(state.mask_password);
            assert_eq!(state.heading, DEFAULT_HEADING);
        }

        #[test]
        fn test_config_overrides() {
            let config = FormConfig {
                mask_password: Some(false),
                heading: Some("Sign Up".to_string()),
                ..Default::default()
            };
            let state = AppState::from_config(&config);
            assert!(!state.mask_password);
            assert_eq!(state.heading, "Sign Up");
        }
    }
}
