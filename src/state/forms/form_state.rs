//! Form state container for the sign-up form

use super::field::{FieldName, FieldValues, SignupData};
use super::schema::{validate, ValidationErrors};
use std::collections::BTreeSet;

/// Lifecycle of the form between submit attempts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// At least one field has been edited or blurred since the last submit.
    /// The fields themselves live in the form's `touched` and `dirty` sets,
    /// queried through `SignupForm::is_touched` / `is_dirty`.
    Touched,
    SubmittedValid,
    SubmittedInvalid,
}

/// Read-only view of everything the render layer needs
#[derive(Debug, Clone, Copy)]
pub struct FormSnapshot<'a> {
    pub values: &'a FieldValues,
    pub errors: &'a ValidationErrors,
}

/// Holds field values and the errors currently shown for them.
///
/// `errors` only ever contains entries for fields whose error is visible:
/// fields that were edited or blurred, or every field once a submit has been
/// attempted. Visible errors are recomputed after every mutation.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    values: FieldValues,
    errors: ValidationErrors,
    touched: BTreeSet<FieldName>,
    dirty: BTreeSet<FieldName>,
    status: FormStatus,
    submit_count: u32,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a field's value (text change)
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.values.set(name, value.into());
        self.dirty.insert(name);
        self.status = FormStatus::Touched;
        self.revalidate();
        tracing::trace!(field = %name, "field changed");
    }

    /// Mark a field as interacted with (blur)
    pub fn mark_touched(&mut self, name: FieldName) {
        self.touched.insert(name);
        self.status = FormStatus::Touched;
        self.revalidate();
        tracing::trace!(field = %name, "field blurred");
    }

    /// Validate every field and report the outcome.
    ///
    /// Returns an owned copy of the values when all rules pass. Otherwise
    /// the failures are stored for render and `None` is returned.
    pub fn submit(&mut self) -> Option<SignupData> {
        self.submit_count += 1;
        self.errors = validate(&self.values);

        if self.errors.is_empty() {
            self.status = FormStatus::SubmittedValid;
            tracing::info!(attempt = self.submit_count, "form submitted");
            Some(self.values.clone())
        } else {
            self.status = FormStatus::SubmittedInvalid;
            let failing: Vec<_> = self.errors.fields().map(|f| f.as_str()).collect();
            tracing::info!(
                attempt = self.submit_count,
                failing = ?failing,
                "form submit rejected"
            );
            None
        }
    }

    /// Run `on_valid` with the submitted data if validation passes
    pub fn handle_submit<F, R>(&mut self, on_valid: F) -> Option<R>
    where
        F: FnOnce(SignupData) -> R,
    {
        self.submit().map(on_valid)
    }

    /// Restore the pristine state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.values.get(name)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Error currently shown for a field
    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_touched(&self, name: FieldName) -> bool {
        self.touched.contains(&name)
    }

    pub fn is_dirty(&self, name: FieldName) -> bool {
        self.dirty.contains(&name)
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn snapshot(&self) -> FormSnapshot<'_> {
        FormSnapshot {
            values: &self.values,
            errors: &self.errors,
        }
    }

    fn is_error_visible(&self, name: FieldName) -> bool {
        self.submit_count > 0 || self.touched.contains(&name) || self.dirty.contains(&name)
    }

    fn revalidate(&mut self) {
        let mut errors = validate(&self.values);
        errors.retain(|field| self.is_error_visible(field));
        self.errors = errors;
    }
}
