//! Field validation schema
//!
//! The schema is a fixed table of `(field, predicate, message)` rules.
//! Rules for a field are checked in table order and the first failing rule
//! wins; every field is checked independently of the others.

use super::field::{FieldName, FieldValues};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const FULL_NAME_MESSAGE: &str = "Full name must be at least 3 characters";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters";

const FULL_NAME_MIN_CHARS: usize = 3;
const PASSWORD_MIN_CHARS: usize = 8;

// Local part: dot-separated atoms (no leading or doubled dots) whose last
// character is never `.` or `'`.
// Domain: one or more labels followed by an alphabetic TLD.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});

/// A single field failing validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Per-field validation failures; a missing entry means the field passes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<FieldName, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Message for a field, if it currently fails
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries.get(&field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn insert(&mut self, error: FieldError) {
        self.entries.insert(error.field, error);
    }

    /// Failing fields in declared order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.keys().copied()
    }

    /// Keep only the entries whose field satisfies `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(FieldName) -> bool) {
        self.entries.retain(|field, _| keep(*field));
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// One declarative rule
struct Rule {
    field: FieldName,
    check: fn(&str) -> bool,
    message: &'static str,
}

static RULES: [Rule; 3] = [
    Rule {
        field: FieldName::Email,
        check: is_email,
        message: EMAIL_MESSAGE,
    },
    Rule {
        field: FieldName::FullName,
        check: is_full_name,
        message: FULL_NAME_MESSAGE,
    },
    Rule {
        field: FieldName::Password,
        check: is_password,
        message: PASSWORD_MESSAGE,
    },
];

fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

fn is_full_name(value: &str) -> bool {
    value.chars().count() >= FULL_NAME_MIN_CHARS
}

fn is_password(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_CHARS
}

/// Check one field's value against its rules
pub fn validate_field(field: FieldName, value: &str) -> Option<FieldError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !(rule.check)(value))
        .map(|rule| FieldError::new(field, rule.message))
}

/// Check every field; the result holds only failing fields
pub fn validate(values: &FieldValues) -> ValidationErrors {
    FieldName::ALL
        .iter()
        .filter_map(|&field| validate_field(field, values.get(field)))
        .collect()
}
