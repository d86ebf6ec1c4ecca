//! Form field names and value objects

use serde::Serialize;
use std::fmt;

/// The fields of the sign-up form, in declared order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Email,
    FullName,
    Password,
}

impl FieldName {
    /// All fields in render and serialization order
    pub const ALL: [FieldName; 3] = [FieldName::Email, FieldName::FullName, FieldName::Password];

    /// Key used in serialized payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::FullName => "full_name",
            FieldName::Password => "password",
        }
    }

    /// Placeholder shown when the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::FullName => "full name",
            FieldName::Password => "password",
        }
    }

    /// Whether the input should be masked on screen
    pub fn is_secure(&self) -> bool {
        matches!(self, FieldName::Password)
    }

    /// Position in the declared order
    pub fn index(&self) -> usize {
        match self {
            FieldName::Email => 0,
            FieldName::FullName => 1,
            FieldName::Password => 2,
        }
    }

    /// Field at a position in the declared order
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current text content of every form field.
///
/// All three keys are always present; the struct layout fixes the
/// serialization order to email, full_name, password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl FieldValues {
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::Email => &self.email,
            FieldName::FullName => &self.full_name,
            FieldName::Password => &self.password,
        }
    }

    pub fn set(&mut self, name: FieldName, value: String) {
        *self.slot_mut(name) = value;
    }

    fn slot_mut(&mut self, name: FieldName) -> &mut String {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::FullName => &mut self.full_name,
            FieldName::Password => &mut self.password,
        }
    }

    /// Serialize as compact JSON in declared field order
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Validated form data handed to the completion callback.
///
/// An owned copy of the values at submit time; later edits to the form
/// never reach it.
pub type SignupData = FieldValues;
