//! Form domain layer
//!
//! - `field`: field names and the value record
//! - `schema`: declarative validation rules
//! - `form_state`: the state container driven by input events

mod field;
mod form_state;
mod schema;

pub use field::{FieldName, FieldValues, SignupData};
pub use form_state::{FormSnapshot, FormStatus, SignupForm};
pub use schema::{
    validate, validate_field, FieldError, ValidationErrors, EMAIL_MESSAGE, FULL_NAME_MESSAGE,
    PASSWORD_MESSAGE,
};
