//! Form rendering module
//!
//! - `field_renderer`: input box and error line drawing
//! - `signup_form`: the sign-up screen layout

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup_form;
