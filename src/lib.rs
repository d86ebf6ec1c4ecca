//! Signup Form TUI - a single-screen sign-up form in the terminal
//!
//! Collects an email, a full name and a password, validates them on the
//! client and shows the submitted data in an alert.

pub mod app;
pub mod config;
pub mod notify;
pub mod platform;
pub mod state;
pub mod ui;
