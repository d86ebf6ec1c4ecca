//! Platform-specific configuration

/// Submit shortcut display for help text.
/// Ctrl+S on every platform.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
