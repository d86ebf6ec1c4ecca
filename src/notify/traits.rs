//! Trait abstraction for user notifications to enable mocking in tests

/// Presents a titled message to the user
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show `body` under `title`
    fn notify(&mut self, title: &str, body: &str);
}
