//! Modal notification capability

mod traits;

pub use traits::Notifier;

#[cfg(test)]
pub use traits::MockNotifier;
