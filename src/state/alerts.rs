//! Queue of pending modal alerts

use crate::notify::Notifier;
use std::collections::VecDeque;

/// A titled message waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

/// FIFO of alerts; the front alert is the one on screen
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    pending: VecDeque<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.pending.push_back(Alert {
            title: title.into(),
            body: body.into(),
        });
    }

    /// Alert currently on screen
    pub fn current(&self) -> Option<&Alert> {
        self.pending.front()
    }

    pub fn is_showing(&self) -> bool {
        !self.is_empty()
    }

    /// Close the alert on screen, revealing the next one if any
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for AlertQueue {
    fn notify(&mut self, title: &str, body: &str) {
        self.push(title, body);
    }
}
