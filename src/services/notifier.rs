//! Single-slot transient notifications
//!
//! Only one message exists at a time; showing a new one replaces whatever
//! is pending. Expiry is a deadline checked on read, not a timer task.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

impl Notification {
    /// Time left before the message should disappear
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

#[derive(Debug)]
pub struct Notifier {
    ttl: Duration,
    slot: Option<Notification>,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.slot = Some(Notification {
            message: message.into(),
            expires_at: now + self.ttl,
        });
    }

    /// The pending message, if it has not expired yet
    pub fn current(&self, now: Instant) -> Option<&Notification> {
        self.slot.as_ref().filter(|n| now < n.expires_at)
    }

    /// Remove and return the pending message if still live
    pub fn take(&mut self, now: Instant) -> Option<Notification> {
        let live = self.current(now).cloned();
        self.slot = None;
        live
    }
}
