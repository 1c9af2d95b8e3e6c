//! Toast notifications.
//!
//! A single toast slot: showing a new toast replaces whatever is on screen.
//! Expiry is measured against a caller-supplied instant so the state owns no
//! timers.

use std::time::{Duration, Instant};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
}

#[derive(Debug, Default)]
pub struct Toasts {
    current: Option<(Toast, Instant)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast with the default duration, replacing any existing one.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.show_for(message, DEFAULT_DURATION, now);
    }

    /// Show a toast with an explicit duration, replacing any existing one.
    pub fn show_for(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.current = Some((
            Toast {
                message: message.into(),
                duration,
            },
            now,
        ));
    }

    /// The toast currently on screen, dropping it first if it has expired.
    pub fn active(&mut self, now: Instant) -> Option<&Toast> {
        if let Some((toast, shown_at)) = &self.current {
            if now.duration_since(*shown_at) >= toast.duration {
                self.current = None;
            }
        }
        self.current.as_ref().map(|(toast, _)| toast)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
