//! Typing quiet-period debouncer.
//!
//! Converts raw composer keystrokes into edge-triggered typing signals:
//! the first keystroke of a burst starts the indication and a quiet period
//! with no keystrokes ends it. Deterministic over caller-supplied instants
//! so the deadline can be driven by real ticks or by tests.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before typing stops.
pub const TYPING_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// Deadline holder for the typing quiet period.
///
/// The `is_typing` flag itself lives in [`crate::Session`]; the debouncer
/// only tracks the pending deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypingDebouncer {
    deadline: Option<Instant>,
}

impl TypingDebouncer {
    /// Create a debouncer with no pending deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arm the quiet period from `now`. Called on every keystroke.
    pub fn rearm(&mut self, now: Instant) {
        self.deadline = Some(now + TYPING_QUIET_PERIOD);
    }

    /// Cancel the pending deadline, if any.
    ///
    /// Must be called whenever something else ends the typing indication
    /// (message sent, room left, connection lost) so a stale deadline
    /// cannot fire into a later state.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the deadline if `now` has reached it.
    ///
    /// Returns `true` at most once per armed period; firing clears the
    /// deadline so a later tick cannot fire again.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            },
            _ => false,
        }
    }
}
