//! One-second tick schedule.

use std::time::{Duration, Instant};

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A repeating one-second deadline.
///
/// Armed only while the timer counts down. Disarming drops any pending tick.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_due: None }
    }

    /// Schedule the first tick one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + TICK_INTERVAL);
    }

    /// Cancel the schedule.
    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// When the next tick is due, if armed.
    #[must_use]
    pub const fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Consume one due tick, if any.
    ///
    /// The deadline advances by exactly one interval, so a late poll catches
    /// up tick by tick instead of drifting.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(due + TICK_INTERVAL);
                true
            }
            _ => false,
        }
    }
}
