//! Drives a [`TimerSession`] from user actions and the wall clock.

use std::rc::Rc;
use std::time::Instant;

use super::feedback::{Feedback, FeedbackSink};
use super::ticker::Ticker;
use super::timer::{Mode, TickOutcome, TimerSession, TimerSnapshot};

/// A timer session plus its tick schedule and feedback sink.
///
/// Every path that stops the countdown also disarms the ticker, so there is
/// never more than one live schedule per session.
pub struct FocusTimer {
    session: TimerSession,
    ticker: Ticker,
    feedback: Rc<dyn FeedbackSink>,
}

impl std::fmt::Debug for FocusTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusTimer")
            .field("session", &self.session)
            .field("ticker", &self.ticker)
            .finish_non_exhaustive()
    }
}

impl FocusTimer {
    /// Create a timer in its default state.
    #[must_use]
    pub fn new(feedback: Rc<dyn FeedbackSink>) -> Self {
        Self {
            session: TimerSession::new(),
            ticker: Ticker::new(),
            feedback,
        }
    }

    /// Start or pause.
    pub fn toggle(&mut self, now: Instant) {
        self.session.toggle();
        if self.session.is_counting() {
            self.ticker.arm(now);
        } else {
            self.ticker.disarm();
        }
        log::debug!(
            "timer {} at {}",
            if self.session.is_running() { "started" } else { "paused" },
            self.session.format_remaining()
        );
        self.feedback.notify(Feedback::Medium);
    }

    /// Stop and refill the current interval.
    pub fn reset(&mut self) {
        self.session.reset();
        self.ticker.disarm();
        log::debug!("timer reset in {} mode", self.session.mode());
        self.feedback.notify(Feedback::Light);
    }

    /// Stop and move to the other mode.
    pub fn switch_mode(&mut self) {
        self.session.switch_mode();
        self.ticker.disarm();
        log::debug!("timer switched to {} mode", self.session.mode());
        self.feedback.notify(Feedback::Light);
    }

    /// Switch to `mode` unless it is already active.
    pub fn select_mode(&mut self, mode: Mode) {
        if self.session.mode() != mode {
            self.switch_mode();
        }
    }

    /// Apply every tick that has come due by `now`.
    ///
    /// Returns the mode of the interval that completed, if one did.
    pub fn advance(&mut self, now: Instant) -> Option<Mode> {
        while self.session.is_counting() && self.ticker.take_due(now) {
            if let TickOutcome::Completed(mode) = self.session.tick() {
                self.ticker.disarm();
                log::info!(
                    "{mode} interval complete ({} sessions)",
                    self.session.sessions_completed()
                );
                self.feedback.notify(Feedback::Success);
                return Some(mode);
            }
        }

        if !self.session.is_counting() {
            self.ticker.disarm();
        }
        None
    }

    /// Read-only session state.
    #[must_use]
    pub const fn session(&self) -> &TimerSession {
        &self.session
    }

    /// Rendering snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        self.session.snapshot()
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }
}
