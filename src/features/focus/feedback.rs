//! Fire-and-forget feedback on timer and task transitions.

use std::io::Write;

use serde::{Deserialize, Serialize};

/// Kind of feedback to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Light tap: reset, mode switch, task toggle
    Light,
    /// Medium tap: start/pause
    Medium,
    /// An interval ran to zero
    Success,
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Medium => write!(f, "medium"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// Receiver of feedback signals.
///
/// Implementations must not fail visibly; there is no return channel.
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackSink {
    /// Emit a signal.
    fn notify(&self, feedback: Feedback);
}

/// Drops every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn notify(&self, _feedback: Feedback) {}
}

/// Writes each signal to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn notify(&self, feedback: Feedback) {
        log::debug!("feedback: {feedback}");
    }
}

/// Logs each signal and rings the terminal bell on success.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellFeedback;

impl FeedbackSink for BellFeedback {
    fn notify(&self, feedback: Feedback) {
        log::debug!("feedback: {feedback}");
        if feedback != Feedback::Success {
            return;
        }

        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            log::warn!("failed to ring terminal bell: {e}");
        }
    }
}
