//! Focus timer.
//!
//! A pomodoro-style countdown with two modes:
//! - Focus intervals of 25 minutes, counted as sessions when they run out
//! - Break intervals of 5 minutes
//! - Start/pause, reset and mode switching
//! - Feedback signals on every transition

pub mod controller;
pub mod feedback;
pub mod ticker;
pub mod timer;

pub use controller::FocusTimer;
pub use feedback::{BellFeedback, Feedback, FeedbackSink, LogFeedback, NoFeedback};
pub use ticker::{Ticker, TICK_INTERVAL};
pub use timer::{
    format_duration_mmss, render_progress_bar, Mode, TickOutcome, TimerSession, TimerSnapshot,
    BREAK_SECONDS, FOCUS_SECONDS,
};
