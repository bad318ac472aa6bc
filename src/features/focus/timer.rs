//! Focus/break countdown state.
//!
//! [`TimerSession`] is the pure state machine: it knows nothing about wall
//! clocks or feedback. [`super::FocusTimer`] drives it.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Length of a focus interval in seconds.
pub const FOCUS_SECONDS: u32 = 25 * 60;

/// Length of a break interval in seconds.
pub const BREAK_SECONDS: u32 = 5 * 60;

/// Timer mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Concentrated work interval
    #[default]
    Focus,
    /// Rest between focus intervals
    Break,
}

impl Mode {
    /// Full duration of an interval in this mode, in seconds.
    #[must_use]
    pub const fn duration_seconds(self) -> u32 {
        match self {
            Self::Focus => FOCUS_SECONDS,
            Self::Break => BREAK_SECONDS,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened (paused, or already at zero).
    Idle,
    /// One second was taken off the countdown.
    Decremented,
    /// The countdown just reached zero in the given mode.
    Completed(Mode),
}

/// Countdown state for the study timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSession {
    mode: Mode,
    remaining_seconds: u32,
    is_running: bool,
    sessions_completed: u32,
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSession {
    /// Fresh focus interval, paused, with no sessions completed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: Mode::Focus,
            remaining_seconds: FOCUS_SECONDS,
            is_running: false,
            sessions_completed: 0,
        }
    }

    /// Flip between running and paused.
    ///
    /// At zero remaining the flag still flips, but nothing counts down until
    /// [`reset`](Self::reset) or [`switch_mode`](Self::switch_mode).
    pub fn toggle(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Stop and refill the current mode's interval.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_seconds = self.mode.duration_seconds();
    }

    /// Stop, move to the other mode and load its full interval.
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset();
    }

    /// Take one second off the countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running || self.remaining_seconds == 0 {
            return TickOutcome::Idle;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return TickOutcome::Decremented;
        }

        self.is_running = false;
        if self.mode == Mode::Focus {
            self.sessions_completed += 1;
        }
        TickOutcome::Completed(self.mode)
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left in the current interval.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Number of focus intervals that ran down to zero.
    #[must_use]
    pub const fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    /// Whether ticks would currently change anything.
    #[must_use]
    pub const fn is_counting(&self) -> bool {
        self.is_running && self.remaining_seconds > 0
    }

    /// Get remaining time as Duration.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds))
    }

    /// Elapsed fraction of the current interval (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.mode.duration_seconds());
        if total == 0.0 {
            return 1.0;
        }
        let elapsed = total - f64::from(self.remaining_seconds);
        (elapsed / total).clamp(0.0, 1.0)
    }

    /// Whole minutes and leftover seconds of the remaining time.
    #[must_use]
    pub const fn minutes_seconds(&self) -> (u32, u32) {
        (self.remaining_seconds / 60, self.remaining_seconds % 60)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            is_running: self.is_running,
            sessions_completed: self.sessions_completed,
            progress: self.progress(),
        }
    }
}

/// Rendering snapshot of a [`TimerSession`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub remaining_seconds: u32,
    pub is_running: bool,
    pub sessions_completed: u32,
    pub progress: f64,
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(session: &mut TimerSession, n: u32) -> Vec<TickOutcome> {
        (0..n).map(|_| session.tick()).collect()
    }

    fn assert_in_range(session: &TimerSession) {
        assert!(session.remaining_seconds() <= session.mode().duration_seconds());
    }

    #[test]
    fn test_timer_default() {
        let session = TimerSession::new();
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.remaining_seconds(), 1500);
        assert!(!session.is_running());
        assert_eq!(session.sessions_completed(), 0);
        assert_eq!(session.format_remaining(), "25:00");
    }

    #[test]
    fn test_mode_durations() {
        assert_eq!(Mode::Focus.duration_seconds(), 1500);
        assert_eq!(Mode::Break.duration_seconds(), 300);
        assert_eq!(Mode::Focus.toggled(), Mode::Break);
        assert_eq!(Mode::Break.toggled(), Mode::Focus);
    }

    #[test]
    fn test_tick_while_paused_does_nothing() {
        let mut session = TimerSession::new();
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.remaining_seconds(), 1500);
    }

    #[test]
    fn test_full_focus_interval_completes() {
        let mut session = TimerSession::new();
        session.toggle();

        let outcomes = run_ticks(&mut session, 1500);
        assert!(outcomes[..1499]
            .iter()
            .all(|o| *o == TickOutcome::Decremented));
        assert_eq!(outcomes[1499], TickOutcome::Completed(Mode::Focus));

        assert_eq!(session.remaining_seconds(), 0);
        assert!(!session.is_running());
        assert_eq!(session.sessions_completed(), 1);
    }

    #[test]
    fn test_pause_after_ten_ticks() {
        let mut session = TimerSession::new();
        session.toggle();
        run_ticks(&mut session, 10);
        session.toggle();

        assert_eq!(session.remaining_seconds(), 1490);
        assert!(!session.is_running());

        run_ticks(&mut session, 30);
        assert_eq!(session.remaining_seconds(), 1490);
    }

    #[test]
    fn test_switch_mode_resets_interval() {
        let mut session = TimerSession::new();
        session.toggle();
        run_ticks(&mut session, 10);

        session.switch_mode();
        assert_eq!(session.mode(), Mode::Break);
        assert_eq!(session.remaining_seconds(), 300);
        assert!(!session.is_running());

        session.switch_mode();
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.remaining_seconds(), 1500);
        assert_eq!(session.sessions_completed(), 0);
    }

    #[test]
    fn test_reset_while_running() {
        let mut session = TimerSession::new();
        session.toggle();
        run_ticks(&mut session, 600);
        assert_eq!(session.remaining_seconds(), 900);

        session.reset();
        assert_eq!(session.remaining_seconds(), 1500);
        assert!(!session.is_running());
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.sessions_completed(), 0);
    }

    #[test]
    fn test_start_at_zero_does_not_wrap() {
        let mut session = TimerSession::new();
        session.toggle();
        run_ticks(&mut session, 1500);
        assert_eq!(session.sessions_completed(), 1);

        session.toggle();
        assert!(session.is_running());
        assert!(!session.is_counting());

        assert!(run_ticks(&mut session, 5)
            .iter()
            .all(|o| *o == TickOutcome::Idle));
        assert_eq!(session.remaining_seconds(), 0);
        assert_eq!(session.sessions_completed(), 1);

        session.reset();
        assert_eq!(session.remaining_seconds(), 1500);
    }

    #[test]
    fn test_break_completion_does_not_count() {
        let mut session = TimerSession::new();
        session.switch_mode();
        session.toggle();

        let outcomes = run_ticks(&mut session, 300);
        assert_eq!(outcomes[299], TickOutcome::Completed(Mode::Break));
        assert_eq!(session.remaining_seconds(), 0);
        assert!(!session.is_running());
        assert_eq!(session.sessions_completed(), 0);
    }

    #[test]
    fn test_completion_keeps_mode() {
        let mut session = TimerSession::new();
        session.toggle();
        run_ticks(&mut session, 1500);
        assert_eq!(session.mode(), Mode::Focus);

        session.switch_mode();
        assert_eq!(session.sessions_completed(), 1);
    }

    #[test]
    fn test_remaining_stays_in_range() {
        let mut session = TimerSession::new();
        assert_in_range(&session);

        session.toggle();
        for step in 0..2000 {
            session.tick();
            assert_in_range(&session);
            if step == 700 {
                session.switch_mode();
                session.toggle();
            }
        }
        assert_in_range(&session);
    }

    #[test]
    fn test_progress() {
        let mut session = TimerSession::new();
        assert_eq!(session.progress(), 0.0);

        session.toggle();
        run_ticks(&mut session, 750);
        assert!((session.progress() - 0.5).abs() < 0.001);

        run_ticks(&mut session, 750);
        assert_eq!(session.progress(), 1.0);
    }

    #[test]
    fn test_minutes_seconds() {
        let mut session = TimerSession::new();
        session.toggle();
        run_ticks(&mut session, 61);

        assert_eq!(session.minutes_seconds(), (23, 59));
        assert_eq!(session.format_remaining(), "23:59");
    }

    #[test]
    fn test_snapshot() {
        let mut session = TimerSession::new();
        session.switch_mode();
        session.toggle();
        session.tick();

        let snap = session.snapshot();
        assert_eq!(snap.mode, Mode::Break);
        assert_eq!(snap.remaining_seconds, 299);
        assert!(snap.is_running);
        assert_eq!(snap.sessions_completed, 0);
        assert!(snap.progress > 0.0);
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));

        assert_eq!(render_progress_bar(1.5, 4), "[████]");
    }
}
