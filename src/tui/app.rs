//! Application state for the TUI.

use std::rc::Rc;
use std::time::Instant;

use chrono::Weekday;

use crate::features::focus::{Feedback, FeedbackSink, FocusTimer, Mode};
use crate::features::stats::{week, StudyStats, WeeklySummary};
use crate::records::{Habit, RecordStore, TaskItem, TaskList};

/// A user action on the study screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    ToggleTimer,
    /// Reset the current interval.
    ResetTimer,
    /// Switch between focus and break.
    SwitchMode,
    /// Select a specific mode.
    SelectMode(Mode),
    /// Toggle completion of the selected task.
    ToggleTask,
}

/// Application state.
///
/// The timer and the task list are independent; the app only composes them.
pub struct App<'a> {
    store: &'a dyn RecordStore,
    feedback: Rc<dyn FeedbackSink>,
    /// The focus timer.
    pub timer: FocusTimer,
    /// Transient task list.
    pub tasks: TaskList,
    /// Habits from the store.
    pub habits: Vec<Habit>,
    /// This week's study hours.
    pub week: WeeklySummary,
    /// Day to highlight in the weekly chart.
    pub today: Weekday,
    /// Cursor position in the ordered task list.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Pending 'g' key for 'gg' command.
    pub pending_g: bool,
}

impl<'a> App<'a> {
    /// Create a new app instance.
    pub fn new(store: &'a dyn RecordStore, feedback: Rc<dyn FeedbackSink>) -> Self {
        Self {
            store,
            timer: FocusTimer::new(Rc::clone(&feedback)),
            feedback,
            tasks: TaskList::new(store.tasks()),
            habits: store.habits(),
            week: WeeklySummary::new(store.weekly_study()),
            today: week::today(),
            selected: 0,
            status: Some("Press ? for help".to_string()),
            pending_g: false,
        }
    }

    /// Apply a user action. Returns `false` when the app should quit.
    pub fn apply(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return false,
            Action::ToggleTimer => self.timer.toggle(now),
            Action::ResetTimer => self.timer.reset(),
            Action::SwitchMode => self.timer.switch_mode(),
            Action::SelectMode(mode) => self.timer.select_mode(mode),
            Action::ToggleTask => self.toggle_selected(),
        }
        true
    }

    /// Advance the timer to `now`.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(mode) = self.timer.advance(now) {
            self.status = Some(match mode {
                Mode::Focus => format!(
                    "Focus session complete ({} today). Press m for a break.",
                    self.timer.session().sessions_completed()
                ),
                Mode::Break => "Break over. Press m to focus.".to_string(),
            });
        }
    }

    /// Header stats.
    #[must_use]
    pub fn stats(&self) -> StudyStats {
        StudyStats::collect(
            self.store,
            &self.tasks,
            self.timer.session().sessions_completed(),
        )
    }

    /// Get the task under the cursor.
    #[must_use]
    pub fn selected_task(&self) -> Option<&TaskItem> {
        self.tasks.ordered().get(self.selected).copied()
    }

    /// Toggle the task under the cursor.
    pub fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id.clone();
        let title = task.title.clone();

        if let Some(done) = self.tasks.toggle(&id) {
            self.feedback.notify(Feedback::Light);
            self.status = Some(format!(
                "{}: {title}",
                if done { "Done" } else { "Reopened" }
            ));
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.pending_g = false;
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() && self.selected < self.tasks.len() - 1 {
            self.selected += 1;
        }
        self.pending_g = false;
    }

    /// Jump to first item.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.pending_g = false;
    }

    /// Jump to last item.
    pub fn select_last(&mut self) {
        if !self.tasks.is_empty() {
            self.selected = self.tasks.len() - 1;
        }
        self.pending_g = false;
    }

    /// Handle 'g' key for 'gg' command.
    pub fn handle_g(&mut self) {
        if self.pending_g {
            self.select_first();
        } else {
            self.pending_g = true;
            self.status = Some("g-".to_string());
        }
    }

    /// Cancel pending 'g' command.
    pub fn cancel_pending(&mut self) {
        self.pending_g = false;
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockall::predicate::eq;

    use super::*;
    use crate::features::focus::feedback::MockFeedbackSink;
    use crate::features::focus::NoFeedback;
    use crate::records::SampleRecords;

    fn app(store: &SampleRecords) -> App<'_> {
        App::new(store, Rc::new(NoFeedback))
    }

    #[test]
    fn test_new_app() {
        let store = SampleRecords;
        let app = app(&store);

        assert_eq!(app.tasks.len(), 6);
        assert_eq!(app.habits.len(), 4);
        assert_eq!(app.selected_task().map(|t| t.id.as_str()), Some("1"));
        assert_eq!(app.timer.session().remaining_seconds(), 1500);
    }

    #[test]
    fn test_quit_action() {
        let store = SampleRecords;
        let mut app = app(&store);
        assert!(!app.apply(Action::Quit, Instant::now()));
        assert!(app.apply(Action::ResetTimer, Instant::now()));
    }

    #[test]
    fn test_timer_actions() {
        let store = SampleRecords;
        let mut app = app(&store);
        let start = Instant::now();

        app.apply(Action::ToggleTimer, start);
        app.on_tick(start + Duration::from_secs(10));
        assert_eq!(app.timer.session().remaining_seconds(), 1490);

        app.apply(Action::SelectMode(Mode::Break), start);
        assert_eq!(app.timer.session().mode(), Mode::Break);
        assert_eq!(app.timer.session().remaining_seconds(), 300);
        assert!(!app.timer.session().is_running());
    }

    #[test]
    fn test_select_active_mode_keeps_mode() {
        let store = SampleRecords;
        let mut app = app(&store);
        let start = Instant::now();

        app.apply(Action::ToggleTimer, start);
        app.apply(Action::SelectMode(Mode::Focus), start);
        assert_eq!(app.timer.session().mode(), Mode::Focus);
        assert!(app.timer.session().is_running());

        app.apply(Action::SwitchMode, start);
        assert_eq!(app.timer.session().mode(), Mode::Break);
    }

    #[test]
    fn test_completion_sets_status_and_stats() {
        let store = SampleRecords;
        let mut app = app(&store);
        let start = Instant::now();

        app.apply(Action::ToggleTimer, start);
        app.on_tick(start + Duration::from_secs(1500));

        assert!(app
            .status
            .as_deref()
            .is_some_and(|s| s.starts_with("Focus session complete")));
        assert_eq!(app.stats().sessions_completed, 1);
    }

    #[test]
    fn test_toggle_selected_task() {
        let store = SampleRecords;
        let mut app = app(&store);

        app.apply(Action::ToggleTask, Instant::now());
        assert_eq!(app.tasks.get("1").map(|t| t.completed), Some(true));
        assert_eq!(app.stats().tasks_completed, 3);
        assert_eq!(app.status.as_deref(), Some("Done: Review Calculus Ch. 12"));

        // Task 1 moved to the done group, so the cursor now sits on task 6
        assert_eq!(app.selected_task().map(|t| t.id.as_str()), Some("6"));
    }

    #[test]
    fn test_task_toggle_leaves_timer_alone() {
        let store = SampleRecords;
        let mut app = app(&store);
        let start = Instant::now();

        app.apply(Action::ToggleTimer, start);
        app.apply(Action::ToggleTask, start);
        assert!(app.timer.session().is_running());
        assert!(app.timer.is_ticking());
    }

    #[test]
    fn test_task_toggle_emits_light_feedback() {
        let store = SampleRecords;
        let mut sink = MockFeedbackSink::new();
        sink.expect_notify()
            .with(eq(Feedback::Light))
            .times(1)
            .return_const(());

        let mut app = App::new(&store, Rc::new(sink));
        app.toggle_selected();
    }

    #[test]
    fn test_navigation() {
        let store = SampleRecords;
        let mut app = app(&store);

        app.select_previous();
        assert_eq!(app.selected, 0);

        app.select_last();
        assert_eq!(app.selected, 5);

        app.select_next();
        assert_eq!(app.selected, 5);

        app.handle_g();
        assert!(app.pending_g);
        app.handle_g();
        assert_eq!(app.selected, 0);
        assert!(!app.pending_g);
    }
}
