//! Study statistics.
//!
//! Provides the numbers shown above the study screen:
//! - Study streak and focus sessions
//! - Task completion counts
//! - Weekly hours with a bar chart

pub mod visualization;
pub mod week;

use serde::Serialize;

use crate::records::{RecordStore, TaskList};

pub use visualization::{render_session_dots, render_week_chart};
pub use week::WeeklySummary;

/// The stat cards at the top of the study screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyStats {
    pub streak_days: u32,
    pub sessions_completed: u32,
    pub tasks_completed: usize,
    pub tasks_total: usize,
    pub average_daily_hours: f64,
}

impl StudyStats {
    /// Gather stats from the store, the live task list and the timer's count.
    #[must_use]
    pub fn collect(store: &dyn RecordStore, tasks: &TaskList, sessions_completed: u32) -> Self {
        let week = WeeklySummary::new(store.weekly_study());
        Self {
            streak_days: store.study_streak(),
            sessions_completed,
            tasks_completed: tasks.completed_count(),
            tasks_total: tasks.len(),
            average_daily_hours: week.average_daily,
        }
    }
}
