//! Record types shown on the study dashboard.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A study task, tagged with a subject and an optional free-text due label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub subject: String,
    /// Display label such as "Today 5PM".
    #[serde(default)]
    pub due: Option<String>,
}

impl TaskItem {
    /// Create an open task with no due label.
    #[must_use]
    pub fn new(id: &str, title: &str, priority: Priority, subject: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            completed: false,
            priority,
            subject: subject.to_string(),
            due: None,
        }
    }

    /// Attach a due label.
    #[must_use]
    pub fn due(mut self, label: &str) -> Self {
        self.due = Some(label.to_string());
        self
    }

    /// Mark the task completed.
    #[must_use]
    pub fn done(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Task priority. Orders high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// A weekly habit with its running streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// Consecutive days kept.
    pub streak: u32,
    /// Completions wanted per week.
    pub target: u32,
    /// Completions so far this week.
    pub completed: u32,
    pub icon: String,
}

impl Habit {
    /// Weekly progress (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (f64::from(self.completed) / f64::from(self.target)).min(1.0)
    }

    /// Whether this week's target has been reached.
    #[must_use]
    pub const fn is_met(&self) -> bool {
        self.completed >= self.target
    }
}

/// Number of habits whose weekly target has been reached.
#[must_use]
pub fn habits_met(habits: &[Habit]) -> usize {
    habits.iter().filter(|h| h.is_met()).count()
}

/// Hours studied on one day of the current week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDay {
    pub day: Weekday,
    pub hours: f64,
}
