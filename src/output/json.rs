//! JSON output formatting for studydash.

use serde::Serialize;
use serde_json::json;

use crate::error::StudyError;
use crate::features::focus::TimerSnapshot;
use crate::features::stats::WeeklySummary;
use crate::records::{Habit, TaskItem};

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[&TaskItem], completed: usize) -> Result<String, StudyError> {
    let output = json!({
        "count": tasks.len(),
        "completed": completed,
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format habits as JSON
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_habits_json(habits: &[Habit]) -> Result<String, StudyError> {
    let items: Vec<_> = habits
        .iter()
        .map(|h| {
            json!({
                "id": h.id,
                "name": h.name,
                "streak": h.streak,
                "target": h.target,
                "completed": h.completed,
                "progress": h.progress(),
            })
        })
        .collect();
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the weekly summary as JSON
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_week_json(summary: &WeeklySummary) -> Result<String, StudyError> {
    to_json(summary)
}

/// Format a timer snapshot as JSON
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_timer_json(snapshot: &TimerSnapshot) -> Result<String, StudyError> {
    to_json(snapshot)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StudyError> {
    Ok(serde_json::to_string_pretty(value)?)
}
