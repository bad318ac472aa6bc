//! Output formatting for studydash.
//!
//! This module provides formatters for displaying study records in various formats.

mod json;
mod pretty;

use chrono::Weekday;

use crate::cli::args::OutputFormat;
use crate::error::StudyError;
use crate::features::focus::TimerSnapshot;
use crate::features::stats::WeeklySummary;
use crate::records::{Habit, TaskList};

pub use json::*;
pub use pretty::*;

/// Format tasks in display order based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_tasks(tasks: &TaskList, format: OutputFormat) -> Result<String, StudyError> {
    let ordered = tasks.ordered();
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(&ordered, tasks.completed_count())),
        OutputFormat::Json => format_tasks_json(&ordered, tasks.completed_count()),
    }
}

/// Format habits based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_habits(habits: &[Habit], format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits)),
        OutputFormat::Json => format_habits_json(habits),
    }
}

/// Format the weekly summary based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_week(
    summary: &WeeklySummary,
    today: Weekday,
    format: OutputFormat,
) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_week_pretty(summary, today)),
        OutputFormat::Json => format_week_json(summary),
    }
}

/// Format a timer snapshot based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_timer(snapshot: &TimerSnapshot, format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_timer_pretty(snapshot)),
        OutputFormat::Json => format_timer_json(snapshot),
    }
}
