//! Command implementations for studydash.
//!
//! Every command except `study` prints records and exits.

use crate::cli::args::{OutputFormat, TimerModeArg};
use crate::cli::completions::{generate_completions, shell_from_str};
use crate::error::StudyError;
use crate::features::focus::{Mode, TimerSession};
use crate::features::stats::week::today;
use crate::features::stats::WeeklySummary;
use crate::output::{format_habits, format_tasks, format_timer, format_week};
use crate::records::{RecordStore, TaskList};

/// Execute tasks command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn tasks(store: &dyn RecordStore, format: OutputFormat) -> Result<String, StudyError> {
    format_tasks(&TaskList::new(store.tasks()), format)
}

/// Execute habits command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn habits(store: &dyn RecordStore, format: OutputFormat) -> Result<String, StudyError> {
    format_habits(&store.habits(), format)
}

/// Execute week command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn week(store: &dyn RecordStore, format: OutputFormat) -> Result<String, StudyError> {
    let summary = WeeklySummary::new(store.weekly_study());
    format_week(&summary, today(), format)
}

/// Execute timer command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn timer(mode: TimerModeArg, format: OutputFormat) -> Result<String, StudyError> {
    let mut session = TimerSession::new();
    if Mode::from(mode) != session.mode() {
        session.switch_mode();
    }
    format_timer(&session.snapshot(), format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the shell is unknown.
pub fn completions(shell: &str) -> Result<String, StudyError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        StudyError::NotFound(format!(
            "shell '{shell}'. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;
    generate_completions(shell_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::SampleRecords;

    #[test]
    fn test_tasks_json() {
        let out = tasks(&SampleRecords, OutputFormat::Json).unwrap();
        assert!(out.contains("\"count\": 6"));
    }

    #[test]
    fn test_timer_break() {
        let out = timer(TimerModeArg::Break, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["mode"], "break");
        assert_eq!(value["remaining_seconds"], 300);
    }

    #[test]
    fn test_week_json() {
        let out = week(&SampleRecords, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["days"].as_array().map(Vec::len), Some(7));
    }

    #[test]
    fn test_completions_unknown_shell() {
        let err = completions("tcsh").unwrap_err();
        assert!(matches!(err, StudyError::NotFound(_)));
    }
}
