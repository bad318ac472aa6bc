//! Weekly study summary.

use chrono::{Datelike, Weekday};
use serde::Serialize;

use crate::records::StudyDay;

/// Totals over one week of study records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub days: Vec<StudyDay>,
    pub total_hours: f64,
    pub average_daily: f64,
    pub max_hours: f64,
}

impl WeeklySummary {
    /// Summarize a week of records.
    ///
    /// The average is always over seven days, whatever was recorded.
    #[must_use]
    pub fn new(days: Vec<StudyDay>) -> Self {
        // Fold from +0.0: an empty `sum()` of floats is -0.0
        let total_hours = days.iter().map(|d| d.hours).fold(0.0, |acc, h| acc + h);
        let max_hours = days.iter().map(|d| d.hours).fold(0.0, f64::max);

        Self {
            days,
            total_hours,
            average_daily: total_hours / 7.0,
            max_hours,
        }
    }

    /// Height of a day's bar relative to the busiest day (0.0 - 1.0).
    #[must_use]
    pub fn bar_fraction(&self, hours: f64) -> f64 {
        if self.max_hours <= 0.0 {
            return 0.0;
        }
        (hours / self.max_hours).clamp(0.0, 1.0)
    }

    /// Average daily hours with one decimal, e.g. "4.2".
    #[must_use]
    pub fn format_average(&self) -> String {
        format!("{:.1}", self.average_daily)
    }
}

/// Today's weekday in local time.
#[must_use]
pub fn today() -> Weekday {
    chrono::Local::now().weekday()
}
