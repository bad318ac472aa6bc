//! Read-only record sources.

use chrono::Weekday;

use super::types::{Habit, Priority, StudyDay, TaskItem};

/// Supplies the records shown on the study screen.
///
/// Consumers take a store by reference; nothing reads records from globals.
pub trait RecordStore {
    /// Tasks in store order.
    fn tasks(&self) -> Vec<TaskItem>;

    /// Tracked habits.
    fn habits(&self) -> Vec<Habit>;

    /// Study hours for each day of the current week, Monday first.
    fn weekly_study(&self) -> Vec<StudyDay>;

    /// Consecutive days with any study logged.
    fn study_streak(&self) -> u32;
}

/// Fixed sample records.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRecords;

impl RecordStore for SampleRecords {
    fn tasks(&self) -> Vec<TaskItem> {
        vec![
            TaskItem::new("1", "Review Calculus Ch. 12", Priority::High, "AP Calculus BC")
                .due("Today 5PM"),
            TaskItem::new("2", "Read Hamlet Act 4", Priority::Medium, "AP English Lit")
                .due("Tomorrow"),
            TaskItem::new("3", "Physics lab prep", Priority::High, "AP Physics C")
                .due("Done")
                .done(),
            TaskItem::new("4", "Chemistry worksheet", Priority::Low, "AP Chemistry")
                .due("Feb 12"),
            TaskItem::new("5", "Code binary search tree", Priority::Medium, "AP Computer Sci")
                .due("Done")
                .done(),
            TaskItem::new("6", "History DBQ outline", Priority::High, "AP US History")
                .due("Today 8PM"),
        ]
    }

    fn habits(&self) -> Vec<Habit> {
        [
            ("1", "Read 30 min", 12, 5, "book-open"),
            ("2", "Practice Math", 8, 6, "calculator"),
            ("3", "Review Notes", 5, 4, "file-text"),
            ("4", "Exercise", 15, 7, "activity"),
        ]
        .into_iter()
        .map(|(id, name, streak, completed, icon)| Habit {
            id: id.to_string(),
            name: name.to_string(),
            streak,
            target: 7,
            completed,
            icon: icon.to_string(),
        })
        .collect()
    }

    fn weekly_study(&self) -> Vec<StudyDay> {
        [
            (Weekday::Mon, 3.5),
            (Weekday::Tue, 4.2),
            (Weekday::Wed, 2.8),
            (Weekday::Thu, 5.1),
            (Weekday::Fri, 3.0),
            (Weekday::Sat, 6.5),
            (Weekday::Sun, 4.0),
        ]
        .into_iter()
        .map(|(day, hours)| StudyDay { day, hours })
        .collect()
    }

    fn study_streak(&self) -> u32 {
        12
    }
}
