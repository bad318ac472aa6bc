//! Study records: tasks, habits and weekly study hours.

mod store;
mod tasks;
pub mod types;

pub use store::{RecordStore, SampleRecords};
pub use tasks::TaskList;
pub use types::{habits_met, Habit, Priority, StudyDay, TaskItem};
