//! Transient task list with completion toggling.

use super::types::TaskItem;

/// An owned, in-memory copy of the store's tasks.
///
/// Changes live only as long as the list does.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<TaskItem>,
}

impl TaskList {
    #[must_use]
    pub const fn new(tasks: Vec<TaskItem>) -> Self {
        Self { tasks }
    }

    /// Flip the completion flag of the task with `id`.
    ///
    /// Returns the new flag, or `None` if no task has that id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        log::debug!(
            "task {} marked {}",
            task.id,
            if task.completed { "done" } else { "open" }
        );
        Some(task.completed)
    }

    /// Tasks in display order: open before done, then by priority.
    ///
    /// Ties keep store order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&TaskItem> {
        let mut ordered: Vec<&TaskItem> = self.tasks.iter().collect();
        ordered.sort_by_key(|t| (t.completed, t.priority));
        ordered
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TaskItem> {
        self.tasks.iter().find(|t| t.id == id)
    }
}
