//! Task repository: CRUD and view queries over the persisted task list.
//!
//! # Responsibility
//! - Own the `tasks` storage key and its read-modify-write cycle.
//! - Derive completion statistics and the filtered, newest-first view.
//!
//! # Invariants
//! - Stored order is insertion order; the newest-first ordering is applied
//!   only when building a view.
//! - `update`/`delete` on an unknown id leave the collection unchanged.

use crate::model::task::{Task, TaskView};
use crate::store::{StorageBackend, Store};

const TASKS_KEY: &str = "tasks";

/// Repository interface for task persistence.
pub trait TaskRepository {
    /// Returns all tasks in stored (insertion) order.
    fn list(&self) -> Vec<Task>;
    /// Appends `task` and returns the updated collection.
    fn add(&self, task: Task) -> Vec<Task>;
    /// Replaces the record whose id matches `task.id`. Silent no-op when no
    /// record matches; length and relative order are preserved either way.
    fn update(&self, task: Task) -> Vec<Task>;
    /// Removes the record with `id` when present. Idempotent.
    fn delete(&self, id: &str) -> Vec<Task>;
}

/// Task repository backed by the injected store adapter.
pub struct StoreTaskRepository<'s, B: StorageBackend> {
    store: &'s Store<B>,
}

impl<'s, B: StorageBackend> StoreTaskRepository<'s, B> {
    pub fn new(store: &'s Store<B>) -> Self {
        Self { store }
    }
}

impl<B: StorageBackend> TaskRepository for StoreTaskRepository<'_, B> {
    fn list(&self) -> Vec<Task> {
        self.store.load(TASKS_KEY)
    }

    fn add(&self, task: Task) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.store.load(TASKS_KEY);
        tasks.push(task);
        self.store.save(TASKS_KEY, &tasks);
        tasks
    }

    fn update(&self, task: Task) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.store.load(TASKS_KEY);
        if let Some(slot) = tasks.iter_mut().find(|existing| existing.id == task.id) {
            *slot = task;
        }
        self.store.save(TASKS_KEY, &tasks);
        tasks
    }

    fn delete(&self, id: &str) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.store.load(TASKS_KEY);
        tasks.retain(|task| task.id != id);
        self.store.save(TASKS_KEY, &tasks);
        tasks
    }
}

/// Completed share of `tasks` as a whole percentage, rounded to nearest.
///
/// Empty input is defined as 0 to keep the dashboard stable before the
/// first task exists.
pub fn completion_rate(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|task| task.completed).count();
    ((completed as f64 / tasks.len() as f64) * 100.0).round() as u8
}

/// Builds the current task view: restricted by status tab and enabled
/// priorities, ordered newest-first with ties keeping insertion order.
pub fn filter_tasks(tasks: &[Task], view: &TaskView) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| view.matches(task))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}

#[cfg(test)]
mod tests {
    use super::{completion_rate, filter_tasks};
    use crate::model::task::{Priority, Task, TaskView};

    fn task_at(id: &str, created_at: i64, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            description: String::new(),
            priority: Priority::Medium,
            completed,
            created_at,
        }
    }

    #[test]
    fn completion_rate_of_empty_is_zero() {
        assert_eq!(completion_rate(&[]), 0);
    }

    #[test]
    fn completion_rate_rounds_to_nearest() {
        let tasks = vec![
            task_at("a", 1, true),
            task_at("b", 2, false),
            task_at("c", 3, false),
        ];
        // 1 of 3 -> 33.33 -> 33
        assert_eq!(completion_rate(&tasks), 33);
        let tasks = vec![
            task_at("a", 1, true),
            task_at("b", 2, true),
            task_at("c", 3, false),
        ];
        // 2 of 3 -> 66.67 -> 67
        assert_eq!(completion_rate(&tasks), 67);
    }

    #[test]
    fn view_orders_newest_first() {
        let tasks = vec![task_at("a", 100, false), task_at("b", 200, false)];
        let view = filter_tasks(&tasks, &TaskView::default());
        let ids: Vec<&str> = view.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn view_ties_keep_insertion_order() {
        let tasks = vec![
            task_at("a", 100, false),
            task_at("b", 100, false),
            task_at("c", 100, false),
        ];
        let view = filter_tasks(&tasks, &TaskView::default());
        let ids: Vec<&str> = view.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
