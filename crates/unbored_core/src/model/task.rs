//! Task domain model and view filtering rules.
//!
//! # Responsibility
//! - Define the persisted task record and its priority scale.
//! - Define the status/priority view rule used by list surfaces.
//!
//! # Invariants
//! - `id` is generated once at creation and never mutated.
//! - `created_at` is set once at creation and never mutated.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Urgency scale attached to every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Persisted task record.
///
/// The whole record is replaced on edit; there is no field-level patching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable unique id, a v4 UUID rendered as a string.
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    /// Creation instant in unix epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Creates a task with a fresh id and the current creation timestamp.
    ///
    /// # Invariants
    /// - The generated id is unique for the task's lifetime.
    /// - `completed` starts as `false`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            priority,
            completed: false,
            created_at: now_epoch_ms(),
        }
    }

    /// Flips the completion flag in place.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// Completion partition selected by the list tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// View state for the task list: one status tab plus the set of enabled
/// priorities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub status: StatusFilter,
    /// Priorities currently shown. Defaults to all three.
    pub priorities: Vec<Priority>,
}

impl Default for TaskView {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            priorities: vec![Priority::Low, Priority::Medium, Priority::High],
        }
    }
}

impl TaskView {
    /// Returns whether `task` belongs to this view.
    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        };
        status_ok && self.priorities.contains(&task.priority)
    }
}

pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
