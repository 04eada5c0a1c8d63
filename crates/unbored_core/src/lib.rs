//! Core domain logic for Unbored: a local task manager and activity
//! roulette sharing one persisted store.
//! This crate is the single source of truth for business invariants; UI
//! layers are thin callers of the operations exported here.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod repo;
pub mod select;
pub mod service;
pub mod store;

pub use catalog::{load_catalog, load_catalog_or_empty, parse_catalog, CatalogError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{
    Activity, ActivityFilters, ActivityId, ActivityState, ActivityStats, Category, CategoryFilter,
    Duration, Intensity, Mood,
};
pub use model::task::{Priority, StatusFilter, Task, TaskView};
pub use repo::activity_repo::{ActivityRepository, StatCounter, StoreActivityRepository};
pub use repo::task_repo::{completion_rate, filter_tasks, StoreTaskRepository, TaskRepository};
pub use select::{filter_activities, pick_random, pick_random_with};
pub use service::activity_service::ActivityService;
pub use store::{FileBackend, MemoryBackend, StorageBackend, Store, UnavailableBackend};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
