//! Domain model for tasks and activities.
//!
//! # Responsibility
//! - Define the canonical records persisted by the repositories.
//! - Define the transient filter shapes consumed by the selection engine.
//!
//! # Invariants
//! - Every task carries a stable string id, every activity a stable catalog
//!   id; neither is ever reused.
//! - Serde field names match the JSON persisted by the original web builds,
//!   so previously stored data keeps loading.

pub mod activity;
pub mod task;
