//! Repository layer over the persistent store adapter.
//!
//! # Responsibility
//! - Provide use-case oriented read-modify-write operations per storage key.
//! - Keep storage-key and serialization details out of service/UI callers.
//!
//! # Invariants
//! - Every mutation loads the full collection, applies one change, and
//!   persists the whole collection back.
//! - Mutations on absent ids are defined no-ops, never errors.

pub mod activity_repo;
pub mod task_repo;
