//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and selection-engine calls into use-case level
//!   APIs for UI callers.
//! - Keep UI layers decoupled from storage keys and RNG details.

pub mod activity_service;
