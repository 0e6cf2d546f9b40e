//! Port contracts for to-do item persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the command
//! processor.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
