//! `PostgreSQL` adapter for to-do item persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTodoRepository, TodoPgPool};
