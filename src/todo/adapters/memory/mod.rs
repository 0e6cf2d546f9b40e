//! In-memory adapter for tests and embedded use.

mod repository;

pub use repository::InMemoryTodoRepository;
