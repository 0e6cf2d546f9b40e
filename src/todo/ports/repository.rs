//! Repository port for to-do item persistence and ownership-scoped lookup.

use crate::todo::domain::{OwnerId, TodoId, TodoItem};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for to-do repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// To-do item persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new to-do item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateTodo`] when the item ID
    /// already exists.
    async fn create(&self, todo: &TodoItem) -> TodoRepositoryResult<()>;

    /// Finds an item by identifier, scoped to its owner.
    ///
    /// Returns `None` when the item does not exist or belongs to a
    /// different owner; foreign items are indistinguishable from absent
    /// ones.
    async fn find_by_id(
        &self,
        id: TodoId,
        owner: &OwnerId,
    ) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Persists changes to an existing item (title, done flag, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn update(&self, todo: &TodoItem) -> TodoRepositoryResult<()>;
}

/// Errors returned by to-do repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// An item with the same identifier already exists.
    #[error("duplicate to-do identifier: {0}")]
    DuplicateTodo(TodoId),

    /// The item was not found.
    #[error("to-do item not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
