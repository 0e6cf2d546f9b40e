//! In-memory repository for to-do command tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{OwnerId, TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory to-do repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<HashMap<TodoId, TodoItem>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: &TodoItem) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&todo.id()) {
            return Err(TodoRepositoryError::DuplicateTodo(todo.id()));
        }
        state.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: TodoId,
        owner: &OwnerId,
    ) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let item = state
            .get(&id)
            .filter(|item| item.owner() == owner)
            .cloned();
        Ok(item)
    }

    async fn update(&self, todo: &TodoItem) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&todo.id()) {
            return Err(TodoRepositoryError::NotFound(todo.id()));
        }
        state.insert(todo.id(), todo.clone());
        Ok(())
    }
}
