//! Command data carriers for to-do item mutations.
//!
//! Commands are transient per-request values. Textual fields are carried
//! raw; [`crate::todo::validation`] checks them before the processor
//! performs any domain construction or repository call.

use crate::todo::domain::TodoId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Command to create a new to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Title of the new item.
    pub title: String,
    /// Owning user identifier.
    pub owner: String,
    /// Due date of the new item.
    pub due_at: DateTime<Utc>,
}

impl CreateTodo {
    /// Creates a create command.
    #[must_use]
    pub fn new(title: impl Into<String>, owner: impl Into<String>, due_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            owner: owner.into(),
            due_at,
        }
    }
}

/// Command to replace the title of an existing to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTodo {
    /// Identifier of the item to rename.
    pub id: TodoId,
    /// Owning user identifier.
    pub owner: String,
    /// Replacement title.
    pub title: String,
}

impl RenameTodo {
    /// Creates a rename command.
    #[must_use]
    pub fn new(id: TodoId, owner: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
            title: title.into(),
        }
    }
}

/// Command identifying the item whose done flag is toggled.
///
/// Shared by the mark-done and mark-undone variants, which carry the same
/// data and differ only in the flag value they set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkTodo {
    /// Identifier of the item to mark.
    pub id: TodoId,
    /// Owning user identifier.
    pub owner: String,
}

impl MarkTodo {
    /// Creates a mark command.
    #[must_use]
    pub fn new(id: TodoId, owner: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
        }
    }
}

/// The four to-do item commands, dispatched by variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TodoCommand {
    /// Create a new item.
    Create(CreateTodo),
    /// Replace the title of an existing item.
    Rename(RenameTodo),
    /// Set the done flag of an existing item.
    MarkDone(MarkTodo),
    /// Clear the done flag of an existing item.
    MarkUndone(MarkTodo),
}
