//! To-do item aggregate root.

use super::{OwnerId, Title, TodoId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// To-do item aggregate root.
///
/// The identifier and owner are fixed at construction; the title and done
/// flag are the only mutable fields. Items are never deleted through this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    title: Title,
    owner: OwnerId,
    due_at: DateTime<Utc>,
    done: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted item identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: Title,
    /// Persisted owner identifier.
    pub owner: OwnerId,
    /// Persisted due date.
    pub due_at: DateTime<Utc>,
    /// Persisted completion flag.
    pub done: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new, not-yet-done to-do item.
    #[must_use]
    pub fn new(title: Title, owner: OwnerId, due_at: DateTime<Utc>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TodoId::new(),
            title,
            owner,
            due_at,
            done: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a to-do item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            owner: data.owner,
            due_at: data.due_at,
            done: data.done,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the item title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Returns whether the item has been completed.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the item title.
    pub fn rename(&mut self, title: Title, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Marks the item as done. Marking an already-done item is not an
    /// error; the flag simply stays set.
    pub fn mark_done(&mut self, clock: &impl Clock) {
        self.done = true;
        self.touch(clock);
    }

    /// Marks the item as not done. Idempotent, like [`Self::mark_done`].
    pub fn mark_undone(&mut self, clock: &impl Clock) {
        self.done = false;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
