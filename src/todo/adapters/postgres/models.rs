//! Diesel row models for to-do item persistence.

use super::schema::todos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for to-do records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Item identifier.
    pub id: uuid::Uuid,
    /// Item title.
    pub title: String,
    /// Owning user identifier.
    pub owner: String,
    /// Due date.
    pub due_at: DateTime<Utc>,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for to-do records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Item identifier.
    pub id: uuid::Uuid,
    /// Item title.
    pub title: String,
    /// Owning user identifier.
    pub owner: String,
    /// Due date.
    pub due_at: DateTime<Utc>,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when persisting item mutations.
///
/// The identifier and owner columns never change after insertion, so the
/// changeset covers only the mutable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChangeset {
    /// Item title.
    pub title: String,
    /// Due date.
    pub due_at: DateTime<Utc>,
    /// Completion flag.
    pub done: bool,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
