//! Error types for to-do domain validation.

use thiserror::Error;

/// Errors returned while constructing domain to-do values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The title exceeds the persisted column width.
    #[error("title is {0} characters long, limit is 255")]
    TitleTooLong(usize),

    /// The owning user identifier is empty after trimming.
    #[error("owner must not be empty")]
    EmptyOwner,
}
