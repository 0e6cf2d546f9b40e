//! Command processor translating to-do commands into repository calls.

use crate::todo::{
    commands::{CreateTodo, MarkTodo, RenameTodo, TodoCommand},
    domain::{OwnerId, Title, TodoDomainError, TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError},
    validation::{self, ValidationFailure},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// User-facing message attached to every accepted outcome.
pub const ACCEPTED_MESSAGE: &str = "Tarefa Salva";

/// User-facing message attached to every rejected outcome.
pub const REJECTED_MESSAGE: &str = "Ops, parece que sua tarefa está errada!";

/// Result of handling one command.
///
/// The two cases carry semantically different payloads, so they are
/// modelled as distinct variants rather than a single ambiguous payload
/// field. Outcomes are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// The command was valid and the mutation was persisted.
    Accepted {
        /// User-facing confirmation message.
        message: String,
        /// The resulting item, as persisted.
        todo: TodoItem,
    },
    /// The command failed validation; no repository call was made.
    Rejected {
        /// User-facing rejection message.
        message: String,
        /// Accumulated field-level failures.
        failures: Vec<ValidationFailure>,
    },
}

impl CommandOutcome {
    /// Creates an accepted outcome carrying the persisted item.
    #[must_use]
    pub fn accepted(todo: TodoItem) -> Self {
        Self::Accepted {
            message: ACCEPTED_MESSAGE.to_owned(),
            todo,
        }
    }

    /// Creates a rejected outcome carrying the validation failures.
    #[must_use]
    pub fn rejected(failures: Vec<ValidationFailure>) -> Self {
        Self::Rejected {
            message: REJECTED_MESSAGE.to_owned(),
            failures,
        }
    }

    /// Returns `true` for accepted outcomes.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted { message, .. } | Self::Rejected { message, .. } => message,
        }
    }

    /// Returns the persisted item for accepted outcomes.
    #[must_use]
    pub const fn todo(&self) -> Option<&TodoItem> {
        match self {
            Self::Accepted { todo, .. } => Some(todo),
            Self::Rejected { .. } => None,
        }
    }

    /// Returns the validation failures for rejected outcomes.
    #[must_use]
    pub fn failures(&self) -> Option<&[ValidationFailure]> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { failures, .. } => Some(failures),
        }
    }
}

/// Service-level errors for to-do command handling.
///
/// Validation failures are not errors; they surface as
/// [`CommandOutcome::Rejected`]. This type covers the paths where the
/// repository is involved.
#[derive(Debug, Error)]
pub enum TodoCommandError {
    /// No item exists for the identifier and owner pair. Items owned by a
    /// different user report the same way as absent ones.
    #[error("to-do item {id} not found for owner {owner}")]
    NotFound {
        /// Requested item identifier.
        id: TodoId,
        /// Requesting owner.
        owner: OwnerId,
    },

    /// Domain construction failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for to-do command handling.
pub type TodoCommandResult<T> = Result<T, TodoCommandError>;

/// To-do command orchestration service.
///
/// Translates each command variant into exactly one repository interaction
/// sequence: validation always precedes any repository call, a fetch is
/// always followed by exactly one update of the same instance, and each
/// invocation performs at most one read and one write.
#[derive(Clone)]
pub struct TodoCommandProcessor<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TodoCommandProcessor<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new command processor.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Handles one command.
    ///
    /// Invalid commands are rejected before any repository call and
    /// reported as a [`CommandOutcome::Rejected`] value, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoCommandError::NotFound`] when a rename or mark
    /// command addresses a missing or foreign-owned item, and
    /// [`TodoCommandError::Repository`] when persistence fails.
    pub async fn handle(&self, command: TodoCommand) -> TodoCommandResult<CommandOutcome> {
        let outcome = validation::validate(&command);
        if !outcome.is_valid() {
            return Ok(CommandOutcome::rejected(outcome.into_failures()));
        }

        match command {
            TodoCommand::Create(create) => self.create(create).await,
            TodoCommand::Rename(rename) => self.rename(rename).await,
            TodoCommand::MarkDone(mark) => self.set_done(mark, true).await,
            TodoCommand::MarkUndone(mark) => self.set_done(mark, false).await,
        }
    }

    async fn create(&self, command: CreateTodo) -> TodoCommandResult<CommandOutcome> {
        let title = Title::new(command.title)?;
        let owner = OwnerId::new(command.owner)?;
        let todo = TodoItem::new(title, owner, command.due_at, &*self.clock);
        self.repository.create(&todo).await?;
        Ok(CommandOutcome::accepted(todo))
    }

    async fn rename(&self, command: RenameTodo) -> TodoCommandResult<CommandOutcome> {
        let title = Title::new(command.title)?;
        let owner = OwnerId::new(command.owner)?;
        let mut todo = self.fetch(command.id, &owner).await?;
        todo.rename(title, &*self.clock);
        self.repository.update(&todo).await?;
        Ok(CommandOutcome::accepted(todo))
    }

    async fn set_done(&self, command: MarkTodo, done: bool) -> TodoCommandResult<CommandOutcome> {
        let owner = OwnerId::new(command.owner)?;
        let mut todo = self.fetch(command.id, &owner).await?;
        if done {
            todo.mark_done(&*self.clock);
        } else {
            todo.mark_undone(&*self.clock);
        }
        self.repository.update(&todo).await?;
        Ok(CommandOutcome::accepted(todo))
    }

    async fn fetch(&self, id: TodoId, owner: &OwnerId) -> TodoCommandResult<TodoItem> {
        self.repository
            .find_by_id(id, owner)
            .await?
            .ok_or_else(|| TodoCommandError::NotFound {
                id,
                owner: owner.clone(),
            })
    }
}
