//! Individual validation rule implementations.
//!
//! Each rule is a pure function checking one command field. Field rules
//! delegate to the domain constructors so that validation and construction
//! cannot drift apart. Failures are accumulated, not fail-fast.

use super::{ValidationFailure, ValidationOutcome};
use crate::todo::commands::{CreateTodo, MarkTodo, RenameTodo, TodoCommand};
use crate::todo::domain::{OwnerId, Title};

/// Validates a title candidate.
///
/// Returns a failure when the value is empty after trimming or exceeds the
/// persisted title width.
#[must_use]
pub fn validate_title(value: &str) -> Option<ValidationFailure> {
    Title::new(value)
        .err()
        .map(|err| ValidationFailure::new("title", err.to_string()))
}

/// Validates an owner candidate.
///
/// Returns a failure when the value is empty after trimming.
#[must_use]
pub fn validate_owner(value: &str) -> Option<ValidationFailure> {
    OwnerId::new(value)
        .err()
        .map(|err| ValidationFailure::new("owner", err.to_string()))
}

/// Validates a create command.
#[must_use]
pub fn validate_create(command: &CreateTodo) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    collect(&mut failures, validate_title(&command.title));
    collect(&mut failures, validate_owner(&command.owner));
    failures
}

/// Validates a rename command.
#[must_use]
pub fn validate_rename(command: &RenameTodo) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    collect(&mut failures, validate_title(&command.title));
    collect(&mut failures, validate_owner(&command.owner));
    failures
}

/// Validates a mark-done or mark-undone command.
#[must_use]
pub fn validate_mark(command: &MarkTodo) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    collect(&mut failures, validate_owner(&command.owner));
    failures
}

/// Validates a command, dispatching on its variant.
#[must_use]
pub fn validate(command: &TodoCommand) -> ValidationOutcome {
    let failures = match command {
        TodoCommand::Create(create) => validate_create(create),
        TodoCommand::Rename(rename) => validate_rename(rename),
        TodoCommand::MarkDone(mark) | TodoCommand::MarkUndone(mark) => validate_mark(mark),
    };
    ValidationOutcome::new(failures)
}

fn collect(failures: &mut Vec<ValidationFailure>, maybe_failure: Option<ValidationFailure>) {
    if let Some(failure) = maybe_failure {
        failures.push(failure);
    }
}
