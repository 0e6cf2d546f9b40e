//! Validation outcome and failure types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field-level validation problem.
///
/// Failures are caller-facing payloads: they name the offending field and
/// carry a human-readable message, and serialize as part of a rejected
/// command outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Name of the command field that failed validation.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a failure for the given field.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulated result of validating one command.
///
/// Produced by [`crate::todo::validation::validate`]; a command is valid
/// exactly when the failure list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    failures: Vec<ValidationFailure>,
}

impl ValidationOutcome {
    /// Creates an outcome from collected failures.
    #[must_use]
    pub const fn new(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    /// Returns `true` when no failures were recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the recorded failures.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Consumes the outcome, returning the recorded failures.
    #[must_use]
    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }
}
