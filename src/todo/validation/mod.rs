//! Command validation.
//!
//! Validation is a pure function over a command: it returns an outcome
//! carrying every failure found, and attaches no mutable state to the
//! command itself. The processor consults the outcome before performing
//! any repository call.

mod outcome;
pub mod rules;

pub use outcome::{ValidationFailure, ValidationOutcome};
pub use rules::validate;
