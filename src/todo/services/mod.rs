//! Application services for to-do command handling.

mod processor;

pub use processor::{
    ACCEPTED_MESSAGE, CommandOutcome, REJECTED_MESSAGE, TodoCommandError, TodoCommandProcessor,
    TodoCommandResult,
};
