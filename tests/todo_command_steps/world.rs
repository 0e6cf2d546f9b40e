//! Shared world state for to-do command BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tarefa::todo::{
    adapters::memory::InMemoryTodoRepository,
    commands::TodoCommand,
    domain::TodoItem,
    services::{CommandOutcome, TodoCommandProcessor, TodoCommandResult},
};

/// Processor type used by the BDD world.
pub type TestProcessor = TodoCommandProcessor<InMemoryTodoRepository, DefaultClock>;

/// Scenario world for to-do command behaviour tests.
pub struct TodoCommandWorld {
    /// Processor under test, backed by an in-memory repository.
    pub service: TestProcessor,
    /// Command staged by a given step, handled by a when step.
    pub pending_command: Option<TodoCommand>,
    /// Item created during scenario setup.
    pub current_item: Option<TodoItem>,
    /// Result of the most recent handled command.
    pub last_result: Option<TodoCommandResult<CommandOutcome>>,
}

impl TodoCommandWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TodoCommandProcessor::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            pending_command: None,
            current_item: None,
            last_result: None,
        }
    }
}

impl Default for TodoCommandWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoCommandWorld {
    TodoCommandWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
