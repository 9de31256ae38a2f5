//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasklane::{
    task::domain::{Task, TaskDomainError},
    user::domain::User,
};

/// Scenario world for task lifecycle behaviour tests.
pub struct LifecycleWorld {
    /// User created by the scenario, if any.
    pub assignee: Option<Arc<User>>,
    /// Task under test, if created.
    pub task: Option<Task>,
    /// Outcome of the latest `When` transition.
    pub last_transition_result: Option<Result<(), TaskDomainError>>,
}

impl LifecycleWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignee: None,
            task: None,
            last_transition_result: None,
        }
    }

    /// Returns the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_mut(&mut self) -> Result<&mut Task, eyre::Report> {
        self.task
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for LifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}
