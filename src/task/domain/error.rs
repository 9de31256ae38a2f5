//! Error types for task lifecycle validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned by task lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested transition is not permitted from the current status.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Status at the time of the call.
        from: TaskStatus,
        /// Status the call tried to reach.
        to: TaskStatus,
    },
}

/// Error returned while parsing a task status from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
