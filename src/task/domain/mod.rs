//! Domain model for the task lifecycle.
//!
//! A task is bound to one assignee at construction and moves through
//! `Pending → InProgress → Completed`. The transition policy decides whether
//! out-of-order calls are rejected or applied unconditionally.

mod error;
mod ids;
mod policy;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use policy::TransitionPolicy;
pub use status::TaskStatus;
pub use task::{StatusChange, Task};

pub(crate) use task::format_summary;
