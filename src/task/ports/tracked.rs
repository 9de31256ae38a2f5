//! Capability contract for lifecycle-tracked tasks.

use crate::task::domain::{Task, TaskDomainError, TaskId, TaskStatus, format_summary};
use crate::user::domain::User;
use mockable::Clock;

/// Shape of a task as seen by callers and reporters.
///
/// [`Task`] is the in-memory implementation. Another backing store can offer
/// the same lifecycle by implementing this trait.
pub trait TrackedTask {
    /// Returns the task identifier.
    fn id(&self) -> TaskId;

    /// Returns the task title.
    fn title(&self) -> &str;

    /// Returns the current lifecycle status.
    fn status(&self) -> TaskStatus;

    /// Returns the assignee.
    fn assignee(&self) -> &User;

    /// Moves the task to [`TaskStatus::InProgress`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the implementation
    /// rejects the call from the current status.
    fn start(&mut self, clock: &dyn Clock) -> Result<(), TaskDomainError>;

    /// Moves the task to [`TaskStatus::Completed`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the implementation
    /// rejects the call from the current status.
    fn complete(&mut self, clock: &dyn Clock) -> Result<(), TaskDomainError>;

    /// Renders `"{title} [{status}] - Assigned to {name}"`.
    fn summary(&self) -> String {
        format_summary(self.title(), self.status(), self.assignee().name())
    }
}

impl TrackedTask for Task {
    fn id(&self) -> TaskId {
        Self::id(self)
    }

    fn title(&self) -> &str {
        Self::title(self)
    }

    fn status(&self) -> TaskStatus {
        Self::status(self)
    }

    fn assignee(&self) -> &User {
        Self::assignee(self)
    }

    fn start(&mut self, clock: &dyn Clock) -> Result<(), TaskDomainError> {
        Self::start(self, clock)
    }

    fn complete(&mut self, clock: &dyn Clock) -> Result<(), TaskDomainError> {
        Self::complete(self, clock)
    }

    fn summary(&self) -> String {
        Self::summary(self)
    }
}
