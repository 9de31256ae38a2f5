//! Task aggregate root and its lifecycle state machine.

use super::{TaskDomainError, TaskId, TaskStatus, TransitionPolicy};
use crate::user::domain::User;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A status change applied to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Status before the change.
    pub from: TaskStatus,
    /// Status after the change.
    pub to: TaskStatus,
    /// Clock time at which the change was applied.
    pub changed_at: DateTime<Utc>,
}

/// Task aggregate root.
///
/// The assignee is shared, not owned: many tasks may point at the same
/// [`User`], and the task never replaces it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
    assignee: Arc<User>,
    policy: TransitionPolicy,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    history: Vec<StatusChange>,
}

impl Task {
    /// Creates a pending task assigned to `assignee` under
    /// [`TransitionPolicy::Guarded`].
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        assignee: Arc<User>,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self::new_with_policy(id, title, assignee, TransitionPolicy::default(), clock)
    }

    /// Creates a pending task assigned to `assignee` under `policy`.
    ///
    /// The policy is fixed for the life of the task.
    #[must_use]
    pub fn new_with_policy(
        id: TaskId,
        title: impl Into<String>,
        assignee: Arc<User>,
        policy: TransitionPolicy,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        let timestamp = clock.utc();
        let task = Self {
            id,
            title: title.into(),
            status: TaskStatus::Pending,
            assignee,
            policy,
            created_at: timestamp,
            updated_at: timestamp,
            history: Vec::new(),
        };
        tracing::debug!(
            task_id = %task.id,
            assignee_id = %task.assignee.id(),
            policy = ?task.policy,
            "task created"
        );
        task
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee fixed at construction.
    #[must_use]
    pub fn assignee(&self) -> &User {
        &self.assignee
    }

    /// Returns a shared handle to the assignee.
    #[must_use]
    pub fn shared_assignee(&self) -> Arc<User> {
        Arc::clone(&self.assignee)
    }

    /// Returns the transition policy chosen at construction.
    #[must_use]
    pub const fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest applied transition.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns every status change applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[StatusChange] {
        &self.history
    }

    /// Moves the task to [`TaskStatus::InProgress`].
    ///
    /// # Errors
    ///
    /// Under the guarded policy, returns
    /// [`TaskDomainError::InvalidTransition`] unless the task is pending.
    pub fn start(&mut self, clock: &(impl Clock + ?Sized)) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::InProgress, clock)
    }

    /// Moves the task to [`TaskStatus::Completed`].
    ///
    /// # Errors
    ///
    /// Under the guarded policy, returns
    /// [`TaskDomainError::InvalidTransition`] unless the task is in progress.
    pub fn complete(&mut self, clock: &(impl Clock + ?Sized)) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::Completed, clock)
    }

    /// Renders `"{title} [{status}] - Assigned to {name}"` from live state.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use tasklane::task::domain::{Task, TaskId};
    /// use tasklane::user::domain::{Role, create_user};
    ///
    /// let user = Arc::new(create_user(1, "Saurabh", Role::Admin));
    /// let task = Task::new(TaskId::new(101), "Write Guide", user, &DefaultClock);
    /// assert_eq!(task.summary(), "Write Guide [Pending] - Assigned to Saurabh");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format_summary(&self.title, self.status, self.assignee.name())
    }

    fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &(impl Clock + ?Sized),
    ) -> Result<(), TaskDomainError> {
        let from = self.status;
        if self.policy.is_guarded() && !from.can_transition_to(target) {
            tracing::warn!(
                task_id = %self.id,
                from = %from,
                to = %target,
                "rejected task status transition"
            );
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from,
                to: target,
            });
        }

        if target < from {
            tracing::warn!(
                task_id = %self.id,
                from = %from,
                to = %target,
                "task status regressed"
            );
        }

        let changed_at = clock.utc();
        if from != target {
            self.history.push(StatusChange {
                from,
                to: target,
                changed_at,
            });
            tracing::debug!(task_id = %self.id, from = %from, to = %target, "task status changed");
        }
        self.status = target;
        self.updated_at = changed_at;
        Ok(())
    }
}

/// Renders the one-line summary shared by every task implementation.
pub(crate) fn format_summary(title: &str, status: TaskStatus, assignee_name: &str) -> String {
    format!("{title} [{status}] - Assigned to {assignee_name}")
}
