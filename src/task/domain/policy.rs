//! Transition policy selection.

use serde::{Deserialize, Serialize};

/// Decides how a task reacts to an out-of-order transition call.
///
/// # Examples
///
/// ```
/// use tasklane::task::domain::TransitionPolicy;
///
/// assert_eq!(TransitionPolicy::default(), TransitionPolicy::Guarded);
/// assert!(TransitionPolicy::Guarded.is_guarded());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// `start` requires `Pending` and `complete` requires `InProgress`.
    /// Anything else fails with `InvalidTransition`.
    #[default]
    Guarded,
    /// Every call sets the target status regardless of the current one,
    /// including moving a completed task back to `InProgress`.
    Permissive,
}

impl TransitionPolicy {
    /// Returns `true` when out-of-order calls are rejected.
    #[must_use]
    pub const fn is_guarded(self) -> bool {
        matches!(self, Self::Guarded)
    }
}
