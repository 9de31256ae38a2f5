//! User identity record.

use super::{Role, UserId};
use serde::{Deserialize, Serialize};

/// An identity that tasks can be assigned to.
///
/// Fields are fixed at construction. Tasks hold users through `Arc<User>`,
/// and a user keeps no record of the tasks that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    role: Role,
}

impl User {
    /// Creates a user from its identifier, display name and role.
    ///
    /// The name is not validated.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, role: Role) -> Self {
        let user = Self {
            id,
            name: name.into(),
            role,
        };
        tracing::debug!(user_id = %user.id, role = %user.role, "user created");
        user
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the recorded role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// Builds a user from a raw identifier.
///
/// # Examples
///
/// ```
/// use tasklane::user::domain::{Role, create_user};
///
/// let user = create_user(1, "Saurabh", Role::Admin);
/// assert_eq!(user.id().value(), 1);
/// assert_eq!(user.name(), "Saurabh");
/// assert_eq!(user.role(), Role::Admin);
/// ```
#[must_use]
pub fn create_user(id: u64, name: impl Into<String>, role: Role) -> User {
    User::new(UserId::new(id), name, role)
}
