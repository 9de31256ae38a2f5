//! Tasklane: users, tasks and the task lifecycle state machine.
//!
//! A [`user::domain::User`] is an immutable identity with a role. A
//! [`task::domain::Task`] is bound to one user at construction and moves
//! through `Pending → InProgress → Completed`, rejecting out-of-order calls
//! unless it was built with the permissive transition policy.
//!
//! # Modules
//!
//! - [`user`]: identities and roles
//! - [`task`]: task lifecycle, capability port and detail reporting

pub mod task;
pub mod user;
