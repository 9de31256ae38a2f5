//! User identities for task assignment.
//!
//! A user is an immutable identity record with a role classification. Roles
//! are descriptive metadata only; no operation in this crate checks them.
//!
//! - Domain types in [`domain`]

pub mod domain;

pub use domain::create_user;

#[cfg(test)]
mod tests;
