//! Task lifecycle management.
//!
//! A task is bound to one assignee and moves forward through
//! `Pending → InProgress → Completed`. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Reporting services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
