//! Port contracts for task lifecycle management.
//!
//! Ports describe the task capability that callers depend on, independent of
//! the concrete aggregate behind it.

pub mod tracked;

pub use tracked::TrackedTask;
