//! Error types for user domain parsing.

use thiserror::Error;

/// Error returned while parsing a role from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct ParseRoleError(pub String);
