//! Unit tests for the user domain.
