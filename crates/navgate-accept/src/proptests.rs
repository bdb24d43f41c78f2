//! Property-based tests for acceptance decisions.
