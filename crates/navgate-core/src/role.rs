//! Role identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a caller role checked against an authorization oracle.
///
/// Roles are opaque to Navgate: it never interprets them, only hands them to
/// the configured oracle in the order they were configured.
///
/// # Examples
///
/// ```
/// use navgate_core::Role;
///
/// let role = Role::new("editor");
/// assert_eq!(role.as_str(), "editor");
/// assert_eq!(role.to_string(), "editor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Creates a role from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the role identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the role, returning the inner identifier.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self(s)
    }
}
