//! Authorization oracles.
//!
//! Navgate never decides permissions itself. It asks an externally supplied
//! oracle, which comes in one of two shapes:
//!
//! | Shape | Trait | Query |
//! |-------|-------|-------|
//! | Grant | [`GrantAuthorizer`] | `is_granted(role, resource, privilege)` |
//! | ACL | [`AclAuthorizer`] | `is_allowed(role, resource, privilege)` |
//!
//! The configured oracle is held as an [`Authorization`], so the shape is
//! fixed when the helper is built and checks dispatch with a `match`.

use std::fmt;
use std::sync::Arc;

use crate::Role;

// ============================================================================
// Oracle traits
// ============================================================================

/// A role/resource/privilege grant check.
///
/// `None` for the role means "no role configured"; `None` for resource or
/// privilege means the page did not name one.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// use navgate_core::{GrantAuthorizer, Role};
///
/// let grant = |role: Option<&Role>, resource: Option<&str>, _privilege: Option<&str>| {
///     role.is_some_and(|r| r.as_str() == "admin") || resource == Some("public")
/// };
///
/// assert!(grant.is_granted(Some(&Role::new("admin")), Some("billing"), None));
/// assert!(grant.is_granted(None, Some("public"), None));
/// assert!(!grant.is_granted(None, Some("billing"), Some("edit")));
/// ```
pub trait GrantAuthorizer: Send + Sync {
    /// Whether `role` is granted `privilege` on `resource`.
    fn is_granted(
        &self,
        role: Option<&Role>,
        resource: Option<&str>,
        privilege: Option<&str>,
    ) -> bool;
}

/// A classic access-control-list check.
///
/// Roles reach an ACL as plain string identifiers.
pub trait AclAuthorizer: Send + Sync {
    /// Whether `role` is allowed `privilege` on `resource`.
    fn is_allowed(
        &self,
        role: Option<&str>,
        resource: Option<&str>,
        privilege: Option<&str>,
    ) -> bool;
}

impl<F> GrantAuthorizer for F
where
    F: Fn(Option<&Role>, Option<&str>, Option<&str>) -> bool + Send + Sync,
{
    fn is_granted(
        &self,
        role: Option<&Role>,
        resource: Option<&str>,
        privilege: Option<&str>,
    ) -> bool {
        self(role, resource, privilege)
    }
}

impl<F> AclAuthorizer for F
where
    F: Fn(Option<&str>, Option<&str>, Option<&str>) -> bool + Send + Sync,
{
    fn is_allowed(
        &self,
        role: Option<&str>,
        resource: Option<&str>,
        privilege: Option<&str>,
    ) -> bool {
        self(role, resource, privilege)
    }
}

// ============================================================================
// Authorization
// ============================================================================

/// The oracle an acceptance helper consults.
///
/// Cheap to clone; the oracle itself is shared, not owned.
#[derive(Clone)]
pub enum Authorization {
    /// Queried with [`GrantAuthorizer::is_granted`].
    Grant(Arc<dyn GrantAuthorizer>),
    /// Queried with [`AclAuthorizer::is_allowed`].
    Acl(Arc<dyn AclAuthorizer>),
}

impl Authorization {
    /// Wraps a grant-style oracle.
    pub fn grant<A: GrantAuthorizer + 'static>(authorizer: A) -> Self {
        Self::Grant(Arc::new(authorizer))
    }

    /// Wraps an ACL-style oracle.
    pub fn acl<A: AclAuthorizer + 'static>(acl: A) -> Self {
        Self::Acl(Arc::new(acl))
    }

    /// Short name of the oracle shape, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Grant(_) => "grant",
            Self::Acl(_) => "acl",
        }
    }

    /// Returns `true` if this is a grant-style oracle.
    pub fn is_grant(&self) -> bool {
        matches!(self, Self::Grant(_))
    }

    /// Returns `true` if this is an ACL-style oracle.
    pub fn is_acl(&self) -> bool {
        matches!(self, Self::Acl(_))
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Authorization").field(&self.kind()).finish()
    }
}
