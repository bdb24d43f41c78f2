//! The page acceptance helper.
//!
//! # Rules
//!
//! ```text
//! accept(page) = visible(page) ∧ authorized(page) ∧ (¬recursive ∨ accept(parent))
//! ```
//!
//! - A page that is not visible is rejected, unless invisible pages are
//!   rendered. Nothing else about the page is looked at.
//! - When the page names a resource or a privilege and an oracle is
//!   configured, the oracle must grant it to at least one configured role
//!   (or to no role at all when none are configured).
//! - A recursive check also rejects the page when any ancestor is rejected.
//!   Ancestors are always checked recursively.

use std::collections::HashSet;

use navgate_core::{AclAuthorizer, Authorization, GrantAuthorizer, NavigationPage, Role};

use crate::config::DEFAULT_MAX_DEPTH;

// ============================================================================
// PageAcceptor
// ============================================================================

/// Decides whether a navigation page is accepted for display or traversal.
///
/// This is the capability consumers depend on; [`AcceptHelper`] is the
/// implementation handed out by the factory.
pub trait PageAcceptor: Send + Sync {
    /// Whether `page` is accepted.
    ///
    /// With `recursive`, the page is also rejected when an ancestor is.
    fn accept(&self, page: &dyn NavigationPage, recursive: bool) -> bool;
}

// ============================================================================
// AcceptHelper
// ============================================================================

/// Accepts or rejects navigation pages by visibility and authorization.
///
/// Configuration is fixed at construction. A helper can be shared across
/// threads as long as the pages handed to it can.
///
/// # Example
///
/// ```
/// use navgate_accept::AcceptHelper;
/// use navgate_core::{Authorization, NavigationPage, PageResource, Role};
///
/// struct Page {
///     resource: &'static str,
///     privilege: &'static str,
/// }
///
/// impl NavigationPage for Page {
///     fn is_visible(&self, _recursive: bool) -> bool {
///         true
///     }
///     fn resource(&self) -> Option<PageResource<'_>> {
///         Some(PageResource::Id(self.resource))
///     }
///     fn privilege(&self) -> Option<&str> {
///         Some(self.privilege)
///     }
///     fn parent(&self) -> Option<&dyn NavigationPage> {
///         None
///     }
/// }
///
/// let grant = |role: Option<&Role>, resource: Option<&str>, privilege: Option<&str>| {
///     role.map(Role::as_str) == Some("admin")
///         && resource == Some("doc1")
///         && privilege == Some("edit")
/// };
///
/// let roles = vec![Role::new("admin")];
/// let helper = AcceptHelper::new(Some(Authorization::grant(grant)), false, roles);
///
/// assert!(helper.accept(&Page { resource: "doc1", privilege: "edit" }, true));
/// assert!(!helper.accept(&Page { resource: "doc2", privilege: "edit" }, true));
/// ```
#[derive(Debug, Clone)]
pub struct AcceptHelper {
    authorization: Option<Authorization>,
    render_invisible: bool,
    roles: Vec<Role>,
    max_depth: usize,
}

impl AcceptHelper {
    /// Creates a helper.
    ///
    /// - `authorization`: the oracle to consult, if any
    /// - `render_invisible`: accept pages that are not visible
    /// - `roles`: roles checked in order; empty means "check with no role"
    pub fn new(
        authorization: Option<Authorization>,
        render_invisible: bool,
        roles: Vec<Role>,
    ) -> Self {
        Self {
            authorization,
            render_invisible,
            roles,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limits how many ancestors a recursive check follows.
    ///
    /// A page whose ancestor chain is longer than this is rejected.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The configured oracle.
    pub fn authorization(&self) -> Option<&Authorization> {
        self.authorization.as_ref()
    }

    /// Whether invisible pages are accepted.
    pub fn render_invisible(&self) -> bool {
        self.render_invisible
    }

    /// The configured roles, in check order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// The ancestor limit for recursive checks.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether `page` is accepted.
    ///
    /// With `recursive`, every ancestor must be accepted as well; ancestors
    /// are checked recursively regardless of `recursive`. A rejected page
    /// never has its parent looked up.
    ///
    /// Ancestor chains that loop back on themselves or exceed
    /// [`max_depth`](Self::max_depth) reject the page.
    pub fn accept(&self, page: &dyn NavigationPage, recursive: bool) -> bool {
        self.accept_chain(page, recursive)
    }

    /// Yields the pages accepted by [`accept`](Self::accept), in order.
    pub fn filter_accepted<'p, I, P>(
        &self,
        pages: I,
        recursive: bool,
    ) -> impl Iterator<Item = &'p P>
    where
        I: IntoIterator<Item = &'p P>,
        P: NavigationPage + 'p,
    {
        pages
            .into_iter()
            .filter(move |page| self.accept(*page, recursive))
    }

    fn accept_chain<'p>(&self, page: &'p (dyn NavigationPage + 'p), recursive: bool) -> bool {
        if !self.accept_page(page) {
            return false;
        }
        if !recursive {
            return true;
        }

        let mut seen: HashSet<*const (dyn NavigationPage + 'p)> = HashSet::new();
        let mut current = page;
        let mut depth = 0;

        while let Some(parent) = current.parent() {
            if seen.is_empty() {
                seen.insert(page as *const _);
            }
            depth += 1;
            if depth > self.max_depth {
                log::warn!(
                    "Page rejected: ancestor chain exceeds max depth {}",
                    self.max_depth
                );
                return false;
            }
            if !seen.insert(parent as *const _) {
                log::warn!("Page rejected: ancestor chain loops back at depth {depth}");
                return false;
            }
            if !self.accept_page(parent) {
                log::trace!("Page rejected: ancestor at depth {depth} is not accepted");
                return false;
            }
            current = parent;
        }

        true
    }

    /// Checks a single page, ignoring its ancestors.
    fn accept_page(&self, page: &dyn NavigationPage) -> bool {
        if !page.is_visible(false) && !self.render_invisible {
            log::trace!("Page rejected: not visible");
            return false;
        }

        let resource = page.resource();
        let privilege = page.privilege();
        let resource = resource.map(|r| r.resource_id());

        if resource.is_none() && privilege.is_none() {
            return true;
        }

        let accepted = match &self.authorization {
            Some(Authorization::Grant(auth)) => self.grant_from_auth(&**auth, resource, privilege),
            Some(Authorization::Acl(acl)) => self.grant_from_acl(&**acl, resource, privilege),
            None => true,
        };

        if !accepted {
            log::trace!(
                "Page rejected: resource={resource:?} privilege={privilege:?} denied by {} oracle",
                self.authorization.as_ref().map_or("no", Authorization::kind)
            );
        }
        accepted
    }

    fn grant_from_auth(
        &self,
        auth: &dyn GrantAuthorizer,
        resource: Option<&str>,
        privilege: Option<&str>,
    ) -> bool {
        if self.roles.is_empty() {
            return auth.is_granted(None, resource, privilege);
        }
        self.roles
            .iter()
            .any(|role| auth.is_granted(Some(role), resource, privilege))
    }

    fn grant_from_acl(
        &self,
        acl: &dyn AclAuthorizer,
        resource: Option<&str>,
        privilege: Option<&str>,
    ) -> bool {
        if self.roles.is_empty() {
            return acl.is_allowed(None, resource, privilege);
        }
        self.roles
            .iter()
            .any(|role| acl.is_allowed(Some(role.as_str()), resource, privilege))
    }
}

impl PageAcceptor for AcceptHelper {
    fn accept(&self, page: &dyn NavigationPage, recursive: bool) -> bool {
        self.accept_chain(page, recursive)
    }
}

// ============================================================================
// Tests
// ============================================================================
