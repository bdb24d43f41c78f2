//! Test doubles for acceptance checks.
//!
//! Everything here counts how it was used, so tests can assert that a
//! lookup or an oracle query never happened.
//!
//! ```
//! use navgate_core::testing::{RecordingGrant, StaticPage};
//! use navgate_core::{GrantAuthorizer, NavigationPage};
//!
//! let page = StaticPage::visible().with_resource("doc1").with_privilege("edit");
//! assert_eq!(page.privilege(), Some("edit"));
//! assert_eq!(page.privilege_reads(), 1);
//!
//! let grant = RecordingGrant::allowing(&[("admin", "doc1", "edit")]);
//! assert!(!grant.is_granted(None, Some("doc1"), Some("edit")));
//! assert_eq!(grant.calls().len(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::{
    AclAuthorizer, GrantAuthorizer, NavigationPage, PageResource, ResourceCapability, Role,
};

// ============================================================================
// StaticResource
// ============================================================================

/// A resource capability object with a fixed identifier.
#[derive(Debug, Default)]
pub struct StaticResource {
    id: String,
    reads: AtomicUsize,
}

impl StaticResource {
    /// Creates a resource resolving to `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of times the identifier was resolved.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ResourceCapability for StaticResource {
    fn resource_id(&self) -> &str {
        self.reads.fetch_add(1, Ordering::SeqCst);
        &self.id
    }
}

// ============================================================================
// StaticPage
// ============================================================================

#[derive(Debug)]
enum StaticPageResource {
    Id(String),
    Object(Arc<StaticResource>),
}

/// An in-memory navigation page with read counters.
///
/// Parents are held by `Arc` so a test can keep its own handle and inspect
/// the parent's counters after a check.
#[derive(Debug, Default)]
pub struct StaticPage {
    visible: bool,
    resource: Option<StaticPageResource>,
    privilege: Option<String>,
    parent: Option<Arc<StaticPage>>,
    visibility_reads: AtomicUsize,
    resource_reads: AtomicUsize,
    privilege_reads: AtomicUsize,
    parent_reads: AtomicUsize,
}

impl StaticPage {
    /// A visible page without resource, privilege, or parent.
    pub fn visible() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    /// An invisible page without resource, privilege, or parent.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Sets a plain resource identifier.
    pub fn with_resource(mut self, id: impl Into<String>) -> Self {
        self.resource = Some(StaticPageResource::Id(id.into()));
        self
    }

    /// Sets a resource capability object.
    pub fn with_resource_object(mut self, resource: Arc<StaticResource>) -> Self {
        self.resource = Some(StaticPageResource::Object(resource));
        self
    }

    /// Sets the privilege.
    pub fn with_privilege(mut self, privilege: impl Into<String>) -> Self {
        self.privilege = Some(privilege.into());
        self
    }

    /// Sets the parent page.
    pub fn with_parent(mut self, parent: Arc<StaticPage>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Number of `is_visible` calls.
    pub fn visibility_reads(&self) -> usize {
        self.visibility_reads.load(Ordering::SeqCst)
    }

    /// Number of `resource` calls.
    pub fn resource_reads(&self) -> usize {
        self.resource_reads.load(Ordering::SeqCst)
    }

    /// Number of `privilege` calls.
    pub fn privilege_reads(&self) -> usize {
        self.privilege_reads.load(Ordering::SeqCst)
    }

    /// Number of `parent` calls.
    pub fn parent_reads(&self) -> usize {
        self.parent_reads.load(Ordering::SeqCst)
    }
}

impl NavigationPage for StaticPage {
    fn is_visible(&self, _recursive: bool) -> bool {
        self.visibility_reads.fetch_add(1, Ordering::SeqCst);
        self.visible
    }

    fn resource(&self) -> Option<PageResource<'_>> {
        self.resource_reads.fetch_add(1, Ordering::SeqCst);
        self.resource.as_ref().map(|r| match r {
            StaticPageResource::Id(id) => PageResource::Id(id),
            StaticPageResource::Object(obj) => PageResource::Capability(&**obj),
        })
    }

    fn privilege(&self) -> Option<&str> {
        self.privilege_reads.fetch_add(1, Ordering::SeqCst);
        self.privilege.as_deref()
    }

    fn parent(&self) -> Option<&dyn NavigationPage> {
        self.parent_reads.fetch_add(1, Ordering::SeqCst);
        self.parent.as_deref().map(|p| p as &dyn NavigationPage)
    }
}

// ============================================================================
// Recording oracles
// ============================================================================

/// One oracle query: `(role, resource, privilege)`.
pub type RecordedCall = (Option<String>, Option<String>, Option<String>);

#[derive(Debug, Default)]
struct Recorder {
    allowed: Vec<(String, String, String)>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Recorder {
    fn allowing(allowed: &[(&str, &str, &str)]) -> Self {
        Self {
            allowed: allowed
                .iter()
                .map(|(role, resource, privilege)| {
                    (role.to_string(), resource.to_string(), privilege.to_string())
                })
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn check(&self, role: Option<&str>, resource: Option<&str>, privilege: Option<&str>) -> bool {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((
                role.map(str::to_string),
                resource.map(str::to_string),
                privilege.map(str::to_string),
            ));
        }
        // An empty string in the allow list matches an absent value
        let hit = |want: &str, got: Option<&str>| want == got.unwrap_or("");
        self.allowed
            .iter()
            .any(|(r, res, p)| hit(r, role) && hit(res, resource) && hit(p, privilege))
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

/// A grant-style oracle that allows a fixed set of triples and records
/// every query.
///
/// An empty string in an allowed triple matches an absent value.
#[derive(Debug, Default)]
pub struct RecordingGrant {
    recorder: Recorder,
}

impl RecordingGrant {
    /// Allows exactly the given `(role, resource, privilege)` triples.
    pub fn allowing(allowed: &[(&str, &str, &str)]) -> Self {
        Self {
            recorder: Recorder::allowing(allowed),
        }
    }

    /// Denies every query.
    pub fn denying() -> Self {
        Self::default()
    }

    /// All queries so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.recorder.calls()
    }
}

impl GrantAuthorizer for RecordingGrant {
    fn is_granted(
        &self,
        role: Option<&Role>,
        resource: Option<&str>,
        privilege: Option<&str>,
    ) -> bool {
        self.recorder.check(role.map(Role::as_str), resource, privilege)
    }
}

/// An ACL-style oracle that allows a fixed set of triples and records
/// every query.
#[derive(Debug, Default)]
pub struct RecordingAcl {
    recorder: Recorder,
}

impl RecordingAcl {
    /// Allows exactly the given `(role, resource, privilege)` triples.
    pub fn allowing(allowed: &[(&str, &str, &str)]) -> Self {
        Self {
            recorder: Recorder::allowing(allowed),
        }
    }

    /// Denies every query.
    pub fn denying() -> Self {
        Self::default()
    }

    /// All queries so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.recorder.calls()
    }
}

impl AclAuthorizer for RecordingAcl {
    fn is_allowed(
        &self,
        role: Option<&str>,
        resource: Option<&str>,
        privilege: Option<&str>,
    ) -> bool {
        self.recorder.check(role, resource, privilege)
    }
}
