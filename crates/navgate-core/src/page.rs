//! The page side of an acceptance check.
//!
//! Navgate does not own navigation trees. A tree node only has to expose
//! the handful of lookups in [`NavigationPage`] for a helper to decide
//! whether it is shown.

use std::fmt;

// ============================================================================
// ResourceCapability
// ============================================================================

/// An object that stands for a protected resource.
///
/// Pages may carry one of these instead of a bare identifier; acceptance
/// checks always query oracles with the identifier it resolves to.
pub trait ResourceCapability {
    /// The identifier of the resource this object represents.
    fn resource_id(&self) -> &str;
}

// ============================================================================
// PageResource
// ============================================================================

/// The resource attached to a page, as the page exposes it.
#[derive(Clone, Copy)]
pub enum PageResource<'a> {
    /// A plain resource identifier.
    Id(&'a str),
    /// An object resolving to a resource identifier.
    Capability(&'a dyn ResourceCapability),
}

impl<'a> PageResource<'a> {
    /// Resolves this resource to the identifier handed to oracles.
    ///
    /// Plain identifiers pass through; capability objects are asked for
    /// their identifier exactly once per call.
    ///
    /// ```
    /// use navgate_core::{PageResource, ResourceCapability};
    ///
    /// struct Document;
    ///
    /// impl ResourceCapability for Document {
    ///     fn resource_id(&self) -> &str {
    ///         "doc1"
    ///     }
    /// }
    ///
    /// assert_eq!(PageResource::Id("doc1").resource_id(), "doc1");
    /// assert_eq!(PageResource::Capability(&Document).resource_id(), "doc1");
    /// ```
    pub fn resource_id(&self) -> &'a str {
        match *self {
            Self::Id(id) => id,
            Self::Capability(cap) => cap.resource_id(),
        }
    }
}

impl<'a> From<&'a str> for PageResource<'a> {
    fn from(id: &'a str) -> Self {
        Self::Id(id)
    }
}

impl fmt::Debug for PageResource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.debug_tuple("Id").field(id).finish(),
            Self::Capability(_) => f.write_str("Capability(..)"),
        }
    }
}

// ============================================================================
// NavigationPage
// ============================================================================

/// A node in a navigation tree, seen from an acceptance check.
///
/// Implementors are read, never mutated. `parent` is a back-reference the
/// helper follows upward; it must not hand out ownership of the parent.
///
/// # Example
///
/// ```
/// use navgate_core::{NavigationPage, PageResource};
///
/// struct Link {
///     visible: bool,
///     resource: Option<String>,
/// }
///
/// impl NavigationPage for Link {
///     fn is_visible(&self, _recursive: bool) -> bool {
///         self.visible
///     }
///
///     fn resource(&self) -> Option<PageResource<'_>> {
///         self.resource.as_deref().map(PageResource::Id)
///     }
///
///     fn privilege(&self) -> Option<&str> {
///         None
///     }
///
///     fn parent(&self) -> Option<&dyn NavigationPage> {
///         None
///     }
/// }
///
/// let link = Link { visible: true, resource: Some("reports".into()) };
/// assert!(link.is_visible(false));
/// assert_eq!(link.resource().map(|r| r.resource_id()), Some("reports"));
/// ```
pub trait NavigationPage {
    /// Whether the page is visible.
    ///
    /// `recursive` asks the page to also consider inherited invisibility.
    /// Acceptance checks always pass `false` and walk ancestors themselves.
    fn is_visible(&self, recursive: bool) -> bool;

    /// The resource protecting this page, if any.
    fn resource(&self) -> Option<PageResource<'_>>;

    /// The privilege required on the resource, if any.
    fn privilege(&self) -> Option<&str>;

    /// The enclosing page, if any.
    fn parent(&self) -> Option<&dyn NavigationPage>;
}
