//! End-to-end acceptance decisions through factory-built helpers.

use std::sync::Arc;

use navgate_accept::PageAcceptor;
use navgate_core::testing::{StaticPage, StaticResource};
use serde_json::json;

use crate::common::{ACL, GRANT, TestHarness, doc1_edit, visible_chain};

#[test]
fn test_admin_may_edit_doc1() {
    let harness = TestHarness::new();
    let helper = harness
        .factory
        .create_from_value(Some(&json!({ "authorization": GRANT, "roles": ["admin"] })));

    assert!(helper.accept(&doc1_edit(), true));
    assert_eq!(harness.grant.calls().len(), 1);
    assert!(harness.acl.calls().is_empty());
}

#[test]
fn test_guest_may_not_edit_doc1() {
    let harness = TestHarness::new();
    let helper = harness
        .factory
        .create_from_value(Some(&json!({ "authorization": GRANT, "roles": ["guest"] })));

    assert!(!helper.accept(&doc1_edit(), true));
    assert_eq!(
        harness.grant.calls()[0].0.as_deref(),
        Some("guest"),
        "the oracle should have been asked about the configured role"
    );
}

#[test]
fn test_any_of_several_roles_suffices() {
    let harness = TestHarness::new();
    let helper = harness.factory.create_from_value(Some(&json!({
        "authorization": GRANT,
        "roles": ["guest", "editor", "admin"],
    })));

    assert!(helper.accept(&doc1_edit(), false));
    assert_eq!(harness.grant.calls().len(), 3);
}

#[test]
fn test_invisible_parent_rejects_authorized_child() {
    let harness = TestHarness::new();
    let helper = harness
        .factory
        .create_from_value(Some(&json!({ "authorization": GRANT, "roles": ["admin"] })));
    let parent = Arc::new(StaticPage::hidden().with_privilege("view"));
    let child = doc1_edit().with_parent(parent.clone());

    assert!(!helper.accept(&child, true));
    assert!(helper.accept(&child, false));
    assert_eq!(parent.privilege_reads(), 0);
}

#[test]
fn test_render_invisible_accepts_hidden_tree() {
    let harness = TestHarness::new();
    let helper = harness
        .factory
        .create_from_value(Some(&json!({ "renderInvisible": true })));
    let parent = Arc::new(StaticPage::hidden());
    let child = StaticPage::hidden().with_parent(parent);

    assert!(helper.accept(&child, true));
}

#[test]
fn test_acl_oracle_routes_role_names() {
    let harness = TestHarness::allowing(&[], &[("guest", "news", "read")]);
    let helper = harness
        .factory
        .create_from_value(Some(&json!({ "authorization": ACL, "roles": ["guest"] })));
    let page = StaticPage::visible()
        .with_resource("news")
        .with_privilege("read");

    assert!(helper.accept(&page, true));
    assert!(harness.grant.calls().is_empty());
    assert_eq!(
        harness.acl.calls(),
        vec![(
            Some("guest".to_string()),
            Some("news".to_string()),
            Some("read".to_string())
        )]
    );
}

#[test]
fn test_resource_object_identifier_reaches_oracle() {
    let harness = TestHarness::allowing(&[("admin", "R", "")], &[]);
    let helper = harness
        .factory
        .create_from_value(Some(&json!({ "authorization": GRANT, "roles": ["admin"] })));
    let resource = Arc::new(StaticResource::new("R"));
    let page = StaticPage::visible().with_resource_object(resource.clone());

    assert!(helper.accept(&page, true));
    assert_eq!(resource.reads(), 1);
    assert_eq!(harness.grant.calls()[0].1.as_deref(), Some("R"));
}

#[test]
fn test_unknown_oracle_name_accepts_protected_pages() {
    let harness = TestHarness::new();
    let helper = harness
        .factory
        .create_from_value(Some(&json!({ "authorization": "nope", "roles": ["guest"] })));

    assert!(helper.authorization().is_none());
    assert!(helper.accept(&doc1_edit(), true));
    assert!(harness.grant.calls().is_empty());
}

#[test]
fn test_max_depth_from_options() {
    let harness = TestHarness::new();
    let shallow = harness
        .factory
        .create_from_value(Some(&json!({ "maxDepth": 3 })));
    let deep = harness.factory.create_from_value(None);

    // Four pages: the deepest has three ancestors.
    assert!(shallow.accept(&visible_chain(4), true));
    assert!(!shallow.accept(&visible_chain(5), true));
    assert!(deep.accept(&visible_chain(5), true));
}

#[test]
fn test_filter_accepted_over_siblings() {
    let harness = TestHarness::new();
    let helper = harness
        .factory
        .create_from_value(Some(&json!({ "authorization": GRANT, "roles": ["admin"] })));
    let pages = [
        doc1_edit(),
        StaticPage::visible().with_resource("doc2"),
        StaticPage::hidden(),
        StaticPage::visible(),
    ];

    let kept: Vec<_> = helper.filter_accepted(&pages, true).collect();
    assert_eq!(kept.len(), 2);
    assert!(std::ptr::eq(kept[0], &pages[0]));
    assert!(std::ptr::eq(kept[1], &pages[3]));
}

#[test]
fn test_acceptor_capability_matches_helper() {
    let harness = TestHarness::new();
    let config = navgate_accept::AcceptConfig {
        authorization: Some(GRANT.to_string()),
        roles: vec!["guest".into()],
        ..Default::default()
    };
    let acceptor: Arc<dyn PageAcceptor> = harness.factory.create_acceptor(&config);
    let helper = harness.factory.create(&config);

    for page in [doc1_edit(), StaticPage::visible(), StaticPage::hidden()] {
        assert_eq!(acceptor.accept(&page, true), helper.accept(&page, true));
    }
}
