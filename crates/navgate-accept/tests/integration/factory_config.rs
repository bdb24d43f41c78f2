//! Helpers built from configuration files.

use std::fs;

use navgate_accept::{AcceptConfig, DEFAULT_MAX_DEPTH};
use navgate_core::{Error, Role};
use tempfile::TempDir;

use crate::common::{ACL, GRANT, TestHarness, doc1_edit};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("accept.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn test_helper_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        &format!(
            r#"
            authorization = "{GRANT}"
            roles = ["guest", "admin"]
            max_depth = 16
            "#
        ),
    );

    let config = AcceptConfig::load(&path).unwrap();
    let harness = TestHarness::new();
    let helper = harness.factory.create(&config);

    assert!(helper.authorization().unwrap().is_grant());
    assert_eq!(helper.roles(), &[Role::new("guest"), Role::new("admin")]);
    assert_eq!(helper.max_depth(), 16);
    assert!(helper.accept(&doc1_edit(), true));
}

#[test]
fn test_saved_config_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let config = AcceptConfig {
        authorization: Some(ACL.to_string()),
        render_invisible: true,
        roles: vec![Role::new("editor")],
        max_depth: DEFAULT_MAX_DEPTH,
    };
    let path = write_config(&dir, &config.to_toml_string().unwrap());

    assert_eq!(AcceptConfig::load(&path).unwrap(), config);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = AcceptConfig::load(&path).unwrap_err();
    match &err {
        Error::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => unreachable!("Expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "roles = [\"admin\"");

    let err = AcceptConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }), "got: {err:?}");
    assert!(err.to_string().contains("accept.toml"));
}

#[test]
fn test_zero_depth_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "max_depth = 0");

    let err = AcceptConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("max_depth"));
}
