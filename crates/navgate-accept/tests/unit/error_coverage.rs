//! Error construction and display.

use std::error::Error as _;

use navgate_accept::AcceptConfig;
use navgate_core::Error;

#[test]
fn test_config_error_display() {
    let err = Error::config("unknown key");
    assert_eq!(err.to_string(), "Configuration error: unknown key");
}

#[test]
fn test_io_error_keeps_source() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = Error::io_with_path(source, "/etc/navgate/accept.toml");

    assert!(err.to_string().contains("/etc/navgate/accept.toml"));
    assert!(err.to_string().contains("denied"));
    assert!(err.source().is_some());
}

#[test]
fn test_parse_error_from_typed_load() {
    let err = AcceptConfig::from_toml_str("roles = 3").unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got: {err:?}");
    assert!(err.to_string().starts_with("Parse error:"));
}

#[test]
fn test_validate_direct() {
    let mut config = AcceptConfig::default();
    assert!(config.validate().is_ok());

    config.max_depth = 0;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}
