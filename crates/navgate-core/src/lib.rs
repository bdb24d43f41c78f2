//! Navgate Core — collaborator contracts for page acceptance.
//!
//! This crate has no internal Navgate dependencies. It defines what a
//! navigation tree and an authorization backend must provide; the decision
//! logic lives in `navgate-accept`.
//!
//! # Modules
//!
//! - [`authorization`]: Grant-style and ACL-style oracles
//! - [`error`]: Error types and Result alias
//! - [`page`]: The navigation page contract
//! - [`role`]: Role identifiers
//! - `testing`: In-memory pages and recording oracles (feature `testing`)

#![doc = include_str!("../README.md")]

pub mod authorization;
pub mod error;
pub mod page;
pub mod role;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export key types at crate root for convenience
pub use authorization::{AclAuthorizer, Authorization, GrantAuthorizer};
pub use error::{Error, Result};
pub use page::{NavigationPage, PageResource, ResourceCapability};
pub use role::Role;
