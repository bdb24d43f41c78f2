//! Navgate Accept — decides whether navigation pages are shown.
//!
//! # Modules
//!
//! - [`helper`]: The [`AcceptHelper`] decision and the [`PageAcceptor`] trait
//! - [`config`]: Typed [`AcceptConfig`], TOML loading, untyped adaptation
//! - [`factory`]: [`AcceptHelperFactory`] with its named oracle registry

#![doc = include_str!("../README.md")]

pub mod config;
pub mod factory;
pub mod helper;

mod proptests;

// Re-export key types at crate root for convenience
pub use config::{AcceptConfig, DEFAULT_MAX_DEPTH};
pub use factory::AcceptHelperFactory;
pub use helper::{AcceptHelper, PageAcceptor};
