//! Builds acceptance helpers from configuration.
//!
//! Oracles cannot live in a config file, so the factory keeps a registry of
//! named [`Authorization`]s and resolves the config's `authorization` name
//! against it. An unknown name leaves the helper without an oracle.
//!
//! # Example
//!
//! ```
//! use navgate_accept::{AcceptConfig, AcceptHelperFactory};
//! use navgate_core::Authorization;
//!
//! let allow_all = |_: Option<&str>, _: Option<&str>, _: Option<&str>| true;
//! let factory = AcceptHelperFactory::new()
//!     .with_authorization("site-acl", Authorization::acl(allow_all));
//!
//! let config = AcceptConfig::from_toml_str(r#"
//!     authorization = "site-acl"
//!     roles = ["guest"]
//! "#).unwrap();
//!
//! let helper = factory.create(&config);
//! assert!(helper.authorization().is_some_and(Authorization::is_acl));
//! assert_eq!(helper.roles().len(), 1);
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use navgate_core::Authorization;
use serde_json::Value;

use crate::config::AcceptConfig;
use crate::helper::{AcceptHelper, PageAcceptor};

/// Creates [`AcceptHelper`]s, resolving oracles by name.
///
/// Creation never fails: anything missing or unrecognized falls back to
/// the defaults documented on [`AcceptConfig`].
#[derive(Debug, Clone, Default)]
pub struct AcceptHelperFactory {
    authorizations: BTreeMap<String, Authorization>,
}

impl AcceptHelperFactory {
    /// Create a factory with no registered oracles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an oracle under `name`, builder style.
    pub fn with_authorization(
        mut self,
        name: impl Into<String>,
        authorization: Authorization,
    ) -> Self {
        self.register(name, authorization);
        self
    }

    /// Register an oracle under `name`, returning any oracle it replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        authorization: Authorization,
    ) -> Option<Authorization> {
        let name = name.into();
        log::debug!("Registering {} oracle '{name}'", authorization.kind());
        self.authorizations.insert(name, authorization)
    }

    /// Check if an oracle is registered under `name`.
    pub fn has_authorization(&self, name: &str) -> bool {
        self.authorizations.contains_key(name)
    }

    /// Names of all registered oracles, sorted.
    pub fn authorization_names(&self) -> impl Iterator<Item = &str> {
        self.authorizations.keys().map(String::as_str)
    }

    /// Build a helper from typed configuration.
    pub fn create(&self, config: &AcceptConfig) -> AcceptHelper {
        let authorization = config.authorization.as_deref().and_then(|name| {
            let found = self.authorizations.get(name).cloned();
            if found.is_none() {
                log::debug!("No oracle registered as '{name}', checks run without one");
            }
            found
        });

        AcceptHelper::new(authorization, config.render_invisible, config.roles.clone())
            .with_max_depth(config.max_depth)
    }

    /// Build a helper from an untyped options mapping.
    ///
    /// See [`AcceptConfig::from_value`] for how each entry is read.
    pub fn create_from_value(&self, options: Option<&Value>) -> AcceptHelper {
        self.create(&AcceptConfig::from_value(options))
    }

    /// Build a helper and hand it out as the [`PageAcceptor`] capability.
    pub fn create_acceptor(&self, config: &AcceptConfig) -> Arc<dyn PageAcceptor> {
        Arc::new(self.create(config))
    }
}
