//! Acceptance helper configuration.
//!
//! [`AcceptConfig`] is the typed form. It loads from TOML:
//!
//! ```toml
//! authorization = "site-acl"
//! render_invisible = false
//! roles = ["editor", "admin"]
//! max_depth = 64
//! ```
//!
//! or is adapted from an untyped JSON mapping with
//! [`AcceptConfig::from_value`], which never fails: missing or mistyped
//! entries fall back to their defaults.

use std::path::Path;

use navgate_core::{Error, Result, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default limit on ancestors followed by a recursive check.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for an acceptance helper.
///
/// | Field | Default |
/// |-------|---------|
/// | `authorization` | none |
/// | `render_invisible` | `false` |
/// | `roles` | empty |
/// | `max_depth` | [`DEFAULT_MAX_DEPTH`] |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptConfig {
    /// Name of a registered authorization oracle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// Accept pages that are not visible.
    pub render_invisible: bool,

    /// Roles checked against the oracle, in order.
    pub roles: Vec<Role>,

    /// Limit on ancestors followed by a recursive check.
    pub max_depth: usize,
}

impl Default for AcceptConfig {
    fn default() -> Self {
        Self {
            authorization: None,
            render_invisible: false,
            roles: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AcceptConfig {
    /// Parses a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loading accept config from {}", path.display());
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to load {}: {e}", path.display())))
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Checks values serde cannot rule out.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::config("max_depth must be at least 1"));
        }
        Ok(())
    }

    /// Adapts an untyped options mapping.
    ///
    /// Keys may be camelCase or snake_case. Anything that is not a mapping
    /// yields the defaults.
    ///
    /// - `authorization`: kept only when it is a string
    /// - `renderInvisible`: coerced to a boolean; `null`, `false`, `0`, `""`,
    ///   `"0"` and empty arrays or objects are false
    /// - `roles`: kept only when an array or object; non-string entries are
    ///   dropped, object values are taken in insertion order
    /// - `maxDepth`: kept only when a positive integer
    ///
    /// ```
    /// use navgate_accept::AcceptConfig;
    /// use serde_json::json;
    ///
    /// let options = json!({
    ///     "authorization": 42,
    ///     "renderInvisible": "1",
    ///     "roles": ["editor", 7, "admin"],
    /// });
    /// let config = AcceptConfig::from_value(Some(&options));
    ///
    /// assert_eq!(config.authorization, None);
    /// assert!(config.render_invisible);
    /// assert_eq!(config.roles.len(), 2);
    /// ```
    pub fn from_value(options: Option<&Value>) -> Self {
        let mut config = Self::default();
        let map = match options {
            Some(Value::Object(map)) => map,
            Some(other) => {
                log::debug!("Ignoring accept options that are not a mapping: {other}");
                return config;
            }
            None => return config,
        };
        let field = |camel: &str, snake: &str| map.get(camel).or_else(|| map.get(snake));

        if let Some(value) = map.get("authorization") {
            match value {
                Value::String(name) => config.authorization = Some(name.clone()),
                other => log::debug!("Ignoring non-string authorization option: {other}"),
            }
        }

        if let Some(value) = field("renderInvisible", "render_invisible") {
            config.render_invisible = is_truthy(value);
        }

        if let Some(value) = map.get("roles") {
            match roles_from_value(value) {
                Some(roles) => config.roles = roles,
                None => log::debug!("Ignoring roles option that is not a list: {value}"),
            }
        }

        if let Some(value) = field("maxDepth", "max_depth") {
            match value.as_u64().filter(|d| *d > 0) {
                Some(depth) => config.max_depth = usize::try_from(depth).unwrap_or(usize::MAX),
                None => log::debug!("Ignoring max depth option that is not positive: {value}"),
            }
        }

        config
    }
}

/// Loose truthiness for untyped option values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn roles_from_value(value: &Value) -> Option<Vec<Role>> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => return None,
    };
    let roles = items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(role) => Some(Role::new(role.as_str())),
            other => {
                log::debug!("Dropping non-string role: {other}");
                None
            }
        })
        .collect();
    Some(roles)
}
