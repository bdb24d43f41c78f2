//! Error types for navgate-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for navgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading Navgate configuration.
///
/// Acceptance checks themselves never fail; only the edges that touch the
/// filesystem or parse input produce these.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error with the offending path attached
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration is present but unusable
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    /// TOML could not be parsed into the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
