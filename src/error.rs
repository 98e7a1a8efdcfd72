//! Error types for source and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a catalog source or a configuration file.
///
/// None of these abort a catalog build: [`load_path`](crate::loader::load_path) turns a
/// source error into an empty report, and only configuration loading returns them
/// directly.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog source or config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source stream failed mid-read and has no path attached.
    #[error("failed to read source stream: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`](crate::config::Config).
    #[error("failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Returns `true` if the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io { source, .. } | Error::Read { source } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            Error::Config { .. } => false,
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, Error>;
