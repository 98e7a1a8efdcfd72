//! Process configuration: where the catalog comes from and how loudly to log.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `SHELFSORT_*` environment variables.
//!
//! ```toml
//! source = "data/books.csv"
//! log_filter = "shelfsort=debug"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_SOURCE: &str = "books.csv";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const ENV_SOURCE: &str = "SHELFSORT_SOURCE";
pub const ENV_LOG: &str = "SHELFSORT_LOG";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the `title,author` source file.
    pub source: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path` as TOML. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_with(|name| std::env::var(name).ok());
    }

    /// Applies overrides from `lookup`. Blank values are ignored.
    pub fn apply_env_overrides_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SOURCE) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.source = PathBuf::from(trimmed);
            }
        }

        if let Some(raw) = lookup(ENV_LOG) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.log_filter = trimmed.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config =
            Config::from_toml_str("source = \"shelf.csv\"\n", Path::new("t.toml")).unwrap();
        assert_eq!(config.source, PathBuf::from("shelf.csv"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Config::from_toml_str("port = 7860\n", Path::new("t.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn env_overrides_skip_blank_values() {
        let mut config = Config::default();
        config.apply_env_overrides_with(|name| match name {
            ENV_SOURCE => Some("  other.csv ".to_string()),
            ENV_LOG => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.source, PathBuf::from("other.csv"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
