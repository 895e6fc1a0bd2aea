//! Typed launcher configuration loading.

use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "launcher.toml";

/// Failure while reading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid TOML for the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles only filesystem access and TOML deserialization; callers validate
/// the typed value themselves.
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Creates a loader for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Loads and deserializes the configuration file.
    ///
    /// # Errors
    ///
    /// Missing and unreadable files surface as [`ConfigError::Read`]; TOML failures as
    /// [`ConfigError::Parse`].
    pub fn load(&self) -> Result<T, ConfigError> {
        let body = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&body).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Loads the configuration file, using `T::default()` when it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load`], except that a missing file is not an error.
    pub fn load_or_default(&self) -> Result<T, ConfigError>
    where
        T: Default,
    {
        match self.load() {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "config not found; using defaults");
                Ok(T::default())
            }
            other => other,
        }
    }

    /// Returns the config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runtime settings for the launcher shell.
///
/// Every field has a default so a partial (or absent) `launcher.toml` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Directory holding the shortcut, theme, and command tree JSON files.
    pub data_dir: PathBuf,
    /// Prefix the url-encoded query is appended to by `search`.
    pub search_url: String,
    /// Engine name shown after a search is sent.
    pub search_engine_name: String,
    /// Echo requests sent by `ping`.
    pub ping_count: u32,
    /// Whether `shutdown`, `restart`, and `sleep` may invoke the operating system.
    pub allow_power_control: bool,
    /// Per-port connect timeout used by `portscan`.
    pub portscan_timeout_ms: u64,
    /// Capacity of the bounded queue between input threads and the UI thread.
    pub event_queue_capacity: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            search_url: "https://www.google.com/search?q=".to_string(),
            search_engine_name: "Google".to_string(),
            ping_count: 4,
            allow_power_control: false,
            portscan_timeout_ms: 100,
            event_queue_capacity: 64,
        }
    }
}

impl ShellConfig {
    /// Loads `path`, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unreadable or malformed files.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        ConfigLoader::<Self>::new(path).load_or_default()
    }
}
