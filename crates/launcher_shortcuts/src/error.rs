//! Shortcut store error types.

use std::io;
use std::path::PathBuf;

use launcher_contract::{ShellError, ShortcutCategory};
use thiserror::Error;

/// Failure while reading, validating, or persisting shortcut data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The backing file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The backing file is not valid JSON for its document type.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The in-memory document could not be serialized.
    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        /// Destination file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Only program, folder, and website aliases can be added.
    #[error("Invalid shortcut type. Must be one of: {}", ShortcutCategory::ADDABLE_WORDS.join(", "))]
    ReadOnlyCategory(ShortcutCategory),
    /// Alias or target was blank.
    #[error("Both alias and path must be filled.")]
    EmptyField,
}

impl From<StoreError> for ShellError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ReadOnlyCategory(_) | StoreError::EmptyField => {
                ShellError::usage(err.to_string())
            }
            StoreError::Parse { .. } => ShellError::config(err.to_string()),
            StoreError::Read { .. } | StoreError::Write { .. } | StoreError::Serialize { .. } => {
                ShellError::execution(format!("Error: {err}"))
            }
        }
    }
}
