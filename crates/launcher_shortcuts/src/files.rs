//! JSON file helpers shared by every persisted launcher document.

use std::fs;
use std::io;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;

/// Reads and parses a JSON document.
///
/// Returns `Ok(None)` when the file does not exist or is blank.
///
/// # Errors
///
/// Returns [`StoreError::Read`] for I/O failures and [`StoreError::Parse`] for malformed JSON.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads a JSON document, degrading to `T::default()` on any failure.
///
/// Failures are logged once at warn level; a missing file is only logged at debug level.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path, what: &str) -> T {
    match read_json(path) {
        Ok(Some(value)) => {
            tracing::debug!(path = %path.display(), "loaded {what}");
            value
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "{what} not found; using empty default");
            T::default()
        }
        Err(err) => {
            tracing::warn!("{err}; using empty {what}");
            T::default()
        }
    }
}

/// Serializes `value` as pretty JSON with four-space indentation and replaces `path`.
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Returns [`StoreError::Serialize`] or [`StoreError::Write`].
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut body = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, body).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
