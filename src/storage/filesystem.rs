//! File system operations
//!
//! JSON read/write helpers shared by the store.

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

use crate::error::StorageError;

/// Check if file exists
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Reads a JSON document, falling back to `T::default()` when the file is
/// absent, unreadable or not valid JSON for `T`.
pub fn read_json_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !file_exists(path) {
        return T::default();
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring invalid JSON in {}: {}", path.display(), e);
            T::default()
        }
    }
}

/// Serializes `value` with 4-space indentation and overwrites `path`.
///
/// The write is not atomic: a crash mid-write leaves a truncated file.
pub fn write_json_pretty<T>(path: &Path, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    Ok(())
}
