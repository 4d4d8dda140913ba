//! Data file store
//!
//! Owns the three data file paths and implements the load/save contracts for
//! them. Writes overwrite the whole file; there is no locking, so two
//! processes sharing the files race with last-writer-wins.

use log::{debug, info};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::catalog::{Text, parse_line};
use crate::config::AppConfig;
use crate::error::StorageError;
use crate::storage::filesystem::{file_exists, read_json_or_default, write_json_pretty};

/// Username to hex password hash
pub type PasswordMap = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct Store {
    users_path: PathBuf,
    passwords_path: PathBuf,
    texts_path: PathBuf,
}

impl Store {
    pub fn new(
        users_path: impl Into<PathBuf>,
        passwords_path: impl Into<PathBuf>,
        texts_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            users_path: users_path.into(),
            passwords_path: passwords_path.into(),
            texts_path: texts_path.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.users_path(),
            config.passwords_path(),
            config.texts_path(),
        )
    }

    /// Store with the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let defaults = AppConfig::default();
        Self::new(
            dir.join(&defaults.users_file),
            dir.join(&defaults.passwords_file),
            dir.join(&defaults.texts_file),
        )
    }

    pub fn texts_path(&self) -> &Path {
        &self.texts_path
    }

    /// Registered usernames in registration order. Absent or corrupt file
    /// reads as empty.
    pub fn load_users(&self) -> Vec<String> {
        read_json_or_default(&self.users_path)
    }

    pub fn save_users(&self, users: &[String]) -> Result<(), StorageError> {
        write_json_pretty(&self.users_path, users)?;
        info!(
            "Saved {} users to {}",
            users.len(),
            self.users_path.display()
        );
        Ok(())
    }

    /// Credential records. Absent or corrupt file reads as empty.
    pub fn load_passwords(&self) -> PasswordMap {
        read_json_or_default(&self.passwords_path)
    }

    pub fn save_passwords(&self, passwords: &PasswordMap) -> Result<(), StorageError> {
        write_json_pretty(&self.passwords_path, passwords)?;
        info!(
            "Saved {} credential records to {}",
            passwords.len(),
            self.passwords_path.display()
        );
        Ok(())
    }

    /// Parses the configured catalog file.
    pub fn load_texts(&self) -> Result<Vec<Text>, StorageError> {
        load_texts_flat(&self.texts_path)
    }
}

/// Parses a `level||title||content` catalog. A missing file is an empty
/// catalog; read errors on an existing file propagate. Blank and malformed
/// lines are skipped.
pub fn load_texts_flat(path: &Path) -> Result<Vec<Text>, StorageError> {
    if !file_exists(path) {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut texts = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Some(text) => texts.push(text),
            None => debug!("Skipping malformed line {} in {}", number + 1, path.display()),
        }
    }

    Ok(texts)
}
