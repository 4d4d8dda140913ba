//! Password storage and verification
//!
//! Each call reloads the credential file, so every password update rewrites
//! the records of all users.

use log::{info, warn};

use super::credentials::hash_password;
use crate::error::StorageError;
use crate::storage::Store;

/// Hashes `password` and stores it for `username`, replacing any previous
/// record.
pub fn set_password(store: &Store, username: &str, password: &str) -> Result<(), StorageError> {
    let mut passwords = store.load_passwords();
    passwords.insert(username.to_string(), hash_password(password));
    store.save_passwords(&passwords)?;
    info!("Password set for user {}", username);
    Ok(())
}

/// Returns whether `password` matches the stored hash for `username`. A user
/// without a credential record never matches.
pub fn check_password(store: &Store, username: &str, password: &str) -> bool {
    let passwords = store.load_passwords();
    match passwords.get(username) {
        Some(stored) if !stored.is_empty() => hash_password(password) == *stored,
        _ => {
            warn!("No credential record for user {}", username);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_after_set() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        set_password(&store, "anna", "geheim").unwrap();
        assert!(check_password(&store, "anna", "geheim"));
        assert!(!check_password(&store, "anna", "Geheim"));
    }

    #[test]
    fn test_unrelated_update_keeps_record() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        set_password(&store, "anna", "geheim").unwrap();
        set_password(&store, "ben", "passwort").unwrap();
        assert!(check_password(&store, "anna", "geheim"));
        assert!(check_password(&store, "ben", "passwort"));
    }

    #[test]
    fn test_set_overwrites_previous() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        set_password(&store, "anna", "alt").unwrap();
        set_password(&store, "anna", "neu").unwrap();
        assert!(!check_password(&store, "anna", "alt"));
        assert!(check_password(&store, "anna", "neu"));
        assert_eq!(store.load_passwords().len(), 1);
    }

    #[test]
    fn test_unknown_user_never_matches() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        assert!(!check_password(&store, "anna", "geheim"));
        assert!(!check_password(&store, "anna", ""));
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        set_password(&store, "anna", "geheim").unwrap();
        assert!(!check_password(&store, "Anna", "geheim"));
    }
}
