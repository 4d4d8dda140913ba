//! User registration

use log::info;

use super::results::RegistrationResult;
use crate::error::AuthError;
use crate::storage::Store;

/// Appends `username` to the persisted users list, rejecting names that are
/// already registered (exact, case-sensitive match). The password is set
/// separately with [`set_password`](super::set_password).
///
/// The existence check and the append are separate file operations, so two
/// processes registering the same name at once can both succeed.
pub fn register_user(store: &Store, username: &str) -> Result<RegistrationResult, AuthError> {
    let mut users = store.load_users();
    if users.iter().any(|u| u == username) {
        return Err(AuthError::UserExists(username.to_string()));
    }

    users.push(username.to_string());
    store.save_users(&users)?;

    info!("Registered user {} ({} total)", username, users.len());

    Ok(RegistrationResult {
        username: username.to_string(),
        registered_users: users.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{check_password, set_password};
    use tempfile::TempDir;

    #[test]
    fn test_register_then_login() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        let result = register_user(&store, "anna").unwrap();
        set_password(&store, &result.username, "geheim").unwrap();

        assert_eq!(result.registered_users, 1);
        assert!(store.load_users().contains(&"anna".to_string()));
        assert!(check_password(&store, "anna", "geheim"));
        assert!(!check_password(&store, "anna", "wrong"));
    }

    #[test]
    fn test_registered_without_password_cannot_log_in() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        register_user(&store, "anna").unwrap();
        assert!(!check_password(&store, "anna", ""));
    }

    #[test]
    fn test_duplicate_rejected_without_changes() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        register_user(&store, "anna").unwrap();
        let err = register_user(&store, "anna").unwrap_err();
        assert!(matches!(err, AuthError::UserExists(ref u) if u == "anna"));
        assert_eq!(store.load_users(), vec!["anna".to_string()]);
    }

    #[test]
    fn test_names_differing_in_case_are_distinct() {
        let dir = TempDir::new().unwrap();
        let store = Store::in_dir(dir.path());

        register_user(&store, "anna").unwrap();
        register_user(&store, "Anna").unwrap();
        assert_eq!(
            store.load_users(),
            vec!["anna".to_string(), "Anna".to_string()]
        );
    }
}
