//! Error handlers
//!
//! Turns errors into log records and short user-facing messages.

use crate::error::types::{AppError, AuthError};
use log::error;

/// Handle an application error
pub fn handle_error(err: &AppError) {
    error!("Application error: {}", err);
}

/// One-line message shown on the console for an error
pub fn error_to_user_message(err: &AppError) -> String {
    match err {
        AppError::Auth(AuthError::UserExists(u)) => {
            format!("User '{}' already exists. Try another name.", u)
        }
        AppError::Auth(AuthError::Storage(_)) | AppError::Storage(_) => {
            "Could not access the data files. Please try again.".to_string()
        }
        AppError::Config(_) => "Configuration could not be loaded.".to_string(),
        AppError::IoError(_) => "Console I/O failed.".to_string(),
    }
}
