//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationResult {
    pub username: String,
    pub registered_users: usize,
}
