//! Authentication system
//!
//! Handles user registration, password hashing and password verification.

pub mod credentials;
pub mod registration;
pub mod results;
pub mod validator;

pub use credentials::hash_password;
pub use registration::register_user;
pub use results::RegistrationResult;
pub use validator::{check_password, set_password};
