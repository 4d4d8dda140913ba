//! Error handling
//!
//! Defines error types and handling for the application.

pub mod handlers;
pub mod types;

pub use types::*;
