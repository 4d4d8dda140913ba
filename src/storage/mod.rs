//! File-backed persistence
//!
//! Every read and write of the users list, the credential map and the text
//! catalog goes through [`Store`]. Nothing is cached between calls.

pub mod filesystem;
pub mod store;

pub use store::{PasswordMap, Store};
