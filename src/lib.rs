pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod storage;

pub use config::AppConfig;
pub use storage::Store;
