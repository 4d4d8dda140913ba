//! Configuration management for lern-deutsch
//!
//! Resolves the locations of the data files. Values come from built-in
//! defaults, an optional `lern-deutsch.toml` in the working directory, and
//! `LERN_DEUTSCH_*` environment variables, later sources winning.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration file name (without extension)
pub const CONFIG_FILE: &str = "lern-deutsch";

/// Prefix for environment overrides, e.g. `LERN_DEUTSCH_TEXTS_FILE`
pub const ENV_PREFIX: &str = "LERN_DEUTSCH";

const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_PASSWORDS_FILE: &str = "passwords.json";
const DEFAULT_TEXTS_FILE: &str = "texts.txt";

/// Paths of the files backing users, credentials and the text catalog.
/// Relative paths resolve against the working directory.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON array of registered usernames
    pub users_file: String,

    /// JSON object mapping username to password hash
    pub passwords_file: String,

    /// Flat `level||title||content` catalog
    pub texts_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_file: DEFAULT_USERS_FILE.to_string(),
            passwords_file: DEFAULT_PASSWORDS_FILE.to_string(),
            texts_file: DEFAULT_TEXTS_FILE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `lern-deutsch.toml` with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given file name. A missing file is not an
    /// error; the defaults apply instead.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("users_file", DEFAULT_USERS_FILE)?
            .set_default("passwords_file", DEFAULT_PASSWORDS_FILE)?
            .set_default("texts_file", DEFAULT_TEXTS_FILE)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        let paths = [
            ("users_file", &self.users_file),
            ("passwords_file", &self.passwords_file),
            ("texts_file", &self.texts_file),
        ];

        for (key, value) in paths {
            if value.trim().is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "{key} cannot be empty"
                )));
            }
        }

        Ok(())
    }

    pub fn users_path(&self) -> PathBuf {
        PathBuf::from(&self.users_file)
    }

    pub fn passwords_path(&self) -> PathBuf {
        PathBuf::from(&self.passwords_file)
    }

    pub fn texts_path(&self) -> PathBuf {
        PathBuf::from(&self.texts_file)
    }
}
