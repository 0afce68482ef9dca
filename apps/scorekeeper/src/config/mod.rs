//! Environment-driven configuration for the store.

use std::env;
use std::path::PathBuf;

use crate::errors::config::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "tichuGameState";
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key the snapshot is stored under.
    pub storage_key: String,
    /// Directory used by the file-backed key-value store.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StoreConfig {
    /// Build from `TICHU_STORAGE_KEY` and `TICHU_DATA_DIR`, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            storage_key: storage_key()?,
            data_dir: data_dir()?,
        })
    }
}

/// Keys double as file names, so only `[A-Za-z0-9_.-]` is allowed and they
/// may not start with a dot.
pub fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn storage_key() -> Result<String, ConfigError> {
    match env::var("TICHU_STORAGE_KEY") {
        Ok(key) if is_valid_storage_key(&key) => Ok(key),
        Ok(key) => Err(ConfigError::invalid(format!(
            "TICHU_STORAGE_KEY must be non-empty and use only [A-Za-z0-9_.-], got '{key}'"
        ))),
        Err(_) => Ok(DEFAULT_STORAGE_KEY.to_string()),
    }
}

fn data_dir() -> Result<PathBuf, ConfigError> {
    match env::var("TICHU_DATA_DIR") {
        Ok(dir) if dir.trim().is_empty() => Err(ConfigError::invalid(
            "TICHU_DATA_DIR is set but empty",
        )),
        Ok(dir) => Ok(PathBuf::from(dir)),
        Err(_) => Ok(PathBuf::from(DEFAULT_DATA_DIR)),
    }
}
