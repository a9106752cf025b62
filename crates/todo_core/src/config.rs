//! Runtime configuration for hosts embedding the task store.
//!
//! # Invariants
//! - Blank environment values are ignored, never treated as overrides.

use crate::logging::default_log_level;
use crate::slot::TASKS_SLOT_KEY;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "todo_store.sqlite3";

pub const ENV_SLOT_KEY: &str = "TODO_SLOT_KEY";
pub const ENV_DB_PATH: &str = "TODO_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "TODO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TODO_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Slot key holding the task snapshot.
    pub slot_key: String,
    /// SQLite file backing the slot.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute log directory; logging stays off when `None`.
    pub log_dir: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            slot_key: TASKS_SLOT_KEY.to_string(),
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl StoreConfig {
    /// Defaults overlaid with `TODO_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();
        if let Some(key) = value(ENV_SLOT_KEY) {
            config.slot_key = key;
        }
        if let Some(path) = value(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = value(ENV_LOG_DIR);
        config
    }
}
