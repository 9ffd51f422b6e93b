//! Runtime configuration loaded from TOML with environment overrides.
//!
//! ```toml
//! database_path = "/var/lib/notekeeper/notes.db"
//! busy_timeout_ms = 5000
//! log_level = "info"
//! log_dir = "/var/log/notekeeper"
//! ```
//!
//! Every field is optional. Without `database_path` the store is in-memory.

use crate::db::{Database, DbResult, DEFAULT_BUSY_TIMEOUT};
use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Overrides `database_path`.
pub const ENV_DATABASE_PATH: &str = "NOTEKEEPER_DB";
/// Overrides `log_level`.
pub const ENV_LOG_LEVEL: &str = "NOTEKEEPER_LOG_LEVEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotekeeperConfig {
    pub database_path: Option<PathBuf>,
    pub busy_timeout_ms: u64,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for NotekeeperConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT.as_millis() as u64,
            log_level: None,
            log_dir: None,
        }
    }
}

impl NotekeeperConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `NOTEKEEPER_*` process environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides resolved through `lookup`. Blank values are ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(path) = non_blank(ENV_DATABASE_PATH) {
            self.database_path = Some(PathBuf::from(path));
        }
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            self.log_level = Some(level);
        }
        self
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Configured log level, or the build-mode default.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    /// Opens the configured database with migrations applied.
    pub fn open_database(&self) -> DbResult<Database> {
        match &self.database_path {
            Some(path) => Database::open(path, self.busy_timeout()),
            None => Database::open_in_memory(),
        }
    }
}
