//! Settings file for the `commute-arbitrage` binary.
//!
//! ```toml
//! [database]
//! backend = "sqlite"
//! path = "commute.db"
//!
//! [logging]
//! level = "info"
//! file = "commute.log"
//! ```
//!
//! Every key is optional. Command-line flags win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use commute_core::db::DbConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "commute.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: String,
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            path: "commute.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Loads `explicit` when given. Otherwise reads `commute.toml` from the
    /// working directory if present, falling back to defaults.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            backend: self.database.backend.clone(),
            connection_string: self.database.path.clone(),
        }
    }
}
