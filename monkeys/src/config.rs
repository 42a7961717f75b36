//! `monkeys.toml` loading.
//!
//! ```toml
//! [redis]
//! url = "${REDIS_URL}"
//!
//! [store]
//! prefix = "monkeys"
//! service = "troop"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::DEFAULT_SERVICE;

pub const CONFIG_FILE_NAME: &str = "monkeys.toml";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment variable {0} not set")]
    MissingVariable(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonkeysConfig {
    #[serde(default)]
    pub redis: RedisSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisSettings {
    #[serde(default = "default_redis_url")]
    pub url: String,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_service")]
    pub service: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            service: default_service(),
        }
    }
}

fn default_redis_url() -> String {
    "${REDIS_URL}".to_string()
}

fn default_prefix() -> String {
    "monkeys".to_string()
}

fn default_service() -> String {
    DEFAULT_SERVICE.to_string()
}

impl MonkeysConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The Redis URL with `${VAR}` expanded. An unset `REDIS_URL` falls back
    /// to the local default.
    pub fn redis_url(&self) -> Result<String, ConfigError> {
        let url = self.redis.url.as_str();
        match url.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
            Some("REDIS_URL") => Ok(std::env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string())),
            Some(var_name) => std::env::var(var_name).map_err(|_| ConfigError::MissingVariable(var_name.to_string())),
            None => Ok(url.to_string()),
        }
    }
}
