//! Server configuration.
//!
//! Settings are resolved in three layers, later ones winning:
//!
//! 1. built-in defaults,
//! 2. an optional TOML file with a `[server]` table,
//! 3. environment variables (`HOST`, `PORT`, `CATALOG_PATH`).
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//! catalog_path = "data/designers.json"
//! body_limit_bytes = 1048576
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidEnv {
        key: String,
        value: String,
        reason: String,
    },
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON catalog to load instead of the bundled seed data
    pub catalog_path: Option<PathBuf>,
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_path: None,
            body_limit_bytes: DEFAULT_BODY_LIMIT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerSettings {
    host: Option<String>,
    port: Option<u16>,
    catalog_path: Option<PathBuf>,
    body_limit_bytes: Option<usize>,
}

impl ServerConfig {
    /// Defaults overlaid with the settings in a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let defaults = Self::default();
        let settings = file.server;
        Ok(Self {
            host: settings.host.unwrap_or(defaults.host),
            port: settings.port.unwrap_or(defaults.port),
            catalog_path: settings.catalog_path.or(defaults.catalog_path),
            body_limit_bytes: settings.body_limit_bytes.unwrap_or(defaults.body_limit_bytes),
        })
    }

    /// Locate a config file.
    ///
    /// `CATALOG_CONFIG` wins when set. Otherwise searches for `catalog.toml`
    /// in the current directory, `backend/` and the parent directory.
    pub fn default_file_location() -> Option<PathBuf> {
        if let Ok(explicit) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(explicit));
        }

        [
            PathBuf::from("catalog.toml"),
            PathBuf::from("backend/catalog.toml"),
            PathBuf::from("../catalog.toml"),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// Apply overrides from a key lookup (normally the process environment).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    key: "PORT".to_string(),
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(path) = lookup("CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    /// Resolve defaults, optional file and environment, in that order.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_file_location() {
            Some(path) => {
                debug!(path = %path.display(), "reading config file");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        base.with_overrides(|key| env::var(key).ok())
    }
}
