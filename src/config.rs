//! Configuration management
//!
//! Server and storage settings, read from a TOML file. The default location
//! is `~/.config/ncc-quiz/config.toml` (XDG standard); a missing file means
//! defaults. Command-line flags override whatever the file says.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0"
//! port = 10000
//! workers = 4
//!
//! [storage]
//! path = "ncc_data.json"
//! backend = "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::storage::{Backend, FileStore, file::DEFAULT_DATA_FILE};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Data file settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    10000
}

const fn default_workers() -> usize {
    4
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

/// Data file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the data file
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// File format
    #[serde(default)]
    pub backend: Backend,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            backend: Backend::default(),
        }
    }
}

impl Config {
    /// Default config file path, if a config directory is known
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ncc-quiz").join("config.toml"))
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load config from the default location, or defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::default_path().map_or_else(|| Ok(Self::default()), |path| Self::load(&path))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Socket address the server binds, e.g. `0.0.0.0:10000`
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }

    /// Store described by the storage section
    #[must_use]
    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.storage.path.clone(), self.storage.backend)
    }

    /// Override storage settings that were given explicitly
    pub fn override_storage(&mut self, path: Option<PathBuf>, backend: Option<Backend>) {
        if let Some(path) = path {
            self.storage.path = path;
        }
        if let Some(backend) = backend {
            self.storage.backend = backend;
        }
    }

    /// Override server settings that were given explicitly
    pub fn override_server(
        &mut self,
        bind: Option<String>,
        port: Option<u16>,
        workers: Option<usize>,
    ) {
        if let Some(bind) = bind {
            self.server.bind = bind;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(workers) = workers {
            self.server.workers = workers.max(1);
        }
    }
}
