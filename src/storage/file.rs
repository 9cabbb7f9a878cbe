//! File-based registry storage
//!
//! The whole registry lives in one file. Flushing writes a sibling `.tmp`
//! file and renames it over the target, so a crash mid-write leaves the
//! previous contents in place.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::Backend;
use crate::core::ports::RegistryStore;
use crate::error::StoreError;
use crate::models::RegistryData;

/// Default data file name
pub const DEFAULT_DATA_FILE: &str = "ncc_data.json";

/// Registry stored in a single file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    backend: Backend,
}

impl FileStore {
    /// Create a store for `path` using the given file format
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, backend: Backend) -> Self {
        Self {
            path: path.into(),
            backend,
        }
    }

    /// Create a JSON store for `path`
    #[must_use]
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Backend::Json)
    }

    /// Path of the data file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File format
    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn encode(&self, data: &RegistryData) -> Result<String, StoreError> {
        Ok(match self.backend {
            Backend::Json => serde_json::to_string_pretty(data)?,
            Backend::Toml => toml::to_string_pretty(data)?,
        })
    }

    fn decode(&self, content: &str) -> Result<RegistryData, StoreError> {
        Ok(match self.backend {
            Backend::Json => serde_json::from_str(content)?,
            Backend::Toml => toml::from_str(content)?,
        })
    }
}

impl RegistryStore for FileStore {
    fn load(&self) -> Result<RegistryData, StoreError> {
        if !self.path.exists() {
            debug!("No data file at {}, starting empty", self.path.display());
            return Ok(RegistryData::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(RegistryData::default());
        }
        self.decode(&content)
    }

    fn flush(&self, data: &RegistryData) -> Result<(), StoreError> {
        // Ensure directory exists
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = self.encode(data)?;
        let temp = self.temp_path();
        fs::write(&temp, content)?;
        fs::rename(&temp, &self.path)?;
        debug!("Flushed registry to {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} file {}", self.backend, self.path.display())
    }
}
