//! Storage backends for the registry
//!
//! Provides implementations of [`RegistryStore`]:
//! - `file`: a single JSON or TOML file, replaced wholesale on every flush
//! - `memory`: in-process only (tests, dry runs)

/// Single-file storage
pub mod file;
/// In-memory storage
pub mod memory;

use serde::{Deserialize, Serialize};

pub use crate::core::ports::RegistryStore;
pub use file::FileStore;
pub use memory::MemoryStore;

/// File format used by [`FileStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// TOML
    Toml,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(format!("Unknown backend: {s}. Use 'json' or 'toml'")),
        }
    }
}
