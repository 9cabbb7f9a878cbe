//! Error types for the registry and its stores

use thiserror::Error;

/// Kind of entity a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// An institution, keyed by phone
    Institution,
    /// A cadet, keyed by phone
    Cadet,
    /// A quiz, keyed by name
    Quiz,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Institution => write!(f, "institution"),
            Self::Cadet => write!(f, "cadet"),
            Self::Quiz => write!(f, "quiz"),
        }
    }
}

/// Errors raised by a persistence backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading or writing the store
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored JSON could not be read or written
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored TOML could not be parsed
    #[error("toml parse error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// Registry could not be encoded as TOML
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// Store refused the operation
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required institution, cadet or quiz does not exist
    #[error("{kind} not found: {key}")]
    NotFound {
        /// What was looked up
        kind: EntityKind,
        /// The phone number or quiz name used
        key: String,
    },

    /// Input was rejected before touching the registry
    #[error("malformed input: {0}")]
    Malformed(String),

    /// The change could not be flushed; the registry was left unchanged
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl RegistryError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Whether this is a not found error
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was read
        path: std::path::PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
