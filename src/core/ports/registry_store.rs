//! Registry store port
//!
//! Defines how the registry is loaded at startup and flushed after changes.

use crate::error::StoreError;
use crate::models::RegistryData;

/// Persistence backend for the registry
///
/// The registry calls [`load`](Self::load) once when opened and
/// [`flush`](Self::flush) synchronously after every mutation. A flush always
/// replaces the whole stored registry.
pub trait RegistryStore: Send + Sync {
    /// Load the stored registry, or an empty one if nothing is stored yet
    fn load(&self) -> Result<RegistryData, StoreError>;

    /// Replace the stored registry with `data`
    fn flush(&self, data: &RegistryData) -> Result<(), StoreError>;

    /// Short human-readable description, used in logs
    fn describe(&self) -> String {
        "registry store".to_string()
    }
}

impl<T: RegistryStore + ?Sized> RegistryStore for std::sync::Arc<T> {
    fn load(&self) -> Result<RegistryData, StoreError> {
        (**self).load()
    }

    fn flush(&self, data: &RegistryData) -> Result<(), StoreError> {
        (**self).flush(data)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
