//! In-memory registry storage
//!
//! Nothing survives the process. Useful for tests and for running the
//! server without touching disk.

use parking_lot::Mutex;

use crate::core::ports::RegistryStore;
use crate::error::StoreError;
use crate::models::RegistryData;

/// Registry kept in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<Option<RegistryData>>,
    flushes: Mutex<usize>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that loads `data`
    #[must_use]
    pub fn with_data(data: RegistryData) -> Self {
        Self {
            data: Mutex::new(Some(data)),
            flushes: Mutex::new(0),
        }
    }

    /// Last flushed (or seeded) registry
    #[must_use]
    pub fn snapshot(&self) -> Option<RegistryData> {
        self.data.lock().clone()
    }

    /// Number of flushes so far
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self.flushes.lock()
    }
}

impl RegistryStore for MemoryStore {
    fn load(&self) -> Result<RegistryData, StoreError> {
        Ok(self.data.lock().clone().unwrap_or_default())
    }

    fn flush(&self, data: &RegistryData) -> Result<(), StoreError> {
        *self.data.lock() = Some(data.clone());
        *self.flushes.lock() += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
