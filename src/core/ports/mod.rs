//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the registry and wherever its
//! state is kept. Implementations live in the `storage` module.

mod registry_store;

pub use registry_store::RegistryStore;
