//! ncc-quiz - quiz authoring and a persistent leaderboard for institutions and cadets
//!
//! Institutions author quizzes, cadets attempt them, and every cadet's per-quiz
//! score feeds a leaderboard. All state lives in a single [`registry::Registry`]
//! that flushes itself through a [`core::ports::RegistryStore`] after every change.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod registry;
#[cfg(feature = "server")]
pub mod server;
pub mod storage;

pub use error::{EntityKind, RegistryError, StoreError};
pub use registry::Registry;
