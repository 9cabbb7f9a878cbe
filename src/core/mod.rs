//! Core domain logic for ncc-quiz
//!
//! This module contains pure logic with no I/O dependencies.
//! Persistence is abstracted through the port traits in [`ports`].
//!
//! ## Architecture
//!
//! - `scoring` - answer normalization and attempt scoring
//! - `ranking` - leaderboard ordering
//! - `ports/` - trait definitions for external dependencies

pub mod ports;
mod ranking;
mod scoring;

pub use ranking::rank_cadets;
pub use scoring::{normalize_answer, score_attempt};
