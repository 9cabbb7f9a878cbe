//! Domain models for ncc-quiz
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Institution`] - authors quizzes, keyed by phone number
//! - [`Cadet`] - attempts quizzes and accumulates per-quiz scores
//! - [`Quiz`] - ordered questions with normalized answers
//! - [`LeaderboardEntry`] - one ranked cadet
//! - [`RegistryData`] - the persisted aggregate

mod cadet;
mod institution;
mod leaderboard;
mod quiz;
mod snapshot;

pub use cadet::Cadet;
pub use institution::Institution;
pub use leaderboard::LeaderboardEntry;
pub use quiz::Quiz;
pub use snapshot::{CadetRecord, InstitutionRecord, RegistryData};
