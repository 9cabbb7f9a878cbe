//! Leaderboard entry

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One cadet's row on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Cadet display name
    pub name: String,

    /// Cadet college
    pub college: String,

    /// Quiz name -> score
    pub scores: IndexMap<String, u32>,

    /// Sum of all scores
    pub total: u64,
}
