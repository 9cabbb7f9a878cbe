//! Leaderboard ranking

use crate::models::{Cadet, LeaderboardEntry};

/// Rank cadets by total score, highest first
///
/// The sort is stable: cadets with equal totals keep the order they were
/// given in, which is registration order when fed from the registry.
#[must_use]
pub fn rank_cadets<'a>(cadets: impl IntoIterator<Item = &'a Cadet>) -> Vec<LeaderboardEntry> {
    let mut board: Vec<LeaderboardEntry> = cadets
        .into_iter()
        .map(|c| LeaderboardEntry {
            name: c.name.clone(),
            college: c.college.clone(),
            scores: c.scores.clone(),
            total: c.total(),
        })
        .collect();
    board.sort_by(|a, b| b.total.cmp(&a.total));
    board
}
