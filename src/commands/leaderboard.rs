//! Leaderboard command - print cadets ranked by total score

use ncc_quiz::Registry;
use ncc_quiz::config::Config;
use ncc_quiz::output::{LeaderboardResult, OutputMode};

/// Print the leaderboard from the configured data file
pub fn leaderboard(config: &Config, output_mode: OutputMode) -> anyhow::Result<()> {
    let registry = Registry::open(config.file_store())?;
    let result = LeaderboardResult {
        entries: registry.leaderboard(),
    };
    result.render(output_mode);
    Ok(())
}
