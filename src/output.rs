//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::models::LeaderboardEntry;
use crate::registry::RegistryStats;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a leaderboard command
#[derive(Debug, Serialize)]
pub struct LeaderboardResult {
    /// Ranked entries, highest total first
    pub entries: Vec<LeaderboardEntry>,
}

/// Result of a status command
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Where the registry was loaded from
    pub source: String,
    /// Entity counts
    pub stats: RegistryStats,
}

impl LeaderboardResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable table
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.entries.is_empty() {
            return "No cadets registered yet.\n".to_string();
        }

        let name_width = self
            .entries
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Name".len());
        let college_width = self
            .entries
            .iter()
            .map(|e| e.college.chars().count())
            .max()
            .unwrap_or(0)
            .max("College".len());

        let mut out = format!(
            "{:>4}  {:<name_width$}  {:<college_width$}  {:>6}  Quizzes\n",
            "#", "Name", "College", "Total"
        );
        for (i, e) in self.entries.iter().enumerate() {
            let quizzes = e
                .scores
                .iter()
                .map(|(quiz, score)| format!("{quiz}={score}"))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "{:>4}  {:<name_width$}  {:<college_width$}  {:>6}  {}\n",
                i + 1,
                e.name,
                e.college,
                e.total,
                quizzes
            ));
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Registry: {}", self.source);
                println!();
                println!("Institutions: {}", self.stats.institutions);
                println!("Cadets:       {}", self.stats.cadets);
                println!("Quizzes:      {}", self.stats.quizzes);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
