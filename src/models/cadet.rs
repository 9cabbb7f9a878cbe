//! Cadet model
//!
//! A cadet takes quizzes. Each attempt stores one integer score under the
//! quiz name, replacing whatever was recorded for that quiz before.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A cadet with their recorded scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadet {
    /// Phone number (primary key)
    pub phone: String,

    /// Display name
    pub name: String,

    /// College or institution affiliation (free text)
    pub college: String,

    /// Quiz name -> latest score
    #[serde(default)]
    pub scores: IndexMap<String, u32>,
}

impl Cadet {
    /// Create a cadet with no recorded scores
    #[must_use]
    pub fn new(phone: impl Into<String>, name: impl Into<String>, college: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            name: name.into(),
            college: college.into(),
            scores: IndexMap::new(),
        }
    }

    /// Sum of every recorded score
    #[must_use]
    pub fn total(&self) -> u64 {
        self.scores.values().map(|&s| u64::from(s)).sum()
    }

    /// Whether a score is recorded for the named quiz
    #[must_use]
    pub fn has_attempted(&self, quiz_name: &str) -> bool {
        self.scores.contains_key(quiz_name)
    }
}
