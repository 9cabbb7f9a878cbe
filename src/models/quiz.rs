//! Quiz model
//!
//! Questions and answers are index-aligned. Answers are stored already
//! normalized (trimmed, lower-cased), see [`crate::core::normalize_answer`].

use serde::{Deserialize, Serialize};

use super::snapshot::null_as_default;

/// A quiz authored by an institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Phone number of the owning institution
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,

    /// Quiz name (not guaranteed unique)
    #[serde(default, deserialize_with = "null_as_default")]
    pub quiz_name: String,

    /// Question texts, in order
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<String>,

    /// Normalized correct answers, aligned with `questions`
    #[serde(default, deserialize_with = "null_as_default")]
    pub answers: Vec<String>,
}

impl Quiz {
    /// Number of questions (and answers)
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the quiz has no questions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
