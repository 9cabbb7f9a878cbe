//! Persisted registry layout
//!
//! This is the shape written to and read from the store:
//!
//! ```json
//! {
//!   "institutions": { "<phone>": { "name": "..." } },
//!   "cadets": { "<phone>": { "name": "...", "college": "...", "scores": { "<quiz>": 3 } } },
//!   "quizzes": [ { "institution": "<phone>", "quiz_name": "...", "questions": [], "answers": [] } ]
//! }
//! ```
//!
//! Maps keep insertion order, so registration order survives a reload.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Cadet, Institution, Quiz};

/// The whole registry as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryData {
    /// Phone -> institution record
    #[serde(default)]
    pub institutions: IndexMap<String, InstitutionRecord>,

    /// Phone -> cadet record
    #[serde(default)]
    pub cadets: IndexMap<String, CadetRecord>,

    /// Quizzes in creation order
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

/// Institution entry (serialization format, keyed by phone)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Cadet entry (serialization format, keyed by phone)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadetRecord {
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// College affiliation
    #[serde(default, deserialize_with = "null_as_default")]
    pub college: String,
    /// Quiz name -> latest score
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores: IndexMap<String, u32>,
}

/// Read a field that older data files may hold as `null`
///
/// Form fields missing at registration were written as `null`; they load
/// as the empty value.
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl InstitutionRecord {
    /// Convert to the domain model
    #[must_use]
    pub fn to_institution(&self, phone: &str) -> Institution {
        Institution::new(phone, self.name.clone())
    }
}

impl CadetRecord {
    /// Convert to the domain model
    #[must_use]
    pub fn to_cadet(&self, phone: &str) -> Cadet {
        Cadet {
            phone: phone.to_string(),
            name: self.name.clone(),
            college: self.college.clone(),
            scores: self.scores.clone(),
        }
    }
}

impl RegistryData {
    /// Whether nothing has been registered yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty() && self.cadets.is_empty() && self.quizzes.is_empty()
    }
}
