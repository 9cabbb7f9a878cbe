//! The registry: institutions, cadets and quizzes
//!
//! A [`Registry`] owns the whole aggregate behind one mutex. Every mutation
//! is applied to a copy, flushed through the [`RegistryStore`], and only then
//! swapped in, so a failed flush leaves memory and store in agreement.
//!
//! # Examples
//!
//! ```
//! use ncc_quiz::Registry;
//! use ncc_quiz::storage::MemoryStore;
//!
//! let registry = Registry::open(MemoryStore::new()).unwrap();
//! registry.register_institution("111", "Academy").unwrap();
//! registry
//!     .create_quiz("111", "GK1", vec!["Capital of India?".into()], vec!["Delhi".into()])
//!     .unwrap();
//! registry.register_cadet("222", "Asha", "Academy").unwrap();
//!
//! let score = registry.submit_attempt("222", "GK1", &["delhi "]).unwrap();
//! assert_eq!(score, 1);
//! ```

use std::collections::HashMap;

use log::{debug, info, warn};
use parking_lot::Mutex;
use serde::Serialize;

use crate::core::ports::RegistryStore;
use crate::core::{normalize_answer, rank_cadets, score_attempt};
use crate::error::{EntityKind, RegistryError};
use crate::models::{
    Cadet, CadetRecord, Institution, InstitutionRecord, LeaderboardEntry, Quiz, RegistryData,
};

/// Entity counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RegistryStats {
    /// Registered institutions
    pub institutions: usize,
    /// Registered cadets
    pub cadets: usize,
    /// Created quizzes
    pub quizzes: usize,
}

/// Registry data plus the quiz-name index
#[derive(Debug, Clone, Default)]
struct State {
    data: RegistryData,
    /// Quiz name -> position of the first quiz with that name
    quiz_index: HashMap<String, usize>,
}

impl State {
    fn new(data: RegistryData) -> Self {
        let mut quiz_index = HashMap::new();
        for (pos, quiz) in data.quizzes.iter().enumerate() {
            quiz_index.entry(quiz.quiz_name.clone()).or_insert(pos);
        }
        Self { data, quiz_index }
    }

    fn quiz(&self, name: &str) -> Option<&Quiz> {
        self.quiz_index.get(name).and_then(|&pos| self.data.quizzes.get(pos))
    }

    fn cadets(&self) -> impl Iterator<Item = Cadet> + '_ {
        self.data.cadets.iter().map(|(phone, record)| record.to_cadet(phone))
    }
}

/// The aggregate root of institutions, cadets and quizzes
pub struct Registry {
    state: Mutex<State>,
    store: Box<dyn RegistryStore>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("store", &self.store.describe())
            .field("cadets", &self.state.try_lock().map(|s| s.data.cadets.len()))
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// Load the registry from `store`
    ///
    /// A store with nothing in it yet yields an empty registry.
    pub fn open(store: impl RegistryStore + 'static) -> Result<Self, RegistryError> {
        let data = store.load()?;
        if data.is_empty() {
            info!("Starting with an empty registry at {}", store.describe());
        } else {
            info!(
                "Loaded registry from {}: {} institution(s), {} cadet(s), {} quiz(zes)",
                store.describe(),
                data.institutions.len(),
                data.cadets.len(),
                data.quizzes.len()
            );
        }
        Ok(Self {
            state: Mutex::new(State::new(data)),
            store: Box::new(store),
        })
    }

    /// Apply a change, flush it, then commit it to memory
    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut State) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        let mut state = self.state.lock();
        let mut next = state.clone();
        let out = apply(&mut next)?;

        if let Err(e) = self.store.flush(&next.data) {
            warn!("Flush to {} failed, change discarded: {e}", self.store.describe());
            return Err(e.into());
        }

        *state = next;
        Ok(out)
    }

    // =========================================================================
    // INSTITUTIONS
    // =========================================================================

    /// Register an institution, replacing any existing one with the same phone
    pub fn register_institution(
        &self,
        phone: &str,
        name: &str,
    ) -> Result<Institution, RegistryError> {
        let replaced = self.mutate(|state| {
            let record = InstitutionRecord {
                name: name.to_string(),
            };
            Ok(state.data.institutions.insert(phone.to_string(), record).is_some())
        })?;

        if replaced {
            info!("Re-registered institution {phone} as {name:?}");
        } else {
            info!("Registered institution {phone} ({name:?})");
        }
        Ok(Institution::new(phone, name))
    }

    /// Look up an institution by phone
    #[must_use]
    pub fn find_institution(&self, phone: &str) -> Option<Institution> {
        let state = self.state.lock();
        state.data.institutions.get(phone).map(|r| r.to_institution(phone))
    }

    /// All institutions in registration order
    #[must_use]
    pub fn institutions(&self) -> Vec<Institution> {
        let state = self.state.lock();
        state
            .data
            .institutions
            .iter()
            .map(|(phone, r)| r.to_institution(phone))
            .collect()
    }

    // =========================================================================
    // CADETS
    // =========================================================================

    /// Register a cadet with no scores, replacing any existing one with the same phone
    pub fn register_cadet(
        &self,
        phone: &str,
        name: &str,
        college: &str,
    ) -> Result<Cadet, RegistryError> {
        let replaced = self.mutate(|state| {
            let record = CadetRecord {
                name: name.to_string(),
                college: college.to_string(),
                scores: indexmap::IndexMap::new(),
            };
            Ok(state.data.cadets.insert(phone.to_string(), record).is_some())
        })?;

        if replaced {
            info!("Re-registered cadet {phone}; previous scores cleared");
        } else {
            info!("Registered cadet {phone} ({name:?}, {college:?})");
        }
        Ok(Cadet::new(phone, name, college))
    }

    /// Look up a cadet by phone
    #[must_use]
    pub fn find_cadet(&self, phone: &str) -> Option<Cadet> {
        let state = self.state.lock();
        state.data.cadets.get(phone).map(|r| r.to_cadet(phone))
    }

    // =========================================================================
    // QUIZZES
    // =========================================================================

    /// Create a quiz
    ///
    /// Answers are normalized before storage. The institution is not required
    /// to exist. Quiz names may repeat; lookups by name resolve to the first
    /// quiz created with that name.
    pub fn create_quiz(
        &self,
        institution_phone: &str,
        quiz_name: &str,
        questions: Vec<String>,
        answers: Vec<String>,
    ) -> Result<Quiz, RegistryError> {
        if quiz_name.trim().is_empty() {
            return Err(RegistryError::Malformed("quiz name cannot be empty".to_string()));
        }
        if questions.len() != answers.len() {
            return Err(RegistryError::Malformed(format!(
                "{} question(s) but {} answer(s)",
                questions.len(),
                answers.len()
            )));
        }

        let quiz = Quiz {
            institution: institution_phone.to_string(),
            quiz_name: quiz_name.to_string(),
            questions,
            answers: answers.iter().map(|a| normalize_answer(a)).collect(),
        };

        let duplicate = self.mutate(|state| {
            let pos = state.data.quizzes.len();
            state.data.quizzes.push(quiz.clone());
            let mut duplicate = true;
            state.quiz_index.entry(quiz.quiz_name.clone()).or_insert_with(|| {
                duplicate = false;
                pos
            });
            Ok(duplicate)
        })?;

        if duplicate {
            warn!("Quiz name {quiz_name:?} already exists; lookups keep resolving to the first one");
        }
        info!(
            "Institution {institution_phone} created quiz {quiz_name:?} with {} question(s)",
            quiz.len()
        );
        Ok(quiz)
    }

    /// First quiz created with the given name
    pub fn get_quiz_by_name(&self, name: &str) -> Result<Quiz, RegistryError> {
        let state = self.state.lock();
        state
            .quiz(name)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(EntityKind::Quiz, name))
    }

    /// Quizzes whose name the cadet has no score for, in creation order
    pub fn list_quizzes_excluding(&self, cadet_phone: &str) -> Result<Vec<Quiz>, RegistryError> {
        let state = self.state.lock();
        let cadet = state
            .data
            .cadets
            .get(cadet_phone)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Cadet, cadet_phone))?;

        Ok(state
            .data
            .quizzes
            .iter()
            .filter(|q| !cadet.scores.contains_key(&q.quiz_name))
            .cloned()
            .collect())
    }

    /// Quizzes authored by one institution, in creation order
    #[must_use]
    pub fn quizzes_by_institution(&self, institution_phone: &str) -> Vec<Quiz> {
        let state = self.state.lock();
        state
            .data
            .quizzes
            .iter()
            .filter(|q| q.institution == institution_phone)
            .cloned()
            .collect()
    }

    // =========================================================================
    // ATTEMPTS
    // =========================================================================

    /// Score an attempt and record it, replacing any earlier score for that quiz
    pub fn submit_attempt<S: AsRef<str>>(
        &self,
        cadet_phone: &str,
        quiz_name: &str,
        answers: &[S],
    ) -> Result<u32, RegistryError> {
        let (score, previous) = self.mutate(|state| {
            let score = state
                .quiz(quiz_name)
                .map(|quiz| score_attempt(&quiz.answers, answers))
                .ok_or_else(|| RegistryError::not_found(EntityKind::Quiz, quiz_name))?;

            let cadet = state
                .data
                .cadets
                .get_mut(cadet_phone)
                .ok_or_else(|| RegistryError::not_found(EntityKind::Cadet, cadet_phone))?;

            let previous = cadet.scores.insert(quiz_name.to_string(), score);
            Ok((score, previous))
        })?;

        if let Some(prev) = previous {
            info!("Cadet {cadet_phone} re-attempted {quiz_name:?}: {prev} -> {score}");
        } else {
            info!("Cadet {cadet_phone} scored {score} on {quiz_name:?}");
        }
        Ok(score)
    }

    // =========================================================================
    // REPORTING
    // =========================================================================

    /// Every cadet ranked by total score, highest first
    ///
    /// Ties keep registration order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let state = self.state.lock();
        let cadets: Vec<Cadet> = state.cadets().collect();
        debug!("Ranking {} cadet(s)", cadets.len());
        rank_cadets(&cadets)
    }

    /// Entity counts
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let state = self.state.lock();
        RegistryStats {
            institutions: state.data.institutions.len(),
            cadets: state.data.cadets.len(),
            quizzes: state.data.quizzes.len(),
        }
    }

    /// Copy of the whole registry as it would be stored
    #[must_use]
    pub fn snapshot(&self) -> RegistryData {
        self.state.lock().data.clone()
    }
}
