//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};
use crate::models::{Cadet, Institution, LeaderboardEntry, Quiz};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData::from(err)),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for institution or cadet login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Phone number
    pub phone: String,
}

/// Request body for registering an institution
#[derive(Debug, Deserialize)]
pub struct RegisterInstitutionRequest {
    /// Phone number
    pub phone: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// Request body for registering a cadet
#[derive(Debug, Deserialize)]
pub struct RegisterCadetRequest {
    /// Phone number
    pub phone: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// College affiliation
    #[serde(default)]
    pub college: String,
}

/// Request body for creating a quiz
#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    /// Quiz name
    pub quiz_name: String,
    /// Question texts, in order
    #[serde(default)]
    pub questions: Vec<String>,
    /// Correct answers, aligned with `questions`
    #[serde(default)]
    pub answers: Vec<String>,
}

/// Request body for attempting a quiz
#[derive(Debug, Deserialize)]
pub struct AttemptRequest {
    /// Quiz name
    pub quiz_name: String,
    /// Given answers, in question order (missing ones count as blank)
    #[serde(default)]
    pub answers: Vec<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Where a login should lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginNext {
    /// Known phone: go to the dashboard
    Dashboard,
    /// Unknown phone: go to registration
    Register,
}

/// Login response data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoginData {
    /// Whether the phone is registered
    pub registered: bool,
    /// Next page
    pub next: LoginNext,
}

impl LoginData {
    /// Login result for a lookup outcome
    #[must_use]
    pub const fn from_found(found: bool) -> Self {
        Self {
            registered: found,
            next: if found {
                LoginNext::Dashboard
            } else {
                LoginNext::Register
            },
        }
    }
}

/// A single institution
#[derive(Debug, Serialize)]
pub struct InstitutionData {
    /// Phone number
    pub phone: String,
    /// Display name
    pub name: String,
}

impl From<Institution> for InstitutionData {
    fn from(i: Institution) -> Self {
        Self {
            phone: i.phone,
            name: i.name,
        }
    }
}

/// Institutions list response data
#[derive(Debug, Serialize)]
pub struct InstitutionsData {
    /// Institutions in registration order
    pub institutions: Vec<InstitutionData>,
}

/// Quiz as listed on an institution dashboard
#[derive(Debug, Serialize)]
pub struct QuizSummary {
    /// Quiz name
    pub quiz_name: String,
    /// Number of questions
    pub questions: usize,
}

/// Institution dashboard response data
#[derive(Debug, Serialize)]
pub struct InstitutionDashboardData {
    /// Phone number
    pub phone: String,
    /// Display name
    pub name: String,
    /// Quizzes authored by this institution
    pub quizzes: Vec<QuizSummary>,
}

/// Quiz creation response data
#[derive(Debug, Serialize)]
pub struct QuizCreateData {
    /// Owning institution phone
    pub institution: String,
    /// Quiz name
    pub quiz_name: String,
    /// Number of questions
    pub questions: usize,
}

/// Cadet dashboard response data
#[derive(Debug, Serialize)]
pub struct CadetData {
    /// Phone number
    pub phone: String,
    /// Display name
    pub name: String,
    /// College affiliation
    pub college: String,
    /// Quiz name -> latest score
    pub scores: IndexMap<String, u32>,
    /// Sum of all scores
    pub total: u64,
}

impl From<Cadet> for CadetData {
    fn from(c: Cadet) -> Self {
        let total = c.total();
        Self {
            phone: c.phone,
            name: c.name,
            college: c.college,
            scores: c.scores,
            total,
        }
    }
}

/// A quiz as shown to a cadet (answers withheld)
#[derive(Debug, Serialize)]
pub struct QuizView {
    /// Owning institution phone
    pub institution: String,
    /// Quiz name
    pub quiz_name: String,
    /// Question texts, in order
    pub questions: Vec<String>,
}

impl From<Quiz> for QuizView {
    fn from(q: Quiz) -> Self {
        Self {
            institution: q.institution,
            quiz_name: q.quiz_name,
            questions: q.questions,
        }
    }
}

/// Open quizzes response data
#[derive(Debug, Serialize)]
pub struct QuizzesData {
    /// Quizzes the cadet has not attempted yet
    pub quizzes: Vec<QuizView>,
}

/// Attempt response data
#[derive(Debug, Serialize)]
pub struct AttemptData {
    /// Quiz name
    pub quiz_name: String,
    /// Correct answers
    pub score: u32,
    /// Number of questions
    pub out_of: usize,
}

/// One leaderboard row
#[derive(Debug, Serialize)]
pub struct LeaderboardRow {
    /// 1-based position
    pub rank: usize,
    /// Cadet name
    pub name: String,
    /// Cadet college
    pub college: String,
    /// Quiz name -> score
    pub scores: IndexMap<String, u32>,
    /// Sum of all scores
    pub total: u64,
}

/// Leaderboard response data
#[derive(Debug, Serialize)]
pub struct LeaderboardData {
    /// Rows, highest total first
    pub entries: Vec<LeaderboardRow>,
}

impl From<Vec<LeaderboardEntry>> for LeaderboardData {
    fn from(board: Vec<LeaderboardEntry>) -> Self {
        let entries = board
            .into_iter()
            .enumerate()
            .map(|(i, e)| LeaderboardRow {
                rank: i + 1,
                name: e.name,
                college: e.college,
                scores: e.scores,
                total: e.total,
            })
            .collect();
        Self { entries }
    }
}

/// Stats response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsData {
    /// Registered institutions
    pub institutions: usize,
    /// Registered cadets
    pub cadets: usize,
    /// Created quizzes
    pub quizzes: usize,
}
