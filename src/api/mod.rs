//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers that
//! turn registry operations into API results. Any HTTP server implementation
//! (`tiny_http`, axum, etc.) or a direct client can call them.
//!
//! ## Design
//!
//! - **Handlers take the registry explicitly**: typed input, `Result<T, ApiError>` out
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    cadet_dashboard, cadet_login, create_quiz, get_leaderboard, get_quiz, get_stats,
    institution_dashboard, institution_login, list_institutions, list_open_quizzes,
    register_cadet, register_institution, submit_attempt,
};
pub use types::{
    ApiResponse, AttemptData, AttemptRequest, CadetData, CreateQuizRequest,
    InstitutionDashboardData, InstitutionData, InstitutionsData, LeaderboardData, LeaderboardRow,
    LoginData, LoginNext, LoginRequest, QuizCreateData, QuizSummary, QuizView, QuizzesData,
    RegisterCadetRequest, RegisterInstitutionRequest, StatsData,
};
