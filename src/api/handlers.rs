//! API handlers
//!
//! These handlers validate input, call the registry and shape the result.
//! They are HTTP-agnostic: typed input, `Result<T, ApiError>` out.

use log::debug;

use super::error::ApiError;
use super::types::{
    AttemptData, AttemptRequest, CadetData, CreateQuizRequest, InstitutionDashboardData,
    InstitutionData, InstitutionsData, LeaderboardData, LoginData, LoginRequest, QuizCreateData,
    QuizSummary, QuizView, QuizzesData, RegisterCadetRequest, RegisterInstitutionRequest,
    StatsData,
};
use crate::registry::Registry;

// =============================================================================
// INSTITUTIONS
// =============================================================================

/// Check whether an institution phone is registered
pub fn institution_login(registry: &Registry, req: &LoginRequest) -> Result<LoginData, ApiError> {
    let phone = require_phone(&req.phone)?;
    let found = registry.find_institution(phone).is_some();
    debug!("Institution login {phone}: registered={found}");
    Ok(LoginData::from_found(found))
}

/// Register (or re-register) an institution
pub fn register_institution(
    registry: &Registry,
    req: &RegisterInstitutionRequest,
) -> Result<InstitutionData, ApiError> {
    let phone = require_phone(&req.phone)?;
    let institution = registry.register_institution(phone, req.name.trim())?;
    Ok(institution.into())
}

/// List all institutions
pub fn list_institutions(registry: &Registry) -> Result<InstitutionsData, ApiError> {
    let institutions = registry.institutions().into_iter().map(Into::into).collect();
    Ok(InstitutionsData { institutions })
}

/// Institution dashboard: the institution and its quizzes
pub fn institution_dashboard(
    registry: &Registry,
    phone: &str,
) -> Result<InstitutionDashboardData, ApiError> {
    let phone = require_phone(phone)?;
    let institution = registry
        .find_institution(phone)
        .ok_or_else(|| ApiError::not_found(format!("Institution '{phone}' not found")))?;

    let quizzes = registry
        .quizzes_by_institution(phone)
        .into_iter()
        .map(|q| QuizSummary {
            questions: q.len(),
            quiz_name: q.quiz_name,
        })
        .collect();

    Ok(InstitutionDashboardData {
        phone: institution.phone,
        name: institution.name,
        quizzes,
    })
}

/// Create a quiz for an institution
pub fn create_quiz(
    registry: &Registry,
    phone: &str,
    req: &CreateQuizRequest,
) -> Result<QuizCreateData, ApiError> {
    let phone = require_phone(phone)?;
    let quiz = registry.create_quiz(
        phone,
        req.quiz_name.trim(),
        req.questions.clone(),
        req.answers.clone(),
    )?;

    Ok(QuizCreateData {
        questions: quiz.len(),
        institution: quiz.institution,
        quiz_name: quiz.quiz_name,
    })
}

// =============================================================================
// CADETS
// =============================================================================

/// Check whether a cadet phone is registered
pub fn cadet_login(registry: &Registry, req: &LoginRequest) -> Result<LoginData, ApiError> {
    let phone = require_phone(&req.phone)?;
    let found = registry.find_cadet(phone).is_some();
    debug!("Cadet login {phone}: registered={found}");
    Ok(LoginData::from_found(found))
}

/// Register (or re-register) a cadet
pub fn register_cadet(registry: &Registry, req: &RegisterCadetRequest) -> Result<CadetData, ApiError> {
    let phone = require_phone(&req.phone)?;
    let cadet = registry.register_cadet(phone, req.name.trim(), req.college.trim())?;
    Ok(cadet.into())
}

/// Cadet dashboard: the cadet and their scores
pub fn cadet_dashboard(registry: &Registry, phone: &str) -> Result<CadetData, ApiError> {
    let phone = require_phone(phone)?;
    registry
        .find_cadet(phone)
        .map(Into::into)
        .ok_or_else(|| ApiError::not_found(format!("Cadet '{phone}' not found")))
}

/// Quizzes a cadet has not attempted yet
pub fn list_open_quizzes(registry: &Registry, phone: &str) -> Result<QuizzesData, ApiError> {
    let phone = require_phone(phone)?;
    let quizzes = registry
        .list_quizzes_excluding(phone)?
        .into_iter()
        .map(QuizView::from)
        .collect();
    Ok(QuizzesData { quizzes })
}

/// Submit a cadet's answers for a quiz
pub fn submit_attempt(
    registry: &Registry,
    phone: &str,
    req: &AttemptRequest,
) -> Result<AttemptData, ApiError> {
    let phone = require_phone(phone)?;
    let quiz = registry.get_quiz_by_name(&req.quiz_name)?;
    let score = registry.submit_attempt(phone, &req.quiz_name, &req.answers)?;

    Ok(AttemptData {
        quiz_name: quiz.quiz_name,
        score,
        out_of: quiz.answers.len(),
    })
}

// =============================================================================
// QUIZZES
// =============================================================================

/// A quiz by name, without its answers
pub fn get_quiz(registry: &Registry, name: &str) -> Result<QuizView, ApiError> {
    Ok(registry.get_quiz_by_name(name)?.into())
}

// =============================================================================
// REPORTING
// =============================================================================

/// Ranked leaderboard
pub fn get_leaderboard(registry: &Registry) -> Result<LeaderboardData, ApiError> {
    Ok(registry.leaderboard().into())
}

/// Entity counts
pub fn get_stats(registry: &Registry) -> Result<StatsData, ApiError> {
    let stats = registry.stats();
    Ok(StatsData {
        institutions: stats.institutions,
        cadets: stats.cadets,
        quizzes: stats.quizzes,
    })
}

// =============================================================================
// HELPERS
// =============================================================================

fn require_phone(phone: &str) -> Result<&str, ApiError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(ApiError::bad_request("Phone number cannot be empty"));
    }
    Ok(phone)
}
