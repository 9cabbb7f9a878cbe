//! API errors and their HTTP status codes
//!
//! Registry failures map onto three codes:
//!
//! | Registry error | Code | Status |
//! |---|---|---|
//! | unknown institution, cadet or quiz | `NOT_FOUND` | 404 |
//! | malformed quiz, blank phone, bad JSON | `BAD_REQUEST` | 400 |
//! | data file could not be written | `INTERNAL_ERROR` | 500 |

use serde::Serialize;

use crate::error::RegistryError;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A phone number or quiz name that is not registered (404)
    NotFound,
    /// Input rejected before the registry was touched (400)
    BadRequest,
    /// The registry could not be persisted (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }

    /// Code string sent in the response body
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// Code a registry error is reported with
    #[must_use]
    pub const fn for_registry_error(err: &RegistryError) -> Self {
        match err {
            RegistryError::NotFound { .. } => Self::NotFound,
            RegistryError::Malformed(_) => Self::BadRequest,
            RegistryError::Persistence(_) => Self::Internal,
        }
    }
}

/// API error with code and message
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Message shown to the caller
    pub message: String,
}

impl ApiError {
    /// Unknown institution, cadet or quiz
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Rejected input
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        let code = ErrorCode::for_registry_error(&err);
        let message = match err {
            RegistryError::Malformed(message) => message,
            other => other.to_string(),
        };
        Self { code, message }
    }
}

/// Error part of a failed response body
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Code string, e.g. `NOT_FOUND`
    pub code: String,
    /// Message shown to the caller
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
