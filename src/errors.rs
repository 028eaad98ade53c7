use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::Conflict(_) => "CONFLICT",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a single call to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("completion request timed out after {0}s")]
    Timeout(u64),

    #[error("completion service unreachable: {0}")]
    Transport(String),

    #[error("completion service rejected the request: {0}")]
    Rejected(String),

    #[error("completion service returned no content")]
    EmptyResponse,

    #[error("could not build completion request: {0}")]
    InvalidRequest(String),
}

/// Model output that is not a JSON array of question objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("response JSON is not an array")]
    NotAnArray,

    #[error("question {index} is malformed: {reason}")]
    MalformedQuestion { index: usize, reason: String },
}

/// A well-formed question that cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("expected 4 options, found {0}")]
    OptionCount(usize),

    #[error("option '{option}' should start with '{expected}) '")]
    UnlabelledOption {
        expected: &'static str,
        option: String,
    },

    #[error("correct answer '{0}' does not name an option")]
    UnknownAnswer(String),
}
