use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};
use crate::trace_ctx;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Invalid host key")]
    InvalidHostKey,
    #[error("Insufficient phrase pool: {detail}")]
    InsufficientPool { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Helper method to extract the error code from any variant
    fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code.as_str(),
            AppError::BadRequest { code, .. } => code.as_str(),
            AppError::NotFound { code, .. } => code.as_str(),
            AppError::Conflict { code, .. } => code.as_str(),
            AppError::InvalidHostKey => ErrorCode::InvalidHostKey.as_str(),
            AppError::InsufficientPool { .. } => ErrorCode::InsufficientPool.as_str(),
            AppError::Internal { .. } => ErrorCode::Internal.as_str(),
            AppError::Config { .. } => ErrorCode::ConfigError.as_str(),
        }
    }

    /// Helper method to extract the error detail from any variant
    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::InvalidHostKey => "Invalid host key".to_string(),
            AppError::InsufficientPool { detail, .. } => detail.clone(),
            AppError::Internal { detail, .. } => detail.clone(),
            AppError::Config { detail, .. } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::InvalidHostKey => StatusCode::FORBIDDEN,
            AppError::InsufficientPool { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn bad_request(code: ErrorCode, detail: String) -> Self {
        Self::BadRequest { code, detail }
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn conflict(code: ErrorCode, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn invalid_host_key() -> Self {
        Self::InvalidHostKey
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        let detail = e.to_string();
        match e {
            DomainError::InvalidTransition(_) => {
                AppError::conflict(ErrorCode::InvalidTransition, detail)
            }
            DomainError::LockedRound => AppError::conflict(ErrorCode::LockedRound, detail),
            DomainError::AlreadyAssigned => AppError::conflict(ErrorCode::AlreadyAssigned, detail),
            DomainError::DuplicatePlayer(_) => {
                AppError::conflict(ErrorCode::DuplicatePlayer, detail)
            }
            DomainError::PlayerNotFound(_) => AppError::not_found(ErrorCode::PlayerNotFound, detail),
            DomainError::ScorecardNotFound(_) => {
                AppError::not_found(ErrorCode::ScorecardNotFound, detail)
            }
            DomainError::InsufficientPool { .. } => AppError::InsufficientPool { detail },
            DomainError::Validation(_) => AppError::validation(ErrorCode::ValidationError, detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://phrase-bingo.dev/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail,
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
