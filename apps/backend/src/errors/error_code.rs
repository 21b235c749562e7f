//! Error codes for the bingo backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the bingo backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authorization
    /// Missing or incorrect X-Host-Key header
    InvalidHostKey,

    // Request validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Player not found
    PlayerNotFound,
    /// Scorecard not found (never offered, or already taken)
    ScorecardNotFound,

    // Business logic conflicts
    /// Illegal state-machine call for the current game status
    InvalidTransition,
    /// Card action attempted after the round started
    LockedRound,
    /// Player already holds a scorecard
    AlreadyAssigned,
    /// Player id already registered under a different name
    DuplicatePlayer,

    // System errors
    /// Fewer than 24 distinct phrases available
    InsufficientPool,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidHostKey => "INVALID_HOST_KEY",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::ScorecardNotFound => "SCORECARD_NOT_FOUND",
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
            ErrorCode::LockedRound => "LOCKED_ROUND",
            ErrorCode::AlreadyAssigned => "ALREADY_ASSIGNED",
            ErrorCode::DuplicatePlayer => "DUPLICATE_PLAYER",
            ErrorCode::InsufficientPool => "INSUFFICIENT_POOL",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
