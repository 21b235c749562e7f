//! Domain-level error type used across the game engine.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use uuid::Uuid;

/// Central domain error type for the game engine.
///
/// Claim rejections are not errors: a rejected claim is a normal outcome
/// reported through `ClaimEvaluation`, and the session stays fully usable.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Illegal state-machine call for the current game status
    InvalidTransition(String),
    /// Card action attempted while the round is locked
    LockedRound,
    /// Player already holds a scorecard for this round
    AlreadyAssigned,
    /// Player id already registered under a different name
    DuplicatePlayer(Uuid),
    /// Unknown player id
    PlayerNotFound(Uuid),
    /// Scorecard was never offered or has already been taken
    ScorecardNotFound(Uuid),
    /// Fewer than 24 distinct phrases available
    InsufficientPool { available: usize },
    /// Input/user validation or business rule violation
    Validation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidTransition(d) => write!(f, "{d}"),
            DomainError::LockedRound => {
                write!(f, "The round already started, scorecards are locked")
            }
            DomainError::AlreadyAssigned => {
                write!(f, "A scorecard is already assigned for this round")
            }
            DomainError::DuplicatePlayer(id) => {
                write!(f, "Player id {id} is already registered under another name")
            }
            DomainError::PlayerNotFound(id) => write!(f, "Unknown player id {id}"),
            DomainError::ScorecardNotFound(id) => {
                write!(f, "Scorecard {id} already taken, please pick another")
            }
            DomainError::InsufficientPool { available } => write!(
                f,
                "At least 24 distinct phrases are required to build a scorecard (have {available})"
            ),
            DomainError::Validation(d) => write!(f, "{d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_transition(detail: impl Into<String>) -> Self {
        Self::InvalidTransition(detail.into())
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
