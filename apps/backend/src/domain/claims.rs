//! Claim types and pure win-pattern validation.
//!
//! `validate` is a pure predicate plus a reason code: it never mutates
//! session state, so the same inputs always produce the same verdict and
//! every host decision stays auditable.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::scorecard::{is_free_space, Scorecard, GRID_SIZE};

/// Full-card winners awarded per round, across ranked and unranked claims.
pub const MAX_FULL_CARD_WINNERS: usize = 3;

/// Which column a column claim targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnTarget {
    /// Any of the five columns satisfies the claim.
    Any,
    /// Leftmost column only.
    One,
    /// Second column only.
    Two,
    /// Third column only.
    Three,
}

impl ColumnTarget {
    /// 0-based column index, or `None` when any column counts.
    pub fn index(self) -> Option<usize> {
        match self {
            ColumnTarget::Any => None,
            ColumnTarget::One => Some(0),
            ColumnTarget::Two => Some(1),
            ColumnTarget::Three => Some(2),
        }
    }
}

/// Rank attached to a full-card claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullCardRank {
    Unranked,
    First,
    Second,
    Third,
}

impl FullCardRank {
    /// Exact number of prior accepted full-card winners this rank requires,
    /// or `None` for an unranked claim (which only honors the overall cap).
    pub fn required_prior_winners(self) -> Option<usize> {
        match self {
            FullCardRank::Unranked => None,
            FullCardRank::First => Some(0),
            FullCardRank::Second => Some(1),
            FullCardRank::Third => Some(2),
        }
    }
}

/// A claimed winning pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimType {
    Row,
    Column(ColumnTarget),
    Diagonal,
    FullCard(FullCardRank),
}

const WIRE_VARIANTS: &[&str] = &[
    "ROW",
    "COLUMN",
    "COLUMN_1",
    "COLUMN_2",
    "COLUMN_3",
    "DIAGONAL",
    "FULL_CARD",
    "FULL_CARD_FIRST",
    "FULL_CARD_SECOND",
    "FULL_CARD_THIRD",
];

impl ClaimType {
    /// Canonical wire string for the claim, as submitted by clients.
    pub const fn as_wire(self) -> &'static str {
        match self {
            ClaimType::Row => "ROW",
            ClaimType::Column(ColumnTarget::Any) => "COLUMN",
            ClaimType::Column(ColumnTarget::One) => "COLUMN_1",
            ClaimType::Column(ColumnTarget::Two) => "COLUMN_2",
            ClaimType::Column(ColumnTarget::Three) => "COLUMN_3",
            ClaimType::Diagonal => "DIAGONAL",
            ClaimType::FullCard(FullCardRank::Unranked) => "FULL_CARD",
            ClaimType::FullCard(FullCardRank::First) => "FULL_CARD_FIRST",
            ClaimType::FullCard(FullCardRank::Second) => "FULL_CARD_SECOND",
            ClaimType::FullCard(FullCardRank::Third) => "FULL_CARD_THIRD",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "ROW" => Some(ClaimType::Row),
            "COLUMN" => Some(ClaimType::Column(ColumnTarget::Any)),
            "COLUMN_1" => Some(ClaimType::Column(ColumnTarget::One)),
            "COLUMN_2" => Some(ClaimType::Column(ColumnTarget::Two)),
            "COLUMN_3" => Some(ClaimType::Column(ColumnTarget::Three)),
            "DIAGONAL" => Some(ClaimType::Diagonal),
            "FULL_CARD" => Some(ClaimType::FullCard(FullCardRank::Unranked)),
            "FULL_CARD_FIRST" => Some(ClaimType::FullCard(FullCardRank::First)),
            "FULL_CARD_SECOND" => Some(ClaimType::FullCard(FullCardRank::Second)),
            "FULL_CARD_THIRD" => Some(ClaimType::FullCard(FullCardRank::Third)),
            _ => None,
        }
    }

    /// Human label used in rejection messages.
    pub const fn describe(self) -> &'static str {
        match self {
            ClaimType::Row => "row",
            ClaimType::Column(ColumnTarget::Any) => "column",
            ClaimType::Column(ColumnTarget::One) => "first column",
            ClaimType::Column(ColumnTarget::Two) => "second column",
            ClaimType::Column(ColumnTarget::Three) => "third column",
            ClaimType::Diagonal => "diagonal",
            ClaimType::FullCard(FullCardRank::Unranked) => "full card",
            ClaimType::FullCard(FullCardRank::First) => "full card (first winner)",
            ClaimType::FullCard(FullCardRank::Second) => "full card (second winner)",
            ClaimType::FullCard(FullCardRank::Third) => "full card (third winner)",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for ClaimType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ClaimType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        ClaimType::from_wire(&value)
            .ok_or_else(|| DeError::unknown_variant(&value, WIRE_VARIANTS))
    }
}

/// Session facts the validator needs beyond the card and call list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimContext {
    /// Accepted `FULL_CARD*` winners so far this round.
    pub prior_full_card_winners: usize,
    /// The claiming player already has this exact claim recorded.
    pub duplicate_claim: bool,
}

/// Why a claim was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimRejection {
    NoScorecard,
    CardIncomplete(ClaimType),
    RankAlreadyClaimed(ClaimType),
    DuplicateClaim,
}

impl ClaimRejection {
    pub fn message(self) -> String {
        match self {
            ClaimRejection::NoScorecard => "Select a scorecard before claiming".to_string(),
            ClaimRejection::CardIncomplete(claim) => {
                format!("Squares not complete for the {} pattern", claim.describe())
            }
            ClaimRejection::RankAlreadyClaimed(claim) => format!(
                "The {} prize is not available at this point in the round",
                claim.describe()
            ),
            ClaimRejection::DuplicateClaim => "Claim already recorded".to_string(),
        }
    }
}

/// Outcome of validating one claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ClaimVerdict {
    Accepted,
    Rejected(ClaimRejection),
}

/// Decide whether `claim` holds for `card` given the calls so far.
///
/// A cell is satisfied when it is the free-space marker or its value is a
/// member of `called`.
pub fn validate(
    card: Option<&Scorecard>,
    called: &[String],
    claim: ClaimType,
    ctx: &ClaimContext,
) -> ClaimVerdict {
    let Some(card) = card else {
        return ClaimVerdict::Rejected(ClaimRejection::NoScorecard);
    };

    let satisfied = match claim {
        ClaimType::Row => (0..GRID_SIZE).any(|row| row_complete(card, called, row)),
        ClaimType::Column(target) => match target.index() {
            None => (0..GRID_SIZE).any(|col| column_complete(card, called, col)),
            Some(col) => column_complete(card, called, col),
        },
        ClaimType::Diagonal => diagonal_complete(card, called),
        ClaimType::FullCard(_) => full_card_complete(card, called),
    };
    if !satisfied {
        return ClaimVerdict::Rejected(ClaimRejection::CardIncomplete(claim));
    }

    if ctx.duplicate_claim {
        return ClaimVerdict::Rejected(ClaimRejection::DuplicateClaim);
    }

    if let ClaimType::FullCard(rank) = claim {
        let rank_available = match rank.required_prior_winners() {
            None => ctx.prior_full_card_winners < MAX_FULL_CARD_WINNERS,
            Some(required) => ctx.prior_full_card_winners == required,
        };
        if !rank_available {
            return ClaimVerdict::Rejected(ClaimRejection::RankAlreadyClaimed(claim));
        }
    }

    ClaimVerdict::Accepted
}

fn cell_satisfied(card: &Scorecard, called: &[String], row: usize, col: usize) -> bool {
    let value = card.value(row, col);
    is_free_space(value) || called.iter().any(|phrase| phrase == value)
}

fn row_complete(card: &Scorecard, called: &[String], row: usize) -> bool {
    (0..GRID_SIZE).all(|col| cell_satisfied(card, called, row, col))
}

fn column_complete(card: &Scorecard, called: &[String], col: usize) -> bool {
    (0..GRID_SIZE).all(|row| cell_satisfied(card, called, row, col))
}

fn diagonal_complete(card: &Scorecard, called: &[String]) -> bool {
    let left_to_right = (0..GRID_SIZE).all(|i| cell_satisfied(card, called, i, i));
    let right_to_left = (0..GRID_SIZE).all(|i| cell_satisfied(card, called, i, GRID_SIZE - i - 1));
    left_to_right || right_to_left
}

fn full_card_complete(card: &Scorecard, called: &[String]) -> bool {
    (0..GRID_SIZE).all(|row| row_complete(card, called, row))
}
