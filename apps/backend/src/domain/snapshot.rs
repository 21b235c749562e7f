//! Public snapshot views of session state.
//!
//! Everything here is a read-only projection: safe to hand to any caller,
//! no internals, no lock required once built.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::insights::PhraseInsight;
use crate::domain::session::{GameStatus, WinnerRecord};

/// Point-in-time view of the session for the polling client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub current_call: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_call_detail: Option<PhraseInsight>,
    pub called_phrases: Vec<String>,
    pub remaining_calls: usize,
    pub player_count: usize,
    pub winners: Vec<WinnerRecord>,
    #[serde(with = "time::serde::rfc3339::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<OffsetDateTime>,
    /// Monotonic change counter; backs the snapshot ETag.
    pub version: u64,
}

/// One row of the host's player directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDirectoryEntry {
    pub player_id: Uuid,
    pub display_name: String,
    pub joined: bool,
    pub has_scorecard: bool,
}
