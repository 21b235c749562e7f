//! Player roster for one session.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::scorecard::Scorecard;
use crate::errors::domain::DomainError;

pub const MAX_DISPLAY_NAME_CHARS: usize = 40;

/// One registered participant.
#[derive(Debug, Clone)]
pub struct Player {
    pub player_id: Uuid,
    pub display_name: String,
    pub joined_at: OffsetDateTime,
    /// Locked card for this round; immutable once set until a full reset.
    pub scorecard: Option<Scorecard>,
}

/// Join-ordered player directory keyed by caller-supplied ids.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Register a player, or return the existing record on reconnect.
    ///
    /// A known id with a blank or matching requested name is treated as a
    /// reconnect. A known id with a different name is a duplicate: the id is
    /// taken. First-time registrations require a non-blank name.
    pub fn register(
        &mut self,
        player_id: Uuid,
        requested_name: Option<&str>,
        now: OffsetDateTime,
    ) -> Result<&Player, DomainError> {
        let requested = requested_name.map(str::trim).unwrap_or("");

        if let Some(idx) = self.position(player_id) {
            if requested.is_empty() || requested == self.players[idx].display_name {
                return Ok(&self.players[idx]);
            }
            return Err(DomainError::DuplicatePlayer(player_id));
        }

        if requested.is_empty() {
            return Err(DomainError::validation(
                "Display name required the first time you join the game",
            ));
        }
        if requested.chars().count() > MAX_DISPLAY_NAME_CHARS {
            return Err(DomainError::validation(
                "Display name must be 40 characters or less",
            ));
        }

        self.players.push(Player {
            player_id,
            display_name: requested.to_string(),
            joined_at: now,
            scorecard: None,
        });
        Ok(&self.players[self.players.len() - 1])
    }

    pub fn get(&self, player_id: Uuid) -> Result<&Player, DomainError> {
        self.players
            .iter()
            .find(|p| p.player_id == player_id)
            .ok_or(DomainError::PlayerNotFound(player_id))
    }

    pub fn get_mut(&mut self, player_id: Uuid) -> Result<&mut Player, DomainError> {
        self.players
            .iter_mut()
            .find(|p| p.player_id == player_id)
            .ok_or(DomainError::PlayerNotFound(player_id))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn clear_scorecards(&mut self) {
        for player in &mut self.players {
            player.scorecard = None;
        }
    }

    fn position(&self, player_id: Uuid) -> Option<usize> {
        self.players.iter().position(|p| p.player_id == player_id)
    }
}
