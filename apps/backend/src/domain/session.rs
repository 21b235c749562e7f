//! Session state machine: owns game status and gates every mutation.
//!
//! Exactly one `GameSession` exists per process. It is created at startup and
//! reset in place; callers serialize access through the service layer's lock.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::claims::{self, ClaimContext, ClaimType, ClaimVerdict, MAX_FULL_CARD_WINNERS};
use crate::domain::phrases::PhrasePool;
use crate::domain::roster::{Player, Roster};
use crate::domain::scorecard::{self, Scorecard};
use crate::domain::sequencer::CallSequencer;
use crate::domain::snapshot::{GameSnapshot, PlayerDirectoryEntry};
use crate::errors::domain::DomainError;

/// Offered-card pool is topped up to at least this many cards.
pub const SCORECARD_POOL_TARGET: usize = 20;

/// Bound on consecutive fingerprint collisions while topping up the offer
/// pool; only reachable with a pathologically small phrase pool.
const MAX_CARD_GENERATION_RETRIES: usize = 1000;

/// Game progression states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Players may join and pick cards; the host has not started the round.
    WaitingForHost,
    /// The host is drawing calls; cards are locked.
    InProgress,
    /// Pool exhausted or three full-card winners recorded.
    Complete,
}

/// Append-only record of an accepted claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRecord {
    pub player_id: Uuid,
    pub display_name: String,
    #[serde(rename = "claimType")]
    pub claim: ClaimType,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Outcome of a claim submission, echoing the winners list either way.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEvaluation {
    pub accepted: bool,
    pub message: String,
    pub winners: Vec<WinnerRecord>,
}

/// The single shared game session.
#[derive(Debug)]
pub struct GameSession {
    pool: PhrasePool,
    status: GameStatus,
    called_phrases: Vec<String>,
    current_call: Option<String>,
    sequencer: CallSequencer,
    winners: Vec<WinnerRecord>,
    roster: Roster,
    /// Cards offered to pickers but not yet taken.
    offered_cards: Vec<Scorecard>,
    /// Fingerprints of cards locked to players; never re-offered.
    assigned_fingerprints: HashSet<String>,
    started_at: Option<OffsetDateTime>,
    version: u64,
}

impl GameSession {
    pub fn new(pool: PhrasePool) -> Self {
        Self {
            pool,
            status: GameStatus::WaitingForHost,
            called_phrases: Vec::new(),
            current_call: None,
            sequencer: CallSequencer::default(),
            winners: Vec::new(),
            roster: Roster::default(),
            offered_cards: Vec::new(),
            assigned_fingerprints: HashSet::new(),
            started_at: None,
            version: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pool(&self) -> &PhrasePool {
        &self.pool
    }

    /// Register a player or return the existing record on reconnect.
    pub fn register_player(
        &mut self,
        player_id: Uuid,
        requested_name: Option<&str>,
        now: OffsetDateTime,
    ) -> Result<&Player, DomainError> {
        let before = self.roster.len();
        self.roster.register(player_id, requested_name, now)?;
        if self.roster.len() > before {
            self.version += 1;
        }
        self.roster.get(player_id)
    }

    pub fn player(&self, player_id: Uuid) -> Result<&Player, DomainError> {
        self.roster.get(player_id)
    }

    /// Offer `count` cards from the pool, topping it up first.
    ///
    /// Cards stay on offer until someone takes them, so a client refreshing
    /// its picker may see familiar cards in a new order.
    pub fn preview_scorecards<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Scorecard>, DomainError> {
        self.ensure_offered_cards(count.max(SCORECARD_POOL_TARGET), rng)?;
        let mut cards = self.offered_cards.clone();
        cards.shuffle(rng);
        cards.truncate(count);
        Ok(cards)
    }

    /// Bind an offered card to a player. Selection is only open while
    /// waiting for the host, and each player locks at most one card.
    pub fn assign_scorecard(
        &mut self,
        player_id: Uuid,
        scorecard_id: Uuid,
    ) -> Result<&Player, DomainError> {
        if self.status != GameStatus::WaitingForHost {
            return Err(DomainError::LockedRound);
        }
        if self.roster.get(player_id)?.scorecard.is_some() {
            return Err(DomainError::AlreadyAssigned);
        }

        let idx = self
            .offered_cards
            .iter()
            .position(|card| card.id() == scorecard_id)
            .ok_or(DomainError::ScorecardNotFound(scorecard_id))?;
        let card = self.offered_cards.remove(idx);
        self.assigned_fingerprints.insert(card.fingerprint());

        self.roster.get_mut(player_id)?.scorecard = Some(card);
        self.version += 1;
        self.roster.get(player_id)
    }

    /// Begin the round: fresh shuffle of the full pool, cleared call state.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: OffsetDateTime,
    ) -> Result<(), DomainError> {
        if self.status != GameStatus::WaitingForHost {
            return Err(DomainError::invalid_transition(
                "The round has already started; reset the game to play another",
            ));
        }
        self.sequencer = CallSequencer::reseed(&self.pool, rng);
        self.called_phrases.clear();
        self.current_call = None;
        self.winners.clear();
        self.started_at = Some(now);
        self.status = GameStatus::InProgress;
        self.version += 1;
        Ok(())
    }

    /// Advance the call sequence.
    ///
    /// Returns the new call, or `None` when the pool is exhausted (which
    /// completes the round). Drawing a completed round is a no-op so the
    /// host can mash the button safely; drawing before the round starts is
    /// an invalid transition.
    pub fn draw(&mut self) -> Result<Option<String>, DomainError> {
        match self.status {
            GameStatus::WaitingForHost => Err(DomainError::invalid_transition(
                "Start the game before drawing phrases",
            )),
            GameStatus::Complete => Ok(None),
            GameStatus::InProgress => match self.sequencer.next_call() {
                None => {
                    self.status = GameStatus::Complete;
                    self.version += 1;
                    Ok(None)
                }
                Some(phrase) => {
                    self.called_phrases.push(phrase.clone());
                    self.current_call = Some(phrase.clone());
                    self.version += 1;
                    Ok(Some(phrase))
                }
            },
        }
    }

    /// Return to `WaitingForHost`, clearing all round state.
    ///
    /// With `drop_players` the roster and every locked card go too;
    /// otherwise players keep their assigned cards for the next round.
    pub fn reset(&mut self, drop_players: bool) {
        self.status = GameStatus::WaitingForHost;
        self.called_phrases.clear();
        self.current_call = None;
        self.winners.clear();
        self.started_at = None;
        self.offered_cards.clear();
        self.sequencer = CallSequencer::default();
        if drop_players {
            self.roster.clear();
            self.assigned_fingerprints.clear();
        }
        self.version += 1;
    }

    /// Evaluate a claim and, when accepted, record the winner.
    ///
    /// Rejections are normal outcomes, not errors: the evaluation carries
    /// the reason and the (unchanged) winners list.
    pub fn claim(
        &mut self,
        player_id: Uuid,
        claim: ClaimType,
        now: OffsetDateTime,
    ) -> Result<ClaimEvaluation, DomainError> {
        let player = self.roster.get(player_id)?;
        let ctx = ClaimContext {
            prior_full_card_winners: self.full_card_winner_count(),
            duplicate_claim: self
                .winners
                .iter()
                .any(|w| w.player_id == player_id && w.claim == claim),
        };

        match claims::validate(player.scorecard.as_ref(), &self.called_phrases, claim, &ctx) {
            ClaimVerdict::Rejected(reason) => Ok(ClaimEvaluation {
                accepted: false,
                message: reason.message(),
                winners: self.winners.clone(),
            }),
            ClaimVerdict::Accepted => {
                let record = WinnerRecord {
                    player_id,
                    display_name: player.display_name.clone(),
                    claim,
                    timestamp: now,
                };
                self.winners.push(record);
                if self.full_card_winner_count() >= MAX_FULL_CARD_WINNERS {
                    self.status = GameStatus::Complete;
                }
                self.version += 1;
                Ok(ClaimEvaluation {
                    accepted: true,
                    message: "Claim accepted".to_string(),
                    winners: self.winners.clone(),
                })
            }
        }
    }

    /// Side-effect-free view for concurrent readers.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            current_call: self.current_call.clone(),
            current_call_detail: None,
            called_phrases: self.called_phrases.clone(),
            remaining_calls: match self.status {
                GameStatus::WaitingForHost => self.pool.len(),
                _ => self.sequencer.remaining(),
            },
            player_count: self.roster.len(),
            winners: self.winners.clone(),
            started_at: self.started_at,
            version: self.version,
        }
    }

    pub fn directory(&self) -> Vec<PlayerDirectoryEntry> {
        self.roster
            .players()
            .iter()
            .map(|player| PlayerDirectoryEntry {
                player_id: player.player_id,
                display_name: player.display_name.clone(),
                joined: true,
                has_scorecard: player.scorecard.is_some(),
            })
            .collect()
    }

    fn full_card_winner_count(&self) -> usize {
        self.winners
            .iter()
            .filter(|w| matches!(w.claim, ClaimType::FullCard(_)))
            .count()
    }

    fn ensure_offered_cards<R: Rng + ?Sized>(
        &mut self,
        desired: usize,
        rng: &mut R,
    ) -> Result<(), DomainError> {
        let mut retries = 0;
        while self.offered_cards.len() < desired {
            let card = scorecard::generate(&self.pool, rng)?;
            let fingerprint = card.fingerprint();
            let taken = self.assigned_fingerprints.contains(&fingerprint)
                || self
                    .offered_cards
                    .iter()
                    .any(|offered| offered.fingerprint() == fingerprint);
            if taken {
                retries += 1;
                if retries > MAX_CARD_GENERATION_RETRIES {
                    return Err(DomainError::validation(
                        "Unable to generate enough distinct scorecards from the phrase pool",
                    ));
                }
                continue;
            }
            self.offered_cards.push(card);
        }
        Ok(())
    }
}
