//! Lock discipline around the shared session.
//!
//! The session is the only shared mutable resource. Reads (`snapshot`,
//! `directory`, `player`) take the shared lock; every mutation takes the
//! exclusive lock for its full duration, so two concurrent draws can never
//! observe the same remaining pool. All critical sections are bounded,
//! CPU-only work. Randomness and wall-clock time are injected here to keep
//! the domain deterministic.

use std::sync::Arc;

use parking_lot::RwLock;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::domain::claims::ClaimType;
use crate::domain::insights;
use crate::domain::phrases::PhrasePool;
use crate::domain::roster::Player;
use crate::domain::scorecard::Scorecard;
use crate::domain::session::{ClaimEvaluation, GameSession};
use crate::domain::snapshot::{GameSnapshot, PlayerDirectoryEntry};
use crate::error::AppError;

/// Shared handle to the single game session.
#[derive(Debug, Clone)]
pub struct GameService {
    session: Arc<RwLock<GameSession>>,
}

impl GameService {
    pub fn new(pool: PhrasePool) -> Self {
        Self {
            session: Arc::new(RwLock::new(GameSession::new(pool))),
        }
    }

    pub fn register_player(
        &self,
        player_id: Uuid,
        display_name: Option<&str>,
    ) -> Result<Player, AppError> {
        let mut session = self.session.write();
        let player = session
            .register_player(player_id, display_name, OffsetDateTime::now_utc())?
            .clone();
        info!(player_id = %player.player_id, "player registered");
        Ok(player)
    }

    pub fn player(&self, player_id: Uuid) -> Result<Player, AppError> {
        Ok(self.session.read().player(player_id)?.clone())
    }

    pub fn preview_scorecards(&self, count: usize) -> Result<Vec<Scorecard>, AppError> {
        let mut rng = rand::rng();
        Ok(self.session.write().preview_scorecards(count, &mut rng)?)
    }

    pub fn assign_scorecard(
        &self,
        player_id: Uuid,
        scorecard_id: Uuid,
    ) -> Result<Player, AppError> {
        let mut session = self.session.write();
        let player = session.assign_scorecard(player_id, scorecard_id)?.clone();
        info!(player_id = %player_id, scorecard_id = %scorecard_id, "scorecard locked");
        Ok(player)
    }

    pub fn start(&self) -> Result<GameSnapshot, AppError> {
        let mut rng = rand::rng();
        let mut session = self.session.write();
        session.start(&mut rng, OffsetDateTime::now_utc())?;
        info!("round started");
        Ok(with_call_detail(session.snapshot()))
    }

    pub fn draw(&self) -> Result<GameSnapshot, AppError> {
        let mut session = self.session.write();
        match session.draw()? {
            Some(phrase) => info!(phrase = %phrase, "phrase called"),
            None => info!("call pool exhausted"),
        }
        Ok(with_call_detail(session.snapshot()))
    }

    pub fn reset(&self, drop_players: bool) -> GameSnapshot {
        let mut session = self.session.write();
        session.reset(drop_players);
        info!(drop_players, "game reset");
        with_call_detail(session.snapshot())
    }

    pub fn claim(&self, player_id: Uuid, claim: ClaimType) -> Result<ClaimEvaluation, AppError> {
        let mut session = self.session.write();
        let evaluation = session.claim(player_id, claim, OffsetDateTime::now_utc())?;
        info!(
            player_id = %player_id,
            claim = %claim,
            accepted = evaluation.accepted,
            "claim evaluated"
        );
        Ok(evaluation)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        with_call_detail(self.session.read().snapshot())
    }

    pub fn directory(&self) -> Vec<PlayerDirectoryEntry> {
        self.session.read().directory()
    }
}

/// Attach the narration detail for the current call, if any.
fn with_call_detail(mut snapshot: GameSnapshot) -> GameSnapshot {
    snapshot.current_call_detail = snapshot.current_call.as_deref().map(insights::describe);
    snapshot
}
