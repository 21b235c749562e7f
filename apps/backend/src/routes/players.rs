//! Player registration, lookup, directory, and card selection.

use actix_web::web;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::roster::Player;
use crate::domain::scorecard::Scorecard;
use crate::domain::snapshot::PlayerDirectoryEntry;
use crate::error::AppError;
use crate::extractors::host_key::HostKey;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePlayerRequest {
    player_id: Uuid,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectCardRequest {
    scorecard_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    player_id: Uuid,
    display_name: String,
    scorecard: Option<Scorecard>,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            player_id: player.player_id,
            display_name: player.display_name,
            scorecard: player.scorecard,
        }
    }
}

#[derive(Debug, Serialize)]
struct PlayerDirectoryResponse {
    players: Vec<PlayerDirectoryEntry>,
}

/// POST /api/players
///
/// Register a player under a caller-supplied id, or return the existing
/// record when a remembered id reconnects.
async fn create_player(
    body: web::Json<CreatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayerResponse>, AppError> {
    let player = app_state
        .game
        .register_player(body.player_id, body.display_name.as_deref())?;
    Ok(web::Json(player.into()))
}

/// GET /api/players/{player_id}
async fn get_player(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayerResponse>, AppError> {
    let player = app_state.game.player(path.into_inner())?;
    Ok(web::Json(player.into()))
}

/// GET /api/players/directory
///
/// Host view of everyone in the session and whether they hold a card.
async fn player_directory(
    _host: HostKey,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayerDirectoryResponse>, AppError> {
    Ok(web::Json(PlayerDirectoryResponse {
        players: app_state.game.directory(),
    }))
}

/// POST /api/players/{player_id}/scorecard
///
/// Lock an offered card to the player for the upcoming round.
async fn select_scorecard(
    path: web::Path<Uuid>,
    body: web::Json<SelectCardRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayerResponse>, AppError> {
    let player = app_state
        .game
        .assign_scorecard(path.into_inner(), body.scorecard_id)?;
    Ok(web::Json(player.into()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_player)));
    // Registered before the id matcher so "directory" is not parsed as one.
    cfg.service(web::resource("/directory").route(web::get().to(player_directory)));
    cfg.service(web::resource("/{player_id}").route(web::get().to(get_player)));
    cfg.service(web::resource("/{player_id}/scorecard").route(web::post().to(select_scorecard)));
}
