//! Host-driven game flow and the shared state view.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::claims::ClaimType;
use crate::domain::session::ClaimEvaluation;
use crate::error::AppError;
use crate::extractors::host_key::HostKey;
use crate::http::etag::{if_none_match_satisfied, session_etag};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResetQuery {
    #[serde(default)]
    drop_players: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimRequest {
    player_id: Uuid,
    claim_type: ClaimType,
}

/// GET /api/game/state
///
/// Snapshot of the shared session for the polling client. Serves an ETag
/// derived from the session version and honors `If-None-Match` so idle
/// polls cost a 304 instead of a body.
async fn get_state(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state.game.snapshot();
    let etag_value = session_etag(snapshot.version);

    if let Some(if_none_match) = http_req.headers().get(IF_NONE_MATCH) {
        if let Ok(client_etag) = if_none_match.to_str() {
            if if_none_match_satisfied(client_etag, &etag_value) {
                return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
                    .insert_header((ETAG, etag_value))
                    .finish());
            }
        }
    }

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, etag_value))
        .json(snapshot))
}

/// POST /api/game/start
async fn start_game(
    _host: HostKey,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state.game.start()?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/game/draw
async fn draw_phrase(
    _host: HostKey,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state.game.draw()?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/game/reset?dropPlayers=bool
async fn reset_game(
    _host: HostKey,
    query: web::Query<ResetQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state.game.reset(query.drop_players);
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/game/claim
///
/// Claims are player-initiated off-band but recorded by the host after
/// inspecting the card, so this endpoint is host-gated like the rest of the
/// game flow. Rejections are 200s with `accepted: false`.
async fn claim_win(
    _host: HostKey,
    body: web::Json<ClaimRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ClaimEvaluation>, AppError> {
    let evaluation = app_state.game.claim(body.player_id, body.claim_type)?;
    Ok(web::Json(evaluation))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/state").route(web::get().to(get_state)));
    cfg.service(web::resource("/start").route(web::post().to(start_game)));
    cfg.service(web::resource("/draw").route(web::post().to(draw_phrase)));
    cfg.service(web::resource("/reset").route(web::post().to(reset_game)));
    cfg.service(web::resource("/claim").route(web::post().to(claim_win)));
}
