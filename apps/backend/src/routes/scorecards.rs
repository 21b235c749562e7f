//! Scorecard offers for the picker view.

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::domain::scorecard::Scorecard;
use crate::domain::session::SCORECARD_POOL_TARGET;
use crate::error::AppError;
use crate::state::app_state::AppState;

const DEFAULT_PREVIEW_COUNT: usize = 6;

#[derive(Debug, Deserialize)]
struct ScorecardQuery {
    count: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ScorecardListResponse {
    scorecards: Vec<Scorecard>,
}

/// GET /api/scorecards?count=n
async fn list_scorecards(
    query: web::Query<ScorecardQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardListResponse>, AppError> {
    let count = query
        .count
        .unwrap_or(DEFAULT_PREVIEW_COUNT)
        .clamp(1, SCORECARD_POOL_TARGET);
    let scorecards = app_state.game.preview_scorecards(count)?;
    Ok(web::Json(ScorecardListResponse { scorecards }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_scorecards)));
}
