//! Phrase narration details.

use actix_web::web;
use serde::Deserialize;

use crate::domain::insights::{self, PhraseInsight};
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Deserialize)]
struct PhraseDetailQuery {
    phrase: String,
}

/// GET /api/phrases/detail?phrase=...
///
/// Static lookup with no session coupling; every phrase yields an insight.
async fn phrase_detail(
    query: web::Query<PhraseDetailQuery>,
) -> Result<web::Json<PhraseInsight>, AppError> {
    let phrase = query.phrase.trim();
    if phrase.is_empty() {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "The phrase query parameter is required".to_string(),
        ));
    }
    Ok(web::Json(insights::describe(phrase)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/detail").route(web::get().to(phrase_detail)));
}
