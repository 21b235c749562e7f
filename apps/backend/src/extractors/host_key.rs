//! Host capability extractor.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Header carrying the host capability token.
pub const HOST_KEY_HEADER: &str = "x-host-key";

/// Proof that the request carried the configured host key.
///
/// Handlers gate host-only actions by taking this as a parameter; extraction
/// fails with 403 before the handler body runs, so the session is never
/// touched by an unauthorized call.
#[derive(Debug, Clone, Copy)]
pub struct HostKey;

impl FromRequest for HostKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<HostKey, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("Application state is not configured".to_string()))?;

    let provided = req
        .headers()
        .get(HOST_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if state.host.verify(provided) {
        Ok(HostKey)
    } else {
        Err(AppError::invalid_host_key())
    }
}
