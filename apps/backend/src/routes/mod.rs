use actix_web::web;

pub mod game;
pub mod health;
pub mod phrases;
pub mod players;
pub mod scorecards;

/// Configure application routes for the server and for tests.
///
/// In production, `main.rs` additionally wraps these in CORS, tracing, and
/// logging middleware. Tests register the same paths without those wrappers
/// so endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Player routes: /api/players/**
    cfg.service(web::scope("/api/players").configure(players::configure_routes));

    // Scorecard offers: /api/scorecards
    cfg.service(web::scope("/api/scorecards").configure(scorecards::configure_routes));

    // Host-driven game flow: /api/game/**
    cfg.service(web::scope("/api/game").configure(game::configure_routes));

    // Phrase narration details: /api/phrases/**
    cfg.service(web::scope("/api/phrases").configure(phrases::configure_routes));
}
