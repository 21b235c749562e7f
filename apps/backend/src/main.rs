use actix_web::{web, App, HttpServer};
use backend::config::phrases::load_pool;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::routes;
use backend::services::game::GameService;
use backend::state::app_state::AppState;
use backend::state::host_config::HostConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let host_key = match std::env::var("BINGO_HOST_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("❌ BINGO_HOST_KEY must be set");
            std::process::exit(1);
        }
    };

    let pool = match load_pool() {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to load the phrase pool: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting Bingo Backend on http://{}:{}", host, port);
    println!("✅ Phrase pool loaded ({} phrases)", pool.len());

    let app_state = AppState::new(GameService::new(pool), HostConfig::new(host_key));
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
