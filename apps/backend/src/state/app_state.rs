//! Application state containing shared resources.

use crate::services::game::GameService;
use crate::state::host_config::HostConfig;

/// Application state shared across all workers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the single shared game session
    pub game: GameService,
    /// Host capability configuration
    pub host: HostConfig,
}

impl AppState {
    pub fn new(game: GameService, host: HostConfig) -> Self {
        Self { game, host }
    }

    /// State backed by the embedded phrase pool and the default test host
    /// key; used by integration tests.
    pub fn for_tests() -> Self {
        let pool = crate::config::phrases::embedded_pool()
            .expect("embedded phrase pool must be valid");
        Self::new(GameService::new(pool), HostConfig::default())
    }
}
