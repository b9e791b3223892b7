use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;

/// Shared application state handed to every handler and middleware.
/// Created once at startup, torn down when the server exits.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
