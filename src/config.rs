use std::env;
use std::str::FromStr;

/// Runtime configuration, read once at startup from the environment
/// (a local `.env` file is loaded first, see `main`).
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Shared credentials for the kiosk and dashboard clients.
    pub api_login: String,
    pub api_password: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// How long a request may wait for a pool connection before failing.
    pub db_acquire_timeout_secs: u64,
    /// Directory holding the built dashboard/kiosk frontend bundle.
    pub assets_dir: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            api_login: env::var("API_LOGIN").expect("API_LOGIN must be set"),
            api_password: env::var("API_PASSWORD").expect("API_PASSWORD must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT", 9998),
            db_max_connections: parsed("DB_MAX_CONNECTIONS", 10),
            db_acquire_timeout_secs: parsed("DB_ACQUIRE_TIMEOUT_SECS", 5),
            assets_dir: env::var("ASSETS_DIR").unwrap_or_else(|_| "frontend/dist".to_string()),
        }
    }
}

fn parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
