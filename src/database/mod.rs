pub mod last_changed_repo;
pub mod participants_repo;
pub mod schema;
pub mod teams_repo;

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::config::Config;

/// Failures at the store boundary that callers must branch on. Plain
/// connectivity problems stay wrapped in `Database` and surface as a
/// generic server error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("team '{0}' does not exist")]
    UnknownTeam(String),
    #[error("team id '{0}' is already taken")]
    TeamIdTaken(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Open the bounded connection pool. Acquisition beyond the bound queues
/// and fails after the configured timeout instead of hanging.
pub async fn connect(config: &Config) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(config.db_acquire_timeout_secs));

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// RFC3339 UTC with fixed-width microseconds and a `Z` suffix, so that
/// lexicographic comparison in SQL matches chronological order.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
