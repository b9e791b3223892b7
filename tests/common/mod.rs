use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tempfile::TempDir;

use kiosk::database::participants_repo::NewParticipant;
use kiosk::database::schema;
use kiosk::services::roster_service;

/// Fresh SQLite database inside its own temp dir. The dir handle must stay
/// alive for the duration of the test.
pub async fn setup_test_db() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().expect("create temp dir");

    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("kiosk_test.sqlite"))
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("connect test db");

    schema::ensure_schema(&pool).await.expect("create schema");
    (dir, pool)
}

#[allow(dead_code)]
pub async fn seed_participant(pool: &SqlitePool, last_name: &str, first_name: &str, team: &str) {
    roster_service::register_entry(
        pool,
        None,
        NewParticipant {
            last_name,
            first_name,
            team,
            school: Some("School 42"),
            class_label: Some("9A"),
            extra: None,
        },
    )
    .await
    .expect("seed participant");
}
