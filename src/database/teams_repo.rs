use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::{format_timestamp, StoreError};
use crate::models::TeamsRow;

const SQL_UPSERT_TEAM: &str = r#"
INSERT INTO teams (name, team_id, extra, updated_at)
VALUES (?1, ?2, ?3, ?4)
ON CONFLICT (name) DO UPDATE SET
  team_id    = excluded.team_id,
  extra      = excluded.extra,
  updated_at = excluded.updated_at
"#;

const SQL_LIST_TEAMS: &str = r#"
SELECT name, team_id, extra, updated_at
FROM teams
ORDER BY name
"#;

/// Create or fully replace the team row keyed by `name`. A clash on the
/// independently assigned `team_id` comes back as `TeamIdTaken` so the
/// import path can retry with a fresh one.
pub async fn upsert_team(
    pool: &SqlitePool,
    name: &str,
    team_id: Option<&str>,
    extra: Option<&Value>,
    now: DateTime<Utc>,
) -> Result<(), StoreError> {
    sqlx::query(SQL_UPSERT_TEAM)
        .bind(name)
        .bind(team_id)
        .bind(extra.map(Value::to_string))
        .bind(format_timestamp(now))
        .execute(pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                StoreError::TeamIdTaken(team_id.unwrap_or_default().to_string())
            } else {
                StoreError::Database(e)
            }
        })?;
    Ok(())
}

pub async fn list_teams(pool: &SqlitePool) -> sqlx::Result<Vec<TeamsRow>> {
    sqlx::query_as::<_, TeamsRow>(SQL_LIST_TEAMS)
        .fetch_all(pool)
        .await
}
