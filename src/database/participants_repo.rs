use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::{format_timestamp, StoreError};
use crate::models::ParticipantsRow;

const SQL_UPSERT_PARTICIPANT: &str = r#"
INSERT INTO participants (last_name, first_name, team, school, class_label, checked_in_at, extra, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, ?7)
ON CONFLICT (last_name, first_name) DO UPDATE SET
  team          = excluded.team,
  school        = excluded.school,
  class_label   = excluded.class_label,
  checked_in_at = excluded.checked_in_at,
  extra         = excluded.extra,
  updated_at    = excluded.updated_at
"#;

const SQL_FIND_PARTICIPANT: &str = r#"
SELECT last_name, first_name, team, school, class_label, checked_in_at, extra, updated_at
FROM participants
WHERE last_name = ?1 AND first_name = ?2
LIMIT 1
"#;

const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT last_name, first_name, team, school, class_label, checked_in_at, extra, updated_at
FROM participants
ORDER BY last_name, first_name
"#;

// The claim is a single conditional UPDATE: the row check and the write are
// one atomic statement, so two concurrent claims for the same identity can
// never both report a change.
const SQL_CLAIM_CHECK_IN: &str = r#"
UPDATE participants
SET checked_in_at = ?3, updated_at = ?3
WHERE last_name = ?1 AND first_name = ?2
  AND (checked_in_at IS NULL OR checked_in_at <= ?4)
"#;

pub struct NewParticipant<'a> {
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub team: &'a str,
    pub school: Option<&'a str>,
    pub class_label: Option<&'a str>,
    pub extra: Option<&'a Value>,
}

/// Create or fully replace the participant row keyed by the name pair.
/// Replacing resets `checked_in_at`, matching a re-import of the roster.
/// Referencing a team that does not exist yields `UnknownTeam`.
pub async fn upsert_participant(
    pool: &SqlitePool,
    participant: &NewParticipant<'_>,
    now: DateTime<Utc>,
) -> Result<(), StoreError> {
    sqlx::query(SQL_UPSERT_PARTICIPANT)
        .bind(participant.last_name)
        .bind(participant.first_name)
        .bind(participant.team)
        .bind(participant.school)
        .bind(participant.class_label)
        .bind(participant.extra.map(Value::to_string))
        .bind(format_timestamp(now))
        .execute(pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation())
            {
                StoreError::UnknownTeam(participant.team.to_string())
            } else {
                StoreError::Database(e)
            }
        })?;
    Ok(())
}

pub async fn find_participant(
    pool: &SqlitePool,
    last_name: &str,
    first_name: &str,
) -> sqlx::Result<Option<ParticipantsRow>> {
    sqlx::query_as::<_, ParticipantsRow>(SQL_FIND_PARTICIPANT)
        .bind(last_name)
        .bind(first_name)
        .fetch_optional(pool)
        .await
}

pub async fn list_participants(pool: &SqlitePool) -> sqlx::Result<Vec<ParticipantsRow>> {
    sqlx::query_as::<_, ParticipantsRow>(SQL_LIST_PARTICIPANTS)
        .fetch_all(pool)
        .await
}

/// Set `checked_in_at = now` iff the row exists and its current value is
/// NULL or at most `stale_before`. Returns the number of rows claimed
/// (0 or 1); 0 means the participant is unknown or was checked in recently.
pub async fn claim_check_in(
    pool: &SqlitePool,
    last_name: &str,
    first_name: &str,
    now: DateTime<Utc>,
    stale_before: DateTime<Utc>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_CLAIM_CHECK_IN)
        .bind(last_name)
        .bind(first_name)
        .bind(format_timestamp(now))
        .bind(format_timestamp(stale_before))
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
