use sqlx::SqlitePool;

const SQL_CREATE_TEAMS: &str = r#"
CREATE TABLE IF NOT EXISTS teams (
  name       TEXT PRIMARY KEY,
  team_id    TEXT UNIQUE,
  extra      TEXT,
  updated_at TEXT NOT NULL
)
"#;

const SQL_CREATE_PARTICIPANTS: &str = r#"
CREATE TABLE IF NOT EXISTS participants (
  last_name     TEXT NOT NULL,
  first_name    TEXT NOT NULL,
  team          TEXT NOT NULL REFERENCES teams (name),
  school        TEXT,
  class_label   TEXT,
  checked_in_at TEXT,
  extra         TEXT,
  updated_at    TEXT NOT NULL,
  PRIMARY KEY (last_name, first_name)
)
"#;

/// Create the tables on first run. Rows are seeded by the external import
/// process, so there is nothing else to migrate.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_TEAMS).execute(pool).await?;
    sqlx::query(SQL_CREATE_PARTICIPANTS).execute(pool).await?;
    Ok(())
}
