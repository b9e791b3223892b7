use sqlx::SqlitePool;

// Timestamps are fixed-width RFC3339 UTC, so MAX() over the text column is
// the chronologically newest write.
const SQL_LATEST_MODIFICATION: &str = r#"
SELECT MAX(updated_at)
FROM (
  SELECT updated_at FROM teams
  UNION ALL
  SELECT updated_at FROM participants
)
"#;

/// Newest write time across both tables, or None while the store is empty.
/// Pollers compare successive values to decide whether to refetch the roster.
pub async fn latest_modification_time(pool: &SqlitePool) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar::<_, Option<String>>(SQL_LATEST_MODIFICATION)
        .fetch_one(pool)
        .await
}
