/// A row of the `teams` table. `updated_at` is maintained by the store on
/// every write and is only used for change detection, never for logic.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamsRow {
    pub name: String,
    pub team_id: Option<String>,
    pub extra: Option<String>,
    pub updated_at: String,
}
