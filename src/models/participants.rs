/// A row of the `participants` table. A participant is identified by the
/// `(last_name, first_name)` pair; there is no surrogate id.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipantsRow {
    pub last_name: String,
    pub first_name: String,
    pub team: String,
    pub school: Option<String>,
    pub class_label: Option<String>,
    /// RFC3339 UTC, NULL until the first check-in.
    pub checked_in_at: Option<String>,
    pub extra: Option<String>,
    pub updated_at: String,
}
