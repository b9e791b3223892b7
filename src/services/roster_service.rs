use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::participants_repo::{self, NewParticipant};
use crate::database::{last_changed_repo, teams_repo, StoreError};
use crate::models::{ParticipantsRow, TeamsRow};

/// How often a clashing team id is regenerated before giving up.
const TEAM_ID_ATTEMPTS: usize = 5;

#[derive(Debug, Serialize)]
pub struct TeamView {
    pub name: String,
    pub team_id: Option<String>,
    pub extra: Value,
}

#[derive(Debug, Serialize)]
pub struct ParticipantView {
    pub last_name: String,
    pub first_name: String,
    pub team: String,
    pub school: Option<String>,
    pub class_label: Option<String>,
    pub checked_in_at: Option<String>,
    pub extra: Value,
}

#[derive(Debug, Serialize)]
pub struct RosterView {
    pub teams: Vec<TeamView>,
    pub participants: Vec<ParticipantView>,
}

/// Everything the dashboard shows, without the internal `updated_at` markers.
pub async fn full_roster(pool: &SqlitePool) -> sqlx::Result<RosterView> {
    let teams = teams_repo::list_teams(pool).await?;
    let participants = participants_repo::list_participants(pool).await?;
    Ok(RosterView {
        teams: teams.into_iter().map(team_view).collect(),
        participants: participants.into_iter().map(participant_view).collect(),
    })
}

pub async fn last_changed(pool: &SqlitePool) -> sqlx::Result<Option<String>> {
    last_changed_repo::latest_modification_time(pool).await
}

/// Store-side entry point for the bulk-import collaborator: upsert the team
/// row, then the participant row. The team id is assigned independently of
/// the name; when a concurrent import grabbed the same id first, retry with
/// a fresh one.
pub async fn register_entry(
    pool: &SqlitePool,
    team_extra: Option<&Value>,
    participant: NewParticipant<'_>,
) -> Result<(), StoreError> {
    let now = Utc::now();

    let mut attempt = 0;
    loop {
        let team_id = short_team_id();
        match teams_repo::upsert_team(pool, participant.team, Some(team_id.as_str()), team_extra, now)
            .await
        {
            Ok(()) => break,
            Err(StoreError::TeamIdTaken(_)) if attempt + 1 < TEAM_ID_ATTEMPTS => attempt += 1,
            Err(e) => return Err(e),
        }
    }

    participants_repo::upsert_participant(pool, &participant, now).await
}

fn short_team_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_uppercase()
}

fn team_view(row: TeamsRow) -> TeamView {
    TeamView {
        extra: parse_extra(row.extra.as_deref()),
        name: row.name,
        team_id: row.team_id,
    }
}

fn participant_view(row: ParticipantsRow) -> ParticipantView {
    ParticipantView {
        extra: parse_extra(row.extra.as_deref()),
        last_name: row.last_name,
        first_name: row.first_name,
        team: row.team,
        school: row.school,
        class_label: row.class_label,
        checked_in_at: row.checked_in_at,
    }
}

fn parse_extra(raw: Option<&str>) -> Value {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Value::Null;
    };
    serde_json::from_str(raw).unwrap_or(Value::Null)
}
