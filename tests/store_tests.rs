use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use kiosk::database::participants_repo::{self, NewParticipant};
use kiosk::database::{format_timestamp, teams_repo, StoreError};
use kiosk::services::checkin_service::{self, CheckInStatus};
use kiosk::services::roster_service;

mod common;

#[tokio::test]
async fn upsert_participant_requires_an_existing_team() {
    let (_dir, pool) = common::setup_test_db().await;

    let err = participants_repo::upsert_participant(
        &pool,
        &NewParticipant {
            last_name: "Ivanov",
            first_name: "Ivan",
            team: "Ghosts",
            school: None,
            class_label: None,
            extra: None,
        },
        Utc::now(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StoreError::UnknownTeam(team) if team == "Ghosts"));
}

#[tokio::test]
async fn upsert_team_reports_a_taken_team_id() {
    let (_dir, pool) = common::setup_test_db().await;
    let now = Utc::now();

    teams_repo::upsert_team(&pool, "Falcons", Some("ABC"), None, now)
        .await
        .unwrap();

    let err = teams_repo::upsert_team(&pool, "Eagles", Some("ABC"), None, now)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::TeamIdTaken(id) if id == "ABC"));

    // Re-upserting the holder of the id is not a clash.
    teams_repo::upsert_team(&pool, "Falcons", Some("ABC"), None, now)
        .await
        .unwrap();
}

#[tokio::test]
async fn register_entry_upserts_by_identity() {
    let (_dir, pool) = common::setup_test_db().await;

    roster_service::register_entry(
        &pool,
        None,
        NewParticipant {
            last_name: "Ivanov",
            first_name: "Ivan",
            team: "Falcons",
            school: Some("School 42"),
            class_label: Some("9A"),
            extra: None,
        },
    )
    .await
    .unwrap();

    // Same identity again: the row is replaced, not duplicated.
    roster_service::register_entry(
        &pool,
        None,
        NewParticipant {
            last_name: "Ivanov",
            first_name: "Ivan",
            team: "Falcons",
            school: Some("School 7"),
            class_label: Some("8B"),
            extra: None,
        },
    )
    .await
    .unwrap();

    let participants = participants_repo::list_participants(&pool).await.unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].school.as_deref(), Some("School 7"));
    assert_eq!(participants[0].class_label.as_deref(), Some("8B"));

    let teams = teams_repo::list_teams(&pool).await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "Falcons");
    assert!(teams[0].team_id.is_some());
}

#[tokio::test]
async fn reimporting_a_participant_resets_the_check_in() {
    let (_dir, pool) = common::setup_test_db().await;
    common::seed_participant(&pool, "Ivanov", "Ivan", "Falcons").await;

    let status = checkin_service::check_in(&pool, "Ivanov", "Ivan", Utc::now())
        .await
        .unwrap();
    assert_eq!(status, CheckInStatus::Success);

    common::seed_participant(&pool, "Ivanov", "Ivan", "Falcons").await;

    let row = participants_repo::find_participant(&pool, "Ivanov", "Ivan")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.checked_in_at, None);
}

#[tokio::test]
async fn latest_modification_time_starts_empty_and_never_goes_backwards() {
    let (_dir, pool) = common::setup_test_db().await;

    assert_eq!(roster_service::last_changed(&pool).await.unwrap(), None);

    let t1 = Utc.with_ymd_and_hms(2026, 5, 14, 9, 0, 0).unwrap();
    teams_repo::upsert_team(&pool, "Falcons", Some("ABC"), None, t1)
        .await
        .unwrap();
    assert_eq!(
        roster_service::last_changed(&pool).await.unwrap(),
        Some(format_timestamp(t1))
    );

    let t2 = t1 + Duration::minutes(1);
    participants_repo::upsert_participant(
        &pool,
        &NewParticipant {
            last_name: "Ivanov",
            first_name: "Ivan",
            team: "Falcons",
            school: None,
            class_label: None,
            extra: None,
        },
        t2,
    )
    .await
    .unwrap();

    let latest = roster_service::last_changed(&pool).await.unwrap();
    assert_eq!(latest, Some(format_timestamp(t2)));
    assert!(latest >= Some(format_timestamp(t1)));
}

#[tokio::test]
async fn roster_exposes_no_version_markers_and_round_trips_extra() {
    let (_dir, pool) = common::setup_test_db().await;

    roster_service::register_entry(
        &pool,
        Some(&json!({ "captain": "Ivan" })),
        NewParticipant {
            last_name: "Ivanov",
            first_name: "Ivan",
            team: "Falcons",
            school: Some("School 42"),
            class_label: Some("9A"),
            extra: Some(&json!({ "fav_color": "green", "height": 168 })),
        },
    )
    .await
    .unwrap();

    let roster = roster_service::full_roster(&pool).await.unwrap();
    let value = serde_json::to_value(&roster).unwrap();

    let team = &value["teams"][0];
    assert_eq!(team["name"], "Falcons");
    assert!(team.get("updated_at").is_none());
    assert_eq!(team["extra"], json!({ "captain": "Ivan" }));

    let participant = &value["participants"][0];
    assert_eq!(participant["last_name"], "Ivanov");
    assert_eq!(participant["team"], "Falcons");
    assert!(participant.get("updated_at").is_none());
    assert_eq!(
        participant["extra"],
        json!({ "fav_color": "green", "height": 168 })
    );
    assert_eq!(participant["checked_in_at"], json!(null));
}

#[tokio::test]
async fn find_participant_returns_none_for_missing_identity() {
    let (_dir, pool) = common::setup_test_db().await;

    let row = participants_repo::find_participant(&pool, "Petrov", "Pyotr")
        .await
        .unwrap();
    assert!(row.is_none());
}
