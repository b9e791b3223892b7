use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;

use crate::database::participants_repo;

/// Repeat check-ins inside this window are rejected rather than reapplied.
/// The window tolerates accidental double submissions from a flaky kiosk
/// client without locking out a legitimate re-check-in later in the day.
pub const COOLDOWN_MINUTES: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInStatus {
    Success,
    AlreadyCheckedIn,
    NotFound,
}

/// Mark a participant present at `now`.
///
/// Unknown identity leaves the store untouched and reports `NotFound`.
/// A check-in from the last `COOLDOWN_MINUTES` also leaves the row alone
/// and reports `AlreadyCheckedIn`. Anything older counts as a fresh
/// check-in again. Both rejections are expected outcomes, not errors.
pub async fn check_in(
    pool: &SqlitePool,
    last_name: &str,
    first_name: &str,
    now: DateTime<Utc>,
) -> sqlx::Result<CheckInStatus> {
    let stale_before = now - Duration::minutes(COOLDOWN_MINUTES);

    let claimed =
        participants_repo::claim_check_in(pool, last_name, first_name, now, stale_before).await?;
    if claimed > 0 {
        return Ok(CheckInStatus::Success);
    }

    // Nothing was claimed: distinguish a missing row from a recent check-in.
    match participants_repo::find_participant(pool, last_name, first_name).await? {
        Some(_) => Ok(CheckInStatus::AlreadyCheckedIn),
        None => Ok(CheckInStatus::NotFound),
    }
}
