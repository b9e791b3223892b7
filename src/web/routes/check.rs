use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::services::checkin_service::{self, CheckInStatus};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckInBody {
    pub last_name: String,
    pub first_name: String,
}

/// POST /api/check. The kiosk sends the name pair it scanned; the three
/// expected outcomes map to 200, 403 and 404.
pub async fn check_in_handler(
    State(state): State<AppState>,
    Json(body): Json<CheckInBody>,
) -> impl IntoResponse {
    let result = checkin_service::check_in(
        &state.pool,
        &body.last_name,
        &body.first_name,
        Utc::now(),
    )
    .await;

    match result {
        Ok(CheckInStatus::Success) => (StatusCode::OK, Json(json!({ "status": "success" }))),
        Ok(CheckInStatus::AlreadyCheckedIn) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "status": "already_checked_in", "message": "Already registered." })),
        ),
        Ok(CheckInStatus::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "not_found", "message": "No such participant." })),
        ),
        Err(e) => {
            warn!(
                "Check-in failed for {} {}: {}",
                body.last_name, body.first_name, e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error" })),
            )
        }
    }
}
