use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

use crate::services::roster_service;
use crate::state::AppState;

/// GET /api/db: the full roster for the dashboard.
pub async fn full_db_handler(State(state): State<AppState>) -> impl IntoResponse {
    match roster_service::full_roster(&state.pool).await {
        Ok(roster) => Json(roster).into_response(),
        Err(e) => {
            warn!("Roster load failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST /api/db: when the database last changed. Pollers compare the
/// returned string against the previous one to decide whether to refetch.
/// An empty store yields an empty string as a sensible dummy value.
pub async fn last_changed_handler(State(state): State<AppState>) -> impl IntoResponse {
    match roster_service::last_changed(&state.pool).await {
        Ok(ts) => Json(json!({ "last_changed": ts.unwrap_or_default() })).into_response(),
        Err(e) => {
            warn!("Last-changed query failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
