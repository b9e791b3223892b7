use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::warn;

use crate::state::AppState;

/// GET /dash/: the dashboard page from the built frontend bundle.
pub async fn dash_handler(State(state): State<AppState>) -> Response {
    serve_page(&state, "dash.html").await
}

/// GET /kiosk/: a kiosk without a printer address in the URL prints to
/// itself, so redirect to the client's own address.
pub async fn kiosk_redirect(ConnectInfo(addr): ConnectInfo<SocketAddr>) -> Redirect {
    Redirect::to(&format!("/kiosk/{}", addr.ip()))
}

/// GET /kiosk/:printer_ip: the kiosk page, with the printer address baked
/// into the URL. Anything that is not an IP address is rejected with 422.
pub async fn kiosk_page(
    State(state): State<AppState>,
    Path(printer_ip): Path<String>,
) -> Response {
    if printer_ip.parse::<IpAddr>().is_err() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    serve_page(&state, "kiosk.html").await
}

async fn serve_page(state: &AppState, file: &str) -> Response {
    let path = PathBuf::from(&state.config.assets_dir).join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!("Static page {} unavailable: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
