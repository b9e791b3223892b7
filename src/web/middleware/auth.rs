use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose, Engine as _};

use crate::state::AppState;

/// Gate for every `/api` route: HTTP basic auth against the single
/// configured credential pair shared by the kiosk and dashboard clients.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|hv| hv.to_str().ok())
        .and_then(parse_basic_credentials)
        .is_some_and(|(login, password)| {
            login == state.config.api_login && password == state.config.api_password
        });

    if authorized {
        return next.run(request).await;
    }

    Response::builder()
        .status(401)
        .header(header::WWW_AUTHENTICATE, "Basic realm=\"kiosk\"")
        .body(axum::body::Body::from("Unauthorized"))
        .unwrap()
}

fn parse_basic_credentials(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (login, password) = decoded.split_once(':')?;
    Some((login.to_string(), password.to_string()))
}
