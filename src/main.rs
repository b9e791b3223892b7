use axum::{
    middleware,
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use dotenvy::dotenv;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use std::net::SocketAddr;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use kiosk::config::Config;
use kiosk::database;
use kiosk::state::AppState;
use kiosk::web::middleware::auth as auth_middleware;
use kiosk::web::routes::{check, db, frontend};

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Connect to the database
    let config = Config::load();
    let pool = database::connect(&config)
        .await
        .expect("Cannot connect to the database");
    database::schema::ensure_schema(&pool)
        .await
        .expect("Cannot create the database schema");

    let state = AppState::new(pool, config);

    // 3. API routes under one basic-auth layer
    let api_routes = Router::new()
        .route("/api/check", post(check::check_in_handler))
        .route(
            "/api/db",
            get(db::full_db_handler).post(db::last_changed_handler),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_basic_auth,
        ));

    // The kiosk and dashboard are served from another origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    // 4. Build the whole application
    let app = Router::new()
        // Frontend routes
        .route("/", get(|| async { Redirect::to("/dash/") }))
        .route("/dash/", get(frontend::dash_handler))
        .route("/kiosk/", get(frontend::kiosk_redirect))
        .route("/kiosk/:printer_ip", get(frontend::kiosk_page))
        // API routes
        .merge(api_routes)
        // Static files
        .nest_service(
            "/assets",
            get_service(ServeDir::new(&state.config.assets_dir)),
        )
        // Layers
        .layer(cors)
        .layer(CatchPanicLayer::new())
        // State
        .with_state(state.clone());

    // 5. Start the server
    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Cannot bind the listener");

    info!("Kiosk backend running on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    state.pool.close().await;
    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
