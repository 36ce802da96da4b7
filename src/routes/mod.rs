//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON API under `/api` and serves the static demo frontend as
//! the fallback. Handlers translate between HTTP and the service layer;
//! service errors come back as a status plus an inline `{"error": ...}`
//! body so the frontend can show the message in place.

pub mod chat;
pub mod contacts;
pub mod map;
pub mod phrases;
pub mod session;
pub mod timer;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Inline error body paired with a status code.
pub(crate) type ErrorResponse = (StatusCode, Json<serde_json::Value>);

pub(crate) fn error_body(status: StatusCode, message: impl std::fmt::Display) -> ErrorResponse {
    (status, Json(serde_json::json!({ "error": message.to_string() })))
}

/// Resolve the path to the static demo frontend.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

/// Full application router: API routes + static frontend fallback.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_service = ServeDir::new(static_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/session", post(session::create))
        .route("/api/session/{id}", get(session::snapshot))
        .route(
            "/api/session/{id}/page",
            get(session::current_page).put(session::select_page),
        )
        .route("/api/session/{id}/walk", get(timer::walk_status).post(timer::start_walk))
        .route("/api/session/{id}/walk/check-in", post(timer::check_in))
        .route("/api/session/{id}/walk/reset", post(timer::reset))
        .route("/api/session/{id}/walk/demo", put(timer::set_demo_mode))
        .route(
            "/api/session/{id}/contacts",
            get(contacts::list).post(contacts::add),
        )
        .route("/api/session/{id}/contacts/{contact_id}", delete(contacts::remove))
        .route(
            "/api/session/{id}/contacts/{contact_id}/primary",
            put(contacts::set_primary),
        )
        .route("/api/hotlines", get(contacts::hotlines))
        .route("/api/map/waypoints", get(map::waypoints))
        .route("/api/map/nearest", get(map::nearest))
        .route("/api/phrases", get(phrases::bank))
        .route("/api/phrases/random", get(phrases::random))
        .route("/api/session/{id}/chat", get(chat::history).post(chat::send))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .fallback_service(static_service)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
