//! Safety-timer routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::{ErrorResponse, error_body};
use crate::services::timer::{self, TimerError, WalkStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StartWalkBody {
    pub minutes: u32,
}

/// `POST /api/session/:id/walk` — start a walk countdown.
pub async fn start_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StartWalkBody>,
) -> Result<(StatusCode, Json<WalkStatus>), ErrorResponse> {
    let status = timer::start_walk(&state, id, body.minutes)
        .await
        .map_err(timer_error_to_response)?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// `GET /api/session/:id/walk` — current timer status.
pub async fn walk_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WalkStatus>, ErrorResponse> {
    let status = timer::walk_status(&state, id)
        .await
        .map_err(timer_error_to_response)?;
    Ok(Json(status))
}

/// `POST /api/session/:id/walk/check-in` — confirm safety, cancel countdown.
pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WalkStatus>, ErrorResponse> {
    let status = timer::check_in(&state, id)
        .await
        .map_err(timer_error_to_response)?;
    Ok(Json(status))
}

/// `POST /api/session/:id/walk/reset` — clear walk and alert state.
pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WalkStatus>, ErrorResponse> {
    let status = timer::reset_walk(&state, id)
        .await
        .map_err(timer_error_to_response)?;
    Ok(Json(status))
}

#[derive(Deserialize)]
pub struct DemoModeBody {
    pub enabled: bool,
}

/// `PUT /api/session/:id/walk/demo` — toggle demo pacing.
pub async fn set_demo_mode(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DemoModeBody>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    let enabled = timer::set_demo_mode(&state, id, body.enabled)
        .await
        .map_err(timer_error_to_response)?;
    Ok(Json(serde_json::json!({ "demo_mode": enabled })))
}

pub(crate) fn timer_error_to_response(err: TimerError) -> ErrorResponse {
    let status = match err {
        TimerError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        TimerError::AlreadyActive | TimerError::NotActive => StatusCode::CONFLICT,
        TimerError::InvalidMinutes(_) => StatusCode::BAD_REQUEST,
    };
    error_body(status, err)
}

#[cfg(test)]
#[path = "timer_test.rs"]
mod tests;
