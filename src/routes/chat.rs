//! Companion chat routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rate_limit::RateLimitError;
use crate::routes::session::session_error_to_response;
use crate::routes::{ErrorResponse, error_body};
use crate::services::chatbot::{self, ChatEntry, ChatRole};
use crate::services::session::with_session;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SendMessageBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReplyResponse {
    pub reply: &'static str,
}

/// `POST /api/session/:id/chat` — describe a situation, get canned advice.
pub async fn send(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SendMessageBody>,
) -> Result<Json<ChatReplyResponse>, ErrorResponse> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(error_body(StatusCode::BAD_REQUEST, "message must not be empty"));
    }

    state
        .chat_limiter
        .check_and_record(id)
        .map_err(rate_limit_error_to_response)?;

    let reply = chatbot::respond(message);
    with_session(&state, id, |s| {
        s.chat_history.push(ChatEntry::now(ChatRole::User, message));
        s.chat_history.push(ChatEntry::now(ChatRole::Companion, reply));
    })
    .await
    .map_err(session_error_to_response)?;

    Ok(Json(ChatReplyResponse { reply }))
}

/// `GET /api/session/:id/chat` — full transcript, oldest first.
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ChatEntry>>, ErrorResponse> {
    let transcript = with_session(&state, id, |s| s.chat_history.clone())
        .await
        .map_err(session_error_to_response)?;
    Ok(Json(transcript))
}

pub(crate) fn rate_limit_error_to_response(err: RateLimitError) -> ErrorResponse {
    match err {
        RateLimitError::PerSessionExceeded { .. } => error_body(StatusCode::TOO_MANY_REQUESTS, err),
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
