//! Session and navigation routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::{ErrorResponse, error_body};
use crate::services::chatbot::ChatEntry;
use crate::services::contacts::{self, Contact, Hotline};
use crate::services::map::{self, Waypoint};
use crate::services::phrases::EXIT_PHRASES;
use crate::services::session::{self, SessionError};
use crate::services::timer::{MINUTE_OPTIONS, WalkStatus};
use crate::state::{AppState, Page, SessionState};

// =============================================================================
// PAGE RENDERING
// =============================================================================

/// Rendered content for exactly one page. The `page` tag names which one;
/// nothing from any other page is present.
#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home {
        title: &'static str,
        tagline: &'static str,
        safety_tips: Vec<&'static str>,
    },
    SafetyTimer {
        minute_options: [u32; 5],
        walk: WalkStatus,
    },
    BlueLights {
        waypoints: Vec<Waypoint>,
    },
    ExitPhrases {
        phrases: Vec<&'static str>,
    },
    EmergencyContacts {
        hotlines: Vec<Hotline>,
        contacts: Vec<Contact>,
        primary_id: Uuid,
    },
    Companion {
        history: Vec<ChatEntry>,
    },
}

/// Render one page from session state. Pure: no locking, no mutation.
pub(crate) fn render(page: Page, session: &SessionState) -> PageView {
    match page {
        Page::Home => PageView::Home {
            title: "NightWalk Safety",
            tagline: "Your companion for safer night walks at Berkeley.",
            safety_tips: vec![
                "Share your location with trusted friends.",
                "Stay in well-lit areas (like Sproul Plaza).",
                "Trust your instincts—if a situation feels wrong, leave immediately.",
            ],
        },
        Page::SafetyTimer => PageView::SafetyTimer {
            minute_options: MINUTE_OPTIONS,
            walk: WalkStatus::snapshot(session),
        },
        Page::BlueLights => PageView::BlueLights { waypoints: map::waypoints().to_vec() },
        Page::ExitPhrases => PageView::ExitPhrases { phrases: EXIT_PHRASES.to_vec() },
        Page::EmergencyContacts => PageView::EmergencyContacts {
            hotlines: contacts::hotlines(),
            contacts: session.contacts.entries().to_vec(),
            primary_id: session.contacts.primary_id(),
        },
        Page::Companion => PageView::Companion { history: session.chat_history.clone() },
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub id: Uuid,
    pub page: Page,
}

/// `POST /api/session` — create a session with default state.
pub async fn create(State(state): State<AppState>) -> (StatusCode, Json<SessionCreatedResponse>) {
    let id = session::create_session(&state).await;
    (StatusCode::CREATED, Json(SessionCreatedResponse { id, page: Page::Home }))
}

#[derive(Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub page: Page,
    pub walk: WalkStatus,
    pub contacts: Vec<Contact>,
    pub primary_contact_id: Uuid,
    pub chat_messages: usize,
}

/// `GET /api/session/:id` — full session snapshot.
pub async fn snapshot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ErrorResponse> {
    let snapshot = session::with_session(&state, id, |s| SessionSnapshot {
        id,
        page: s.page,
        walk: WalkStatus::snapshot(s),
        contacts: s.contacts.entries().to_vec(),
        primary_contact_id: s.contacts.primary_id(),
        chat_messages: s.chat_history.len(),
    })
    .await
    .map_err(session_error_to_response)?;
    Ok(Json(snapshot))
}

#[derive(Deserialize)]
pub struct SelectPageBody {
    pub page: Page,
}

/// `PUT /api/session/:id/page` — single-select navigation. Unknown page
/// names are rejected by deserialization before this handler runs.
pub async fn select_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SelectPageBody>,
) -> Result<Json<PageView>, ErrorResponse> {
    let view = session::with_session(&state, id, |s| {
        s.page = body.page;
        render(s.page, s)
    })
    .await
    .map_err(session_error_to_response)?;
    Ok(Json(view))
}

/// `GET /api/session/:id/page` — render the current page.
pub async fn current_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageView>, ErrorResponse> {
    let view = session::with_session(&state, id, |s| render(s.page, s))
        .await
        .map_err(session_error_to_response)?;
    Ok(Json(view))
}

pub(crate) fn session_error_to_response(err: SessionError) -> ErrorResponse {
    match err {
        SessionError::NotFound(_) => error_body(StatusCode::NOT_FOUND, err),
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
