//! Emergency contact routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::session::session_error_to_response;
use crate::routes::{ErrorResponse, error_body};
use crate::services::contacts::{self, Contact, ContactError, Hotline};
use crate::services::session::with_session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
    pub primary_id: Uuid,
}

/// `GET /api/session/:id/contacts` — list the directory.
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactsResponse>, ErrorResponse> {
    let response = with_session(&state, id, |s| ContactsResponse {
        contacts: s.contacts.entries().to_vec(),
        primary_id: s.contacts.primary_id(),
    })
    .await
    .map_err(session_error_to_response)?;
    Ok(Json(response))
}

#[derive(Deserialize)]
pub struct AddContactBody {
    pub name: String,
    pub phone: String,
}

/// `POST /api/session/:id/contacts` — add an entry. Empty fields are
/// rejected with an inline warning and the directory is unchanged.
pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AddContactBody>,
) -> Result<(StatusCode, Json<Contact>), ErrorResponse> {
    let added = with_session(&state, id, |s| s.contacts.add(&body.name, &body.phone).map(Contact::clone))
        .await
        .map_err(session_error_to_response)?
        .map_err(contact_error_to_response)?;
    Ok((StatusCode::CREATED, Json(added)))
}

/// `DELETE /api/session/:id/contacts/:contact_id` — remove an entry.
/// Removing the primary resets it to the default; the response carries the
/// post-delete primary so the frontend can re-render the selection.
pub async fn remove(
    State(state): State<AppState>,
    Path((id, contact_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ContactsResponse>, ErrorResponse> {
    let response = with_session(&state, id, |s| {
        s.contacts.remove(contact_id).map(|()| ContactsResponse {
            contacts: s.contacts.entries().to_vec(),
            primary_id: s.contacts.primary_id(),
        })
    })
    .await
    .map_err(session_error_to_response)?
    .map_err(contact_error_to_response)?;
    Ok(Json(response))
}

/// `PUT /api/session/:id/contacts/:contact_id/primary` — designate primary.
pub async fn set_primary(
    State(state): State<AppState>,
    Path((id, contact_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    with_session(&state, id, |s| s.contacts.set_primary(contact_id))
        .await
        .map_err(session_error_to_response)?
        .map_err(contact_error_to_response)?;
    Ok(Json(serde_json::json!({ "primary_id": contact_id })))
}

/// `GET /api/hotlines` — fixed campus hotlines with dialer links.
pub async fn hotlines() -> Json<Vec<Hotline>> {
    Json(contacts::hotlines())
}

pub(crate) fn contact_error_to_response(err: ContactError) -> ErrorResponse {
    let status = match err {
        ContactError::NotFound(_) => StatusCode::NOT_FOUND,
        ContactError::EmptyField { .. } => StatusCode::BAD_REQUEST,
        ContactError::PermanentEntry => StatusCode::CONFLICT,
    };
    error_body(status, err)
}

#[cfg(test)]
#[path = "contacts_test.rs"]
mod tests;
