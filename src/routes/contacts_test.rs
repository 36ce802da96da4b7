use super::*;

use crate::state::test_helpers::{seed_session, test_app_state};

// =============================================================================
// error mapping
// =============================================================================

#[test]
fn empty_field_maps_to_400_with_field_name() {
    let (status, body) = contact_error_to_response(ContactError::EmptyField { field: "phone" });
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.0["error"].as_str().unwrap().contains("phone"));
}

#[test]
fn unknown_contact_maps_to_404() {
    let (status, _) = contact_error_to_response(ContactError::NotFound(Uuid::nil()));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn permanent_entry_maps_to_409() {
    let (status, _) = contact_error_to_response(ContactError::PermanentEntry);
    assert_eq!(status, StatusCode::CONFLICT);
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn add_then_list_round_trip() {
    let state = test_app_state();
    let id = seed_session(&state).await;

    let (status, Json(added)) = add(
        State(state.clone()),
        Path(id),
        Json(AddContactBody { name: "Mom".into(), phone: "555-0101".into() }),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(added.name, "Mom");

    let Json(listed) = list(State(state), Path(id)).await.unwrap();
    assert_eq!(listed.contacts.len(), 2);
}

#[tokio::test]
async fn add_empty_name_is_rejected_inline() {
    let state = test_app_state();
    let id = seed_session(&state).await;

    let err = add(
        State(state.clone()),
        Path(id),
        Json(AddContactBody { name: "  ".into(), phone: "555-0101".into() }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);

    let Json(listed) = list(State(state), Path(id)).await.unwrap();
    assert_eq!(listed.contacts.len(), 1);
}

#[tokio::test]
async fn removing_primary_response_points_back_at_default() {
    let state = test_app_state();
    let id = seed_session(&state).await;

    let (_, Json(mom)) = add(
        State(state.clone()),
        Path(id),
        Json(AddContactBody { name: "Mom".into(), phone: "555-0101".into() }),
    )
    .await
    .unwrap();
    set_primary(State(state.clone()), Path((id, mom.id))).await.unwrap();

    let Json(after) = remove(State(state.clone()), Path((id, mom.id))).await.unwrap();
    assert_eq!(after.contacts.len(), 1);
    assert_eq!(after.primary_id, after.contacts[0].id);
    assert_eq!(after.contacts[0].name, crate::services::contacts::DEFAULT_CONTACT_NAME);
}

#[tokio::test]
async fn unknown_session_is_404() {
    let state = test_app_state();
    let err = list(State(state), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hotlines_handler_returns_three_lines() {
    let Json(lines) = hotlines().await;
    assert_eq!(lines.len(), 3);
}
