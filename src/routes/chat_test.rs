use super::*;

use crate::services::chatbot::FALLBACK_ADVICE;
use crate::state::test_helpers::{seed_session, test_app_state};

#[tokio::test]
async fn send_appends_both_transcript_lines() {
    let state = test_app_state();
    let id = seed_session(&state).await;

    let Json(response) = send(
        State(state.clone()),
        Path(id),
        Json(SendMessageBody { message: "someone is following me".into() }),
    )
    .await
    .unwrap();
    assert!(response.reply.contains("blue light"));

    let Json(transcript) = history(State(state), Path(id)).await.unwrap();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, ChatRole::User);
    assert_eq!(transcript[1].role, ChatRole::Companion);
    assert_eq!(transcript[1].text, response.reply);
}

#[tokio::test]
async fn empty_message_is_rejected_inline() {
    let state = test_app_state();
    let id = seed_session(&state).await;

    let err = send(
        State(state.clone()),
        Path(id),
        Json(SendMessageBody { message: "   ".into() }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert!(err.1.0["error"].as_str().unwrap().contains("empty"));

    let Json(transcript) = history(State(state), Path(id)).await.unwrap();
    assert!(transcript.is_empty());
}

#[tokio::test]
async fn unmatched_message_gets_fallback_reply() {
    let state = test_app_state();
    let id = seed_session(&state).await;

    let Json(response) = send(
        State(state),
        Path(id),
        Json(SendMessageBody { message: "zzz qqq".into() }),
    )
    .await
    .unwrap();
    assert_eq!(response.reply, FALLBACK_ADVICE);
}

#[tokio::test]
async fn unknown_session_is_404() {
    let state = test_app_state();
    let err = send(
        State(state),
        Path(Uuid::new_v4()),
        Json(SendMessageBody { message: "hello".into() }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[test]
fn rate_limit_error_maps_to_429() {
    let (status, body) =
        rate_limit_error_to_response(RateLimitError::PerSessionExceeded { limit: 20, window_secs: 60 });
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body.0["error"].as_str().unwrap().contains("rate limit"));
}
