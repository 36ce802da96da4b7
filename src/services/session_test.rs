use super::*;

use crate::state::test_helpers::test_app_state;
use crate::state::Page;

// =============================================================================
// create / with_session
// =============================================================================

#[tokio::test]
async fn create_session_inserts_defaults() {
    let state = test_app_state();
    let id = create_session(&state).await;
    let page = with_session(&state, id, |s| s.page).await.unwrap();
    assert_eq!(page, Page::Home);
}

#[tokio::test]
async fn with_session_unknown_id_is_not_found() {
    let state = test_app_state();
    let err = with_session(&state, Uuid::new_v4(), |_| ()).await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)));
}

#[tokio::test]
async fn with_session_applies_mutation() {
    let state = test_app_state();
    let id = create_session(&state).await;
    with_session(&state, id, |s| s.page = Page::Companion).await.unwrap();
    let page = with_session(&state, id, |s| s.page).await.unwrap();
    assert_eq!(page, Page::Companion);
}

#[tokio::test]
async fn sessions_are_independent() {
    let state = test_app_state();
    let a = create_session(&state).await;
    let b = create_session(&state).await;
    with_session(&state, a, |s| s.page = Page::BlueLights).await.unwrap();
    let page_b = with_session(&state, b, |s| s.page).await.unwrap();
    assert_eq!(page_b, Page::Home);
}

// =============================================================================
// prune_idle
// =============================================================================

#[tokio::test]
async fn prune_removes_only_idle_sessions() {
    let state = test_app_state();
    let fresh = create_session(&state).await;
    let stale = create_session(&state).await;

    let ttl = Duration::from_secs(5);
    {
        let mut sessions = state.sessions.write().await;
        sessions.get_mut(&stale).unwrap().last_seen = Instant::now() - Duration::from_secs(10);
    }

    let removed = prune_idle(&state, ttl).await;
    assert_eq!(removed, 1);

    let sessions = state.sessions.read().await;
    assert!(sessions.contains_key(&fresh));
    assert!(!sessions.contains_key(&stale));
}

#[tokio::test]
async fn prune_with_no_idle_sessions_removes_nothing() {
    let state = test_app_state();
    create_session(&state).await;
    let removed = prune_idle(&state, Duration::from_secs(3600)).await;
    assert_eq!(removed, 0);
    assert_eq!(state.sessions.read().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn prune_aborts_a_live_countdown() {
    let state = test_app_state();
    let id = create_session(&state).await;
    crate::services::timer::start_walk(&state, id, 1).await.unwrap();

    {
        let mut sessions = state.sessions.write().await;
        sessions.get_mut(&id).unwrap().last_seen = Instant::now() - Duration::from_secs(10);
    }
    let removed = prune_idle(&state, Duration::from_secs(5)).await;
    assert_eq!(removed, 1);
    assert!(state.sessions.read().await.is_empty());
}

#[tokio::test]
async fn prune_frees_chat_rate_counters() {
    let state = test_app_state();
    let id = create_session(&state).await;
    state.chat_limiter.check_and_record(id).unwrap();

    {
        let mut sessions = state.sessions.write().await;
        sessions.get_mut(&id).unwrap().last_seen = Instant::now() - Duration::from_secs(10);
    }
    let removed = prune_idle(&state, Duration::from_secs(5)).await;
    assert_eq!(removed, 1);
    // A recreated session with the same ID would start with a clean window;
    // we can at least assert the limiter accepts the ID again immediately.
    assert!(state.chat_limiter.check_and_record(id).is_ok());
}
