//! Session lifecycle.
//!
//! DESIGN
//! ======
//! Sessions are anonymous and volatile: a UUID key into the in-memory map,
//! created on first contact and pruned by a background reaper once idle past
//! the TTL. Mutating accessors go through `with_session`, which refreshes
//! the idle clock on every touch.

use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

use crate::state::{AppState, SessionState};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(Uuid),
}

/// Create a fresh session and return its ID.
pub async fn create_session(state: &AppState) -> Uuid {
    let id = Uuid::new_v4();
    state.sessions.write().await.insert(id, SessionState::new());
    info!(session_id = %id, "session created");
    id
}

/// Run `f` against a session's state under the write lock, refreshing its
/// idle clock.
pub async fn with_session<F, T>(state: &AppState, session_id: Uuid, f: F) -> Result<T, SessionError>
where
    F: FnOnce(&mut SessionState) -> T,
{
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(SessionError::NotFound(session_id))?;
    session.last_seen = Instant::now();
    Ok(f(session))
}

/// Spawn the background reaper. Returns a handle for shutdown.
pub fn spawn_session_reaper(state: AppState) -> JoinHandle<()> {
    let ttl = state.config.session_ttl;
    let sweep_interval = state.config.sweep_interval;
    info!(ttl_secs = ttl.as_secs(), sweep_secs = sweep_interval.as_secs(), "session reaper configured");
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(sweep_interval).await;
            prune_idle(&state, ttl).await;
        }
    })
}

/// Prune sessions idle longer than `ttl`. Returns how many were removed.
pub(crate) async fn prune_idle(state: &AppState, ttl: Duration) -> usize {
    let now = Instant::now();

    // PHASE: COLLECT + REMOVE UNDER LOCK
    let pruned = {
        let mut sessions = state.sessions.write().await;
        let expired: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, s)| now.duration_since(s.last_seen) > ttl)
            .map(|(id, _)| *id)
            .collect();

        let mut pruned = Vec::with_capacity(expired.len());
        for id in expired {
            if let Some(mut session) = sessions.remove(&id) {
                // EDGE: a pruned session may still have a live countdown.
                if let Some(task) = session.walk.task.take() {
                    task.abort();
                }
                pruned.push(id);
            }
        }
        pruned
    };

    // PHASE: DROP LIMITER COUNTERS LOCK-FREE
    for id in &pruned {
        state.chat_limiter.forget(*id);
    }

    if !pruned.is_empty() {
        info!(count = pruned.len(), "pruned idle sessions");
    }
    pruned.len()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
