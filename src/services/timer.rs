//! Safety check-in timer.
//!
//! DESIGN
//! ======
//! The countdown is a spawned task that ticks once per displayed second and
//! decrements the session's remaining time under the state lock. Check-in
//! aborts the task; no request handler ever blocks for the walk duration.
//!
//! EXPIRY
//! ======
//! When the remaining time reaches zero the walk becomes `expired`, the
//! alert flag is set exactly once, and a dispatch for the primary contact is
//! handed to the notifier outside the lock.

use std::time::Instant;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::services::contacts::Contact;
use crate::state::{AppState, SessionState};

/// Walk lengths offered by the timer page, in minutes.
pub const MINUTE_OPTIONS: [u32; 5] = [1, 5, 10, 15, 30];

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("session {0} not found")]
    SessionNotFound(Uuid),

    #[error("a walk is already active")]
    AlreadyActive,

    #[error("no walk is active")]
    NotActive,

    #[error("walk length must be one of {MINUTE_OPTIONS:?} minutes, got {0}")]
    InvalidMinutes(u32),
}

// =============================================================================
// WALK STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkPhase {
    Idle,
    Active,
    Expired,
}

/// Per-session timer state. Owns the countdown task handle so cancellation
/// is an abort, and so the reaper can kill the task when it prunes the
/// session.
pub struct WalkState {
    pub phase: WalkPhase,
    pub total_secs: u64,
    pub remaining_secs: u64,
    pub alert_fired: bool,
    pub task: Option<JoinHandle<()>>,
}

impl WalkState {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: WalkPhase::Idle, total_secs: 0, remaining_secs: 0, alert_fired: false, task: None }
    }
}

impl Default for WalkState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire snapshot of a session's timer.
#[derive(Debug, Clone, Serialize)]
pub struct WalkStatus {
    pub phase: WalkPhase,
    pub total_secs: u64,
    pub remaining_secs: u64,
    pub alert_fired: bool,
    pub demo_mode: bool,
}

impl WalkStatus {
    #[must_use]
    pub fn snapshot(session: &SessionState) -> Self {
        Self {
            phase: session.walk.phase,
            total_secs: session.walk.total_secs,
            remaining_secs: session.walk.remaining_secs,
            alert_fired: session.walk.alert_fired,
            demo_mode: session.demo_mode,
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Start a walk. Conflicts if one is already active; an expired walk may be
/// restarted directly.
pub async fn start_walk(state: &AppState, session_id: Uuid, minutes: u32) -> Result<WalkStatus, TimerError> {
    if !MINUTE_OPTIONS.contains(&minutes) {
        return Err(TimerError::InvalidMinutes(minutes));
    }

    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(TimerError::SessionNotFound(session_id))?;
    session.last_seen = Instant::now();

    if session.walk.phase == WalkPhase::Active {
        return Err(TimerError::AlreadyActive);
    }

    let total = u64::from(minutes) * 60;
    session.walk.phase = WalkPhase::Active;
    session.walk.total_secs = total;
    session.walk.remaining_secs = total;
    session.walk.alert_fired = false;

    // A stale handle can only be a finished task, but abort anyway.
    if let Some(old) = session.walk.task.take() {
        old.abort();
    }

    let tick = if session.demo_mode { state.config.demo_tick } else { state.config.walk_tick };
    // Spawned under the write lock: the task cannot tick before the handle
    // is stored.
    let handle = tokio::spawn(run_countdown(state.clone(), session_id, tick));
    session.walk.task = Some(handle);

    info!(%session_id, minutes, demo_mode = session.demo_mode, "walk started");
    Ok(WalkStatus::snapshot(session))
}

/// Check in safe: cancel the countdown and return to idle.
pub async fn check_in(state: &AppState, session_id: Uuid) -> Result<WalkStatus, TimerError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(TimerError::SessionNotFound(session_id))?;
    session.last_seen = Instant::now();

    if session.walk.phase != WalkPhase::Active {
        return Err(TimerError::NotActive);
    }

    if let Some(task) = session.walk.task.take() {
        task.abort();
    }
    session.walk.phase = WalkPhase::Idle;
    session.walk.remaining_secs = 0;
    session.walk.alert_fired = false;

    info!(%session_id, "walker checked in safe; countdown cancelled");
    Ok(WalkStatus::snapshot(session))
}

/// Manual reset: clear the walk and the alert flag from any phase.
pub async fn reset_walk(state: &AppState, session_id: Uuid) -> Result<WalkStatus, TimerError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(TimerError::SessionNotFound(session_id))?;
    session.last_seen = Instant::now();

    if let Some(task) = session.walk.task.take() {
        task.abort();
    }
    session.walk = WalkState::new();

    info!(%session_id, "walk state reset");
    Ok(WalkStatus::snapshot(session))
}

/// Current timer snapshot.
pub async fn walk_status(state: &AppState, session_id: Uuid) -> Result<WalkStatus, TimerError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(TimerError::SessionNotFound(session_id))?;
    session.last_seen = Instant::now();
    Ok(WalkStatus::snapshot(session))
}

/// Toggle demo pacing. Applies to the next walk start, not a running one.
pub async fn set_demo_mode(state: &AppState, session_id: Uuid, enabled: bool) -> Result<bool, TimerError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(TimerError::SessionNotFound(session_id))?;
    session.last_seen = Instant::now();
    session.demo_mode = enabled;
    Ok(enabled)
}

// =============================================================================
// COUNTDOWN TASK
// =============================================================================

async fn run_countdown(state: AppState, session_id: Uuid, tick: tokio::time::Duration) {
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately; consume it so the first
    // decrement lands one tick after the start.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        // PHASE: DECREMENT UNDER LOCK
        // The displayed value strictly decreases; expiry is detected in the
        // same critical section so the alert can only fire once.
        let expired_primary: Option<Contact> = {
            let mut sessions = state.sessions.write().await;
            let Some(session) = sessions.get_mut(&session_id) else {
                return;
            };
            if session.walk.phase != WalkPhase::Active {
                return;
            }

            session.walk.remaining_secs = session.walk.remaining_secs.saturating_sub(1);
            if session.walk.remaining_secs > 0 {
                None
            } else {
                session.walk.phase = WalkPhase::Expired;
                session.walk.alert_fired = true;
                session.walk.task = None;
                Some(session.contacts.primary().clone())
            }
        };

        // PHASE: DISPATCH OUTSIDE LOCK
        if let Some(primary) = expired_primary {
            warn!(%session_id, contact = %primary.name, "walk timer expired without check-in");
            if let Err(e) = state.notifier.missed_check_in(session_id, &primary).await {
                error!(%session_id, error = %e, "alert dispatch failed");
            }
            return;
        }
    }
}

#[cfg(test)]
#[path = "timer_test.rs"]
mod tests;
