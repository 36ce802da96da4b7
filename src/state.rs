//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the session map, the alert notifier, and the chat rate limiter.
//! Every browser session is an independent `SessionState`: an explicit state
//! object passed through handlers instead of ambient globals.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::rate_limit::RateLimiter;
use crate::services::chatbot::ChatEntry;
use crate::services::contacts::ContactDirectory;
use crate::services::notify::Notify;
use crate::services::timer::WalkState;

// =============================================================================
// NAVIGATION
// =============================================================================

/// Sidebar navigation target. Exactly one page is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    SafetyTimer,
    BlueLights,
    ExitPhrases,
    EmergencyContacts,
    Companion,
}

impl Page {
    /// All six navigation targets, in sidebar order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::SafetyTimer,
        Page::BlueLights,
        Page::ExitPhrases,
        Page::EmergencyContacts,
        Page::Companion,
    ];
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// Per-session live state. Volatile: nothing survives a process restart.
pub struct SessionState {
    /// Currently selected page.
    pub page: Page,
    /// Safety-timer state, including the countdown task handle.
    pub walk: WalkState,
    /// Emergency contact directory, seeded with the campus-police default.
    pub contacts: ContactDirectory,
    /// Companion chat transcript, oldest first.
    pub chat_history: Vec<ChatEntry>,
    /// Demo-mode toggle: compresses countdown pacing for the next walk.
    pub demo_mode: bool,
    /// Last interaction time, used by the session reaper.
    pub last_seen: Instant,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            walk: WalkState::new(),
            contacts: ContactDirectory::new(),
            chat_history: Vec::new(),
            demo_mode: false,
            last_seen: Instant::now(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, SessionState>>>,
    /// Alert dispatcher invoked on a missed check-in.
    pub notifier: Arc<dyn Notify>,
    /// In-memory rate limiter for companion chat messages.
    pub chat_limiter: RateLimiter,
    pub config: AppConfig,
}

impl AppState {
    #[must_use]
    pub fn new(notifier: Arc<dyn Notify>, config: AppConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            notifier,
            chat_limiter: RateLimiter::new(),
            config,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
