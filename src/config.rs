//! Runtime tuning knobs loaded from environment variables.
//!
//! DESIGN
//! ======
//! Every knob has a compiled-in default so the server runs with no
//! configuration at all. Values that fail to parse fall back to the default
//! rather than aborting startup.

use std::time::Duration;

const DEFAULT_SESSION_TTL_SECS: u64 = 1800;
const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60;
const DEFAULT_WALK_TICK_MS: u64 = 1000;
const DEFAULT_DEMO_TICK_MS: u64 = 100;

/// Application-wide configuration, loaded once at startup and shared through
/// `AppState`.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// How long an idle session survives before the reaper prunes it.
    pub session_ttl: Duration,
    /// How often the reaper scans for idle sessions.
    pub sweep_interval: Duration,
    /// Countdown tick interval for a normal walk (one displayed second).
    pub walk_tick: Duration,
    /// Countdown tick interval with demo mode on. Pacing only: the displayed
    /// second values are identical in both modes.
    pub demo_tick: Duration,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            session_ttl: Duration::from_secs(env_parse("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)),
            sweep_interval: Duration::from_secs(env_parse(
                "SESSION_SWEEP_INTERVAL_SECS",
                DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
            )),
            walk_tick: Duration::from_millis(env_parse("WALK_TICK_MS", DEFAULT_WALK_TICK_MS)),
            demo_tick: Duration::from_millis(env_parse("DEMO_TICK_MS", DEFAULT_DEMO_TICK_MS)),
        }
    }
}

/// Parse an environment variable, falling back to `default` when the variable
/// is unset or unparseable.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
