//! Alert dispatch for missed check-ins.
//!
//! DESIGN
//! ======
//! The countdown task talks to a `Notify` trait object, never to a concrete
//! dispatcher. The shipped implementation only logs: the demo has no real
//! delivery channel, and the seam keeps it that way without the timer
//! knowing. Tests substitute a recording mock.

use uuid::Uuid;

use crate::services::contacts::Contact;

/// Errors produced by alert dispatch.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The dispatch attempt failed.
    #[error("alert dispatch failed: {0}")]
    Dispatch(String),
}

/// Dispatcher invoked when a walk timer expires without a check-in.
#[async_trait::async_trait]
pub trait Notify: Send + Sync {
    /// Notify `contact` that the session's walker missed their check-in.
    async fn missed_check_in(&self, session_id: Uuid, contact: &Contact) -> Result<(), NotifyError>;
}

/// Simulated dispatcher: logs the alert and does nothing else.
pub struct SimulatedNotifier;

#[async_trait::async_trait]
impl Notify for SimulatedNotifier {
    async fn missed_check_in(&self, session_id: Uuid, contact: &Contact) -> Result<(), NotifyError> {
        tracing::warn!(
            %session_id,
            contact = %contact.name,
            phone = %contact.phone,
            "missed check-in alert dispatched (simulated, no real delivery)"
        );
        Ok(())
    }
}

// =============================================================================
// TEST SUPPORT
// =============================================================================


#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
