//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session-state mutation and the fixed data tables so
//! route handlers can stay focused on extraction, validation, and error
//! translation.

pub mod chatbot;
pub mod contacts;
pub mod map;
pub mod notify;
pub mod phrases;
pub mod session;
pub mod timer;
