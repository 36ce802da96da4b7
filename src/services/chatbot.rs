//! Companion chatbot — keyword-matched canned advice.
//!
//! DESIGN
//! ======
//! The table is scanned in order and the first case-insensitive substring
//! match wins, so a given input always produces the same reply. Free text
//! that matches nothing falls back to a generic suggestion. There is no
//! model behind this; it is the canned-response bot from the demo.

use serde::Serialize;
use time::OffsetDateTime;

/// Reply used when no keyword matches.
pub const FALLBACK_ADVICE: &str = "Stay where it's well lit, keep your phone in hand, and head \
     toward the nearest blue light phone. If anything feels wrong, call UCPD at 510-642-3333.";

/// Keyword → advice, scanned in order. More urgent situations come first so
/// a message that mentions several things gets the most serious reply.
const KEYWORD_ADVICE: [(&str, &str); 8] = [
    (
        "emergency",
        "If you are in immediate danger call 911 right now. For campus police, call UCPD at 510-642-3333.",
    ),
    (
        "follow",
        "Cross the street, change your pace, and head into an open business or toward a blue light \
         phone. Call UCPD at 510-642-3333 if they keep following.",
    ),
    (
        "scared",
        "Trust your instincts and leave. Call a friend and stay on the line while you walk.",
    ),
    (
        "lost",
        "Stop somewhere well lit and check the blue light map. The night safety shuttle \
         (510-643-9255) can pick you up.",
    ),
    (
        "shuttle",
        "The night safety shuttle runs after dark — call 510-643-9255 or wait at a marked stop.",
    ),
    (
        "uber",
        "Check the plate and driver photo before you get in, share your trip with a friend, and \
         sit behind the driver.",
    ),
    (
        "party",
        "Keep your drink with you, stay with your group, and agree on a meeting point before you \
         split up.",
    ),
    (
        "dark",
        "Stick to lit routes like Sproul Plaza and avoid shortcuts through unlit areas.",
    ),
];

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Companion,
}

/// One transcript line.
#[derive(Debug, Clone, Serialize)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    pub ts: OffsetDateTime,
}

impl ChatEntry {
    #[must_use]
    pub fn now(role: ChatRole, text: impl Into<String>) -> Self {
        Self { role, text: text.into(), ts: OffsetDateTime::now_utc() }
    }
}

/// Advice for a free-text situation description.
#[must_use]
pub fn respond(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    for (keyword, advice) in &KEYWORD_ADVICE {
        if lowered.contains(keyword) {
            return advice;
        }
    }
    FALLBACK_ADVICE
}

#[cfg(test)]
#[path = "chatbot_test.rs"]
mod tests;
