//! Exit phrase bank.
//!
//! Canned polite-exit lines. Picks go through an explicit RNG so a seeded
//! request is fully deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The fixed excuse bank.
pub const EXIT_PHRASES: [&str; 5] = [
    "My roommate just texted—she's locked out, I need to go!",
    "My mom is calling, it's urgent—I have to take this.",
    "My Uber is here early, I have to catch it!",
    "I have a video call starting in 5 minutes, gotta run!",
    "I think I left my stove on, I need to rush back.",
];

/// Pick one phrase. A seed makes the pick deterministic; without one the
/// thread RNG is used.
#[must_use]
pub fn pick(seed: Option<u64>) -> &'static str {
    match seed {
        Some(seed) => pick_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => pick_with_rng(&mut rand::rng()),
    }
}

fn pick_with_rng<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EXIT_PHRASES[rng.random_range(0..EXIT_PHRASES.len())]
}

#[cfg(test)]
#[path = "phrases_test.rs"]
mod tests;
