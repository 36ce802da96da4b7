//! Exit-phrase routes.

use axum::extract::Query;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::phrases::{self, EXIT_PHRASES};

/// `GET /api/phrases` — the full phrase bank.
pub async fn bank() -> Json<Vec<&'static str>> {
    Json(EXIT_PHRASES.to_vec())
}

#[derive(Deserialize)]
pub struct RandomQuery {
    /// Optional seed; a fixed seed always yields the same phrase.
    pub seed: Option<u64>,
}

#[derive(Serialize)]
pub struct PhraseResponse {
    pub phrase: &'static str,
}

/// `GET /api/phrases/random` — pick a phrase.
pub async fn random(Query(query): Query<RandomQuery>) -> Json<PhraseResponse> {
    Json(PhraseResponse { phrase: phrases::pick(query.seed) })
}

#[cfg(test)]
#[path = "phrases_test.rs"]
mod tests;
