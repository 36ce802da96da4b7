//! Blue-light map routes.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::routes::{ErrorResponse, error_body};
use crate::services::map::{self, Waypoint, WaypointCategory};

#[derive(Deserialize)]
pub struct WaypointQuery {
    pub category: Option<WaypointCategory>,
}

/// `GET /api/map/waypoints` — the fixed waypoint table, optionally filtered.
pub async fn waypoints(Query(query): Query<WaypointQuery>) -> Json<Vec<Waypoint>> {
    Json(map::by_category(query.category).into_iter().cloned().collect())
}

#[derive(Deserialize)]
pub struct NearestQuery {
    pub lat: f64,
    pub lon: f64,
    pub category: Option<WaypointCategory>,
}

#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub waypoint: Waypoint,
    pub distance_meters: f64,
}

/// `GET /api/map/nearest` — nearest waypoint to a coordinate.
pub async fn nearest(Query(query): Query<NearestQuery>) -> Result<Json<NearestResponse>, ErrorResponse> {
    if !(-90.0..=90.0).contains(&query.lat) {
        return Err(error_body(StatusCode::BAD_REQUEST, "lat must be within -90..=90"));
    }
    if !(-180.0..=180.0).contains(&query.lon) {
        return Err(error_body(StatusCode::BAD_REQUEST, "lon must be within -180..=180"));
    }

    let (waypoint, distance_meters) = map::nearest(query.lat, query.lon, query.category)
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, "no waypoint matches that category"))?;
    Ok(Json(NearestResponse { waypoint: waypoint.clone(), distance_meters }))
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
