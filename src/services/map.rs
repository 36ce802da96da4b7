//! Campus safety waypoints.
//!
//! DESIGN
//! ======
//! A fixed coordinate table for blue-light phones, night-shuttle stops, and
//! the UCPD station. Read-only; lookups are linear scans over the table.
//! Nearest-waypoint is a point lookup by great-circle distance, not routing.

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointCategory {
    BlueLight,
    ShuttleStop,
    PoliceStation,
}

/// A single map pin.
#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub label: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub category: WaypointCategory,
}

static WAYPOINTS: [Waypoint; 10] = [
    Waypoint { label: "Sproul Plaza", lat: 37.8699, lon: -122.2590, category: WaypointCategory::BlueLight },
    Waypoint { label: "Memorial Glade", lat: 37.8732, lon: -122.2598, category: WaypointCategory::BlueLight },
    Waypoint { label: "West Circle", lat: 37.8722, lon: -122.2650, category: WaypointCategory::BlueLight },
    Waypoint { label: "Evans Hall", lat: 37.8736, lon: -122.2578, category: WaypointCategory::BlueLight },
    Waypoint { label: "North Gate", lat: 37.8754, lon: -122.2596, category: WaypointCategory::BlueLight },
    Waypoint { label: "Recreational Sports Facility", lat: 37.8686, lon: -122.2626, category: WaypointCategory::BlueLight },
    Waypoint { label: "Moffitt Library Stop", lat: 37.8726, lon: -122.2608, category: WaypointCategory::ShuttleStop },
    Waypoint { label: "Downtown Berkeley BART Stop", lat: 37.8701, lon: -122.2681, category: WaypointCategory::ShuttleStop },
    Waypoint { label: "Unit 1 Residence Halls Stop", lat: 37.8679, lon: -122.2555, category: WaypointCategory::ShuttleStop },
    Waypoint { label: "UCPD Station (Sproul Hall)", lat: 37.8692, lon: -122.2588, category: WaypointCategory::PoliceStation },
];

/// The full waypoint table.
#[must_use]
pub fn waypoints() -> &'static [Waypoint] {
    &WAYPOINTS
}

/// Waypoints matching `category`, or all of them when `None`.
#[must_use]
pub fn by_category(category: Option<WaypointCategory>) -> Vec<&'static Waypoint> {
    WAYPOINTS
        .iter()
        .filter(|wp| category.is_none_or(|c| wp.category == c))
        .collect()
}

/// Nearest waypoint to (`lat`, `lon`) by great-circle distance, optionally
/// restricted to one category. Returns the waypoint and the distance in
/// meters. `None` only when the category filter matches nothing.
#[must_use]
pub fn nearest(lat: f64, lon: f64, category: Option<WaypointCategory>) -> Option<(&'static Waypoint, f64)> {
    let mut best: Option<(&'static Waypoint, f64)> = None;
    for wp in by_category(category) {
        let d = haversine_meters(lat, lon, wp.lat, wp.lon);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((wp, d));
        }
    }
    best
}

/// Great-circle distance between two coordinates in meters.
#[must_use]
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
