use super::*;

#[tokio::test]
async fn waypoints_without_filter_returns_full_table() {
    let Json(list) = waypoints(Query(WaypointQuery { category: None })).await;
    assert_eq!(list.len(), map::waypoints().len());
}

#[tokio::test]
async fn waypoints_filter_narrows_to_category() {
    let Json(list) = waypoints(Query(WaypointQuery { category: Some(WaypointCategory::ShuttleStop) })).await;
    assert!(!list.is_empty());
    assert!(list.iter().all(|wp| wp.category == WaypointCategory::ShuttleStop));
}

#[tokio::test]
async fn nearest_from_campus_returns_a_waypoint() {
    let Json(found) = nearest(Query(NearestQuery { lat: 37.8732, lon: -122.2598, category: None }))
        .await
        .unwrap();
    assert_eq!(found.waypoint.label, "Memorial Glade");
    assert!(found.distance_meters < 1.0);
}

#[tokio::test]
async fn nearest_rejects_out_of_range_latitude() {
    let err = nearest(Query(NearestQuery { lat: 91.0, lon: 0.0, category: None }))
        .await
        .unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert!(err.1.0["error"].as_str().unwrap().contains("lat"));
}

#[tokio::test]
async fn nearest_rejects_out_of_range_longitude() {
    let err = nearest(Query(NearestQuery { lat: 0.0, lon: -200.0, category: None }))
        .await
        .unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
}

#[test]
fn category_query_parses_snake_case() {
    let query: WaypointQuery = serde_json::from_str(r#"{"category": "blue_light"}"#).unwrap();
    assert_eq!(query.category, Some(WaypointCategory::BlueLight));
}
