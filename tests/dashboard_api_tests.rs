// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end API tests against a mock Strava server.

use activity_dashboard::config::Config;
use activity_dashboard::routes::create_router;
use activity_dashboard::AppState;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app.oneshot(get(uri, common::GOOD_TOKEN)).await.unwrap();
    let status = response.status();
    (status, common::body_json(response).await)
}

fn ids(cards: &Value) -> Vec<u64> {
    cards
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["activity_id"].as_u64().or_else(|| c["id"].as_u64()).unwrap())
        .collect()
}

#[tokio::test]
async fn test_dashboard_ride_tab() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let (status, body) = get_json(app, "/api/dashboard?tab=Ride&athlete_id=42").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["tab"], "Ride");
    assert_eq!(body["tabs"], serde_json::json!(["All", "Run", "Ride", "Walk"]));
    assert_eq!(body["units"], "metric");

    // Best efforts are computed over the whole feed, not the selected tab
    let run = &body["run_highlights"]["cards"];
    assert_eq!(ids(run), vec![1009, 1001]);
    assert_eq!(run[0]["value"], "10.00 km");
    assert_eq!(run[1]["metric"], "fastest_pace");
    assert_eq!(run[1]["value"], "5:30 /km");

    let ride = &body["ride_highlights"]["cards"];
    assert_eq!(ids(ride), vec![1003, 1010]);
    assert_eq!(ride[0]["value"], "24.50 km");
    assert_eq!(ride[1]["metric"], "top_speed");
    assert_eq!(ride[1]["value"], "57.6 km/h");

    let history = &body["history"];
    assert_eq!(history["title"], "Ride history");
    assert_eq!(ids(&history["activities"]), vec![1002, 1003, 1005, 1008, 1010]);
    assert!(history["empty_message"].is_null());

    let stats = &body["athlete_stats"];
    assert_eq!(stats["recent_runs"]["count"], 2);
    assert_eq!(stats["recent_runs"]["distance"], "15.00 km");
    assert_eq!(stats["recent_runs"]["moving_time"], "1h 22m");
    assert_eq!(stats["all_time_runs"]["count"], 87);
}

#[tokio::test]
async fn test_dashboard_leaderboards() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let (status, body) = get_json(app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    let boards = body["leaderboards"].as_array().unwrap();
    assert_eq!(boards.len(), 3);

    assert_eq!(boards[0]["min_km"], 5);
    assert_eq!(boards[0]["title"], "Best 5K (Avg Speed)");
    // 1003 and 1010 tie on average speed and keep feed order
    assert_eq!(ids(&boards[0]["entries"]), vec![1005, 1003, 1010]);
    assert_eq!(boards[0]["entries"][0]["medal"], "gold");
    assert_eq!(boards[0]["entries"][1]["medal"], "silver");
    assert_eq!(boards[0]["entries"][2]["medal"], "bronze");
    assert_eq!(boards[0]["entries"][0]["average_speed"], "25.9 km/h");

    assert_eq!(ids(&boards[1]["entries"]), vec![1005, 1003, 1010]);

    // 20 km threshold is inclusive: the 20000 m ride qualifies
    assert_eq!(ids(&boards[2]["entries"]), vec![1003, 1010]);
    assert!(boards[2]["empty_message"].is_null());
}

#[tokio::test]
async fn test_dashboard_all_tab_and_missing_fields() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let (status, body) = get_json(app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tab"], "All");
    assert!(body["athlete_stats"].is_null());

    let history = &body["history"];
    assert_eq!(history["title"], "All activities");
    assert_eq!(history["activities"].as_array().unwrap().len(), 10);

    // Strength session: Strava sends null distance and speed
    let leg_day = &history["activities"][6];
    assert_eq!(leg_day["id"], 1007);
    assert_eq!(leg_day["badge"], "dumbbell");
    assert_eq!(leg_day["distance"], "0.00 km");
    assert_eq!(leg_day["pace"], "-");
    assert_eq!(leg_day["moving_time"], "0h 50m");
    assert_eq!(leg_day["date"], "2025-05-26");
}

#[tokio::test]
async fn test_dashboard_unknown_tab_is_empty() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let (status, body) = get_json(app, "/api/dashboard?tab=Yoga").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tab"], "Yoga");
    assert_eq!(body["history"]["activities"], serde_json::json!([]));
    assert_eq!(
        body["history"]["empty_message"],
        "No Yoga activities in recent history."
    );
    // Highlights do not depend on the tab
    assert!(!body["ride_highlights"].is_null());
}

#[tokio::test]
async fn test_dashboard_imperial_units() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let (status, body) = get_json(app, "/api/dashboard?units=Imperial").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["units"], "imperial");
    assert_eq!(body["ride_highlights"]["cards"][0]["value"], "15.22 mi");
    assert!(body["run_highlights"]["cards"][1]["value"]
        .as_str()
        .unwrap()
        .ends_with(" /mi"));
}

#[tokio::test]
async fn test_dashboard_stats_failure_still_renders() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let uri = format!("/api/dashboard?athlete_id={}", common::BROKEN_STATS_ATHLETE);
    let (status, body) = get_json(app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["athlete_stats"].is_null());
    assert_eq!(body["history"]["activities"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_dashboard_rate_limited() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let response = app
        .oneshot(get("/api/dashboard", common::RATE_LIMITED_TOKEN))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "strava_rate_limited");
}

#[tokio::test]
async fn test_activities_per_page_limits_feed() {
    let base_url = common::spawn_mock_strava().await;
    let config = Config {
        strava_api_base_url: base_url,
        activities_per_page: 3,
        ..Config::test_default()
    };
    let app = create_router(Arc::new(AppState::new(config)));

    let (status, body) = get_json(app, "/api/leaderboards").await;
    assert_eq!(status, StatusCode::OK);

    let boards = body["leaderboards"].as_array().unwrap();
    assert_eq!(ids(&boards[0]["entries"]), vec![1003, 1002]);
    assert_eq!(ids(&boards[2]["entries"]), vec![1003]);
}

#[tokio::test]
async fn test_activities_walk_tab_includes_hikes() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let (status, body) = get_json(app, "/api/activities?tab=Walk").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tab"], "Walk");
    assert_eq!(body["title"], "Walk history");
    assert_eq!(ids(&body["activities"]), vec![1004, 1006]);
    assert_eq!(body["activities"][0]["activity_type"], "Hike");
    assert_eq!(body["activities"][0]["badge"], "generic");
    assert_eq!(body["activities"][1]["badge"], "footprints");
}

#[tokio::test]
async fn test_leaderboards_limit_and_units() {
    let base_url = common::spawn_mock_strava().await;
    let (app, _) = common::create_test_app(&base_url);

    let (status, body) = get_json(app, "/api/leaderboards?limit=1&units=imperial").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["units"], "imperial");

    let boards = body["leaderboards"].as_array().unwrap();
    assert_eq!(boards.len(), 3);
    for board in boards {
        assert_eq!(board["entries"].as_array().unwrap().len(), 1);
        assert!(board["entries"][0]["average_speed"]
            .as_str()
            .unwrap()
            .ends_with(" mph"));
    }
}

#[tokio::test]
async fn test_invalid_query_parameters() {
    // Validation happens before any upstream call
    let (app, _) = common::create_offline_app();

    let long_tab = format!("/api/dashboard?tab={}", "x".repeat(65));
    let cases = [
        "/api/dashboard?units=parsecs",
        "/api/activities?units=",
        long_tab.as_str(),
        "/api/leaderboards?limit=0",
        "/api/leaderboards?limit=11",
    ];

    for uri in cases {
        let response = app.clone().oneshot(get(uri, "any-token")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = common::body_json(response).await;
        assert_eq!(body["error"], "bad_request", "{}", uri);
    }
}
