// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_dashboard::config::Config;
use activity_dashboard::models::Activity;
use activity_dashboard::routes::create_router;
use activity_dashboard::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::Arc;

#[allow(dead_code)]
pub const ACTIVITIES_FIXTURE: &str = include_str!("../fixtures/activities.json");
#[allow(dead_code)]
pub const ATHLETE_STATS_FIXTURE: &str = include_str!("../fixtures/athlete_stats.json");

/// Token the mock Strava server accepts.
#[allow(dead_code)]
pub const GOOD_TOKEN: &str = "good-token";
/// Token the mock Strava server answers with 429.
#[allow(dead_code)]
pub const RATE_LIMITED_TOKEN: &str = "rate-limited";
/// Athlete whose stats endpoint returns 500.
#[allow(dead_code)]
pub const BROKEN_STATS_ATHLETE: u64 = 999;

/// Parsed activity fixture, in feed order.
#[allow(dead_code)]
pub fn fixture_activities() -> Vec<Activity> {
    serde_json::from_str(ACTIVITIES_FIXTURE).expect("activities fixture should parse")
}

#[allow(dead_code)]
fn bearer(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .unwrap_or("")
}

#[allow(dead_code)]
fn strava_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({ "message": message, "errors": [] })),
    )
        .into_response()
}

#[allow(dead_code)]
async fn mock_activities(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match bearer(&headers) {
        GOOD_TOKEN => {}
        RATE_LIMITED_TOKEN => return strava_error(StatusCode::TOO_MANY_REQUESTS, "Rate Limit Exceeded"),
        _ => return strava_error(StatusCode::UNAUTHORIZED, "Authorization Error"),
    }

    let mut activities: Vec<serde_json::Value> =
        serde_json::from_str(ACTIVITIES_FIXTURE).expect("activities fixture should parse");
    if let Some(per_page) = params.get("per_page").and_then(|p| p.parse::<usize>().ok()) {
        activities.truncate(per_page);
    }
    Json(activities).into_response()
}

#[allow(dead_code)]
async fn mock_athlete_stats(headers: HeaderMap, Path(athlete_id): Path<u64>) -> Response {
    if bearer(&headers) != GOOD_TOKEN {
        return strava_error(StatusCode::UNAUTHORIZED, "Authorization Error");
    }
    if athlete_id == BROKEN_STATS_ATHLETE {
        return strava_error(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong");
    }

    let stats: serde_json::Value =
        serde_json::from_str(ATHLETE_STATS_FIXTURE).expect("stats fixture should parse");
    Json(stats).into_response()
}

/// Start a mock Strava API on an ephemeral port.
/// Returns the base URL to configure the client with.
#[allow(dead_code)]
pub async fn spawn_mock_strava() -> String {
    let app = Router::new()
        .route("/api/v3/athlete/activities", get(mock_activities))
        .route("/api/v3/athletes/{id}/stats", get(mock_athlete_stats));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock Strava listener");
    let addr = listener.local_addr().expect("mock listener address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock Strava server failed");
    });

    format!("http://{}/api/v3", addr)
}

/// Create a test app talking to the Strava API at `strava_base_url`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(strava_base_url: &str) -> (Router, Arc<AppState>) {
    let config = Config {
        strava_api_base_url: strava_base_url.to_string(),
        ..Config::test_default()
    };
    let state = Arc::new(AppState::new(config));

    (create_router(state.clone()), state)
}

/// Create a test app with no reachable Strava API.
#[allow(dead_code)]
pub fn create_offline_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default()));
    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body should be JSON")
}
