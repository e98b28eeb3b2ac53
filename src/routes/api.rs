// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for the dashboard frontend.

use crate::error::{AppError, Result};
use crate::middleware::StravaToken;
use crate::services::dashboard::{Dashboard, DashboardView, HistoryView, LeaderboardView};
use crate::services::filter::{self, Category};
use crate::services::format::{Formatter, UnitSystem};
use crate::services::leaderboard::{self, DEFAULT_LIMIT};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_TAB_LEN: usize = 64;
const MAX_LEADERBOARD_LIMIT: usize = 10;

/// API routes (require a Strava bearer token).
/// The token middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/activities", get(get_activities))
        .route("/api/leaderboards", get(get_leaderboards))
}

/// Resolve the `tab` query parameter, defaulting to `All`.
fn parse_tab(tab: Option<&str>) -> Result<Category> {
    match tab {
        None => Ok(Category::All),
        Some(raw) if raw.len() > MAX_TAB_LEN => Err(AppError::BadRequest(format!(
            "'tab' must be at most {} characters",
            MAX_TAB_LEN
        ))),
        Some(raw) => Ok(Category::from(raw)),
    }
}

/// Resolve the `units` query parameter, falling back to the configured default.
fn parse_units(units: Option<&str>, default: UnitSystem) -> Result<UnitSystem> {
    units
        .map(|raw| {
            raw.parse::<UnitSystem>()
                .map_err(|e| AppError::BadRequest(e.to_string()))
        })
        .transpose()
        .map(|u| u.unwrap_or(default))
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Deserialize)]
struct DashboardQuery {
    /// Selected tab (All, Run, Ride, Walk, or a raw activity type)
    tab: Option<String>,
    /// "metric" or "imperial"
    units: Option<String>,
    /// Athlete whose run totals to include
    athlete_id: Option<u64>,
}

/// Full dashboard for the selected tab.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<StravaToken>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardView>> {
    let tab = parse_tab(params.tab.as_deref())?;
    let units = parse_units(params.units.as_deref(), state.config.default_units)?;

    tracing::debug!(
        tab = %tab,
        units = %units,
        athlete_id = ?params.athlete_id,
        "Fetching dashboard"
    );

    let snapshot = state
        .strava
        .fetch_snapshot(
            token.as_str(),
            params.athlete_id,
            state.config.activities_per_page,
        )
        .await?;

    let view = Dashboard::assemble(&snapshot.activities, tab)
        .to_view(&Formatter::new(units), snapshot.stats.as_ref());

    Ok(Json(view))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ActivitiesQuery {
    tab: Option<String>,
    units: Option<String>,
}

/// Activity history list for the selected tab.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<StravaToken>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<HistoryView>> {
    let tab = parse_tab(params.tab.as_deref())?;
    let units = parse_units(params.units.as_deref(), state.config.default_units)?;

    let activities = state
        .strava
        .list_activities(token.as_str(), state.config.activities_per_page)
        .await?;

    let shown = filter::filter(&activities, &tab);
    Ok(Json(HistoryView::new(&tab, &shown, &Formatter::new(units))))
}

// ─── Leaderboards ────────────────────────────────────────────

#[derive(Deserialize)]
struct LeaderboardsQuery {
    units: Option<String>,
    /// Rides per leaderboard
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardsResponse {
    pub units: UnitSystem,
    pub leaderboards: Vec<LeaderboardView>,
}

/// Ride leaderboards for every distance threshold.
async fn get_leaderboards(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<StravaToken>,
    Query(params): Query<LeaderboardsQuery>,
) -> Result<Json<LeaderboardsResponse>> {
    if params.limit == 0 || params.limit > MAX_LEADERBOARD_LIMIT {
        return Err(AppError::BadRequest(format!(
            "'limit' must be between 1 and {}",
            MAX_LEADERBOARD_LIMIT
        )));
    }
    let units = parse_units(params.units.as_deref(), state.config.default_units)?;

    let activities = state
        .strava
        .list_activities(token.as_str(), state.config.activities_per_page)
        .await?;

    let formatter = Formatter::new(units);
    let leaderboards = leaderboard::leaderboards(&activities, params.limit)
        .iter()
        .map(|board| LeaderboardView::new(board, &formatter))
        .collect();

    Ok(Json(LeaderboardsResponse {
        units,
        leaderboards,
    }))
}
