// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Dashboard: best efforts and ride leaderboards from Strava
//!
//! This crate turns an athlete's recent Strava activities into dashboard
//! data: per-type best efforts, ride leaderboards by distance threshold,
//! tab filtering, and formatted display values. The `services` engines are
//! pure functions over an activity snapshot; `routes` serves them as JSON.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::StravaClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub strava: StravaClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let strava = StravaClient::new(config.strava_api_base_url.clone());
        Self { config, strava }
    }
}
