// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for the athlete's activity feed and run totals.
//!
//! The access token and athlete ID are always passed in by the caller; the
//! client holds no session state.

use crate::error::AppError;
use crate::models::{Activity, AthleteStats};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
}

impl StravaClient {
    /// Create a client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Most recent activities of the token's athlete, newest first.
    pub async fn list_activities(
        &self,
        access_token: &str,
        per_page: u32,
    ) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        let activities: Vec<Activity> = check_response_json(response).await?;
        tracing::debug!(count = activities.len(), "Fetched activities");
        Ok(activities)
    }

    /// Run totals for `athlete_id`.
    pub async fn get_athlete_stats(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> Result<AthleteStats, AppError> {
        let url = format!("{}/athletes/{}/stats", self.base_url, athlete_id);
        self.get_json(&url, access_token).await
    }

    /// Fetch the activity feed and, if `athlete_id` is known, the athlete's
    /// run totals, concurrently.
    ///
    /// A failed feed fetch is an error. A failed stats fetch is logged and
    /// reported as missing stats so the dashboard still renders.
    pub async fn fetch_snapshot(
        &self,
        access_token: &str,
        athlete_id: Option<u64>,
        per_page: u32,
    ) -> Result<Snapshot, AppError> {
        let stats_fetch = async {
            match athlete_id {
                Some(id) => Some((id, self.get_athlete_stats(access_token, id).await)),
                None => None,
            }
        };

        let (activities, stats) =
            tokio::join!(self.list_activities(access_token, per_page), stats_fetch);

        let stats = match stats {
            Some((_, Ok(stats))) => Some(stats),
            Some((athlete_id, Err(e))) => {
                tracing::warn!(error = %e, athlete_id, "Failed to fetch athlete stats, continuing without");
                None
            }
            None => None,
        };

        Ok(Snapshot {
            activities: activities?,
            stats,
        })
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        check_response_json(response).await
    }
}

/// One fetched view of an athlete's data. Treated as immutable.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub activities: Vec<Activity>,
    pub stats: Option<AthleteStats>,
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        // Rate limit - caller should back off
        if status.as_u16() == 429 {
            tracing::warn!("Strava rate limit hit (429)");
            return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
        }

        // Unauthorized - token expired or revoked
        if status.as_u16() == 401 {
            return Err(AppError::StravaApi(
                AppError::STRAVA_TOKEN_ERROR.to_string(),
            ));
        }

        return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
}
