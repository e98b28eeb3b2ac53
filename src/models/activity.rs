// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model as returned by the athlete activity feed.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Summary activity from `GET /athlete/activities`.
///
/// Fields default to zero/empty when Strava omits them or sends `null`, so
/// every comparison in the dashboard engines stays total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    /// Activity name/title
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Distance in meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub moving_time: u64,
    /// Elapsed time in seconds (including pauses)
    #[serde(default, deserialize_with = "null_as_default")]
    pub elapsed_time: u64,
    /// Elevation gain in meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Raw activity type (Run, Ride, Walk, Hike, WeightTraining, ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub activity_type: String,
    /// Start date/time (ISO 8601)
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    /// Average speed in meters/second
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_speed: f64,
    /// Top speed in meters/second
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_speed: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kudos_count: u32,
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        ActivityKind::from_type(&self.activity_type)
    }

    pub fn is_type(&self, activity_type: &str) -> bool {
        self.activity_type == activity_type
    }
}

/// Known activity types, used by the frontend to pick a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    Run,
    Ride,
    Walk,
    Hike,
    WeightTraining,
    Other(String),
}

impl ActivityKind {
    pub fn from_type(activity_type: &str) -> Self {
        match activity_type {
            "Run" => ActivityKind::Run,
            "Ride" => ActivityKind::Ride,
            "Walk" => ActivityKind::Walk,
            "Hike" => ActivityKind::Hike,
            "WeightTraining" => ActivityKind::WeightTraining,
            other => ActivityKind::Other(other.to_string()),
        }
    }

    /// Badge key for the frontend icon set.
    pub fn badge(&self) -> &'static str {
        match self {
            ActivityKind::Run => "flame",
            ActivityKind::Ride => "bike",
            ActivityKind::Walk => "footprints",
            ActivityKind::WeightTraining => "dumbbell",
            // Hike has no dedicated icon
            ActivityKind::Hike | ActivityKind::Other(_) => "generic",
        }
    }
}
