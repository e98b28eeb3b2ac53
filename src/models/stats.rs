//! Athlete aggregate totals from `GET /athletes/{id}/stats`.
//!
//! These are passed through to the dashboard untouched; only the display
//! projection in `services::dashboard` reads them.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Totals for one time window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunTotals {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
    /// Meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub moving_time: u64,
    /// Meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub elevation_gain: f64,
}

/// Athlete run totals for the recent (last 4 weeks) and all-time windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleteStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_run_totals: RunTotals,
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_run_totals: RunTotals,
}
