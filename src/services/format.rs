// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display formatting for distances, durations, speeds and paces.
//!
//! Strava reports meters, seconds and meters/second. The free functions
//! render metric output; `Formatter` adds imperial output on top of the same
//! rounding rules. Paces and durations are truncated, never rounded.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Rendered in place of a pace when the average speed is zero.
pub const NO_PACE: &str = "-";

const METERS_PER_KM: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.344;
const METERS_PER_FOOT: f64 = 0.3048;
const MPS_TO_KMH: f64 = 3.6;
const MPS_TO_MPH: f64 = 3600.0 / METERS_PER_MILE;

/// Pace per kilometer, e.g. `5:33 /km`.
pub fn pace(avg_speed: f64) -> String {
    format_pace(avg_speed, METERS_PER_KM, "km")
}

/// Speed in km/h with one decimal, without a unit suffix.
pub fn speed_kmh(speed: f64) -> String {
    format!("{:.1}", positive_zero(speed * MPS_TO_KMH))
}

/// Distance in kilometers with two decimals, e.g. `12.34 km`.
pub fn distance_km(distance: f64) -> String {
    format!("{:.2} km", positive_zero(distance / METERS_PER_KM))
}

/// Hours and minutes, e.g. `1h 5m`. Leftover seconds are dropped.
pub fn duration_hm(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

fn format_pace(speed: f64, unit_meters: f64, unit: &str) -> String {
    if !speed.is_finite() || speed <= 0.0 {
        return NO_PACE.to_string();
    }

    let minutes_per_unit = unit_meters / 60.0 / speed;
    let minutes = minutes_per_unit.floor();
    let seconds = ((minutes_per_unit - minutes) * 60.0).floor().min(59.0);

    format!("{}:{:02} /{}", minutes as u64, seconds as u64, unit)
}

// Keeps "-0.0" out of the output.
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Output unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = UnknownUnits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(UnknownUnits(s.to_string())),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => f.write_str("metric"),
            UnitSystem::Imperial => f.write_str("imperial"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown unit system '{0}' (expected 'metric' or 'imperial')")]
pub struct UnknownUnits(pub String);

/// Formats raw Strava values in one unit system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    units: UnitSystem,
}

impl Formatter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn pace(&self, avg_speed: f64) -> String {
        match self.units {
            UnitSystem::Metric => pace(avg_speed),
            UnitSystem::Imperial => format_pace(avg_speed, METERS_PER_MILE, "mi"),
        }
    }

    /// Speed with its unit, e.g. `24.3 km/h`.
    pub fn speed(&self, speed: f64) -> String {
        match self.units {
            UnitSystem::Metric => format!("{} km/h", speed_kmh(speed)),
            UnitSystem::Imperial => format!("{:.1} mph", positive_zero(speed * MPS_TO_MPH)),
        }
    }

    pub fn distance(&self, distance: f64) -> String {
        match self.units {
            UnitSystem::Metric => distance_km(distance),
            UnitSystem::Imperial => {
                format!("{:.2} mi", positive_zero(distance / METERS_PER_MILE))
            }
        }
    }

    /// Elevation in whole meters or feet.
    pub fn elevation(&self, meters: f64) -> String {
        match self.units {
            UnitSystem::Metric => format!("{:.0} m", positive_zero(meters)),
            UnitSystem::Imperial => format!("{:.0} ft", positive_zero(meters / METERS_PER_FOOT)),
        }
    }

    pub fn duration(&self, seconds: u64) -> String {
        duration_hm(seconds)
    }
}
