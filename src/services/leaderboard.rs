// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride leaderboards ranked by average speed.

use crate::models::Activity;
use serde::Serialize;
use std::cmp::Ordering;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Minimum ride distances (km) with a leaderboard each.
pub const LEADERBOARD_THRESHOLDS_KM: [u32; 3] = [5, 10, 20];

/// Rides kept per leaderboard.
pub const DEFAULT_LIMIT: usize = 3;

/// Top rides of at least `min_km`, fastest average speed first.
///
/// The distance threshold is inclusive. Rides with equal average speed keep
/// their feed order. A ride whose average speed is NaN is never ranked.
pub fn top_rides(activities: &[Activity], min_km: u32, limit: usize) -> Vec<&Activity> {
    let min_meters = f64::from(min_km) * 1000.0;

    let mut rides: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.is_type("Ride") && a.distance >= min_meters && !a.average_speed.is_nan())
        .collect();

    // sort_by is stable; -0.0 and 0.0 compare equal
    rides.sort_by(|a, b| {
        b.average_speed
            .partial_cmp(&a.average_speed)
            .unwrap_or(Ordering::Equal)
    });
    rides.truncate(limit);
    rides
}

/// Podium position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Medal> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// One ranked leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard<'a> {
    pub min_km: u32,
    pub rides: Vec<&'a Activity>,
}

impl<'a> Leaderboard<'a> {
    pub fn build(activities: &'a [Activity], min_km: u32, limit: usize) -> Self {
        Self {
            min_km,
            rides: top_rides(activities, min_km, limit),
        }
    }

    /// Rides paired with their 1-based rank.
    pub fn podium(&self) -> impl Iterator<Item = (usize, &'a Activity)> + '_ {
        self.rides.iter().enumerate().map(|(i, ride)| (i + 1, *ride))
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

/// One leaderboard per entry in `LEADERBOARD_THRESHOLDS_KM`.
pub fn leaderboards(activities: &[Activity], limit: usize) -> Vec<Leaderboard<'_>> {
    LEADERBOARD_THRESHOLDS_KM
        .iter()
        .map(|&min_km| Leaderboard::build(activities, min_km, limit))
        .collect()
}
