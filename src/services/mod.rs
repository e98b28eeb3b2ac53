// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod best_efforts;
pub mod dashboard;
pub mod filter;
pub mod format;
pub mod leaderboard;
pub mod strava;

pub use best_efforts::{best_stats, BestEfforts};
pub use dashboard::{Dashboard, DashboardView};
pub use filter::{classify, Category};
pub use format::{Formatter, UnitSystem};
pub use leaderboard::{top_rides, Leaderboard};
pub use strava::{Snapshot, StravaClient};
