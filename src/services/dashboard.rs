// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard assembly.
//!
//! Combines the tab filter, best efforts and ride leaderboards for one
//! activity snapshot, then projects the result into display strings so the
//! frontend never recomputes a value. Assembly is a pure function of the
//! snapshot and the selected tab.

use crate::models::{Activity, AthleteStats, RunTotals};
use crate::services::best_efforts::{best_stats, BestEfforts};
use crate::services::filter::{self, Category, TABS};
use crate::services::format::{Formatter, UnitSystem};
use crate::services::leaderboard::{self, Leaderboard, Medal, DEFAULT_LIMIT};
use crate::time_utils::format_display_date;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Derived dashboard data, borrowing from the activity snapshot.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub tab: Category,
    /// Activities shown in the history list for `tab`.
    pub activities: Vec<&'a Activity>,
    pub run_bests: Option<BestEfforts<'a>>,
    pub ride_bests: Option<BestEfforts<'a>>,
    /// One per leaderboard threshold, smallest first.
    pub leaderboards: Vec<Leaderboard<'a>>,
}

impl<'a> Dashboard<'a> {
    pub fn assemble(activities: &'a [Activity], tab: Category) -> Self {
        Self::assemble_with_limit(activities, tab, DEFAULT_LIMIT)
    }

    /// Like `assemble`, keeping `limit` rides per leaderboard.
    pub fn assemble_with_limit(activities: &'a [Activity], tab: Category, limit: usize) -> Self {
        let filtered = filter::filter(activities, &tab);
        let run_bests = best_stats(activities, "Run");
        let ride_bests = best_stats(activities, "Ride");
        let leaderboards = leaderboard::leaderboards(activities, limit);

        tracing::debug!(
            tab = %tab,
            total = activities.len(),
            shown = filtered.len(),
            has_run_bests = run_bests.is_some(),
            has_ride_bests = ride_bests.is_some(),
            "Assembled dashboard"
        );

        Self {
            tab,
            activities: filtered,
            run_bests,
            ride_bests,
            leaderboards,
        }
    }

    /// Project into display strings.
    pub fn to_view(&self, formatter: &Formatter, stats: Option<&AthleteStats>) -> DashboardView {
        DashboardView {
            tab: self.tab.to_string(),
            tabs: TABS.iter().map(|t| t.to_string()).collect(),
            units: formatter.units(),
            run_highlights: self.run_bests.map(|b| run_highlights(&b, formatter)),
            ride_highlights: self.ride_bests.map(|b| ride_highlights(&b, formatter)),
            leaderboards: self
                .leaderboards
                .iter()
                .map(|board| LeaderboardView::new(board, formatter))
                .collect(),
            history: HistoryView::new(&self.tab, &self.activities, formatter),
            athlete_stats: stats.map(|s| AthleteStatsView::new(s, formatter)),
        }
    }
}

// ─── Views ───────────────────────────────────────────────────

/// Everything the dashboard page renders.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardView {
    pub tab: String,
    pub tabs: Vec<String>,
    pub units: UnitSystem,
    pub run_highlights: Option<HighlightsView>,
    pub ride_highlights: Option<HighlightsView>,
    pub leaderboards: Vec<LeaderboardView>,
    pub history: HistoryView,
    pub athlete_stats: Option<AthleteStatsView>,
}

/// Which best effort a highlight card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMetric {
    LongestDistance,
    FastestPace,
    TopSpeed,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HighlightCard {
    pub metric: HighlightMetric,
    pub label: String,
    pub value: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub activity_id: u64,
    pub activity_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HighlightsView {
    pub activity_type: String,
    pub cards: Vec<HighlightCard>,
}

fn highlight(metric: HighlightMetric, label: &str, value: String, activity: &Activity) -> HighlightCard {
    HighlightCard {
        metric,
        label: label.to_string(),
        value,
        activity_id: activity.id,
        activity_name: activity.name.clone(),
    }
}

/// Runs highlight distance and pace.
fn run_highlights(bests: &BestEfforts<'_>, formatter: &Formatter) -> HighlightsView {
    HighlightsView {
        activity_type: "Run".to_string(),
        cards: vec![
            highlight(
                HighlightMetric::LongestDistance,
                "Longest run",
                formatter.distance(bests.longest.distance),
                bests.longest,
            ),
            highlight(
                HighlightMetric::FastestPace,
                "Fastest pace",
                formatter.pace(bests.fastest_avg.average_speed),
                bests.fastest_avg,
            ),
        ],
    }
}

/// Rides highlight distance and absolute top speed.
fn ride_highlights(bests: &BestEfforts<'_>, formatter: &Formatter) -> HighlightsView {
    HighlightsView {
        activity_type: "Ride".to_string(),
        cards: vec![
            highlight(
                HighlightMetric::LongestDistance,
                "Longest ride",
                formatter.distance(bests.longest.distance),
                bests.longest,
            ),
            highlight(
                HighlightMetric::TopSpeed,
                "Top speed",
                formatter.speed(bests.absolute_max_speed.max_speed),
                bests.absolute_max_speed,
            ),
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardEntry {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub rank: usize,
    pub medal: Option<Medal>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub activity_id: u64,
    pub name: String,
    pub average_speed: String,
    pub max_speed: String,
    pub distance: String,
    pub moving_time: String,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardView {
    pub min_km: u32,
    pub title: String,
    pub entries: Vec<LeaderboardEntry>,
    /// Set only when no ride qualifies.
    pub empty_message: Option<String>,
}

impl LeaderboardView {
    pub fn new(board: &Leaderboard<'_>, formatter: &Formatter) -> Self {
        let entries = board
            .podium()
            .map(|(rank, ride)| LeaderboardEntry {
                rank,
                medal: Medal::for_rank(rank),
                activity_id: ride.id,
                name: ride.name.clone(),
                average_speed: formatter.speed(ride.average_speed),
                max_speed: formatter.speed(ride.max_speed),
                distance: formatter.distance(ride.distance),
                moving_time: formatter.duration(ride.moving_time),
            })
            .collect();

        Self {
            min_km: board.min_km,
            title: format!("Best {}K (Avg Speed)", board.min_km),
            entries,
            empty_message: board
                .is_empty()
                .then(|| format!("No rides of {} km yet.", board.min_km)),
        }
    }
}

/// One row of the activity history list.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityCard {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    pub activity_type: String,
    pub badge: String,
    pub date: String,
    pub distance: String,
    pub moving_time: String,
    pub elapsed: String,
    pub pace: String,
    pub speed: String,
    pub elevation_gain: String,
    pub kudos_count: u32,
}

impl ActivityCard {
    pub fn new(activity: &Activity, formatter: &Formatter) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            activity_type: activity.activity_type.clone(),
            badge: activity.kind().badge().to_string(),
            date: format_display_date(&activity.start_date),
            distance: formatter.distance(activity.distance),
            moving_time: formatter.duration(activity.moving_time),
            elapsed: formatter.duration(activity.elapsed_time),
            pace: formatter.pace(activity.average_speed),
            speed: formatter.speed(activity.average_speed),
            elevation_gain: formatter.elevation(activity.total_elevation_gain),
            kudos_count: activity.kudos_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistoryView {
    pub tab: String,
    pub title: String,
    pub activities: Vec<ActivityCard>,
    /// Set only when the list is empty.
    pub empty_message: Option<String>,
}

impl HistoryView {
    pub fn new(tab: &Category, activities: &[&Activity], formatter: &Formatter) -> Self {
        let title = match tab {
            Category::All => "All activities".to_string(),
            other => format!("{} history", other),
        };
        let empty_message = activities.is_empty().then(|| match tab {
            Category::All => "No activities in recent history.".to_string(),
            other => format!("No {} activities in recent history.", other),
        });

        Self {
            tab: tab.to_string(),
            title,
            activities: activities
                .iter()
                .map(|a| ActivityCard::new(a, formatter))
                .collect(),
            empty_message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TotalsView {
    pub count: u32,
    pub distance: String,
    pub moving_time: String,
    pub elevation_gain: String,
}

impl TotalsView {
    fn new(totals: &RunTotals, formatter: &Formatter) -> Self {
        Self {
            count: totals.count,
            distance: formatter.distance(totals.distance),
            moving_time: formatter.duration(totals.moving_time),
            elevation_gain: formatter.elevation(totals.elevation_gain),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteStatsView {
    pub recent_runs: TotalsView,
    pub all_time_runs: TotalsView,
}

impl AthleteStatsView {
    pub fn new(stats: &AthleteStats, formatter: &Formatter) -> Self {
        Self {
            recent_runs: TotalsView::new(&stats.recent_run_totals, formatter),
            all_time_runs: TotalsView::new(&stats.all_run_totals, formatter),
        }
    }
}
