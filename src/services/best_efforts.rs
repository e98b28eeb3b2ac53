// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Best-effort extraction per activity type.
//!
//! For one raw type, picks the activity with the longest distance, the
//! fastest average speed and the highest top speed. Each pick is an
//! independent scan over the feed, so one activity can win several.
//!
//! Ties keep the earliest activity in feed order: a later activity only
//! replaces the current best when it is strictly greater. A `NaN` value
//! only wins when every candidate is `NaN`.

use crate::models::Activity;

/// Best activities of a single type. Borrows from the feed it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestEfforts<'a> {
    pub longest: &'a Activity,
    pub fastest_avg: &'a Activity,
    pub absolute_max_speed: &'a Activity,
}

/// Best efforts for activities whose raw type equals `activity_type`.
///
/// Returns `None` when the feed has no activity of that type.
pub fn best_stats<'a>(activities: &'a [Activity], activity_type: &str) -> Option<BestEfforts<'a>> {
    let relevant: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.is_type(activity_type))
        .collect();

    Some(BestEfforts {
        longest: first_max_by(&relevant, |a| a.distance)?,
        fastest_avg: first_max_by(&relevant, |a| a.average_speed)?,
        absolute_max_speed: first_max_by(&relevant, |a| a.max_speed)?,
    })
}

/// Maximum by `key`, keeping the first of equal candidates.
fn first_max_by<'a>(candidates: &[&'a Activity], key: impl Fn(&Activity) -> f64) -> Option<&'a Activity> {
    let (first, rest) = candidates.split_first()?;

    let mut best = *first;
    let mut best_value = key(best);
    for &candidate in rest {
        let value = key(candidate);
        if value > best_value || (best_value.is_nan() && !value.is_nan()) {
            best = candidate;
            best_value = value;
        }
    }
    Some(best)
}
