// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard tab categories and activity filtering.
//!
//! A tab selects a `Category`. The built-in categories map onto raw Strava
//! types, with `Walk` deliberately folding `Walk` and `Hike` together. Any
//! other tab string is matched against the raw type verbatim.

use crate::models::Activity;
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Tabs shown by the dashboard, in display order.
pub const TABS: [Category; 4] = [Category::All, Category::Run, Category::Ride, Category::Walk];

/// A dashboard tab selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Run,
    Ride,
    /// Walks and hikes.
    Walk,
    /// Exact match on the raw activity type.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Run => "Run",
            Category::Ride => "Ride",
            Category::Walk => "Walk",
            Category::Other(activity_type) => activity_type,
        }
    }

    /// Whether an activity belongs to this category.
    pub fn matches(&self, activity: &Activity) -> bool {
        let activity_type = activity.activity_type.as_str();
        match self {
            Category::All => true,
            Category::Run => activity_type == "Run",
            Category::Ride => activity_type == "Ride",
            Category::Walk => activity_type == "Walk" || activity_type == "Hike",
            Category::Other(expected) => activity_type == expected,
        }
    }
}

impl From<&str> for Category {
    fn from(tab: &str) -> Self {
        match tab {
            "All" => Category::All,
            "Run" => Category::Run,
            "Ride" => Category::Ride,
            "Walk" => Category::Walk,
            other => Category::Other(other.to_string()),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(tab: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(tab))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Category an activity is listed under.
pub fn classify(activity: &Activity) -> Category {
    match activity.activity_type.as_str() {
        "Hike" => Category::Walk,
        // "All" is a tab, never a type
        "All" => Category::Other("All".to_string()),
        other => Category::from(other),
    }
}

/// Activities matching `category`, in feed order.
pub fn filter<'a>(activities: &'a [Activity], category: &Category) -> Vec<&'a Activity> {
    activities.iter().filter(|a| category.matches(a)).collect()
}
