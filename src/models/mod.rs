// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod stats;

pub use activity::{Activity, ActivityKind};
pub use stats::{AthleteStats, RunTotals};

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit JSON `null` the same as a missing field.
///
/// Pair with `#[serde(default)]`, which only covers absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
