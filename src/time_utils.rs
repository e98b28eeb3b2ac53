// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Utc};

/// Calendar date (`YYYY-MM-DD`, UTC) of an RFC3339 timestamp.
///
/// Unparseable input is returned as-is so the frontend still has something
/// to show.
pub fn format_display_date(start_date: &str) -> String {
    match DateTime::parse_from_rfc3339(start_date) {
        Ok(date) => date.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
        Err(_) => start_date.to_string(),
    }
}
