// ABOUTME: Period key derivation for day, week, and month progress buckets
// ABOUTME: Week numbering is deliberately approximate, not ISO-8601
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Period Keyer
//!
//! Maps a point in time to a `day` / `week` / `month` bucket identifier.
//! All keys are computed from the local calendar date; time of day never
//! matters. Any valid date produces a key, so there are no error paths.
//!
//! The week scheme is `year-Www` where the week number is
//! `floor((days_since_jan1 + jan1_weekday) / 7) + 1` with Sunday-based
//! weekdays. Intentionally not ISO-8601; keys never leave the app.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::HabitPeriod;

/// Key for the calendar day containing `t`, e.g. `2025-03-07`.
pub fn day_key(t: DateTime<Utc>) -> String {
    day_key_for(t.date_naive())
}

/// Day key for a bare calendar date.
pub fn day_key_for(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Key for the year-week containing `t`, e.g. `2025-W10`.
pub fn week_key(t: DateTime<Utc>) -> String {
    let date = t.date_naive();
    let jan1 = match NaiveDate::from_ymd_opt(date.year(), 1, 1) {
        Some(d) => d,
        // Unreachable for any date chrono can represent
        None => return format!("{}-W01", date.year()),
    };
    let days_since_jan1 = (date - jan1).num_days();
    let jan1_weekday = i64::from(jan1.weekday().num_days_from_sunday());
    let week = (days_since_jan1 + jan1_weekday) / 7 + 1;
    format!("{}-W{week:02}", date.year())
}

/// Key for the calendar month containing `t`, e.g. `2025-03`.
pub fn month_key(t: DateTime<Utc>) -> String {
    t.date_naive().format("%Y-%m").to_string()
}

/// The bucket key for a habit period at time `t`.
pub fn period_key(period: HabitPeriod, t: DateTime<Utc>) -> String {
    match period {
        HabitPeriod::Daily => day_key(t),
        HabitPeriod::Weekly => week_key(t),
        HabitPeriod::Monthly => month_key(t),
    }
}
