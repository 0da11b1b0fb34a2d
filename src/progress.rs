// ABOUTME: Habit goal progress counters and the consistency streak computation
// ABOUTME: Period-bucketed counters make period rollover implicit, no reset logic needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Progress Tracker
//!
//! Per-goal, per-period counters plus the derived consistency streak.
//!
//! Progress is bucketed under [`period_key`]s. Nothing reads a past bucket,
//! so a new day/week/month simply sees an absent key and reads zero; no
//! reset-at-boundary logic exists.

use std::collections::HashSet;

use chrono::{DateTime, Days, Utc};

use crate::models::{HabitGoal, Session};
use crate::periods::{day_key_for, period_key};

/// Progress recorded for the goal's current period; absent bucket reads as zero.
pub fn current_progress(goal: &HabitGoal, now: DateTime<Utc>) -> f64 {
    let key = period_key(goal.period, now);
    goal.progress.get(&key).copied().unwrap_or(0.0)
}

/// Fraction of the period target achieved so far, `current / target`.
pub fn progress_ratio(goal: &HabitGoal, now: DateTime<Utc>) -> f64 {
    if goal.target > 0.0 {
        current_progress(goal, now) / goal.target
    } else {
        0.0
    }
}

/// Store `value` (clamped to >= 0) under the goal's current period key.
pub fn set_progress(goal: &mut HabitGoal, value: f64, now: DateTime<Utc>) {
    let key = period_key(goal.period, now);
    goal.progress.insert(key, value.max(0.0));
}

/// Add `delta` (possibly negative) to the current period's counter.
///
/// The result is clamped at zero, so a decrement can never push a counter
/// negative regardless of magnitude.
pub fn inc_progress(goal: &mut HabitGoal, delta: f64, now: DateTime<Utc>) {
    let current = current_progress(goal, now);
    set_progress(goal, current + delta, now);
}

/// Count of consecutive calendar days with a completed session.
///
/// Today gets a grace day: when nothing ended today the count starts from
/// yesterday instead. Returns 0 when no qualifying days exist.
pub fn compute_streak(sessions: &[Session], now: DateTime<Utc>) -> u32 {
    let ended_days: HashSet<String> = sessions
        .iter()
        .filter_map(|s| s.ended_at)
        .map(|t| day_key_for(t.date_naive()))
        .collect();

    let mut cursor = now.date_naive();
    if !ended_days.contains(&day_key_for(cursor)) {
        let Some(prev) = cursor.checked_sub_days(Days::new(1)) else {
            return 0;
        };
        cursor = prev;
    }

    let mut streak = 0;
    while ended_days.contains(&day_key_for(cursor)) {
        streak += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}
