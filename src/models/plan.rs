// ABOUTME: Rolling 14-day plan model with workout and rest day assignments
// ABOUTME: A plan is a cached derived artifact, replaced wholesale on regeneration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::routine::Routine;

/// Whether a plan day is scheduled for training or rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A scheduled training day carrying a routine.
    Workout,
    /// A rest day; no routine.
    Rest,
}

/// One calendar day inside the plan window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    /// Local calendar date.
    pub date: NaiveDate,
    /// Workout or rest.
    pub kind: DayKind,
    /// Present exactly when `kind` is `Workout`.
    pub routine: Option<Routine>,
}

impl PlanDay {
    /// True when this day carries a workout.
    pub const fn is_workout(&self) -> bool {
        matches!(self.kind, DayKind::Workout)
    }
}

/// A rolling projection of workout and rest days.
///
/// Invariant: exactly 14 entries, contiguous ascending calendar days starting
/// at the generation date. The plan is derived from `(Profile, PrimaryGoal,
/// SecondaryGoal)` and regenerated on demand, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// When this plan was generated.
    pub generated_at: DateTime<Utc>,
    /// The 14-day window, day 0 = generation day.
    pub days: Vec<PlanDay>,
}

impl Plan {
    /// Look up the entry for a calendar date; dates outside the window yield `None`.
    pub fn day_on(&self, date: NaiveDate) -> Option<&PlanDay> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Dates of all scheduled workout days, in order.
    pub fn workout_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .filter(|day| day.is_workout())
            .map(|day| day.date)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn day_lookup_outside_window_is_none() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let plan = Plan {
            generated_at: Utc::now(),
            days: (0..14)
                .map(|i| PlanDay {
                    date: start + chrono::Days::new(i),
                    kind: DayKind::Rest,
                    routine: None,
                })
                .collect(),
        };

        assert!(plan.day_on(start).is_some());
        assert!(plan.day_on(start + chrono::Days::new(13)).is_some());
        assert!(plan.day_on(start + chrono::Days::new(14)).is_none());
        assert!(plan.day_on(start - chrono::Days::new(1)).is_none());
    }
}
