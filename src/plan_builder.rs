// ABOUTME: Projects the routine synthesizer over a rolling 14-day calendar window
// ABOUTME: Workout days fall on the cadence derived from the goal's weekly frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Plan Builder
//!
//! Builds the rolling 14-day [`Plan`] from the active goals. Day `i` is a
//! workout day iff `i % cadence == 0` where
//! `cadence = max(1, floor(7 / clamp(days_per_week, 1, 7)))`.
//!
//! One routine is synthesized per generation and shared by every workout day
//! in the window — simplicity over progressive overload across two weeks.
//! The resulting plan replaces any prior plan wholesale; there is no
//! incremental patching.

use chrono::{DateTime, Days, Utc};
use tracing::debug;

use crate::config::SynthesisConfig;
use crate::constants::plan::PLAN_WINDOW_DAYS;
use crate::errors::{EngineError, Result};
use crate::models::{DayKind, Plan, PlanDay, PrimaryGoal, Profile, SecondaryGoal};
use crate::synthesis::synthesize;

/// Build a 14-day plan starting on `now`'s calendar day.
///
/// Fails with [`EngineError::NoPrimaryGoal`] when no primary goal exists —
/// a plan cannot be built without a cadence source.
pub fn build_plan(
    profile: &Profile,
    primary: Option<&PrimaryGoal>,
    secondary: Option<&SecondaryGoal>,
    now: DateTime<Utc>,
    config: &SynthesisConfig,
) -> Result<Plan> {
    let primary = primary.ok_or(EngineError::NoPrimaryGoal)?;
    let cadence = primary.cadence_days();
    let routine = synthesize(profile, Some(primary), secondary, config);
    let start = now.date_naive();

    let days = (0..PLAN_WINDOW_DAYS)
        .map(|i| {
            let date = start + Days::new(u64::from(i));
            if i % cadence == 0 {
                PlanDay {
                    date,
                    kind: DayKind::Workout,
                    routine: Some(routine.clone()),
                }
            } else {
                PlanDay {
                    date,
                    kind: DayKind::Rest,
                    routine: None,
                }
            }
        })
        .collect();

    debug!(
        cadence,
        routine_id = %routine.id,
        start = %start,
        "built plan window"
    );

    Ok(Plan {
        generated_at: now,
        days,
    })
}
