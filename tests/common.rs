// ABOUTME: Shared test utilities for fitplan-core integration tests
// ABOUTME: Quiet tracing setup plus profile and goal fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use fitplan_core::models::{EquipmentTag, GoalKind, PrimaryGoal, Profile};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process).
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A fixed instant so plan windows and period keys are reproducible.
pub fn fixed_now() -> DateTime<Utc> {
    // Friday, 2025-03-07
    Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap()
}

/// Profile with the given equipment on top of the bodyweight default.
pub fn profile_with(tags: &[EquipmentTag]) -> Profile {
    let mut profile = Profile::default();
    profile.equipment.extend(tags.iter().copied());
    profile
}

/// Primary goal fixture with a General kind.
pub fn general_goal(days_per_week: u8) -> PrimaryGoal {
    PrimaryGoal {
        kind: GoalKind::General,
        duration_min: 30,
        days_per_week,
        created_at: fixed_now(),
    }
}
