// ABOUTME: Fixed constants for routine synthesis, plan building, and progress tracking
// ABOUTME: Grouped by domain so tunables live in one place instead of inline literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Engine-wide constants organized by domain.
//!
//! Values that a deployment may reasonably want to tune (cap table, scaling
//! ratio) are also exposed through [`PlannerConfig`](crate::config::PlannerConfig),
//! which defaults to these constants.

/// Plan window geometry and cadence bounds.
pub mod plan {
    /// Length of the rolling plan window in days.
    pub const PLAN_WINDOW_DAYS: u32 = 14;

    /// Lowest permitted training frequency, days per week.
    pub const MIN_DAYS_PER_WEEK: u8 = 1;

    /// Highest permitted training frequency, days per week.
    pub const MAX_DAYS_PER_WEEK: u8 = 7;
}

/// Routine synthesis defaults and scaling factors.
pub mod synthesis {
    /// Session duration assumed when neither goal nor profile specifies one (minutes).
    pub const DEFAULT_DURATION_MIN: u32 = 30;

    /// Working-set fraction of a recorded baseline (hang hold, pushup reps).
    pub const BASELINE_WORK_RATIO: f64 = 0.6;

    /// Shortest useful dead-hang hold (seconds).
    pub const MIN_HANG_HOLD_SEC: u32 = 10;

    /// Hang baseline at or above which an extra set is programmed (seconds).
    pub const LONG_HANG_BASELINE_SEC: u32 = 60;

    /// Hang sets below / at the long-baseline threshold.
    pub const HANG_SETS_SHORT: u32 = 5;
    /// Hang sets once the baseline reaches [`LONG_HANG_BASELINE_SEC`].
    pub const HANG_SETS_LONG: u32 = 6;

    /// Assumed hang baseline when the goal records none (seconds).
    pub const DEFAULT_HANG_BASELINE_SEC: u32 = 30;

    /// Minimum per-set pushup target regardless of baseline.
    pub const MIN_PUSHUP_REPS: u32 = 3;

    /// Assumed pushup baseline when the goal records none (reps).
    pub const DEFAULT_PUSHUP_BASELINE: u32 = 10;

    /// Exercise count ceiling for sessions of 20 minutes or less.
    pub const CAP_SHORT_SESSION: usize = 3;
    /// Exercise count ceiling for sessions of 30 minutes or less.
    pub const CAP_MEDIUM_SESSION: usize = 4;
    /// Exercise count ceiling for longer sessions.
    pub const CAP_LONG_SESSION: usize = 6;

    /// Duration boundary for the short-session cap (minutes).
    pub const SHORT_SESSION_MAX_MIN: u32 = 20;
    /// Duration boundary for the medium-session cap (minutes).
    pub const MEDIUM_SESSION_MAX_MIN: u32 = 30;
}

/// Storage keys for the persistence boundary.
///
/// One key per aggregate slice, mirroring the original localStorage layout
/// (`bf:` prefix kept for import compatibility with existing exports).
pub mod storage_keys {
    /// User profile (equipment, default duration, default goal).
    pub const PROFILE: &str = "bf:profile";
    /// Active primary goal, if any.
    pub const PRIMARY_GOAL: &str = "bf:primaryGoal";
    /// Optional secondary focus.
    pub const SECONDARY_GOAL: &str = "bf:secondaryGoal";
    /// Habit goals with per-period progress maps.
    pub const HABIT_GOALS: &str = "bf:habitGoals";
    /// Routine collection, keyed by routine id.
    pub const ROUTINES: &str = "bf:routines";
    /// Rolling 14-day plan.
    pub const PLAN: &str = "bf:plan";
    /// Workout session history.
    pub const SESSIONS: &str = "bf:sessions";
    /// Id of the in-progress session, if any.
    pub const ACTIVE_SESSION: &str = "bf:activeSessionId";

    /// Every key the engine owns, in reset order.
    pub const ALL: &[&str] = &[
        PROFILE,
        PRIMARY_GOAL,
        SECONDARY_GOAL,
        HABIT_GOALS,
        ROUTINES,
        PLAN,
        SESSIONS,
        ACTIVE_SESSION,
    ];
}
