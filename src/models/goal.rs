// ABOUTME: Primary, secondary, and habit goal models for the planning engine
// ABOUTME: Goal-specific baselines live as variant payloads, not optional flat fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Goal Models
//!
//! Three goal families drive the engine:
//!
//! - [`PrimaryGoal`] — the user's main objective; at most one active instance.
//!   Its [`GoalKind`] is a closed enum whose baseline fields (best hang, best
//!   pushup count, ...) are variant payloads, so invalid field combinations
//!   cannot be represented.
//! - [`SecondaryGoal`] — an optional supplementary focus contributing a
//!   finisher exercise; never required.
//! - [`HabitGoal`] — a recurring countable target bucketed by period key.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::plan::{MAX_DAYS_PER_WEEK, MIN_DAYS_PER_WEEK};

/// Payload-free discriminant of [`GoalKind`], used for profile defaults and
/// deterministic routine ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTag {
    /// Couch-to-5k style running goal.
    RunFiveK,
    /// Dead-hang duration goal.
    BarHang,
    /// Weight-loss goal.
    LoseWeight,
    /// Pushup-count goal.
    Pushups,
    /// Hypertrophy goal.
    BuildMuscle,
    /// General fitness, the fallback.
    General,
}

impl GoalTag {
    /// Stable slug used in deterministic routine ids.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::RunFiveK => "run_5k",
            Self::BarHang => "bar_hang",
            Self::LoseWeight => "lose_weight",
            Self::Pushups => "pushups",
            Self::BuildMuscle => "build_muscle",
            Self::General => "general",
        }
    }
}

/// The user's main fitness objective with goal-specific baselines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GoalKind {
    /// Run a 5k; baselines track running readiness and best 5k time.
    RunFiveK {
        /// User can currently run for ten minutes without stopping.
        can_run_10_min: bool,
        /// Best recorded 5k time in minutes, once one exists.
        best_5k_min: Option<f64>,
    },
    /// Hold a dead hang; baselines in seconds.
    BarHang {
        /// Max hold recorded when the goal was created.
        max_hang_sec: u32,
        /// Best hold since, once one exists.
        best_hang_sec: Option<u32>,
    },
    /// Lose weight; baselines in pounds.
    LoseWeight {
        /// Weight when the goal was created.
        start_weight_lbs: f64,
        /// Most recent recorded weight.
        current_weight_lbs: Option<f64>,
    },
    /// Increase max pushups; baselines in reps.
    Pushups {
        /// Max set recorded when the goal was created.
        max_pushups: u32,
        /// Best set since, once one exists.
        best_pushups: Option<u32>,
    },
    /// Build muscle.
    BuildMuscle,
    /// General fitness.
    General,
}

impl GoalKind {
    /// The payload-free discriminant.
    pub const fn tag(&self) -> GoalTag {
        match self {
            Self::RunFiveK { .. } => GoalTag::RunFiveK,
            Self::BarHang { .. } => GoalTag::BarHang,
            Self::LoseWeight { .. } => GoalTag::LoseWeight,
            Self::Pushups { .. } => GoalTag::Pushups,
            Self::BuildMuscle => GoalTag::BuildMuscle,
            Self::General => GoalTag::General,
        }
    }

    /// Effective hang baseline in seconds: best hold if recorded, else the
    /// starting max, else the caller's default.
    pub fn hang_baseline_sec(&self, default: u32) -> u32 {
        match self {
            Self::BarHang {
                max_hang_sec,
                best_hang_sec,
            } => match best_hang_sec.unwrap_or(*max_hang_sec) {
                0 => default,
                sec => sec,
            },
            _ => default,
        }
    }

    /// Effective pushup baseline in reps: best set if recorded, else the
    /// starting max, else the caller's default.
    pub fn pushup_baseline(&self, default: u32) -> u32 {
        match self {
            Self::Pushups {
                max_pushups,
                best_pushups,
            } => match best_pushups.unwrap_or(*max_pushups) {
                0 => default,
                reps => reps,
            },
            _ => default,
        }
    }
}

impl From<GoalTag> for GoalKind {
    /// Build a kind with empty baselines from a profile-level default tag.
    fn from(tag: GoalTag) -> Self {
        match tag {
            GoalTag::RunFiveK => Self::RunFiveK {
                can_run_10_min: false,
                best_5k_min: None,
            },
            GoalTag::BarHang => Self::BarHang {
                max_hang_sec: 0,
                best_hang_sec: None,
            },
            GoalTag::LoseWeight => Self::LoseWeight {
                start_weight_lbs: 0.0,
                current_weight_lbs: None,
            },
            GoalTag::Pushups => Self::Pushups {
                max_pushups: 0,
                best_pushups: None,
            },
            GoalTag::BuildMuscle => Self::BuildMuscle,
            GoalTag::General => Self::General,
        }
    }
}

/// The active primary goal. Replacing it invalidates any generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryGoal {
    /// Objective and its baselines.
    pub kind: GoalKind,
    /// Preferred session length in minutes.
    pub duration_min: u32,
    /// Training frequency; clamped to 1..=7 before use.
    pub days_per_week: u8,
    /// When the goal was set.
    pub created_at: DateTime<Utc>,
}

impl PrimaryGoal {
    /// Training frequency clamped to the valid 1..=7 range.
    pub fn effective_days_per_week(&self) -> u8 {
        self.days_per_week
            .clamp(MIN_DAYS_PER_WEEK, MAX_DAYS_PER_WEEK)
    }

    /// Interval in days between scheduled workout days.
    pub fn cadence_days(&self) -> u32 {
        (7 / u32::from(self.effective_days_per_week())).max(1)
    }
}

/// Supplementary focus contributing one finisher exercise to synthesized routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryFocus {
    /// Daily step count.
    Steps,
    /// Low-intensity aerobic work; needs a cardio machine.
    Zone2,
    /// Mobility and flexibility.
    Mobility,
    /// Protein intake.
    Protein,
}

/// Optional secondary goal; purely additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryGoal {
    /// The supplementary focus area.
    pub focus: SecondaryFocus,
    /// When the goal was set.
    pub created_at: DateTime<Utc>,
}

/// Bucketing period for habit goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitPeriod {
    /// One bucket per calendar day.
    Daily,
    /// One bucket per year-week.
    Weekly,
    /// One bucket per year-month.
    Monthly,
}

/// A recurring countable target tracked independently of the plan.
///
/// `progress` maps period keys to counts. Keys accumulate monotonically; old
/// periods are never read once over, and never purged (kept for future
/// history charts rather than pruned on a guess).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitGoal {
    /// Stable identifier.
    pub id: Uuid,
    /// User-facing title, e.g. "Drink 8 glasses of water".
    pub title: String,
    /// Bucketing period.
    pub period: HabitPeriod,
    /// Target count per period; always positive.
    pub target: f64,
    /// Per-period progress counters; every value is >= 0.
    #[serde(default)]
    pub progress: HashMap<String, f64>,
}

impl HabitGoal {
    /// Create a habit goal with an empty progress map.
    pub fn new(title: impl Into<String>, period: HabitPeriod, target: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            period,
            target,
            progress: HashMap::new(),
        }
    }
}
