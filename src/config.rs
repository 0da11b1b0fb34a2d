// ABOUTME: Planner configuration for routine synthesis and plan building
// ABOUTME: Serde-backed tunables defaulting to the fixed constants module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Planner Configuration
//!
//! Tunable knobs for the synthesis and plan-building passes. Defaults reproduce
//! the fixed behavior described in the constants module; hosts that want a
//! different cap table or scaling ratio can deserialize an override.

use serde::{Deserialize, Serialize};

use crate::constants::synthesis;

/// Configuration for the plan and progress engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Routine synthesis tunables.
    pub synthesis: SynthesisConfig,
}

/// Tunables consumed by the routine synthesizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Session duration assumed when neither goal nor profile specifies one.
    pub default_duration_min: u32,
    /// Working-set fraction of a recorded baseline.
    pub baseline_work_ratio: f64,
    /// Floor for per-set hang holds, seconds.
    pub min_hang_hold_sec: u32,
    /// Floor for per-set pushup reps.
    pub min_pushup_reps: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            default_duration_min: synthesis::DEFAULT_DURATION_MIN,
            baseline_work_ratio: synthesis::BASELINE_WORK_RATIO,
            min_hang_hold_sec: synthesis::MIN_HANG_HOLD_SEC,
            min_pushup_reps: synthesis::MIN_PUSHUP_REPS,
        }
    }
}

impl SynthesisConfig {
    /// Exercise-count ceiling for a session of `duration_min` minutes.
    pub fn exercise_cap(&self, duration_min: u32) -> usize {
        if duration_min <= synthesis::SHORT_SESSION_MAX_MIN {
            synthesis::CAP_SHORT_SESSION
        } else if duration_min <= synthesis::MEDIUM_SESSION_MAX_MIN {
            synthesis::CAP_MEDIUM_SESSION
        } else {
            synthesis::CAP_LONG_SESSION
        }
    }
}
