// ABOUTME: Deterministic routine synthesis from profile, goals, and equipment
// ABOUTME: Fixed decision table per goal kind with equipment branches and baseline scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Routine Synthesizer
//!
//! Pure mapping `(profile, primary goal, secondary goal) -> Routine`.
//!
//! The dispatch is a fixed decision table keyed by goal kind; several templates
//! branch further on equipment capabilities. Two templates scale their working
//! sets from the goal's recorded baseline (`BarHang` holds, `Pushups` reps).
//!
//! Identical inputs yield an id-identical routine with the same exercise
//! names, which lets callers replace rather than duplicate on regeneration.
//! Exercise ids are fresh per call.

use crate::config::SynthesisConfig;
use crate::constants::synthesis::{
    DEFAULT_HANG_BASELINE_SEC, DEFAULT_PUSHUP_BASELINE, HANG_SETS_LONG, HANG_SETS_SHORT,
    LONG_HANG_BASELINE_SEC,
};
use crate::models::{
    Capabilities, Exercise, GoalKind, PrimaryGoal, Profile, Routine, SecondaryFocus, SecondaryGoal,
};

/// Synthesize a routine for the effective goal, duration, and equipment.
///
/// Effective goal falls back primary -> profile default; effective duration
/// falls back primary -> profile -> config default. Pure: persistence is the
/// caller's responsibility.
pub fn synthesize(
    profile: &Profile,
    primary: Option<&PrimaryGoal>,
    secondary: Option<&SecondaryGoal>,
    config: &SynthesisConfig,
) -> Routine {
    let kind = primary
        .map(|goal| goal.kind.clone())
        .unwrap_or_else(|| GoalKind::from(profile.goal));

    let duration_min = primary
        .map(|goal| goal.duration_min)
        .filter(|&minutes| minutes > 0)
        .or(Some(profile.duration_min).filter(|&minutes| minutes > 0))
        .unwrap_or(config.default_duration_min);

    let caps = profile.capabilities();

    let (name, description, mut names) = template(&kind, caps, config);

    let cap = config.exercise_cap(duration_min);
    names.truncate(cap);

    if names.len() < cap {
        if let Some(finisher) = secondary.and_then(|goal| finisher(goal.focus, caps)) {
            names.push(finisher);
        }
    }

    Routine {
        id: Routine::generated_id(kind.tag(), duration_min, &profile.equipment),
        name: name.to_owned(),
        description: description.to_owned(),
        exercises: names.into_iter().map(Exercise::new).collect(),
    }
}

/// The per-goal exercise template: routine name, description, ordered names.
fn template(
    kind: &GoalKind,
    caps: Capabilities,
    config: &SynthesisConfig,
) -> (&'static str, &'static str, Vec<String>) {
    match kind {
        GoalKind::RunFiveK { can_run_10_min, .. } => {
            let names = if *can_run_10_min {
                vec![
                    "Easy run — 15 min".to_owned(),
                    "Intervals — 6 × (1 min hard / 1 min easy)".to_owned(),
                    "Cool-down walk — 5 min".to_owned(),
                    "Calf raises — 3 × 15".to_owned(),
                ]
            } else {
                vec![
                    "Run/walk — 8 × (1 min run / 1 min walk)".to_owned(),
                    "Brisk walk — 10 min".to_owned(),
                    "Calf raises — 3 × 15".to_owned(),
                    "Plank — 3 × 30s".to_owned(),
                ]
            };
            ("5k Builder", "Progressive running toward a 5k.", names)
        }

        GoalKind::BarHang { .. } => {
            let baseline = kind.hang_baseline_sec(DEFAULT_HANG_BASELINE_SEC);
            let hold = scaled_hold_sec(baseline, config);
            let sets = if baseline >= LONG_HANG_BASELINE_SEC {
                HANG_SETS_LONG
            } else {
                HANG_SETS_SHORT
            };

            let mut names = vec![format!("Dead hang — {sets} × {hold}s hold")];
            if caps.has_pullup_bar() {
                names.push("Scapular pulls — 3 × 8".to_owned());
            }
            if caps.has_dumbbells() {
                names.push("Farmer hold — 3 × 30s".to_owned());
            }
            names.push("Forearm and wrist stretch — 2 min".to_owned());
            ("Grip & Hang", "Dead-hang duration work.", names)
        }

        GoalKind::LoseWeight { .. } => {
            let mut names = if caps.has_cardio_machine() {
                vec![
                    "Cardio machine — 20 min steady".to_owned(),
                    "Bodyweight squats — 3 × 15".to_owned(),
                ]
            } else {
                vec![
                    "Jumping jacks — 3 × 40".to_owned(),
                    "Bodyweight squats — 3 × 15".to_owned(),
                    "Mountain climbers — 3 × 20".to_owned(),
                ]
            };
            if caps.has_dumbbells() {
                names.push("Goblet squat — 3 × 12".to_owned());
            }
            names.push("Plank — 3 × 30s".to_owned());
            names.push("Brisk walk — 10 min".to_owned());
            (
                "Conditioning Circuit",
                "High-turnover circuit for energy expenditure.",
                names,
            )
        }

        GoalKind::Pushups { .. } => {
            let baseline = kind.pushup_baseline(DEFAULT_PUSHUP_BASELINE);
            let reps = scaled_reps(baseline, config);

            let mut names = vec![
                format!("Pushups — 5 × {reps}"),
                format!("Incline pushups — 2 × {reps}"),
            ];
            if caps.has_dumbbells() {
                names.push("Dumbbell row — 3 × 10".to_owned());
            }
            names.push("Plank — 3 × 30s".to_owned());
            (
                "Pushup Progression",
                "Volume work toward a bigger max set.",
                names,
            )
        }

        GoalKind::BuildMuscle => {
            let names = if caps.has_barbell() {
                vec![
                    "Barbell squat — 4 × 6".to_owned(),
                    "Barbell bench press — 4 × 6".to_owned(),
                    "Barbell row — 4 × 8".to_owned(),
                    "Overhead press — 3 × 8".to_owned(),
                    "Romanian deadlift — 3 × 8".to_owned(),
                    "Plank — 3 × 45s".to_owned(),
                ]
            } else if caps.has_dumbbells() {
                vec![
                    "Goblet squat — 4 × 10".to_owned(),
                    "Dumbbell bench press — 4 × 10".to_owned(),
                    "Dumbbell row — 4 × 10".to_owned(),
                    "Dumbbell shoulder press — 3 × 10".to_owned(),
                    "Dumbbell curl — 3 × 12".to_owned(),
                    "Plank — 3 × 45s".to_owned(),
                ]
            } else {
                let mut names = vec!["Pushups — 4 × max".to_owned()];
                if caps.has_pullup_bar() {
                    names.push("Pullups — 4 × max".to_owned());
                } else {
                    names.push("Doorframe rows — 4 × 10".to_owned());
                }
                names.push("Split squat — 3 × 10 each leg".to_owned());
                names.push("Pike pushups — 3 × 8".to_owned());
                names.push("Plank — 3 × 45s".to_owned());
                names
            };
            (
                "Hypertrophy Basics",
                "Compound-first strength volume.",
                names,
            )
        }

        GoalKind::General => {
            let mut names = vec![
                "Bodyweight squats — 3 × 12".to_owned(),
                "Pushups — 3 × 10".to_owned(),
            ];
            if caps.has_pullup_bar() {
                names.push("Pullups — 3 × max".to_owned());
            } else {
                names.push("Superman hold — 3 × 20s".to_owned());
            }
            names.push("Plank — 3 × 30s".to_owned());
            names.push("Jumping jacks — 3 × 30".to_owned());
            (
                "General Fitness",
                "Balanced full-body session.",
                names,
            )
        }
    }
}

/// Finisher exercise for a secondary focus; `None` when the equipment gate fails.
fn finisher(focus: SecondaryFocus, caps: Capabilities) -> Option<String> {
    match focus {
        SecondaryFocus::Steps => Some("Finisher: brisk walk — 10 min".to_owned()),
        SecondaryFocus::Zone2 => caps
            .has_cardio_machine()
            .then(|| "Finisher: zone 2 cardio machine — 10 min".to_owned()),
        SecondaryFocus::Mobility => Some("Finisher: mobility flow — 8 min".to_owned()),
        SecondaryFocus::Protein => Some("Finisher: log a high-protein meal".to_owned()),
    }
}

/// Per-set hang hold: `round(ratio × baseline)`, floored at the minimum hold.
fn scaled_hold_sec(baseline_sec: u32, config: &SynthesisConfig) -> u32 {
    let scaled = (config.baseline_work_ratio * f64::from(baseline_sec)).round() as u32;
    scaled.max(config.min_hang_hold_sec)
}

/// Per-set pushup target: `floor(ratio × baseline)`, floored at the minimum reps.
fn scaled_reps(baseline: u32, config: &SynthesisConfig) -> u32 {
    let scaled = (config.baseline_work_ratio * f64::from(baseline)).floor() as u32;
    scaled.max(config.min_pushup_reps)
}
