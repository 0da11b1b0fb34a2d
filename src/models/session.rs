// ABOUTME: Workout session model with per-exercise logged sets
// ABOUTME: Streak computation reads only the ended_at timestamps from these records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged set for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Load in pounds; zero for bodyweight work.
    pub weight_lbs: f64,
    /// Repetitions performed.
    pub reps: u32,
    /// When the set was logged.
    pub ts: DateTime<Utc>,
}

/// A single workout session against a routine.
///
/// `entries` maps exercise ids to logged sets. A session with `ended_at` set
/// counts its end day toward the consistency streak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Stable identifier.
    pub id: Uuid,
    /// Routine this session was started from.
    pub routine_id: String,
    /// Session start time.
    pub started_at: DateTime<Utc>,
    /// Session end time; `None` while in progress.
    pub ended_at: Option<DateTime<Utc>>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Logged sets per exercise id.
    #[serde(default)]
    pub entries: HashMap<Uuid, Vec<SetEntry>>,
}

impl Session {
    /// Start a new session against a routine.
    pub fn start(routine_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            routine_id: routine_id.into(),
            started_at: now,
            ended_at: None,
            notes: String::new(),
            entries: HashMap::new(),
        }
    }

    /// True while the session has not been ended.
    pub const fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Append a set for an exercise.
    pub fn log_set(&mut self, exercise_id: Uuid, weight_lbs: f64, reps: u32, now: DateTime<Utc>) {
        self.entries.entry(exercise_id).or_default().push(SetEntry {
            weight_lbs,
            reps,
            ts: now,
        });
    }

    /// Delete a set by index; out-of-range indices are a no-op.
    pub fn delete_set(&mut self, exercise_id: Uuid, index: usize) {
        if let Some(sets) = self.entries.get_mut(&exercise_id) {
            if index < sets.len() {
                sets.remove(index);
            }
        }
    }
}
