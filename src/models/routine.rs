// ABOUTME: Routine and exercise models plus the keyed routine collection
// ABOUTME: Generated routines carry deterministic ids enabling replace-by-id upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::goal::GoalTag;
use crate::models::profile::EquipmentTag;

/// A single exercise inside a routine.
///
/// Exercise ids are fresh per synthesis call; only the routine id is stable
/// across regenerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique per instance, not stable across regenerations.
    pub id: Uuid,
    /// Display name, including any prescribed sets/reps/holds.
    pub name: String,
}

impl Exercise {
    /// Create an exercise with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// An ordered list of exercises with a name and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// Deterministic slug for generated routines, uuid for authored ones.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description of intent.
    #[serde(default)]
    pub description: String,
    /// Ordered exercise list.
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Routine {
    /// Create a user-authored routine with a random id.
    pub fn authored(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            exercises: Vec::new(),
        }
    }

    /// Deterministic id for a generated routine.
    ///
    /// Identical `(goal, duration, equipment)` inputs always produce the
    /// identical id, which is what lets callers replace rather than duplicate
    /// a stored routine on regeneration.
    pub fn generated_id(
        goal: GoalTag,
        duration_min: u32,
        equipment: &BTreeSet<EquipmentTag>,
    ) -> String {
        let gear = equipment
            .iter()
            .map(|tag| tag.slug())
            .collect::<Vec<_>>()
            .join("+");
        format!("gen:{}:{duration_min}m:{gear}", goal.slug())
    }
}

/// Keyed routine container with replace-by-id upsert semantics.
///
/// Backed by a `Vec` to preserve the original "newest first" listing order;
/// lookups are linear over a handful of routines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineCollection {
    routines: Vec<Routine>,
}

impl RoutineCollection {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by id. An existing routine is replaced in place;
    /// a new one is inserted at the front.
    pub fn upsert(&mut self, routine: Routine) {
        if let Some(slot) = self.routines.iter_mut().find(|r| r.id == routine.id) {
            *slot = routine;
        } else {
            self.routines.insert(0, routine);
        }
    }

    /// Look up a routine by id.
    pub fn get(&self, id: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Routine> {
        self.routines.iter_mut().find(|r| r.id == id)
    }

    /// Remove a routine by id; absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<Routine> {
        let idx = self.routines.iter().position(|r| r.id == id)?;
        Some(self.routines.remove(idx))
    }

    /// Routines in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Routine> {
        self.routines.iter()
    }

    /// Number of stored routines.
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    /// True when no routines are stored.
    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }
}

impl FromIterator<Routine> for RoutineCollection {
    fn from_iter<I: IntoIterator<Item = Routine>>(iter: I) -> Self {
        Self {
            routines: iter.into_iter().collect(),
        }
    }
}
