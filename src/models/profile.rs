// ABOUTME: User profile with equipment inventory and default session preferences
// ABOUTME: Includes the capability view computed once per synthesis pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::synthesis::DEFAULT_DURATION_MIN;
use crate::models::goal::GoalTag;

/// A piece of home-gym equipment the user has available.
///
/// `Bodyweight` is always implicitly available; normalization reinstates it if
/// the user empties the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentTag {
    /// No equipment at all; always a valid fallback.
    Bodyweight,
    /// Doorway or mounted pull-up bar.
    PullupBar,
    /// Adjustable or fixed dumbbells.
    Dumbbells,
    /// Barbell with plates.
    Barbell,
    /// Flat or adjustable bench.
    Bench,
    /// One or more kettlebells.
    Kettlebell,
    /// Resistance bands.
    ResistanceBands,
    /// Treadmill, bike, rower, or similar cardio machine.
    CardioMachine,
}

impl EquipmentTag {
    /// Stable slug used in deterministic routine ids.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Bodyweight => "bodyweight",
            Self::PullupBar => "pullup_bar",
            Self::Dumbbells => "dumbbells",
            Self::Barbell => "barbell",
            Self::Bench => "bench",
            Self::Kettlebell => "kettlebell",
            Self::ResistanceBands => "resistance_bands",
            Self::CardioMachine => "cardio_machine",
        }
    }
}

impl fmt::Display for EquipmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// User settings consulted when no primary goal overrides them.
///
/// Single instance per application session, mutated by the settings screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Default goal used when no primary goal is active.
    pub goal: GoalTag,
    /// Default session length in minutes.
    pub duration_min: u32,
    /// Available equipment; never empty after normalization.
    pub equipment: BTreeSet<EquipmentTag>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            goal: GoalTag::General,
            duration_min: DEFAULT_DURATION_MIN,
            equipment: BTreeSet::from([EquipmentTag::Bodyweight]),
        }
    }
}

impl Profile {
    /// Restore invariants after user edits: equipment falls back to bodyweight
    /// when emptied, duration to the default when zeroed.
    pub fn normalize(&mut self) {
        if self.equipment.is_empty() {
            self.equipment.insert(EquipmentTag::Bodyweight);
        }
        if self.duration_min == 0 {
            self.duration_min = DEFAULT_DURATION_MIN;
        }
    }

    /// Capability view over the equipment set.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_equipment(&self.equipment)
    }
}

/// Named equipment predicates, computed once per synthesis call instead of
/// repeated set-membership probes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    pullup_bar: bool,
    dumbbells: bool,
    barbell: bool,
    cardio_machine: bool,
}

impl Capabilities {
    /// Derive the capability flags from an equipment set.
    pub fn from_equipment(equipment: &BTreeSet<EquipmentTag>) -> Self {
        Self {
            pullup_bar: equipment.contains(&EquipmentTag::PullupBar),
            dumbbells: equipment.contains(&EquipmentTag::Dumbbells),
            barbell: equipment.contains(&EquipmentTag::Barbell),
            cardio_machine: equipment.contains(&EquipmentTag::CardioMachine),
        }
    }

    /// A pull-up bar is available.
    pub const fn has_pullup_bar(self) -> bool {
        self.pullup_bar
    }

    /// Dumbbells are available.
    pub const fn has_dumbbells(self) -> bool {
        self.dumbbells
    }

    /// A barbell is available.
    pub const fn has_barbell(self) -> bool {
        self.barbell
    }

    /// A cardio machine is available.
    pub const fn has_cardio_machine(self) -> bool {
        self.cardio_machine
    }
}
