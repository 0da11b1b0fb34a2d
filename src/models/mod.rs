// ABOUTME: Core data models for the plan and progress engine
// ABOUTME: Re-exports profile, goal, routine, plan, and session types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Data Models
//!
//! Plain structured records the engine operates on and the store persists.
//! All types are serde-serializable; persistence shape is plain JSON so that
//! exports stay readable and hand-editable.

mod goal;
mod plan;
mod profile;
mod routine;
mod session;

pub use goal::{
    GoalKind, GoalTag, HabitGoal, HabitPeriod, PrimaryGoal, SecondaryFocus, SecondaryGoal,
};
pub use plan::{DayKind, Plan, PlanDay};
pub use profile::{Capabilities, EquipmentTag, Profile};
pub use routine::{Exercise, Routine, RoutineCollection};
pub use session::{Session, SetEntry};
