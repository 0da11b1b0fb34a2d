// ABOUTME: Goal-driven workout plan and habit progress engine
// ABOUTME: Routine synthesis, 14-day plan projection, and period-bucketed progress tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! The plan and progress engine behind a local-first workout logger. Given a
//! user profile (equipment, session duration), a primary fitness goal, an
//! optional secondary focus, and a set of recurring habit goals, the engine:
//!
//! - deterministically synthesizes routines tailored to goal, equipment, and
//!   time budget ([`synthesis`]);
//! - projects those routines onto a rolling 14-day calendar window according
//!   to a cadence derived from the goal's weekly frequency ([`plan_builder`]);
//! - tracks per-period habit progress and a derived consistency streak
//!   ([`progress`], [`periods`]).
//!
//! Everything is synchronous and single-writer; persistence goes through the
//! pluggable [`store::Store`] boundary and rendering is the host's problem.
//!
//! ## Quick start
//!
//! ```
//! use chrono::Utc;
//! use fitplan_core::engine::PlanEngine;
//! use fitplan_core::models::{GoalKind, PrimaryGoal};
//! use fitplan_core::store::MemoryStore;
//!
//! let mut engine = PlanEngine::new(MemoryStore::new());
//! engine.set_primary_goal(PrimaryGoal {
//!     kind: GoalKind::Pushups { max_pushups: 10, best_pushups: None },
//!     duration_min: 30,
//!     days_per_week: 3,
//!     created_at: Utc::now(),
//! })?;
//!
//! let plan = engine.regenerate_plan(Utc::now())?;
//! assert_eq!(plan.days.len(), 14);
//! # Ok::<(), fitplan_core::errors::EngineError>(())
//! ```

/// Engine-wide constants organized by domain
pub mod constants;

/// Planner configuration with serde-backed tunables
pub mod config;

/// Error types distinguishing invalid input, preconditions, and storage failures
pub mod errors;

/// Core data models: profile, goals, routines, plan, sessions
pub mod models;

/// Period key derivation for day/week/month progress buckets
pub mod periods;

/// Habit progress counters and the consistency streak
pub mod progress;

/// Deterministic routine synthesis from profile, goals, and equipment
pub mod synthesis;

/// Rolling 14-day plan projection over the synthesizer
pub mod plan_builder;

/// Persistence boundary with in-memory and JSON-file backends
pub mod store;

/// The `PlanEngine` aggregate tying profile, goals, plan, and sessions together
pub mod engine;
