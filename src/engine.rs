// ABOUTME: The PlanEngine aggregate owning profile, goals, routines, plan, and sessions
// ABOUTME: Every mutating operation is one read-modify-persist unit against the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Plan Engine
//!
//! The explicit context object for the goal-driven plan and progress engine.
//! It owns the single user profile, the active goals, the routine collection,
//! the cached 14-day plan, and the session history, persisting each slice
//! through a [`Store`] backend under its own key.
//!
//! Single logical writer: each mutating method updates memory and persists
//! the touched slices before returning. Operations on stale references
//! (deleted habit goals, dates outside the plan window) are silent no-ops.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::constants::storage_keys as keys;
use crate::errors::{EngineError, Result};
use crate::models::{
    Exercise, HabitGoal, HabitPeriod, Plan, PrimaryGoal, Profile, Routine, RoutineCollection,
    SecondaryGoal, Session,
};
use crate::plan_builder::build_plan;
use crate::progress;
use crate::store::Store;
use crate::synthesis::synthesize;

/// Snapshot of user data for export; round-trips through plain JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    /// When the export was taken.
    pub exported_at: DateTime<Utc>,
    /// All stored routines.
    pub routines: RoutineCollection,
    /// Full session history.
    pub sessions: Vec<Session>,
}

/// The goal-driven plan and progress engine.
///
/// Generic over the [`Store`] backend; all state is loaded once at
/// construction and written back slice-by-slice as operations mutate it.
#[derive(Debug)]
pub struct PlanEngine<S: Store> {
    store: S,
    config: PlannerConfig,

    profile: Profile,
    primary: Option<PrimaryGoal>,
    secondary: Option<SecondaryGoal>,
    habits: Vec<HabitGoal>,
    routines: RoutineCollection,
    plan: Option<Plan>,
    sessions: Vec<Session>,
    active_session_id: Option<Uuid>,
}

impl<S: Store> PlanEngine<S> {
    /// Load engine state from the store with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, PlannerConfig::default())
    }

    /// Load engine state from the store with explicit configuration.
    pub fn with_config(store: S, config: PlannerConfig) -> Self {
        let mut profile: Profile = store.load(keys::PROFILE, Profile::default());
        profile.normalize();

        Self {
            primary: store.load(keys::PRIMARY_GOAL, None),
            secondary: store.load(keys::SECONDARY_GOAL, None),
            habits: store.load(keys::HABIT_GOALS, Vec::new()),
            routines: store.load(keys::ROUTINES, RoutineCollection::new()),
            plan: store.load(keys::PLAN, None),
            sessions: store.load(keys::SESSIONS, Vec::new()),
            active_session_id: store.load(keys::ACTIVE_SESSION, None),
            profile,
            store,
            config,
        }
    }

    /// Install a sample routine when the collection is empty, so a fresh
    /// install has something to start.
    pub fn seed_if_empty(&mut self) -> Result<()> {
        if !self.routines.is_empty() {
            return Ok(());
        }
        let routine = Routine {
            id: Uuid::new_v4().to_string(),
            name: "Full Body (Sample)".to_owned(),
            description: "Edit this routine to match your workout.".to_owned(),
            exercises: vec![
                Exercise::new("Bench Press"),
                Exercise::new("Lat Pulldown"),
                Exercise::new("Squat"),
            ],
        };
        self.routines.upsert(routine);
        self.save_routines()
    }

    // ------------------------------------------------------------------
    // Profile and goals
    // ------------------------------------------------------------------

    /// Current profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Apply user edits to the profile; invariants are restored before persisting.
    pub fn update_profile(&mut self, edit: impl FnOnce(&mut Profile)) -> Result<()> {
        edit(&mut self.profile);
        self.profile.normalize();
        self.store.save(keys::PROFILE, &self.profile)
    }

    /// Active primary goal, if any.
    pub fn primary_goal(&self) -> Option<&PrimaryGoal> {
        self.primary.as_ref()
    }

    /// Set or replace the primary goal.
    ///
    /// Replacing the goal invalidates the cached plan: the plan is cleared
    /// and must be regenerated on demand.
    pub fn set_primary_goal(&mut self, goal: PrimaryGoal) -> Result<()> {
        info!(goal = ?goal.kind.tag(), days_per_week = goal.days_per_week, "primary goal set");
        self.primary = Some(goal);
        self.plan = None;
        self.store.save(keys::PRIMARY_GOAL, &self.primary)?;
        self.store.save(keys::PLAN, &self.plan)
    }

    /// Clear the primary goal and the plan derived from it.
    pub fn clear_primary_goal(&mut self) -> Result<()> {
        self.primary = None;
        self.plan = None;
        self.store.save(keys::PRIMARY_GOAL, &self.primary)?;
        self.store.save(keys::PLAN, &self.plan)
    }

    /// Active secondary goal, if any.
    pub fn secondary_goal(&self) -> Option<&SecondaryGoal> {
        self.secondary.as_ref()
    }

    /// Set or replace the secondary goal. Purely additive, so the cached
    /// plan stays valid until the next regeneration.
    pub fn set_secondary_goal(&mut self, goal: Option<SecondaryGoal>) -> Result<()> {
        self.secondary = goal;
        self.store.save(keys::SECONDARY_GOAL, &self.secondary)
    }

    // ------------------------------------------------------------------
    // Habit goals and progress
    // ------------------------------------------------------------------

    /// All habit goals in creation order.
    pub fn habit_goals(&self) -> &[HabitGoal] {
        &self.habits
    }

    /// Create a habit goal. Rejects empty titles and non-positive targets
    /// without touching state.
    pub fn add_habit_goal(
        &mut self,
        title: impl Into<String>,
        period: HabitPeriod,
        target: f64,
    ) -> Result<Uuid> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EngineError::InvalidInput("habit title is required".into()));
        }
        if target <= 0.0 || !target.is_finite() {
            return Err(EngineError::InvalidHabitTarget(target));
        }

        let goal = HabitGoal::new(title, period, target);
        let id = goal.id;
        self.habits.push(goal);
        self.save_habits()?;
        Ok(id)
    }

    /// Delete a habit goal; unknown ids are a no-op.
    pub fn delete_habit_goal(&mut self, id: Uuid) -> Result<()> {
        let before = self.habits.len();
        self.habits.retain(|goal| goal.id != id);
        if self.habits.len() == before {
            debug!(%id, "delete of unknown habit goal ignored");
            return Ok(());
        }
        self.save_habits()
    }

    /// Store a progress value for the goal's current period, clamped at zero.
    /// Unresolvable ids are a silent no-op — stale UI state is expected.
    pub fn set_progress(&mut self, goal_id: Uuid, value: f64, now: DateTime<Utc>) -> Result<()> {
        let Some(goal) = self.habits.iter_mut().find(|goal| goal.id == goal_id) else {
            debug!(%goal_id, "progress write for unknown habit goal ignored");
            return Ok(());
        };
        progress::set_progress(goal, value, now);
        self.save_habits()
    }

    /// Add `delta` (possibly negative) to the goal's current-period counter.
    pub fn inc_progress(&mut self, goal_id: Uuid, delta: f64, now: DateTime<Utc>) -> Result<()> {
        let Some(goal) = self.habits.iter_mut().find(|goal| goal.id == goal_id) else {
            debug!(%goal_id, "progress increment for unknown habit goal ignored");
            return Ok(());
        };
        progress::inc_progress(goal, delta, now);
        self.save_habits()
    }

    /// Current-period progress for a habit goal; `None` for unknown ids.
    pub fn current_progress(&self, goal_id: Uuid, now: DateTime<Utc>) -> Option<f64> {
        self.habits
            .iter()
            .find(|goal| goal.id == goal_id)
            .map(|goal| progress::current_progress(goal, now))
    }

    /// Current-period progress ratio (`current / target`); `None` for unknown ids.
    pub fn progress_ratio(&self, goal_id: Uuid, now: DateTime<Utc>) -> Option<f64> {
        self.habits
            .iter()
            .find(|goal| goal.id == goal_id)
            .map(|goal| progress::progress_ratio(goal, now))
    }

    /// Consecutive-day consistency streak over completed sessions.
    pub fn streak(&self, now: DateTime<Utc>) -> u32 {
        progress::compute_streak(&self.sessions, now)
    }

    // ------------------------------------------------------------------
    // Plan
    // ------------------------------------------------------------------

    /// The cached plan, if one has been generated.
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Rebuild the 14-day plan from the current profile and goals,
    /// replacing any prior plan wholesale.
    pub fn regenerate_plan(&mut self, now: DateTime<Utc>) -> Result<&Plan> {
        let plan = build_plan(
            &self.profile,
            self.primary.as_ref(),
            self.secondary.as_ref(),
            now,
            &self.config.synthesis,
        )?;
        info!(generated_at = %plan.generated_at, "plan regenerated");
        self.store.save(keys::PLAN, &Some(&plan))?;
        Ok(self.plan.insert(plan))
    }

    /// Start the planned workout for calendar date `date`.
    ///
    /// Rest days, dates outside the window, and a missing plan are all
    /// no-ops returning `Ok(None)`. On a workout day the day's routine is
    /// upserted into the collection (replace-by-id) and a session is started
    /// against it.
    pub fn start_planned_workout(
        &mut self,
        date: chrono::NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Option<Uuid>> {
        let Some(routine) = self
            .plan
            .as_ref()
            .and_then(|plan| plan.day_on(date))
            .and_then(|day| day.routine.clone())
        else {
            debug!(%date, "no planned workout for date, ignoring start");
            return Ok(None);
        };

        let routine_id = routine.id.clone();
        self.routines.upsert(routine);
        self.save_routines()?;
        self.start_session(routine_id, now).map(Some)
    }

    /// Start today's workout, falling back to a one-off synthesized routine.
    ///
    /// If today is a workout day in the current plan, that workout starts.
    /// If today is a rest day or no plan exists, a routine is synthesized
    /// directly from the profile and goals and started — the user is never
    /// blocked by the cadence.
    pub fn generate_today(&mut self, now: DateTime<Utc>) -> Result<Uuid> {
        if let Some(session_id) = self.start_planned_workout(now.date_naive(), now)? {
            return Ok(session_id);
        }

        let routine = synthesize(
            &self.profile,
            self.primary.as_ref(),
            self.secondary.as_ref(),
            &self.config.synthesis,
        );
        debug!(routine_id = %routine.id, "one-off routine synthesized for today");
        let routine_id = routine.id.clone();
        self.routines.upsert(routine);
        self.save_routines()?;
        self.start_session(routine_id, now)
    }

    // ------------------------------------------------------------------
    // Routines
    // ------------------------------------------------------------------

    /// The routine collection.
    pub fn routines(&self) -> &RoutineCollection {
        &self.routines
    }

    /// Author a new empty routine; returns its id.
    pub fn create_routine(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidInput("routine name is required".into()));
        }
        let routine = Routine::authored(name, description);
        let id = routine.id.clone();
        self.routines.upsert(routine);
        self.save_routines()?;
        Ok(id)
    }

    /// Rename a routine and replace its description; unknown ids are a no-op.
    pub fn update_routine(
        &mut self,
        id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidInput("routine name is required".into()));
        }
        let Some(routine) = self.routines.get_mut(id) else {
            return Ok(());
        };
        routine.name = name;
        routine.description = description.into();
        self.save_routines()
    }

    /// Delete a routine; unknown ids are a no-op.
    pub fn delete_routine(&mut self, id: &str) -> Result<()> {
        if self.routines.remove(id).is_none() {
            return Ok(());
        }
        self.save_routines()
    }

    /// Append an exercise to a routine; unknown routine ids are a no-op.
    pub fn add_exercise(&mut self, routine_id: &str, name: impl Into<String>) -> Result<()> {
        let Some(routine) = self.routines.get_mut(routine_id) else {
            return Ok(());
        };
        routine.exercises.push(Exercise::new(name));
        self.save_routines()
    }

    /// Rename an exercise; unknown ids are a no-op.
    pub fn rename_exercise(
        &mut self,
        routine_id: &str,
        exercise_id: Uuid,
        name: impl Into<String>,
    ) -> Result<()> {
        let Some(exercise) = self
            .routines
            .get_mut(routine_id)
            .and_then(|routine| routine.exercises.iter_mut().find(|ex| ex.id == exercise_id))
        else {
            return Ok(());
        };
        exercise.name = name.into();
        self.save_routines()
    }

    /// Remove an exercise from a routine; logged sets in past sessions keep
    /// referencing it by id and are untouched.
    pub fn remove_exercise(&mut self, routine_id: &str, exercise_id: Uuid) -> Result<()> {
        let Some(routine) = self.routines.get_mut(routine_id) else {
            return Ok(());
        };
        routine.exercises.retain(|ex| ex.id != exercise_id);
        self.save_routines()
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Session history, newest first.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// The in-progress session, if any.
    pub fn active_session(&self) -> Option<&Session> {
        let id = self.active_session_id?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Start a session against a stored routine; unknown routine ids are a
    /// no-op returning `Ok(None)`.
    pub fn start_routine(
        &mut self,
        routine_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Uuid>> {
        if self.routines.get(routine_id).is_none() {
            debug!(routine_id, "start of unknown routine ignored");
            return Ok(None);
        }
        self.start_session(routine_id.to_owned(), now).map(Some)
    }

    fn start_session(&mut self, routine_id: String, now: DateTime<Utc>) -> Result<Uuid> {
        let session = Session::start(routine_id, now);
        let id = session.id;
        self.sessions.insert(0, session);
        self.active_session_id = Some(id);
        self.save_sessions()?;
        self.save_active()?;
        info!(session_id = %id, "session started");
        Ok(id)
    }

    /// End the in-progress session; no active session is a no-op.
    pub fn end_workout(&mut self, now: DateTime<Utc>) -> Result<Option<Uuid>> {
        let Some(id) = self.active_session_id else {
            return Ok(None);
        };
        if let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) {
            session.ended_at = Some(now);
        }
        self.active_session_id = None;
        self.save_sessions()?;
        self.save_active()?;
        info!(session_id = %id, "session ended");
        Ok(Some(id))
    }

    /// Log a set against the active session; no active session is a no-op.
    pub fn log_set(
        &mut self,
        exercise_id: Uuid,
        weight_lbs: f64,
        reps: u32,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let Some(session) = self.active_session_mut() else {
            return Ok(());
        };
        session.log_set(exercise_id, weight_lbs, reps, now);
        self.save_sessions()
    }

    /// Delete a logged set from the active session by index.
    pub fn delete_set(&mut self, exercise_id: Uuid, index: usize) -> Result<()> {
        let Some(session) = self.active_session_mut() else {
            return Ok(());
        };
        session.delete_set(exercise_id, index);
        self.save_sessions()
    }

    /// Replace the active session's notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<()> {
        let Some(session) = self.active_session_mut() else {
            return Ok(());
        };
        session.notes = notes.into();
        self.save_sessions()
    }

    fn active_session_mut(&mut self) -> Option<&mut Session> {
        let id = self.active_session_id?;
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    // ------------------------------------------------------------------
    // Export / import / reset
    // ------------------------------------------------------------------

    /// Snapshot routines and session history for export.
    pub fn export(&self, now: DateTime<Utc>) -> ExportBundle {
        ExportBundle {
            exported_at: now,
            routines: self.routines.clone(),
            sessions: self.sessions.clone(),
        }
    }

    /// Replace routines and sessions wholesale from an export bundle.
    /// Any in-progress session is abandoned.
    pub fn import(&mut self, bundle: ExportBundle) -> Result<()> {
        info!(
            routines = bundle.routines.len(),
            sessions = bundle.sessions.len(),
            "importing data bundle"
        );
        self.routines = bundle.routines;
        self.sessions = bundle.sessions;
        self.active_session_id = None;
        self.save_routines()?;
        self.save_sessions()?;
        self.save_active()
    }

    /// Clear every persisted key and return to the seeded initial state.
    pub fn reset(&mut self) -> Result<()> {
        warn!("resetting all engine state");
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        self.profile = Profile::default();
        self.primary = None;
        self.secondary = None;
        self.habits.clear();
        self.routines = RoutineCollection::new();
        self.plan = None;
        self.sessions.clear();
        self.active_session_id = None;
        self.seed_if_empty()
    }

    // ------------------------------------------------------------------
    // Persistence helpers
    // ------------------------------------------------------------------

    fn save_habits(&mut self) -> Result<()> {
        self.store.save(keys::HABIT_GOALS, &self.habits)
    }

    fn save_routines(&mut self) -> Result<()> {
        self.store.save(keys::ROUTINES, &self.routines)
    }

    fn save_sessions(&mut self) -> Result<()> {
        self.store.save(keys::SESSIONS, &self.sessions)
    }

    fn save_active(&mut self) -> Result<()> {
        self.store.save(keys::ACTIVE_SESSION, &self.active_session_id)
    }
}
