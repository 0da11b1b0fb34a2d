// ABOUTME: Integration tests for the PlanEngine aggregate end to end
// ABOUTME: Plan lifecycle, habit goals, streaks, sessions, and wholesale regeneration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

mod common;

use anyhow::Result;
use chrono::Days;
use common::{fixed_now, general_goal, init_test_logging};
use fitplan_core::engine::PlanEngine;
use fitplan_core::errors::EngineError;
use fitplan_core::models::{DayKind, HabitPeriod};
use fitplan_core::store::MemoryStore;
use uuid::Uuid;

fn engine() -> PlanEngine<MemoryStore> {
    init_test_logging();
    PlanEngine::new(MemoryStore::new())
}

#[test]
fn plan_requires_a_primary_goal() {
    let mut engine = engine();
    let result = engine.regenerate_plan(fixed_now());
    assert!(matches!(result, Err(EngineError::NoPrimaryGoal)));
    assert!(engine.plan().is_none());
}

#[test]
fn regeneration_replaces_the_window_wholesale() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();

    engine.set_primary_goal(general_goal(3))?;
    engine.regenerate_plan(now)?;
    let cadence_2_workouts: Vec<_> = engine
        .plan()
        .map(|plan| plan.workout_dates().collect())
        .unwrap_or_default();
    assert_eq!(cadence_2_workouts.len(), 7);

    // Changing the weekly frequency invalidates the plan entirely
    engine.set_primary_goal(general_goal(1))?;
    assert!(engine.plan().is_none(), "stale plan must not survive");

    engine.regenerate_plan(now)?;
    let plan = engine.plan().ok_or_else(|| anyhow::anyhow!("no plan"))?;
    assert_eq!(plan.days.len(), 14);
    assert_eq!(plan.workout_dates().count(), 2); // cadence 7 -> days 0 and 7
    for day in &plan.days {
        let expected = (day.date - now.date_naive()).num_days() % 7 == 0;
        assert_eq!(day.is_workout(), expected);
    }
    Ok(())
}

#[test]
fn start_planned_workout_handles_rest_and_out_of_window() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();
    engine.set_primary_goal(general_goal(3))?;
    engine.regenerate_plan(now)?;

    // Day 1 is a rest day under cadence 2
    let rest_day = now.date_naive() + Days::new(1);
    assert!(engine.start_planned_workout(rest_day, now)?.is_none());

    // Outside the 14-day window
    let outside = now.date_naive() + Days::new(20);
    assert!(engine.start_planned_workout(outside, now)?.is_none());

    // Day 2 is a workout day: routine lands in the collection, session starts
    let workout_day = now.date_naive() + Days::new(2);
    let session_id = engine.start_planned_workout(workout_day, now)?;
    assert!(session_id.is_some());
    assert!(engine.active_session().is_some());
    assert_eq!(engine.routines().len(), 1);
    Ok(())
}

#[test]
fn generate_today_escape_hatch_on_rest_day() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();

    // No plan at all: a one-off routine is synthesized and started
    let session_id = engine.generate_today(now)?;
    assert_eq!(engine.active_session().map(|s| s.id), Some(session_id));
    assert_eq!(engine.routines().len(), 1);
    engine.end_workout(now)?;

    // With a plan whose today is a workout day, the planned routine is used
    engine.set_primary_goal(general_goal(3))?;
    engine.regenerate_plan(now)?;
    let planned_routine_id = engine
        .plan()
        .and_then(|plan| plan.days[0].routine.as_ref())
        .map(|routine| routine.id.clone())
        .ok_or_else(|| anyhow::anyhow!("day 0 must be a workout day"))?;

    engine.generate_today(now)?;
    let active = engine
        .active_session()
        .ok_or_else(|| anyhow::anyhow!("no active session"))?;
    assert_eq!(active.routine_id, planned_routine_id);
    Ok(())
}

#[test]
fn repeated_generation_deduplicates_routines() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();
    engine.set_primary_goal(general_goal(3))?;
    engine.regenerate_plan(now)?;

    engine.start_planned_workout(now.date_naive(), now)?;
    engine.end_workout(now)?;
    engine.regenerate_plan(now)?;
    engine.start_planned_workout(now.date_naive() + Days::new(2), now)?;

    // Replace-by-id: same goal/duration/equipment keeps one stored routine
    assert_eq!(engine.routines().len(), 1);
    Ok(())
}

#[test]
fn habit_goal_validation_and_progress_clamping() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();

    assert!(matches!(
        engine.add_habit_goal("Water", HabitPeriod::Daily, 0.0),
        Err(EngineError::InvalidHabitTarget(_))
    ));
    assert!(matches!(
        engine.add_habit_goal("  ", HabitPeriod::Daily, 8.0),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(engine.habit_goals().is_empty());

    let id = engine.add_habit_goal("Water", HabitPeriod::Daily, 8.0)?;
    engine.inc_progress(id, 3.0, now)?;
    assert_eq!(engine.current_progress(id, now), Some(3.0));
    assert_eq!(engine.progress_ratio(id, now), Some(3.0 / 8.0));

    engine.inc_progress(id, -10.0, now)?;
    assert_eq!(engine.current_progress(id, now), Some(0.0));
    Ok(())
}

#[test]
fn operations_on_deleted_habit_goal_are_noops() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();

    let id = engine.add_habit_goal("Stretch", HabitPeriod::Weekly, 3.0)?;
    engine.delete_habit_goal(id)?;

    // Pending increments from stale UI state must not raise or resurrect
    engine.inc_progress(id, 1.0, now)?;
    engine.set_progress(id, 5.0, now)?;
    assert!(engine.habit_goals().is_empty());
    assert_eq!(engine.current_progress(id, now), None);

    // Deleting twice is fine too
    engine.delete_habit_goal(id)?;
    engine.delete_habit_goal(Uuid::new_v4())?;
    Ok(())
}

#[test]
fn streak_counts_completed_sessions() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();
    engine.seed_if_empty()?;
    let routine_id = engine
        .routines()
        .iter()
        .next()
        .map(|r| r.id.clone())
        .ok_or_else(|| anyhow::anyhow!("seed routine missing"))?;

    // Sessions ended today and the two preceding days
    for days_back in [2u64, 1, 0] {
        let t = now - chrono::Duration::days(days_back as i64);
        engine.start_routine(&routine_id, t)?;
        engine.end_workout(t)?;
    }
    assert_eq!(engine.streak(now), 3);

    // Tomorrow without a session still shows 3 via the grace day
    let tomorrow = now + chrono::Duration::days(1);
    assert_eq!(engine.streak(tomorrow), 3);

    // Two days later the streak is broken
    let later = now + chrono::Duration::days(2);
    assert_eq!(engine.streak(later), 0);
    Ok(())
}

#[test]
fn session_set_logging_through_the_engine() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();
    engine.seed_if_empty()?;
    let (routine_id, exercise_id) = engine
        .routines()
        .iter()
        .next()
        .map(|r| (r.id.clone(), r.exercises[0].id))
        .ok_or_else(|| anyhow::anyhow!("seed routine missing"))?;

    engine.start_routine(&routine_id, now)?;
    engine.log_set(exercise_id, 135.0, 5, now)?;
    engine.log_set(exercise_id, 135.0, 4, now)?;
    engine.set_notes("felt strong")?;
    engine.delete_set(exercise_id, 0)?;

    let active = engine
        .active_session()
        .ok_or_else(|| anyhow::anyhow!("no active session"))?;
    assert_eq!(active.entries[&exercise_id].len(), 1);
    assert_eq!(active.notes, "felt strong");

    engine.end_workout(now)?;
    assert!(engine.active_session().is_none());

    // With no active session, set logging is a no-op
    engine.log_set(exercise_id, 95.0, 10, now)?;
    Ok(())
}

#[test]
fn update_routine_renames_and_redescribes() -> Result<()> {
    let mut engine = engine();
    let id = engine.create_routine("Push Day", "Chest and triceps")?;

    engine.update_routine(&id, "Push Day A", "Heavy chest focus")?;
    let routine = engine
        .routines()
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("routine missing"))?;
    assert_eq!(routine.name, "Push Day A");
    assert_eq!(routine.description, "Heavy chest focus");

    // A blank name is rejected without touching the routine
    assert!(matches!(
        engine.update_routine(&id, "  ", "x"),
        Err(EngineError::InvalidInput(_))
    ));
    let routine = engine
        .routines()
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("routine missing"))?;
    assert_eq!(routine.name, "Push Day A");

    // Unknown ids are a no-op
    engine.update_routine("nope", "X", "Y")?;
    assert_eq!(engine.routines().len(), 1);
    Ok(())
}

#[test]
fn start_unknown_routine_is_a_noop() -> Result<()> {
    let mut engine = engine();
    assert!(engine.start_routine("nope", fixed_now())?.is_none());
    assert!(engine.active_session().is_none());
    Ok(())
}

#[test]
fn plan_day_zero_starts_today() -> Result<()> {
    let mut engine = engine();
    let now = fixed_now();
    engine.set_primary_goal(general_goal(7))?;
    let plan = engine.regenerate_plan(now)?;

    assert_eq!(plan.days[0].date, now.date_naive());
    assert_eq!(plan.days[0].kind, DayKind::Workout);
    // Every day is a workout at 7 days/week
    assert!(plan.days.iter().all(fitplan_core::models::PlanDay::is_workout));
    Ok(())
}
