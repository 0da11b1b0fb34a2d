// ABOUTME: Integration tests for the JSON file store and engine persistence
// ABOUTME: Covers reload round-trips, corrupted state recovery, and export/import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

mod common;

use anyhow::Result;
use common::{fixed_now, general_goal, init_test_logging};
use fitplan_core::engine::{ExportBundle, PlanEngine};
use fitplan_core::models::HabitPeriod;
use fitplan_core::store::{JsonFileStore, MemoryStore, Store};

#[test]
fn engine_state_survives_a_reload() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fitplan.json");
    let now = fixed_now();

    let habit_id = {
        let mut engine = PlanEngine::new(JsonFileStore::open(&path));
        engine.set_primary_goal(general_goal(3))?;
        engine.regenerate_plan(now)?;
        let id = engine.add_habit_goal("Water", HabitPeriod::Daily, 8.0)?;
        engine.inc_progress(id, 5.0, now)?;
        id
    };

    let engine = PlanEngine::new(JsonFileStore::open(&path));
    assert!(engine.primary_goal().is_some());
    assert_eq!(engine.plan().map(|plan| plan.days.len()), Some(14));
    assert_eq!(engine.current_progress(habit_id, now), Some(5.0));
    Ok(())
}

#[test]
fn corrupted_store_file_starts_clean() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fitplan.json");
    std::fs::write(&path, "{ not json at all")?;

    let mut engine = PlanEngine::new(JsonFileStore::open(&path));
    assert!(engine.primary_goal().is_none());
    assert!(engine.routines().is_empty());

    // The store is usable immediately after recovery
    engine.seed_if_empty()?;
    assert_eq!(engine.routines().len(), 1);
    Ok(())
}

#[test]
fn malformed_single_key_substitutes_default() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fitplan.json");
    // Sessions key holds the wrong shape; everything else is absent
    std::fs::write(&path, r#"{"bf:sessions": {"oops": true}}"#)?;

    let engine = PlanEngine::new(JsonFileStore::open(&path));
    assert!(engine.sessions().is_empty());
    Ok(())
}

#[test]
fn export_import_round_trip_abandons_active_session() -> Result<()> {
    init_test_logging();
    let now = fixed_now();

    let mut source = PlanEngine::new(MemoryStore::new());
    source.seed_if_empty()?;
    let routine_id = source
        .routines()
        .iter()
        .next()
        .map(|r| r.id.clone())
        .ok_or_else(|| anyhow::anyhow!("seed routine missing"))?;
    source.start_routine(&routine_id, now)?;
    source.end_workout(now)?;
    let bundle = source.export(now);

    let mut target = PlanEngine::new(MemoryStore::new());
    target.generate_today(now)?; // leaves an active session behind
    target.import(bundle)?;

    assert_eq!(target.routines().len(), 1);
    assert_eq!(target.sessions().len(), 1);
    assert!(target.active_session().is_none());
    Ok(())
}

#[test]
fn export_bundle_is_plain_json() -> Result<()> {
    init_test_logging();
    let now = fixed_now();
    let mut engine = PlanEngine::new(MemoryStore::new());
    engine.seed_if_empty()?;

    let bundle = engine.export(now);
    let json = serde_json::to_string_pretty(&bundle)?;
    let back: ExportBundle = serde_json::from_str(&json)?;
    assert_eq!(back.routines.len(), 1);
    assert_eq!(back.exported_at, now);
    Ok(())
}

#[test]
fn reset_clears_state_and_reseeds() -> Result<()> {
    init_test_logging();
    let now = fixed_now();
    let mut engine = PlanEngine::new(MemoryStore::new());

    engine.set_primary_goal(general_goal(3))?;
    engine.regenerate_plan(now)?;
    engine.add_habit_goal("Water", HabitPeriod::Daily, 8.0)?;
    engine.generate_today(now)?;

    engine.reset()?;
    assert!(engine.primary_goal().is_none());
    assert!(engine.plan().is_none());
    assert!(engine.habit_goals().is_empty());
    assert!(engine.sessions().is_empty());
    assert!(engine.active_session().is_none());
    // Reset leaves the sample routine in place
    assert_eq!(engine.routines().len(), 1);
    Ok(())
}

#[test]
fn file_store_save_replaces_document_without_leftovers() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.json");

    let mut store = JsonFileStore::open(&path);
    store.save("k", &1u32)?;
    store.save("k", &2u32)?;

    // The rename-based write leaves only the final document behind
    let mut names: Vec<_> = std::fs::read_dir(dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .collect();
    names.sort();
    assert_eq!(names, vec![std::ffi::OsString::from("store.json")]);

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.load("k", 0u32), 2);
    Ok(())
}

#[test]
fn file_store_remove_persists() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.json");

    let mut store = JsonFileStore::open(&path);
    store.save("k", &42u32)?;
    store.remove("k")?;

    let reopened = JsonFileStore::open(&path);
    let value: u32 = reopened.load("k", 7);
    assert_eq!(value, 7);
    Ok(())
}
