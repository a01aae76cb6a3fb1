// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a pinned clock and event builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_strength`
//!
//! Every fixture is expressed relative to [`fixed_now`], a Wednesday, so
//! week boundaries and streak offsets stay stable.

use std::env;
use std::sync::{Arc, Once};

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use pierre_strength::models::{
    ActivitySnapshot, ExerciseEntry, Goal, PersonalRecordEvent, SetEntry, WeightEntry,
    WorkoutEvent, WorkoutKind,
};
use pierre_strength::store::InMemoryStore;
use pierre_strength::tools::ToolExecutionContext;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Wednesday 2025-06-18 12:00 UTC
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 18, 12, 0, 0).unwrap()
}

/// `fixed_now` shifted back by whole days
pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// Strength workout with one hour duration and no exercises
pub fn workout_days_ago(id: &str, days: i64) -> WorkoutEvent {
    WorkoutEvent::new(id, days_ago(days), WorkoutKind::Strength).with_duration(60.0)
}

/// Workouts on each listed day offset, one per day
pub fn workouts_on_days(offsets: &[i64]) -> Vec<WorkoutEvent> {
    offsets
        .iter()
        .map(|offset| workout_days_ago(&format!("w{offset}"), *offset))
        .collect()
}

/// Strength workout with a single exercise
pub fn lifting_workout(
    id: &str,
    at: DateTime<Utc>,
    exercise: &str,
    sets: &[(u32, f64)],
) -> WorkoutEvent {
    let sets = sets
        .iter()
        .map(|(reps, weight)| SetEntry::new(*reps, *weight))
        .collect();
    WorkoutEvent::new(id, at, WorkoutKind::Strength)
        .with_duration(45.0)
        .with_exercise(ExerciseEntry::new(exercise, sets))
}

/// Personal record event
pub fn record(
    id: &str,
    exercise: &str,
    weight: f64,
    reps: u32,
    at: DateTime<Utc>,
) -> PersonalRecordEvent {
    PersonalRecordEvent::new(id, exercise, weight, reps, at)
}

/// Body-weight entry
pub fn weight(id: &str, kg: f64, at: DateTime<Utc>) -> WeightEntry {
    WeightEntry::new(id, kg, at)
}

/// Open goal with an optional deadline
pub fn goal(id: &str, target: f64, current: f64, deadline: Option<DateTime<Utc>>) -> Goal {
    Goal {
        id: id.to_owned(),
        goal_type: "workouts".to_owned(),
        target_value: target,
        current_value: current,
        unit: "sessions".to_owned(),
        deadline,
        completed: false,
    }
}

/// A realistic month of training for one user
pub fn sample_snapshot(user_id: Uuid) -> ActivitySnapshot {
    let mut snapshot = ActivitySnapshot::new(user_id);
    snapshot.account_created_at = Some(days_ago(40));
    snapshot.workouts = vec![
        lifting_workout("w-today", days_ago(0), "Squat", &[(5, 100.0), (5, 100.0)]),
        lifting_workout("w-1", days_ago(1), "Bench Press", &[(5, 80.0)]),
        lifting_workout("w-2", days_ago(2), "Deadlift", &[(3, 140.0)]),
        WorkoutEvent::new("w-run", days_ago(5), WorkoutKind::Cardio).with_duration(30.0),
        lifting_workout("w-10", days_ago(10), "Squat", &[(5, 95.0)]),
    ];
    snapshot.personal_records = vec![
        record("pr-1", "Squat", 95.0, 5, days_ago(10)),
        record("pr-2", "Squat", 100.0, 5, days_ago(0)),
        record("pr-3", "Bench Press", 80.0, 5, days_ago(1)),
        record("pr-4", "Deadlift", 140.0, 3, days_ago(2)),
        record("pr-5", "Bicep Curl", 20.0, 10, days_ago(3)),
    ];
    snapshot.weight_entries = vec![
        weight("bw-1", 82.0, days_ago(20)),
        weight("bw-2", 81.2, days_ago(10)),
        weight("bw-3", 80.5, days_ago(1)),
    ];
    snapshot.goals = vec![goal("g-1", 12.0, 5.0, Some(days_ago(-10)))];
    snapshot
}

/// Store holding `sample_snapshot` and a context pinned to `fixed_now`
pub fn sample_context() -> (Uuid, ToolExecutionContext) {
    init_test_logging();
    let user_id = Uuid::new_v4();
    let store = InMemoryStore::from_snapshots([sample_snapshot(user_id)]);
    let context =
        ToolExecutionContext::new(user_id, Arc::new(store), Tz::UTC).with_now(fixed_now());
    (user_id, context)
}
