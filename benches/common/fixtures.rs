// ABOUTME: Benchmark fixtures generating realistic training logs
// ABOUTME: Deterministic workouts, personal records and weight entries for reproducible timings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures.
//!
//! Every generator is anchored at [`base_date`] so runs are comparable
//! across machines and days.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_strength::models::{
    ActivitySnapshot, ExerciseEntry, PersonalRecordEvent, SetEntry, WeightEntry, WorkoutEvent,
    WorkoutKind,
};
use uuid::Uuid;

const EXERCISES: [&str; 8] = [
    "Squat",
    "Bench Press",
    "Deadlift",
    "Overhead Press",
    "Barbell Row",
    "Leg Press",
    "Bicep Curl",
    "Tricep Pushdown",
];

/// Predefined history lengths
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Three months of training
    Small,
    /// Two years of training
    Medium,
    /// Ten years of daily logging
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn workouts(self) -> usize {
        match self {
            Self::Small => 60,
            Self::Medium => 500,
            Self::Large => 3_650,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "60_workouts",
            Self::Medium => "500_workouts",
            Self::Large => "3650_workouts",
        }
    }
}

/// Fixed evaluation instant
#[must_use]
pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 18, 12, 0, 0).unwrap()
}

#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn generate_workout(index: usize) -> WorkoutEvent {
    // Skip every seventh day so streaks break regularly
    let day_offset = (index + index / 6) as i64;
    let occurred_at = base_date() - Duration::days(day_offset) - Duration::hours((index % 5) as i64);

    if index % 4 == 3 {
        return WorkoutEvent::new(format!("w{index}"), occurred_at, WorkoutKind::Cardio)
            .with_duration(25.0 + (index % 20) as f64);
    }

    let mut workout = WorkoutEvent::new(format!("w{index}"), occurred_at, WorkoutKind::Strength)
        .with_duration(40.0 + (index % 30) as f64);
    for slot in 0..4 {
        let name = EXERCISES[(index + slot) % EXERCISES.len()];
        let weight = 40.0 + ((index * 7 + slot * 13) % 120) as f64;
        let sets = (0..4).map(|set| SetEntry::new(5 + set, weight)).collect();
        workout = workout.with_exercise(ExerciseEntry::new(name, sets));
    }
    workout
}

/// Workouts going back from [`base_date`]
#[must_use]
pub fn generate_workouts(size: HistorySize) -> Vec<WorkoutEvent> {
    (0..size.workouts()).map(generate_workout).collect()
}

/// One personal record for every fifth workout
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn generate_records(size: HistorySize) -> Vec<PersonalRecordEvent> {
    (0..size.workouts() / 5)
        .map(|index| {
            PersonalRecordEvent::new(
                format!("pr{index}"),
                EXERCISES[index % EXERCISES.len()],
                60.0 + (index % 50) as f64 * 2.5,
                1 + (index % 8) as u32,
                base_date() - Duration::days((index * 5) as i64),
            )
        })
        .collect()
}

/// A weigh-in every third day
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn generate_weights(size: HistorySize) -> Vec<WeightEntry> {
    (0..size.workouts() / 3)
        .map(|index| {
            WeightEntry::new(
                format!("bw{index}"),
                85.0 - (index % 40) as f64 * 0.1,
                base_date() - Duration::days((index * 3) as i64),
            )
        })
        .collect()
}

/// Full snapshot for one user
#[must_use]
pub fn generate_snapshot(size: HistorySize) -> ActivitySnapshot {
    let mut snapshot = ActivitySnapshot::new(Uuid::from_u128(1000));
    snapshot.account_created_at = Some(base_date() - Duration::days(4_000));
    snapshot.workouts = generate_workouts(size);
    snapshot.personal_records = generate_records(size);
    snapshot.weight_entries = generate_weights(size);
    snapshot
}
