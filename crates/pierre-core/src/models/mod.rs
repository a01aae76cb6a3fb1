// ABOUTME: Core event models consumed by the strength analytics engine
// ABOUTME: Re-exports workouts, personal records, weight entries, goals and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Event records produced by the external document store and consumed
//! read-only by the analytics engine.
//!
//! ## Design Principles
//!
//! - **Lenient input**: numeric fields default to 0 when absent or invalid,
//!   timestamps become `None` instead of failing deserialization
//! - **Immutable**: events are never mutated by the engine
//! - **Serializable**: every model round-trips through JSON for the tool layer
//!
//! ## Core Models
//!
//! - `WorkoutEvent`: a completed workout with exercises and sets
//! - `PersonalRecordEvent`: a personal-best lift
//! - `WeightEntry`: a body-weight measurement
//! - `Goal`: a user goal with target and current values
//! - `ActivitySnapshot`: everything the store knows about one user

mod body_weight;
mod goal;
pub mod lenient;
mod record;
mod snapshot;
mod workout;

pub use body_weight::WeightEntry;
pub use goal::Goal;
pub use record::PersonalRecordEvent;
pub use snapshot::ActivitySnapshot;
pub use workout::{ExerciseEntry, SetEntry, WorkoutEvent, WorkoutKind};

/// Clamp a raw numeric field to a finite, non-negative value
#[must_use]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
