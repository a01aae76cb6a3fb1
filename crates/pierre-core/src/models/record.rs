// ABOUTME: Personal-record events, one per personal-best lift
// ABOUTME: Records are never mutated, only superseded by later better lifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// A personal-best lift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecordEvent {
    /// Store identifier
    #[serde(default)]
    pub id: String,
    /// Free-text exercise name
    #[serde(default)]
    pub exercise_name: String,
    /// Load lifted
    #[serde(default, deserialize_with = "lenient::non_negative_f64")]
    pub weight: f64,
    /// Repetitions at that load
    #[serde(default, deserialize_with = "lenient::count_u32")]
    pub reps: u32,
    /// When the lift happened
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl PersonalRecordEvent {
    /// Create a record event
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        exercise_name: impl Into<String>,
        weight: f64,
        reps: u32,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            exercise_name: exercise_name.into(),
            weight,
            reps,
            occurred_at: Some(occurred_at),
        }
    }

    /// Positive finite weight, positive reps, a date and a non-blank name
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weight.is_finite()
            && self.weight > 0.0
            && self.reps > 0
            && self.occurred_at.is_some()
            && !self.exercise_name.trim().is_empty()
    }
}
