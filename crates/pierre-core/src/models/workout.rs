// ABOUTME: Completed workout events with exercises and sets
// ABOUTME: Provides WorkoutEvent, ExerciseEntry, SetEntry and WorkoutKind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{lenient, non_negative};

/// Kind of workout as recorded by the logging UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Resistance training
    #[default]
    Strength,
    /// Endurance training
    Cardio,
}

impl WorkoutKind {
    /// Stable identifier used in configuration keys and tool output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
        }
    }
}

impl<'de> Deserialize<'de> for WorkoutKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Anything that is not recognisably cardio is treated as strength
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw.as_ref().and_then(Value::as_str) {
            Some(kind) if kind.trim().eq_ignore_ascii_case("cardio") => Self::Cardio,
            _ => Self::Strength,
        })
    }
}

/// A single completed set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetEntry {
    /// Repetitions performed
    #[serde(default, deserialize_with = "lenient::count_u32")]
    pub reps: u32,
    /// Load in the user's unit (kg by convention)
    #[serde(default, deserialize_with = "lenient::non_negative_f64")]
    pub weight: f64,
}

impl SetEntry {
    /// Create a set, clamping invalid weights to zero
    #[must_use]
    pub fn new(reps: u32, weight: f64) -> Self {
        Self {
            reps,
            weight: non_negative(weight),
        }
    }

    /// Weight with invalid values mapped to zero
    #[must_use]
    pub fn effective_weight(&self) -> f64 {
        non_negative(self.weight)
    }

    /// Volume of this set (`weight * reps`)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.effective_weight() * f64::from(self.reps)
    }
}

/// An exercise performed within a workout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Free-text exercise name
    #[serde(default)]
    pub name: String,
    /// Completed sets in logged order
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
    /// Create an exercise with the given sets
    #[must_use]
    pub fn new(name: impl Into<String>, sets: Vec<SetEntry>) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }

    /// Volume across all sets
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }
}

/// A completed workout
///
/// Produced by the external store. `occurred_at` is `None` when the stored
/// timestamp was missing or unparseable; such events are excluded from every
/// aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEvent {
    /// Store identifier
    #[serde(default)]
    pub id: String,
    /// When the workout happened
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient::non_negative_f64")]
    pub duration_minutes: f64,
    /// Strength or cardio
    #[serde(default)]
    pub kind: WorkoutKind,
    /// Exercises in logged order
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutEvent {
    /// Create a workout with no exercises and zero duration
    #[must_use]
    pub fn new(id: impl Into<String>, occurred_at: DateTime<Utc>, kind: WorkoutKind) -> Self {
        Self {
            id: id.into(),
            occurred_at: Some(occurred_at),
            duration_minutes: 0.0,
            kind,
            exercises: Vec::new(),
            notes: None,
        }
    }

    /// Set the duration in minutes
    #[must_use]
    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.duration_minutes = non_negative(minutes);
        self
    }

    /// Append an exercise
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExerciseEntry) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Duration with invalid values mapped to zero
    #[must_use]
    pub fn effective_duration(&self) -> f64 {
        non_negative(self.duration_minutes)
    }

    /// Σ weight × reps across every set
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseEntry::volume).sum()
    }

    /// Number of logged sets
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Whether this event can take part in aggregation
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.occurred_at.is_some()
    }
}
