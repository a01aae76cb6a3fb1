// ABOUTME: Per-user snapshot of every event list the store holds
// ABOUTME: Serialized form used by the in-memory store and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{lenient, Goal, PersonalRecordEvent, WeightEntry, WorkoutEvent};

/// Everything the store knows about one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    /// Owner of the events
    pub user_id: Uuid,
    /// Account creation time, used for account-age achievements
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub account_created_at: Option<DateTime<Utc>>,
    /// Completed workouts in any order
    #[serde(default)]
    pub workouts: Vec<WorkoutEvent>,
    /// Personal-record events in any order
    #[serde(default)]
    pub personal_records: Vec<PersonalRecordEvent>,
    /// Body-weight entries in any order
    #[serde(default)]
    pub weight_entries: Vec<WeightEntry>,
    /// Goals
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl ActivitySnapshot {
    /// Empty snapshot for a user
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Total number of events across all lists
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.workouts.len()
            + self.personal_records.len()
            + self.weight_entries.len()
            + self.goals.len()
    }
}
