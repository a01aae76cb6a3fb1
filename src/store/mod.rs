// ABOUTME: Storage collaborator contract the analytics service reads events through
// ABOUTME: Defines the async ActivityStore trait and helpers shared by implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Store
//!
//! The analytics engine never performs I/O. Callers fetch event lists from an
//! [`ActivityStore`] and pass them to the engine together with `now` and a
//! time zone. Records arrive already deserialized; malformed ones are kept
//! and dropped later by the engine.

mod memory;

pub use memory::InMemoryStore;

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{ActivitySnapshot, Goal, PersonalRecordEvent, WeightEntry, WorkoutEvent};

/// Read-only access to a user's event lists
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Most recent `limit` workouts, newest first
    async fn list_workouts(&self, user_id: Uuid, limit: usize) -> AppResult<Vec<WorkoutEvent>>;

    /// Every personal-record event
    async fn list_personal_records(&self, user_id: Uuid) -> AppResult<Vec<PersonalRecordEvent>>;

    /// Most recent `limit` body-weight entries, newest first
    async fn list_weight_entries(&self, user_id: Uuid, limit: usize)
        -> AppResult<Vec<WeightEntry>>;

    /// Every goal
    async fn list_goals(&self, user_id: Uuid) -> AppResult<Vec<Goal>>;

    /// When the account was created, if known
    async fn account_created_at(&self, user_id: Uuid) -> AppResult<Option<DateTime<Utc>>>;
}

/// Per-request list limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimits {
    /// Workouts fetched
    pub workouts: usize,
    /// Weight entries fetched
    pub weight_entries: usize,
}

/// Fetch every list for a user concurrently into one snapshot
///
/// # Errors
///
/// Returns the first store error encountered
pub async fn fetch_snapshot(
    store: &dyn ActivityStore,
    user_id: Uuid,
    limits: ListLimits,
) -> AppResult<ActivitySnapshot> {
    let (workouts, personal_records, weight_entries, goals, account_created_at) = tokio::try_join!(
        store.list_workouts(user_id, limits.workouts),
        store.list_personal_records(user_id),
        store.list_weight_entries(user_id, limits.weight_entries),
        store.list_goals(user_id),
        store.account_created_at(user_id),
    )?;

    let snapshot = ActivitySnapshot {
        user_id,
        account_created_at,
        workouts,
        personal_records,
        weight_entries,
        goals,
    };
    debug!(
        user_id = %user_id,
        events = snapshot.event_count(),
        "Fetched activity snapshot"
    );
    Ok(snapshot)
}

/// Newest `limit` items; undated items sort last
pub(crate) fn most_recent<T: Clone>(
    items: &[T],
    limit: usize,
    occurred_at: impl Fn(&T) -> Option<DateTime<Utc>>,
) -> Vec<T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    // Option orders None first, so reversing puts undated items last
    sorted.sort_by_key(|item| Reverse(occurred_at(item)));
    sorted.into_iter().take(limit).cloned().collect()
}
