// ABOUTME: In-memory activity store backed by JSON snapshot files
// ABOUTME: Serves per-user event lists behind a tokio RwLock with most-recent-N limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::{most_recent, ActivityStore};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivitySnapshot, Goal, PersonalRecordEvent, WeightEntry, WorkoutEvent};

/// A snapshot file holds either one user or a list of users
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Many(Vec<ActivitySnapshot>),
    One(Box<ActivitySnapshot>),
}

/// Store holding whole per-user snapshots in memory
///
/// Cloning is cheap and clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshots: Arc<RwLock<HashMap<Uuid, ActivitySnapshot>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given snapshots
    #[must_use]
    pub fn from_snapshots(snapshots: impl IntoIterator<Item = ActivitySnapshot>) -> Self {
        let map = snapshots
            .into_iter()
            .map(|snapshot| (snapshot.user_id, snapshot))
            .collect();
        Self {
            snapshots: Arc::new(RwLock::new(map)),
        }
    }

    /// Load a JSON snapshot file (a single snapshot or an array of them)
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file cannot be read and a
    /// serialization error when it is not a valid snapshot document
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read snapshot {}", path.display())).with_source(e)
        })?;

        let snapshots = match serde_json::from_str::<SnapshotFile>(&raw)? {
            SnapshotFile::Many(list) => list,
            SnapshotFile::One(single) => vec![*single],
        };
        info!(
            path = %path.display(),
            users = snapshots.len(),
            "Loaded activity snapshot"
        );
        Ok(Self::from_snapshots(snapshots))
    }

    /// Insert or replace a user's snapshot
    pub async fn insert(&self, snapshot: ActivitySnapshot) {
        debug!(user_id = %snapshot.user_id, "Replacing snapshot");
        self.snapshots
            .write()
            .await
            .insert(snapshot.user_id, snapshot);
    }

    /// Known users in ascending order
    pub async fn user_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.snapshots.read().await.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The only user in the store, when there is exactly one
    pub async fn sole_user(&self) -> Option<Uuid> {
        let snapshots = self.snapshots.read().await;
        if snapshots.len() == 1 {
            snapshots.keys().next().copied()
        } else {
            None
        }
    }

    async fn with_snapshot<T>(
        &self,
        user_id: Uuid,
        read: impl FnOnce(&ActivitySnapshot) -> T + Send,
    ) -> AppResult<T> {
        let snapshots = self.snapshots.read().await;
        snapshots
            .get(&user_id)
            .map(read)
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))
    }
}

#[async_trait]
impl ActivityStore for InMemoryStore {
    async fn list_workouts(&self, user_id: Uuid, limit: usize) -> AppResult<Vec<WorkoutEvent>> {
        self.with_snapshot(user_id, |snapshot| {
            most_recent(&snapshot.workouts, limit, |workout| workout.occurred_at)
        })
        .await
    }

    async fn list_personal_records(&self, user_id: Uuid) -> AppResult<Vec<PersonalRecordEvent>> {
        self.with_snapshot(user_id, |snapshot| snapshot.personal_records.clone())
            .await
    }

    async fn list_weight_entries(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WeightEntry>> {
        self.with_snapshot(user_id, |snapshot| {
            most_recent(&snapshot.weight_entries, limit, |entry| entry.occurred_at)
        })
        .await
    }

    async fn list_goals(&self, user_id: Uuid) -> AppResult<Vec<Goal>> {
        self.with_snapshot(user_id, |snapshot| snapshot.goals.clone())
            .await
    }

    async fn account_created_at(&self, user_id: Uuid) -> AppResult<Option<DateTime<Utc>>> {
        self.with_snapshot(user_id, |snapshot| snapshot.account_created_at)
            .await
    }
}
