// ABOUTME: Defines ToolExecutionContext which gives tools the user, store, clock and time zone
// ABOUTME: Replaces scattered parameter passing with a unified context object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context
//!
//! The engine never reads the system clock. The context is where `now` is
//! decided (a fixed instant in tests, the wall clock otherwise) together
//! with the user's time zone and the store to read from.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use pierre_analytics::AnalyticsConfig;
use uuid::Uuid;

use crate::constants::limits;
use crate::errors::AppResult;
use crate::models::ActivitySnapshot;
use crate::store::{fetch_snapshot, ActivityStore, ListLimits};

/// Context provided to every tool execution
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// User whose events are analyzed
    pub user_id: Uuid,
    /// Event source
    pub store: Arc<dyn ActivityStore>,
    /// Time zone for local day bucketing
    pub timezone: Tz,
    /// Engine heuristics
    pub analytics: Arc<AnalyticsConfig>,
    /// List limits applied when fetching from the store
    pub limits: ListLimits,
    /// Request ID for tracing
    pub request_id: Option<String>,
    now: Option<DateTime<Utc>>,
}

impl ToolExecutionContext {
    /// Create a context using the global analytics configuration
    #[must_use]
    pub fn new(user_id: Uuid, store: Arc<dyn ActivityStore>, timezone: Tz) -> Self {
        Self {
            user_id,
            store,
            timezone,
            analytics: Arc::new(AnalyticsConfig::global().clone()),
            limits: ListLimits {
                workouts: limits::DEFAULT_WORKOUT_LIMIT,
                weight_entries: limits::DEFAULT_WEIGHT_ENTRY_LIMIT,
            },
            request_id: None,
            now: None,
        }
    }

    /// Pin the evaluation instant
    #[must_use]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Use a specific analytics configuration
    #[must_use]
    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = Arc::new(analytics);
        self
    }

    /// Override the store list limits
    #[must_use]
    pub fn with_limits(mut self, limits: ListLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set request ID
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// The evaluation instant: the pinned one, else the wall clock
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// Fetch every event list for the context user
    ///
    /// # Errors
    ///
    /// Returns the store error when a list cannot be read
    pub async fn snapshot(&self) -> AppResult<ActivitySnapshot> {
        fetch_snapshot(self.store.as_ref(), self.user_id, self.limits).await
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("user_id", &self.user_id)
            .field("timezone", &self.timezone)
            .field("limits", &self.limits)
            .field("request_id", &self.request_id)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}
