// ABOUTME: Body-weight measurements logged by the user
// ABOUTME: Consumed by the weight trend and activity timeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// A body-weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Store identifier
    #[serde(default)]
    pub id: String,
    /// Measured weight
    #[serde(default, deserialize_with = "lenient::non_negative_f64")]
    pub weight: f64,
    /// When the measurement was taken
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WeightEntry {
    /// Create a measurement
    #[must_use]
    pub fn new(id: impl Into<String>, weight: f64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            weight,
            occurred_at: Some(occurred_at),
            notes: None,
        }
    }

    /// Positive finite weight with a date
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0 && self.occurred_at.is_some()
    }
}
