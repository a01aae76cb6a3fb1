// ABOUTME: User goals with target and current values
// ABOUTME: Shown on the timeline at their deadline and summarised in profile views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// A user goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Store identifier
    #[serde(default)]
    pub id: String,
    /// Free-form goal type such as `weight_loss` or `squat_1rm`
    #[serde(default, alias = "type")]
    pub goal_type: String,
    /// Target value
    #[serde(default, deserialize_with = "lenient::non_negative_f64")]
    pub target_value: f64,
    /// Current value
    #[serde(default, deserialize_with = "lenient::non_negative_f64")]
    pub current_value: f64,
    /// Unit label
    #[serde(default)]
    pub unit: String,
    /// Optional deadline
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub deadline: Option<DateTime<Utc>>,
    /// Whether the user marked the goal as done
    #[serde(default)]
    pub completed: bool,
}

impl Goal {
    /// Progress toward the target in `[0, 100]`
    ///
    /// Completed goals report 100; goals without a positive target report 0.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.completed {
            return 100.0;
        }
        if !(self.target_value.is_finite() && self.target_value > 0.0) {
            return 0.0;
        }
        let pct = self.current_value / self.target_value * 100.0;
        if pct.is_finite() {
            pct.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}
