// ABOUTME: Goal targets used by period summaries and profile views
// ABOUTME: Weekly workout target and daily calorie target with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Goal target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTargetsConfig {
    /// Workouts per week the user aims for
    pub weekly_workout_target: u32,
    /// Daily calorie burn target in kcal
    pub daily_calorie_target: f64,
}

impl Default for GoalTargetsConfig {
    fn default() -> Self {
        Self {
            weekly_workout_target: 5,
            daily_calorie_target: 2000.0,
        }
    }
}
