// ABOUTME: Calorie estimation heuristics for the period aggregator
// ABOUTME: Per-workout constant or per-minute rates by workout kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Estimation Configuration
//!
//! Calories are a rough linear heuristic, not measured data, so every
//! constant lives here instead of inside the aggregator.

use std::fmt;
use std::str::FromStr;

use pierre_core::models::WorkoutKind;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// How `estimated_calories` is derived from workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieMethod {
    /// `workout count * calories_per_workout`
    #[default]
    PerWorkout,
    /// `Σ rate[kind] * duration_minutes`
    PerMinute,
}

impl FromStr for CalorieMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "per_workout" => Ok(Self::PerWorkout),
            "per_minute" => Ok(Self::PerMinute),
            other => Err(ConfigError::Parse(format!(
                "Unknown calorie method '{other}'"
            ))),
        }
    }
}

impl fmt::Display for CalorieMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerWorkout => write!(f, "per_workout"),
            Self::PerMinute => write!(f, "per_minute"),
        }
    }
}

/// Per-minute burn rates keyed by workout kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerMinuteRates {
    /// kcal per minute of strength training
    pub strength: f64,
    /// kcal per minute of cardio
    pub cardio: f64,
}

impl PerMinuteRates {
    /// Rate for a workout kind
    #[must_use]
    pub const fn rate(&self, kind: WorkoutKind) -> f64 {
        match kind {
            WorkoutKind::Strength => self.strength,
            WorkoutKind::Cardio => self.cardio,
        }
    }
}

impl Default for PerMinuteRates {
    fn default() -> Self {
        Self {
            strength: 6.0,
            cardio: 10.0,
        }
    }
}

/// Calorie estimation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaloriesConfig {
    /// Estimation method
    pub method: CalorieMethod,
    /// kcal credited per workout under `per_workout`
    pub calories_per_workout: f64,
    /// Rates used under `per_minute`
    pub per_minute: PerMinuteRates,
}

impl Default for CaloriesConfig {
    fn default() -> Self {
        Self {
            method: CalorieMethod::PerWorkout,
            calories_per_workout: 300.0,
            per_minute: PerMinuteRates::default(),
        }
    }
}
