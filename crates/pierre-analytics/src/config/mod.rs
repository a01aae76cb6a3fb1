// ABOUTME: Analytics engine configuration with documented defaults and env overrides
// ABOUTME: Orchestrates calorie, goal, record and achievement settings with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration Module
//!
//! Every heuristic the engine relies on (calorie constants, the weekly
//! workout goal, the daily calorie target, exercise classification tables,
//! the achievement catalog) is injected from here rather than inlined.
//!
//! # Module Structure
//!
//! - `calories` - Calorie estimation method and constants
//! - `goals` - Weekly workout and daily calorie targets
//! - `records` - Exercise name matching and classification tables
//! - `error` - Configuration error type
//!
//! # Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `ANALYTICS_CALORIE_METHOD` | `calories.method` (`per_workout` / `per_minute`) |
//! | `ANALYTICS_CALORIES_PER_WORKOUT` | `calories.calories_per_workout` |
//! | `ANALYTICS_CALORIES_PER_MINUTE_STRENGTH` | `calories.per_minute.strength` |
//! | `ANALYTICS_CALORIES_PER_MINUTE_CARDIO` | `calories.per_minute.cardio` |
//! | `ANALYTICS_WEEKLY_WORKOUT_TARGET` | `goals.weekly_workout_target` |
//! | `ANALYTICS_DAILY_CALORIE_TARGET` | `goals.daily_calorie_target` |
//! | `ANALYTICS_CASE_SENSITIVE_NAMES` | `records.case_sensitive_names` |
//! | `ANALYTICS_COMPOUND_LIFTS` | `records.compound_lifts` (comma separated) |

pub mod calories;
pub mod error;
pub mod goals;
pub mod records;

pub use calories::{CalorieMethod, CaloriesConfig, PerMinuteRates};
pub use error::ConfigError;
pub use goals::GoalTargetsConfig;
pub use records::{CategoryRule, ExerciseCategory, RecordsConfig};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::achievements::{AchievementCatalog, AchievementDefinition};

/// Global configuration singleton
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

/// Achievement catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsConfig {
    /// Definitions evaluated by the achievement engine
    pub definitions: Vec<AchievementDefinition>,
}

impl AchievementsConfig {
    /// Build a validated catalog from the configured definitions
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive thresholds or duplicate ids
    pub fn catalog(&self) -> Result<AchievementCatalog, ConfigError> {
        AchievementCatalog::try_new(self.definitions.clone())
    }
}

impl Default for AchievementsConfig {
    fn default() -> Self {
        Self {
            definitions: AchievementCatalog::standard().definitions().to_vec(),
        }
    }
}

/// Main analytics configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Calorie estimation heuristics
    pub calories: CaloriesConfig,
    /// Weekly and daily targets
    pub goals: GoalTargetsConfig,
    /// Record grouping and classification
    pub records: RecordsConfig,
    /// Achievement catalog
    pub achievements: AchievementsConfig,
}

impl AnalyticsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analytics config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let calories = &self.calories;
        if !is_non_negative(calories.calories_per_workout) {
            return Err(ConfigError::ValueOutOfRange(
                "calories_per_workout must be a finite value >= 0",
            ));
        }
        if !is_non_negative(calories.per_minute.strength)
            || !is_non_negative(calories.per_minute.cardio)
        {
            return Err(ConfigError::ValueOutOfRange(
                "per-minute calorie rates must be finite values >= 0",
            ));
        }

        if self.goals.weekly_workout_target == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "weekly_workout_target must be at least 1",
            ));
        }
        if !(self.goals.daily_calorie_target.is_finite() && self.goals.daily_calorie_target > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "daily_calorie_target must be a finite value > 0",
            ));
        }

        if self
            .records
            .compound_lifts
            .iter()
            .any(|lift| lift.trim().is_empty())
        {
            return Err(ConfigError::InvalidRange(
                "compound_lifts entries must not be blank",
            ));
        }
        if self
            .records
            .categories
            .iter()
            .any(|rule| rule.keywords.iter().any(|k| k.trim().is_empty()))
        {
            return Err(ConfigError::InvalidRange(
                "category keywords must not be blank",
            ));
        }

        if self.achievements.definitions.is_empty() {
            return Err(ConfigError::MissingField("achievements.definitions"));
        }
        self.achievements.catalog()?;

        Ok(())
    }

    /// Parse an environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Calorie overrides
        Self::apply_env_var("ANALYTICS_CALORIE_METHOD", &mut self.calories.method)?;
        Self::apply_env_var(
            "ANALYTICS_CALORIES_PER_WORKOUT",
            &mut self.calories.calories_per_workout,
        )?;
        Self::apply_env_var(
            "ANALYTICS_CALORIES_PER_MINUTE_STRENGTH",
            &mut self.calories.per_minute.strength,
        )?;
        Self::apply_env_var(
            "ANALYTICS_CALORIES_PER_MINUTE_CARDIO",
            &mut self.calories.per_minute.cardio,
        )?;

        // Goal overrides
        Self::apply_env_var(
            "ANALYTICS_WEEKLY_WORKOUT_TARGET",
            &mut self.goals.weekly_workout_target,
        )?;
        Self::apply_env_var(
            "ANALYTICS_DAILY_CALORIE_TARGET",
            &mut self.goals.daily_calorie_target,
        )?;

        // Record overrides
        Self::apply_env_var(
            "ANALYTICS_CASE_SENSITIVE_NAMES",
            &mut self.records.case_sensitive_names,
        )?;
        if let Ok(list) = env::var("ANALYTICS_COMPOUND_LIFTS") {
            self.records.compound_lifts = list
                .split(',')
                .map(|lift| lift.trim().to_lowercase())
                .filter(|lift| !lift.is_empty())
                .collect();
        }

        Ok(self)
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
