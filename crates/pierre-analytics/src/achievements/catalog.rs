// ABOUTME: Declarative achievement definitions and the validated catalog
// ABOUTME: Ships the standard milestone set and rejects bad thresholds or duplicate ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Presentational tier of an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementRarity {
    /// Most users earn these
    Common,
    /// Takes sustained effort
    Rare,
    /// Takes months of training
    Epic,
    /// Few users ever earn these
    Legendary,
}

/// Aggregated metric an achievement is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementMetric {
    /// Number of valid workouts
    TotalWorkouts,
    /// Current streak in days
    CurrentStreak,
    /// Longest streak in days
    LongestStreak,
    /// Number of valid personal-record events
    PersonalRecords,
    /// Σ best weight over compound lifts
    CompoundLiftTotal,
    /// Whole days since the account was created
    AccountAgeDays,
}

/// A milestone: earned once `metric >= threshold`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    /// Stable identifier
    pub id: String,
    /// Short title
    pub title: String,
    /// One-line description
    pub description: String,
    /// Tier
    pub rarity: AchievementRarity,
    /// Metric evaluated
    pub metric: AchievementMetric,
    /// Value at which the achievement is earned, strictly positive
    pub threshold: f64,
}

impl AchievementDefinition {
    /// Create a definition
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        rarity: AchievementRarity,
        metric: AchievementMetric,
        threshold: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            rarity,
            metric,
            threshold,
        }
    }
}

/// A validated, ordered set of achievement definitions
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementCatalog {
    definitions: Vec<AchievementDefinition>,
}

impl AchievementCatalog {
    /// Validate and build a catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidThreshold` for a threshold that is not a finite value
    /// above zero, and `DuplicateAchievement` when two definitions share an id
    pub fn try_new(definitions: Vec<AchievementDefinition>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(definitions.len());
        for definition in &definitions {
            if !(definition.threshold.is_finite() && definition.threshold > 0.0) {
                return Err(ConfigError::InvalidThreshold {
                    id: definition.id.clone(),
                    threshold: definition.threshold,
                });
            }
            if !seen.insert(definition.id.as_str()) {
                return Err(ConfigError::DuplicateAchievement(definition.id.clone()));
            }
        }
        Ok(Self { definitions })
    }

    /// The standard milestone set
    #[must_use]
    pub fn standard() -> Self {
        use AchievementMetric::{
            AccountAgeDays, CompoundLiftTotal, CurrentStreak, LongestStreak, PersonalRecords,
            TotalWorkouts,
        };
        use AchievementRarity::{Common, Epic, Legendary, Rare};

        let definitions = vec![
            AchievementDefinition::new(
                "first_workout",
                "First Steps",
                "Log your first workout",
                Common,
                TotalWorkouts,
                1.0,
            ),
            AchievementDefinition::new(
                "workouts_10",
                "Getting Started",
                "Log 10 workouts",
                Common,
                TotalWorkouts,
                10.0,
            ),
            AchievementDefinition::new(
                "workouts_50",
                "Dedicated",
                "Log 50 workouts",
                Rare,
                TotalWorkouts,
                50.0,
            ),
            AchievementDefinition::new(
                "workouts_100",
                "Centurion",
                "Log 100 workouts",
                Epic,
                TotalWorkouts,
                100.0,
            ),
            AchievementDefinition::new(
                "streak_3",
                "On a Roll",
                "Train 3 days in a row",
                Common,
                CurrentStreak,
                3.0,
            ),
            AchievementDefinition::new(
                "streak_7",
                "Week Warrior",
                "Reach a 7 day streak",
                Rare,
                LongestStreak,
                7.0,
            ),
            AchievementDefinition::new(
                "streak_30",
                "Unstoppable",
                "Reach a 30 day streak",
                Legendary,
                LongestStreak,
                30.0,
            ),
            AchievementDefinition::new(
                "first_pr",
                "Personal Best",
                "Set your first personal record",
                Common,
                PersonalRecords,
                1.0,
            ),
            AchievementDefinition::new(
                "records_25",
                "Record Breaker",
                "Set 25 personal records",
                Rare,
                PersonalRecords,
                25.0,
            ),
            AchievementDefinition::new(
                "compound_500",
                "500 Club",
                "Reach a 500 combined best across compound lifts",
                Epic,
                CompoundLiftTotal,
                500.0,
            ),
            AchievementDefinition::new(
                "member_30",
                "Regular",
                "Be a member for 30 days",
                Common,
                AccountAgeDays,
                30.0,
            ),
            AchievementDefinition::new(
                "member_365",
                "Veteran",
                "Be a member for a full year",
                Rare,
                AccountAgeDays,
                365.0,
            ),
        ];

        Self { definitions }
    }

    /// Definitions in catalog order
    #[must_use]
    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    /// Number of definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
