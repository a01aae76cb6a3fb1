// ABOUTME: Record aggregation configuration: name matching and exercise classification
// ABOUTME: Holds the compound-lift list and the ordered keyword-to-category table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record Aggregation Configuration
//!
//! Exercise names are free text. Classification is a case-insensitive
//! substring match, evaluated in table order; the first matching category
//! wins and unmatched exercises fall into `other`.

use serde::{Deserialize, Serialize};

/// Muscle-group category assigned to an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Chest
    Chest,
    /// Back
    Back,
    /// Legs
    Legs,
    /// Shoulders
    Shoulders,
    /// Arms
    Arms,
    /// No keyword matched
    Other,
}

impl ExerciseCategory {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Other => "other",
        }
    }
}

/// One row of the keyword table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category assigned on match
    pub category: ExerciseCategory,
    /// Lowercase keywords matched as substrings
    pub keywords: Vec<String>,
}

impl CategoryRule {
    fn new(category: ExerciseCategory, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        }
    }
}

/// Record aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Group trimmed exercise names by exact case (`true`) or lowercased (`false`)
    pub case_sensitive_names: bool,
    /// Lowercase compound-lift names matched as substrings
    pub compound_lifts: Vec<String>,
    /// Ordered keyword table, first match wins
    pub categories: Vec<CategoryRule>,
}

impl RecordsConfig {
    /// Grouping key for an exercise name
    ///
    /// Surrounding whitespace never separates groups, matching the trimmed
    /// display name.
    #[must_use]
    pub fn group_key(&self, name: &str) -> String {
        let trimmed = name.trim();
        if self.case_sensitive_names {
            trimmed.to_owned()
        } else {
            trimmed.to_lowercase()
        }
    }

    /// Whether the name matches the compound-lift list
    #[must_use]
    pub fn is_compound(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.compound_lifts
            .iter()
            .any(|lift| lowered.contains(lift.to_lowercase().as_str()))
    }

    /// Category for the name, `Other` when no keyword matches
    #[must_use]
    pub fn category(&self, name: &str) -> ExerciseCategory {
        let lowered = name.to_lowercase();
        self.categories
            .iter()
            .find(|rule| {
                rule.keywords
                    .iter()
                    .any(|keyword| lowered.contains(keyword.to_lowercase().as_str()))
            })
            .map_or(ExerciseCategory::Other, |rule| rule.category)
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        let compound_lifts = [
            "squat",
            "deadlift",
            "bench press",
            "overhead press",
            "military press",
            "barbell row",
            "pull-up",
            "pull up",
            "chin-up",
            "power clean",
            "clean and jerk",
            "snatch",
        ]
        .iter()
        .map(|lift| (*lift).to_owned())
        .collect();

        Self {
            case_sensitive_names: true,
            compound_lifts,
            categories: vec![
                CategoryRule::new(
                    ExerciseCategory::Chest,
                    &["bench", "chest", "fly", "push-up", "push up", "pec", "dip"],
                ),
                CategoryRule::new(
                    ExerciseCategory::Back,
                    &["deadlift", "row", "pull-up", "pull up", "chin-up", "pulldown"],
                ),
                CategoryRule::new(
                    ExerciseCategory::Legs,
                    &["squat", "lunge", "leg", "calf", "hip thrust", "glute"],
                ),
                CategoryRule::new(
                    ExerciseCategory::Shoulders,
                    &["overhead press", "military press", "shoulder", "lateral raise", "shrug"],
                ),
                CategoryRule::new(
                    ExerciseCategory::Arms,
                    &["curl", "bicep", "tricep", "skull crusher", "pushdown"],
                ),
            ],
        }
    }
}
