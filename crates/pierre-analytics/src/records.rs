// ABOUTME: Personal record aggregation: per-exercise best, previous best and trend series
// ABOUTME: Classifies exercises as compound lifts and into muscle-group categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record aggregation.
//!
//! Personal-record events are grouped by exercise name, ranked, and turned
//! into a chronological series for charting. Groups are summarized in
//! parallel and then put into a total order, so output is deterministic.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pierre_core::models::PersonalRecordEvent;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ExerciseCategory, RecordsConfig};

/// A single validated record in a summary or series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPoint {
    /// Source event identifier
    pub id: String,
    /// Load lifted
    pub weight: f64,
    /// Repetitions
    pub reps: u32,
    /// When the lift happened
    pub date: DateTime<Utc>,
}

/// Aggregated records for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecordSummary {
    /// Display name, taken from the best record
    pub exercise: String,
    /// Heaviest record, most recent on ties
    pub best: RecordPoint,
    /// Weight of the runner-up in the same ranking
    pub previous_best: Option<f64>,
    /// All records in ascending date order
    pub series: Vec<RecordPoint>,
    /// Change from the first recorded weight to the best, in percent
    pub improvement_pct: f64,
    /// Whether the exercise is a compound lift
    pub is_compound: bool,
    /// Muscle-group category
    pub category: ExerciseCategory,
    /// Number of valid records
    pub record_count: u32,
}

/// Record aggregation engine bound to a classification config
pub struct RecordAggregator<'a> {
    config: &'a RecordsConfig,
}

impl<'a> RecordAggregator<'a> {
    /// Create an aggregator using the given configuration
    #[must_use]
    pub const fn new(config: &'a RecordsConfig) -> Self {
        Self { config }
    }

    /// Summarize every exercise with at least one valid record
    ///
    /// Output order: compound lifts first, then best weight descending,
    /// then exercise name ascending.
    #[must_use]
    pub fn summarize(&self, records: &[PersonalRecordEvent]) -> Vec<ExerciseRecordSummary> {
        let groups = self.group(records);

        let mut summaries: Vec<ExerciseRecordSummary> = groups
            .into_par_iter()
            .filter_map(|(_, group)| self.summarize_group(group))
            .collect();

        summaries.sort_by(Self::display_order);
        summaries
    }

    /// Summary for a single exercise, matched with the configured name rules
    #[must_use]
    pub fn summary_for(
        &self,
        records: &[PersonalRecordEvent],
        exercise: &str,
    ) -> Option<ExerciseRecordSummary> {
        let key = self.config.group_key(exercise);
        let matching: Vec<&PersonalRecordEvent> = records
            .iter()
            .filter(|record| {
                record.is_valid() && self.config.group_key(&record.exercise_name) == key
            })
            .collect();
        self.summarize_group(matching)
    }

    /// Σ best weight over compound exercises
    #[must_use]
    pub fn compound_total(summaries: &[ExerciseRecordSummary]) -> f64 {
        Self::sum_bests(
            summaries
                .iter()
                .filter(|summary| summary.is_compound)
                .map(|summary| summary.best.weight),
        )
    }

    /// Sum of per-exercise best weights, heaviest first
    ///
    /// Float addition is order sensitive; fixing the order makes the sum a
    /// function of the weights alone.
    #[must_use]
    pub fn sum_bests(bests: impl IntoIterator<Item = f64>) -> f64 {
        let mut weights: Vec<f64> = bests.into_iter().collect();
        weights.sort_by(|a, b| b.total_cmp(a));
        weights.into_iter().sum()
    }

    /// Best-first ranking: weight desc, date desc, reps desc, id asc
    #[must_use]
    pub fn rank(a: &PersonalRecordEvent, b: &PersonalRecordEvent) -> Ordering {
        b.weight
            .total_cmp(&a.weight)
            .then_with(|| b.occurred_at.cmp(&a.occurred_at))
            .then_with(|| b.reps.cmp(&a.reps))
            .then_with(|| a.id.cmp(&b.id))
    }

    fn group<'r>(
        &self,
        records: &'r [PersonalRecordEvent],
    ) -> BTreeMap<String, Vec<&'r PersonalRecordEvent>> {
        let mut groups: BTreeMap<String, Vec<&PersonalRecordEvent>> = BTreeMap::new();
        let mut dropped = 0_usize;

        for record in records {
            if record.is_valid() {
                groups
                    .entry(self.config.group_key(&record.exercise_name))
                    .or_default()
                    .push(record);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            debug!(dropped, "Dropped malformed personal records");
        }
        groups
    }

    fn summarize_group(
        &self,
        mut group: Vec<&PersonalRecordEvent>,
    ) -> Option<ExerciseRecordSummary> {
        group.sort_by(|a, b| Self::rank(a, b));
        let best = *group.first()?;
        let date = best.occurred_at?;
        let previous_best = group.get(1).map(|record| record.weight);

        let mut chronological = group.clone();
        chronological.sort_by(|a, b| {
            a.occurred_at
                .cmp(&b.occurred_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        let series: Vec<RecordPoint> = chronological
            .iter()
            .filter_map(|record| to_point(record))
            .collect();

        let improvement_pct = match series.first() {
            Some(first) if series.len() > 1 && first.weight > 0.0 => {
                (best.weight - first.weight) / first.weight * 100.0
            }
            _ => 0.0,
        };

        let exercise = best.exercise_name.trim().to_owned();
        Some(ExerciseRecordSummary {
            is_compound: self.config.is_compound(&exercise),
            category: self.config.category(&exercise),
            best: RecordPoint {
                id: best.id.clone(),
                weight: best.weight,
                reps: best.reps,
                date,
            },
            previous_best,
            improvement_pct,
            record_count: u32::try_from(series.len()).unwrap_or(u32::MAX),
            series,
            exercise,
        })
    }

    fn display_order(a: &ExerciseRecordSummary, b: &ExerciseRecordSummary) -> Ordering {
        b.is_compound
            .cmp(&a.is_compound)
            .then_with(|| b.best.weight.total_cmp(&a.best.weight))
            .then_with(|| a.exercise.cmp(&b.exercise))
    }
}

fn to_point(record: &PersonalRecordEvent) -> Option<RecordPoint> {
    Some(RecordPoint {
        id: record.id.clone(),
        weight: record.weight,
        reps: record.reps,
        date: record.occurred_at?,
    })
}
