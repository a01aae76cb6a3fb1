// ABOUTME: Achievement engine evaluating milestone definitions against aggregated metrics
// ABOUTME: Computes progress, earned state and unlock timestamps from the underlying events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Achievement evaluation.
//!
//! Each definition maps one aggregated metric to `progress =
//! clamp(metric / threshold * 100, 0, 100)` and `earned = metric >= threshold`.
//! Unlock timestamps are recovered from the events themselves: the N-th
//! workout, the first event on day N of a streak, and so on.

mod catalog;

pub use catalog::{
    AchievementCatalog, AchievementDefinition, AchievementMetric, AchievementRarity,
};

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_core::models::{PersonalRecordEvent, WorkoutEvent};
use serde::{Deserialize, Serialize};

use crate::calendar::{day_key, DayKey};
use crate::config::RecordsConfig;
use crate::records::RecordAggregator;
use crate::streaks::{StreakCalculator, StreakRun};

/// Event lists the engine needs to evaluate metrics and unlock dates
#[derive(Debug, Clone, Copy)]
pub struct AchievementInputs<'a> {
    /// Completed workouts
    pub workouts: &'a [WorkoutEvent],
    /// Personal-record events
    pub personal_records: &'a [PersonalRecordEvent],
    /// Account creation time
    pub account_created_at: Option<DateTime<Utc>>,
}

/// Scalar metrics every definition is evaluated against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementMetrics {
    /// Valid workouts
    pub total_workouts: u32,
    /// Current streak in days
    pub current_streak: u32,
    /// Longest streak in days
    pub longest_streak: u32,
    /// Valid personal-record events
    pub personal_records: u32,
    /// Σ best weight over compound lifts
    pub compound_lift_total: f64,
    /// Whole days since account creation, 0 when unknown
    pub account_age_days: i64,
}

impl AchievementMetrics {
    /// Value of one metric
    #[must_use]
    pub fn value(&self, metric: AchievementMetric) -> f64 {
        match metric {
            AchievementMetric::TotalWorkouts => f64::from(self.total_workouts),
            AchievementMetric::CurrentStreak => f64::from(self.current_streak),
            AchievementMetric::LongestStreak => f64::from(self.longest_streak),
            AchievementMetric::PersonalRecords => f64::from(self.personal_records),
            AchievementMetric::CompoundLiftTotal => self.compound_lift_total,
            #[allow(clippy::cast_precision_loss)]
            AchievementMetric::AccountAgeDays => self.account_age_days as f64,
        }
    }
}

/// Evaluated state of one achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementStatus {
    /// Definition identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Tier
    pub rarity: AchievementRarity,
    /// Metric evaluated
    pub metric: AchievementMetric,
    /// Threshold from the definition
    pub threshold: f64,
    /// Current metric value
    pub value: f64,
    /// Progress in `[0, 100]`
    pub progress: f64,
    /// Whether `value >= threshold`
    pub earned: bool,
    /// When the threshold was first reached, if recoverable
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Achievement evaluation engine
pub struct AchievementEngine<'a> {
    catalog: &'a AchievementCatalog,
    records: &'a RecordsConfig,
}

impl<'a> AchievementEngine<'a> {
    /// Create an engine over a validated catalog
    #[must_use]
    pub const fn new(catalog: &'a AchievementCatalog, records: &'a RecordsConfig) -> Self {
        Self { catalog, records }
    }

    /// Progress toward a threshold in `[0, 100]`
    #[must_use]
    pub fn progress(value: f64, threshold: f64) -> f64 {
        if !(threshold.is_finite() && threshold > 0.0) || !value.is_finite() {
            return 0.0;
        }
        (value / threshold * 100.0).clamp(0.0, 100.0)
    }

    /// Evaluate every definition in the catalog
    ///
    /// Earned achievements come first, most recently unlocked first with
    /// unknown dates last; unearned follow by progress descending. Ties are
    /// broken by id.
    #[must_use]
    pub fn evaluate<Tz: TimeZone>(
        &self,
        inputs: &AchievementInputs<'_>,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Vec<AchievementStatus> {
        self.evaluate_with_metrics(inputs, now, tz).0
    }

    /// Evaluate the catalog and return the metrics it was evaluated against
    ///
    /// Statuses are ordered as in [`Self::evaluate`]. The inputs are sorted
    /// and scanned once for both results.
    #[must_use]
    pub fn evaluate_with_metrics<Tz: TimeZone>(
        &self,
        inputs: &AchievementInputs<'_>,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> (Vec<AchievementStatus>, AchievementMetrics) {
        let context = EvaluationContext::build(inputs, self.records, now, tz);

        let mut statuses: Vec<AchievementStatus> = self
            .catalog
            .definitions()
            .iter()
            .map(|definition| {
                let value = context.metrics.value(definition.metric);
                let earned = value >= definition.threshold;
                AchievementStatus {
                    id: definition.id.clone(),
                    title: definition.title.clone(),
                    description: definition.description.clone(),
                    rarity: definition.rarity,
                    metric: definition.metric,
                    threshold: definition.threshold,
                    value,
                    progress: Self::progress(value, definition.threshold),
                    earned,
                    unlocked_at: if earned {
                        context.unlock_time(definition)
                    } else {
                        None
                    },
                }
            })
            .collect();

        statuses.sort_by(Self::display_order);
        (statuses, context.metrics)
    }

    fn display_order(a: &AchievementStatus, b: &AchievementStatus) -> Ordering {
        b.earned
            .cmp(&a.earned)
            .then_with(|| {
                if a.earned {
                    // Newest first, missing dates last
                    match (a.unlocked_at, b.unlocked_at) {
                        (Some(x), Some(y)) => y.cmp(&x),
                        (Some(_), None) => Ordering::Less,
                        (None, Some(_)) => Ordering::Greater,
                        (None, None) => Ordering::Equal,
                    }
                } else {
                    b.progress.total_cmp(&a.progress)
                }
            })
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Sorted events and derived structures shared by all definitions
struct EvaluationContext<'e> {
    workouts: Vec<&'e WorkoutEvent>,
    records: Vec<&'e PersonalRecordEvent>,
    records_config: &'e RecordsConfig,
    runs: Vec<StreakRun>,
    current_run: Option<StreakRun>,
    first_event_by_day: BTreeMap<DayKey, DateTime<Utc>>,
    account_created_at: Option<DateTime<Utc>>,
    metrics: AchievementMetrics,
}

impl<'e> EvaluationContext<'e> {
    fn build<Tz: TimeZone>(
        inputs: &AchievementInputs<'e>,
        records_config: &'e RecordsConfig,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Self {
        let mut workouts: Vec<&WorkoutEvent> =
            inputs.workouts.iter().filter(|w| w.is_valid()).collect();
        workouts.sort_by(|a, b| {
            a.occurred_at
                .cmp(&b.occurred_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut records: Vec<&PersonalRecordEvent> = inputs
            .personal_records
            .iter()
            .filter(|r| r.is_valid())
            .collect();
        records.sort_by(|a, b| {
            a.occurred_at
                .cmp(&b.occurred_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut first_event_by_day: BTreeMap<DayKey, DateTime<Utc>> = BTreeMap::new();
        for occurred_at in workouts.iter().filter_map(|w| w.occurred_at) {
            first_event_by_day
                .entry(day_key(&occurred_at, tz))
                .or_insert(occurred_at);
        }

        let days: BTreeSet<DayKey> = first_event_by_day.keys().copied().collect();
        let streaks = StreakCalculator::from_days(&days, day_key(&now, tz));
        let runs = StreakCalculator::runs(&days);
        let current_run = StreakCalculator::current_run(&days, day_key(&now, tz));

        let summaries = RecordAggregator::new(records_config).summarize(inputs.personal_records);

        let metrics = AchievementMetrics {
            total_workouts: u32::try_from(workouts.len()).unwrap_or(u32::MAX),
            current_streak: streaks.current,
            longest_streak: streaks.longest,
            personal_records: u32::try_from(records.len()).unwrap_or(u32::MAX),
            compound_lift_total: RecordAggregator::compound_total(&summaries),
            account_age_days: inputs
                .account_created_at
                .map_or(0, |created| (now - created).num_days().max(0)),
        };

        Self {
            workouts,
            records,
            records_config,
            runs,
            current_run,
            first_event_by_day,
            account_created_at: inputs.account_created_at,
            metrics,
        }
    }

    fn unlock_time(&self, definition: &AchievementDefinition) -> Option<DateTime<Utc>> {
        // Threshold is validated positive and finite, so ceil() >= 1
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nth = definition.threshold.ceil() as u32;
        let index = usize::try_from(nth).ok()?.checked_sub(1)?;

        match definition.metric {
            AchievementMetric::TotalWorkouts => self.workouts.get(index)?.occurred_at,
            AchievementMetric::PersonalRecords => self.records.get(index)?.occurred_at,
            AchievementMetric::LongestStreak => {
                let day = self
                    .runs
                    .iter()
                    .find(|run| run.length >= nth)
                    .and_then(|run| run.nth_day(nth))?;
                self.first_event_by_day.get(&day).copied()
            }
            AchievementMetric::CurrentStreak => {
                let day = self.current_run.and_then(|run| run.nth_day(nth))?;
                self.first_event_by_day.get(&day).copied()
            }
            AchievementMetric::CompoundLiftTotal => self.compound_unlock(definition.threshold),
            AchievementMetric::AccountAgeDays => {
                let created = self.account_created_at?;
                created.checked_add_signed(Duration::try_days(i64::from(nth))?)
            }
        }
    }

    /// First record at which the running Σ of compound bests reaches `threshold`
    fn compound_unlock(&self, threshold: f64) -> Option<DateTime<Utc>> {
        let mut bests: BTreeMap<String, f64> = BTreeMap::new();

        for record in &self.records {
            if !self.records_config.is_compound(record.exercise_name.trim()) {
                continue;
            }
            let best = bests
                .entry(self.records_config.group_key(&record.exercise_name))
                .or_insert(0.0);
            if record.weight <= *best {
                continue;
            }
            *best = record.weight;
            if RecordAggregator::sum_bests(bests.values().copied()) >= threshold {
                return record.occurred_at;
            }
        }
        None
    }
}
