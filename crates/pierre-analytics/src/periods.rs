// ABOUTME: Period aggregation of workout volume, duration, sets, calories and frequency
// ABOUTME: Resolves named, rolling and explicit windows in the caller's time zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Period aggregation.
//!
//! A [`PeriodWindow`] resolves to a half-open `[start, end)` interval in the
//! caller's time zone. Named periods are calendar aligned: weeks start on
//! Monday. Window problems are configuration errors raised before any
//! workout is looked at.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_core::constants::time::DAYS_PER_WEEK_F64;
use pierre_core::models::{WorkoutEvent, WorkoutKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{day_key, days_between, days_inclusive, local_day_start, DayKey};
use crate::config::{AnalyticsConfig, CalorieMethod, ConfigError};

/// Seconds in a day, for window length arithmetic
const SECONDS_PER_DAY_F64: f64 = 86_400.0;

/// Longest accepted rolling window, one hundred years of days
pub const MAX_ROLLING_DAYS: u32 = 36_525;

/// Window over which workouts are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "period")]
pub enum PeriodWindow {
    /// Monday 00:00 local through the following Monday
    Week,
    /// First of the month through the first of the next month
    Month,
    /// January 1 through the next January 1
    Year,
    /// Unbounded
    All,
    /// The last `days` local days including today
    Rolling {
        /// Number of days, at least 1
        days: u32,
    },
    /// Explicit half-open interval
    Range {
        /// Inclusive start
        start: DateTime<Utc>,
        /// Exclusive end
        end: DateTime<Utc>,
    },
}

impl PeriodWindow {
    /// Parse a period name: `week`, `month`, `year`, `all` or `rolling:<days>`
    ///
    /// # Errors
    ///
    /// Returns `UnknownPeriod` for unrecognised names and `InvalidWindow` for
    /// a rolling window outside `1..=MAX_ROLLING_DAYS`
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let normalized = name.trim().to_lowercase();
        match normalized.as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => {
                let days = other
                    .strip_prefix("rolling:")
                    .and_then(|days| days.trim().parse::<u32>().ok())
                    .ok_or_else(|| ConfigError::UnknownPeriod(name.to_owned()))?;
                Self::rolling(days)
            }
        }
    }

    /// Rolling window over the last `days` days
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindow` when `days` is zero or above [`MAX_ROLLING_DAYS`]
    pub fn rolling(days: u32) -> Result<Self, ConfigError> {
        let window = Self::Rolling { days };
        window.validate()?;
        Ok(window)
    }

    /// Explicit `[start, end)` window
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindow` when `start > end`
    pub fn range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ConfigError> {
        let window = Self::Range { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Check the window is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindow` for a rolling window outside
    /// `1..=MAX_ROLLING_DAYS` or an inverted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Rolling { days: 0 } => Err(ConfigError::InvalidWindow(
                "rolling window must cover at least one day".to_owned(),
            )),
            Self::Rolling { days } if *days > MAX_ROLLING_DAYS => {
                Err(ConfigError::InvalidWindow(format!(
                    "rolling window of {days} days exceeds {MAX_ROLLING_DAYS}"
                )))
            }
            Self::Range { start, end } if start > end => Err(ConfigError::InvalidWindow(format!(
                "range start {start} is after end {end}"
            ))),
            _ => Ok(()),
        }
    }

    /// Resolve to concrete bounds relative to `now` in `tz`
    #[must_use]
    pub fn resolve<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> ResolvedWindow {
        let today = day_key(&now, tz);
        let bounded = |start: DayKey, end: DayKey| ResolvedWindow {
            start: Some(local_day_start(start, tz)),
            end: Some(local_day_start(end, tz)),
        };

        let resolved = match *self {
            Self::Week => {
                let start = today.week_start();
                bounded(start, start.add_days(7))
            }
            Self::Month => bounded(today.month_start(), today.next_month_start()),
            Self::Year => bounded(today.year_start(), today.next_year_start()),
            Self::All => ResolvedWindow {
                start: None,
                end: None,
            },
            Self::Rolling { days } => {
                bounded(today.add_days(1 - i64::from(days.max(1))), today.succ())
            }
            Self::Range { start, end } => ResolvedWindow {
                start: Some(start),
                end: Some(end),
            },
        };
        debug!(
            window = %self,
            start = ?resolved.start,
            end = ?resolved.end,
            "Resolved period window"
        );
        resolved
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
            Self::All => write!(f, "all"),
            Self::Rolling { days } => write!(f, "rolling:{days}"),
            Self::Range { start, end } => {
                write!(f, "range:{}..{}", start.to_rfc3339(), end.to_rfc3339())
            }
        }
    }
}

impl FromStr for PeriodWindow {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Concrete half-open bounds; `None` means unbounded on that side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedWindow {
    /// Inclusive start
    pub start: Option<DateTime<Utc>>,
    /// Exclusive end
    pub end: Option<DateTime<Utc>>,
}

impl ResolvedWindow {
    /// Whether `timestamp` lies in `[start, end)`
    #[must_use]
    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| *timestamp >= start)
            && self.end.is_none_or(|end| *timestamp < end)
    }
}

/// Workout metrics over one scope (a whole window or a single day)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodMetrics {
    /// Number of workouts
    pub total_workouts: u32,
    /// Σ weight × reps
    pub total_volume: f64,
    /// Σ duration in minutes
    pub total_duration_minutes: f64,
    /// Mean duration, 0 without workouts
    pub average_duration_minutes: f64,
    /// Σ set count
    pub total_sets: u32,
    /// Heuristic calorie estimate
    pub estimated_calories: f64,
    /// Strength workouts
    pub strength_workouts: u32,
    /// Cardio workouts
    pub cardio_workouts: u32,
}

/// Progress toward the weekly workout target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTargetProgress {
    /// Configured workouts per week
    pub target: u32,
    /// Workouts logged this week
    pub completed: u32,
    /// Progress in `[0, 100]`
    pub progress_percent: f64,
}

/// Aggregated metrics over a resolved window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Window label such as `week` or `rolling:30`
    pub window: String,
    /// Resolved inclusive start
    pub start: Option<DateTime<Utc>>,
    /// Resolved exclusive end
    pub end: Option<DateTime<Utc>>,
    /// Metrics over the whole window
    #[serde(flatten)]
    pub metrics: PeriodMetrics,
    /// Distinct local days with a workout
    pub active_days: u32,
    /// Workouts divided by window length in weeks
    pub workouts_per_week: f64,
    /// Weekly goal progress, reported for the `week` window only
    pub weekly_target: Option<WeeklyTargetProgress>,
}

/// One row of the daily series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    /// Local calendar day
    pub day: DayKey,
    /// Metrics restricted to this day
    #[serde(flatten)]
    pub metrics: PeriodMetrics,
}

/// Period aggregation engine bound to an analytics config
pub struct PeriodAggregator<'a> {
    config: &'a AnalyticsConfig,
}

impl<'a> PeriodAggregator<'a> {
    /// Create an aggregator using the given configuration
    #[must_use]
    pub const fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Aggregate workouts falling inside `window`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the window is invalid
    pub fn summarize<Tz: TimeZone>(
        &self,
        workouts: &[WorkoutEvent],
        window: &PeriodWindow,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Result<PeriodSummary, ConfigError> {
        window.validate()?;
        let resolved = window.resolve(now, tz);
        let filtered = Self::filter(workouts, &resolved);
        let today = day_key(&now, tz);

        let metrics = self.metrics(&filtered);
        let active_days = filtered
            .iter()
            .filter_map(|workout| workout.occurred_at.as_ref())
            .map(|occurred_at| day_key(occurred_at, tz))
            .collect::<BTreeSet<_>>()
            .len();

        let window_days = match (resolved.start, resolved.end) {
            (Some(start), Some(end)) => {
                #[allow(clippy::cast_precision_loss)]
                let seconds = (end - start).num_seconds() as f64;
                seconds / SECONDS_PER_DAY_F64
            }
            _ => Self::first_day(&filtered, tz).map_or(0.0, |first| {
                #[allow(clippy::cast_precision_loss)]
                let days = (days_between(first, today) + 1).max(1) as f64;
                days
            }),
        };
        let workouts_per_week = if window_days > 0.0 {
            f64::from(metrics.total_workouts) / (window_days / DAYS_PER_WEEK_F64)
        } else {
            0.0
        };

        let weekly_target = matches!(window, PeriodWindow::Week)
            .then(|| self.weekly_target(metrics.total_workouts));

        Ok(PeriodSummary {
            window: window.to_string(),
            start: resolved.start,
            end: resolved.end,
            metrics,
            active_days: u32::try_from(active_days).unwrap_or(u32::MAX),
            workouts_per_week,
            weekly_target,
        })
    }

    /// One row per local day in `window`
    ///
    /// For the unbounded window the series runs from the first workout day
    /// through today, and is empty without workouts.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the window is invalid
    pub fn daily_series<Tz: TimeZone>(
        &self,
        workouts: &[WorkoutEvent],
        window: &PeriodWindow,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Result<Vec<DailyPoint>, ConfigError> {
        window.validate()?;
        let resolved = window.resolve(now, tz);
        let filtered = Self::filter(workouts, &resolved);

        let mut by_day: BTreeMap<DayKey, Vec<&WorkoutEvent>> = BTreeMap::new();
        for &workout in &filtered {
            if let Some(occurred_at) = workout.occurred_at.as_ref() {
                by_day.entry(day_key(occurred_at, tz)).or_default().push(workout);
            }
        }

        let bounds = match (resolved.start, resolved.end) {
            (Some(start), Some(end)) if start < end => Some((
                day_key(&start, tz),
                day_key(&(end - Duration::nanoseconds(1)), tz),
            )),
            (Some(_), Some(_)) => None,
            _ => by_day
                .keys()
                .next()
                .map(|first| (*first, day_key(&now, tz).max(*first))),
        };

        let Some((first, last)) = bounds else {
            return Ok(Vec::new());
        };

        Ok(days_inclusive(first, last)
            .map(|day| DailyPoint {
                day,
                metrics: by_day
                    .get(&day)
                    .map_or_else(PeriodMetrics::default, |events| self.metrics(events)),
            })
            .collect())
    }

    /// Metrics over an already filtered set of workouts
    #[must_use]
    pub fn metrics(&self, workouts: &[&WorkoutEvent]) -> PeriodMetrics {
        if workouts.is_empty() {
            return Self::empty_metrics();
        }

        let mut metrics = PeriodMetrics::default();
        for workout in workouts {
            metrics.total_workouts += 1;
            metrics.total_volume += workout.total_volume();
            metrics.total_duration_minutes += workout.effective_duration();
            metrics.total_sets += u32::try_from(workout.total_sets()).unwrap_or(u32::MAX);
            match workout.kind {
                WorkoutKind::Strength => metrics.strength_workouts += 1,
                WorkoutKind::Cardio => metrics.cardio_workouts += 1,
            }
        }
        metrics.average_duration_minutes =
            metrics.total_duration_minutes / f64::from(metrics.total_workouts);
        metrics.estimated_calories = self.estimate_calories(workouts);
        metrics
    }

    /// Calorie estimate using the configured method
    #[must_use]
    pub fn estimate_calories(&self, workouts: &[&WorkoutEvent]) -> f64 {
        let calories = &self.config.calories;
        match calories.method {
            CalorieMethod::PerWorkout => {
                #[allow(clippy::cast_precision_loss)]
                let count = workouts.len() as f64;
                count * calories.calories_per_workout
            }
            CalorieMethod::PerMinute => workouts
                .iter()
                .map(|workout| {
                    calories.per_minute.rate(workout.kind) * workout.effective_duration()
                })
                .sum(),
        }
    }

    fn weekly_target(&self, completed: u32) -> WeeklyTargetProgress {
        let target = self.config.goals.weekly_workout_target;
        let progress_percent = if target == 0 {
            0.0
        } else {
            (f64::from(completed) / f64::from(target) * 100.0).clamp(0.0, 100.0)
        };
        WeeklyTargetProgress {
            target,
            completed,
            progress_percent,
        }
    }

    fn filter<'w>(
        workouts: &'w [WorkoutEvent],
        window: &ResolvedWindow,
    ) -> Vec<&'w WorkoutEvent> {
        workouts
            .iter()
            .filter(|workout| {
                workout
                    .occurred_at
                    .as_ref()
                    .is_some_and(|occurred_at| window.contains(occurred_at))
            })
            .collect()
    }

    fn first_day<Tz: TimeZone>(workouts: &[&WorkoutEvent], tz: &Tz) -> Option<DayKey> {
        workouts
            .iter()
            .filter_map(|workout| workout.occurred_at.as_ref())
            .min()
            .map(|first| day_key(first, tz))
    }

    fn empty_metrics() -> PeriodMetrics {
        PeriodMetrics::default()
    }
}
