// ABOUTME: Activity analytics engine turning raw event logs into derived metrics
// ABOUTME: Calendar bucketing, streaks, records, periods, achievements, weight trend and timeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Analytics
//!
//! Pure, synchronous computation over caller-supplied event snapshots. No
//! component holds state, performs I/O or reads the system clock: `now` and
//! the time zone are always injected, so identical input gives identical
//! output on every surface.
//!
//! ## Modules
//!
//! - **calendar**: Timezone-local day keys and day arithmetic
//! - **streaks**: Current and longest consecutive-day runs
//! - **records**: Per-exercise best, previous best, trend series and classification
//! - **periods**: Volume, duration, sets, calories and frequency over a window
//! - **achievements**: Milestone evaluation with progress and unlock dates
//! - **`body_weight`**: Weight trend over a window
//! - **timeline**: Unified newest-first activity feed
//! - **config**: Injected heuristics with documented defaults
//!
//! ## Error Handling
//!
//! Malformed events are dropped silently and empty input yields zeroed
//! output. Only configuration mistakes (bad thresholds, unknown periods,
//! invalid windows) surface as [`ConfigError`].

/// Timezone-local calendar bucketing
pub mod calendar;

/// Streak calculation
pub mod streaks;

/// Personal record aggregation
pub mod records;

/// Period aggregation and window resolution
pub mod periods;

/// Achievement catalog and evaluation
pub mod achievements;

/// Body-weight trend
pub mod body_weight;

/// Unified activity feed
pub mod timeline;

/// Analytics configuration
pub mod config;

pub use achievements::{
    AchievementCatalog, AchievementDefinition, AchievementEngine, AchievementInputs,
    AchievementMetric, AchievementMetrics, AchievementRarity, AchievementStatus,
};
pub use body_weight::{BodyWeightAnalyzer, WeightPoint, WeightTrend};
pub use calendar::{day_key, days_between, days_inclusive, local_day_start, DayKey};
pub use config::{AnalyticsConfig, ConfigError, ExerciseCategory};
pub use periods::{
    DailyPoint, PeriodAggregator, PeriodMetrics, PeriodSummary, PeriodWindow, ResolvedWindow,
    WeeklyTargetProgress, MAX_ROLLING_DAYS,
};
pub use records::{ExerciseRecordSummary, RecordAggregator, RecordPoint};
pub use streaks::{StreakCalculator, StreakRun, StreakSummary};
pub use timeline::{ActivityTimeline, TimelineEntry, TimelineKind, TimelineSources};
