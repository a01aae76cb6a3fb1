// ABOUTME: Body-weight trend over a period window
// ABOUTME: Latest, earliest, change, range and a chronological series of measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, TimeZone, Utc};
use pierre_core::models::WeightEntry;
use serde::{Deserialize, Serialize};

use crate::calendar::{day_key, DayKey};
use crate::config::ConfigError;
use crate::periods::PeriodWindow;

/// One measurement in the trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    /// Local day of the measurement
    pub day: DayKey,
    /// When it was taken
    pub occurred_at: DateTime<Utc>,
    /// Measured weight
    pub weight: f64,
}

/// Weight trend over a window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// Most recent measurement
    pub latest: Option<WeightPoint>,
    /// Oldest measurement
    pub earliest: Option<WeightPoint>,
    /// `latest - earliest`
    pub change: f64,
    /// Change relative to the earliest weight, in percent
    pub change_pct: f64,
    /// Lowest weight
    pub min: Option<f64>,
    /// Highest weight
    pub max: Option<f64>,
    /// Valid measurements in the window
    pub entry_count: u32,
    /// Measurements in ascending time order
    pub series: Vec<WeightPoint>,
}

/// Body-weight trend analyzer
pub struct BodyWeightAnalyzer;

impl BodyWeightAnalyzer {
    /// Trend of valid entries inside `window`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the window is invalid
    pub fn trend<Tz: TimeZone>(
        entries: &[WeightEntry],
        window: &PeriodWindow,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Result<WeightTrend, ConfigError> {
        window.validate()?;
        let resolved = window.resolve(now, tz);

        let mut series: Vec<WeightPoint> = entries
            .iter()
            .filter(|entry| entry.is_valid())
            .filter_map(|entry| {
                let occurred_at = entry.occurred_at?;
                resolved.contains(&occurred_at).then(|| WeightPoint {
                    day: day_key(&occurred_at, tz),
                    occurred_at,
                    weight: entry.weight,
                })
            })
            .collect();

        if series.is_empty() {
            return Ok(Self::empty_trend());
        }
        series.sort_by(|a, b| {
            a.occurred_at
                .cmp(&b.occurred_at)
                .then_with(|| a.weight.total_cmp(&b.weight))
        });

        let earliest = series.first().cloned();
        let latest = series.last().cloned();
        let (change, change_pct) = match (&earliest, &latest) {
            (Some(first), Some(last)) => {
                let change = last.weight - first.weight;
                (change, change / first.weight * 100.0)
            }
            _ => (0.0, 0.0),
        };

        Ok(WeightTrend {
            latest,
            earliest,
            change,
            change_pct,
            min: series.iter().map(|p| p.weight).min_by(f64::total_cmp),
            max: series.iter().map(|p| p.weight).max_by(f64::total_cmp),
            entry_count: u32::try_from(series.len()).unwrap_or(u32::MAX),
            series,
        })
    }

    fn empty_trend() -> WeightTrend {
        WeightTrend::default()
    }
}
