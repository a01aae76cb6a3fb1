// ABOUTME: Streak calculator for consecutive-day workout activity
// ABOUTME: Reduces workouts to unique local days and derives current and longest runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Streak calculation.
//!
//! Workouts are first reduced to a set of unique local day keys, so several
//! workouts on the same day count once. The current streak is anchored at
//! today, or at yesterday when nothing has been logged yet today.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use pierre_core::models::WorkoutEvent;
use serde::{Deserialize, Serialize};

use crate::calendar::{day_key, days_between, DayKey};

/// Current and longest streak with supporting counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive active days ending today or yesterday
    pub current: u32,
    /// Longest run of consecutive active days
    pub longest: u32,
    /// Number of distinct active days
    pub active_days: u32,
    /// Most recent active day
    pub last_active_day: Option<DayKey>,
}

/// A maximal run of consecutive active days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRun {
    /// First day of the run
    pub start: DayKey,
    /// Last day of the run
    pub end: DayKey,
    /// Number of days in the run
    pub length: u32,
}

impl StreakRun {
    /// The `n`-th day of the run, 1-based
    #[must_use]
    pub fn nth_day(&self, n: u32) -> Option<DayKey> {
        (n >= 1 && n <= self.length).then(|| self.start.add_days(i64::from(n) - 1))
    }
}

/// Streak calculation engine
pub struct StreakCalculator;

impl StreakCalculator {
    /// Compute the streak summary for a set of workouts
    #[must_use]
    pub fn calculate<Tz: TimeZone>(
        workouts: &[WorkoutEvent],
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> StreakSummary {
        let days = Self::unique_days(workouts, tz);
        Self::from_days(&days, day_key(&now, tz))
    }

    /// Reduce valid workouts to their distinct local days
    #[must_use]
    pub fn unique_days<Tz: TimeZone>(workouts: &[WorkoutEvent], tz: &Tz) -> BTreeSet<DayKey> {
        workouts
            .iter()
            .filter_map(|workout| workout.occurred_at.as_ref())
            .map(|occurred_at| day_key(occurred_at, tz))
            .collect()
    }

    /// Compute the summary from a precomputed day set
    #[must_use]
    pub fn from_days(days: &BTreeSet<DayKey>, today: DayKey) -> StreakSummary {
        if days.is_empty() {
            return Self::empty_summary();
        }

        let longest = Self::runs(days)
            .iter()
            .map(|run| run.length)
            .max()
            .unwrap_or(0);
        let current = Self::current_run(days, today).map_or(0, |run| run.length);

        StreakSummary {
            current,
            longest,
            active_days: u32::try_from(days.len()).unwrap_or(u32::MAX),
            last_active_day: days.iter().next_back().copied(),
        }
    }

    /// Maximal runs of consecutive days in ascending order
    #[must_use]
    pub fn runs(days: &BTreeSet<DayKey>) -> Vec<StreakRun> {
        let mut runs: Vec<StreakRun> = Vec::new();

        for &day in days {
            match runs.last_mut() {
                Some(run) if days_between(run.end, day) == 1 => {
                    run.end = day;
                    run.length += 1;
                }
                _ => runs.push(StreakRun {
                    start: day,
                    end: day,
                    length: 1,
                }),
            }
        }

        runs
    }

    /// Run ending today, or yesterday when today has no activity
    ///
    /// Days after `today` are ignored.
    #[must_use]
    pub fn current_run(days: &BTreeSet<DayKey>, today: DayKey) -> Option<StreakRun> {
        let anchor = if days.contains(&today) {
            today
        } else if days.contains(&today.pred()) {
            today.pred()
        } else {
            return None;
        };

        let mut start = anchor;
        let mut length = 1;
        loop {
            let previous = start.pred();
            if previous == start || !days.contains(&previous) {
                break;
            }
            start = previous;
            length += 1;
        }

        Some(StreakRun {
            start,
            end: anchor,
            length,
        })
    }

    fn empty_summary() -> StreakSummary {
        StreakSummary::default()
    }
}
