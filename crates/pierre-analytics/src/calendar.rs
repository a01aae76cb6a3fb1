// ABOUTME: Calendar bucketing of points in time into timezone-local day keys
// ABOUTME: Day arithmetic and local-midnight resolution shared by every aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calendar bucketing.
//!
//! Every aggregation in this crate works on local calendar days. The caller
//! chooses the time zone once per request and passes it to each call; mixing
//! zones within one aggregation run is unsupported.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound when searching for the first valid local minute of a day
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Timezone-local calendar date with time of day discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Build a key from year, month and day
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Underlying calendar date
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Calendar year
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Calendar month (1-12)
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month (1-31)
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Following day
    #[must_use]
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// Preceding day
    #[must_use]
    pub fn pred(self) -> Self {
        self.add_days(-1)
    }

    /// Shift by a signed number of days, saturating at the calendar bounds
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        let bound = if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        };
        Self(
            Duration::try_days(days)
                .and_then(|delta| self.0.checked_add_signed(delta))
                .unwrap_or(bound),
        )
    }

    /// Monday of the ISO week containing this day
    #[must_use]
    pub fn week_start(self) -> Self {
        self.add_days(-i64::from(self.0.weekday().num_days_from_monday()))
    }

    /// First day of the month containing this day
    #[must_use]
    pub fn month_start(self) -> Self {
        self.0.with_day(1).map_or(self, Self)
    }

    /// First day of the following month
    #[must_use]
    pub fn next_month_start(self) -> Self {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        Self::from_ymd(year, month, 1).unwrap_or(self)
    }

    /// January 1 of this day's year
    #[must_use]
    pub fn year_start(self) -> Self {
        Self::from_ymd(self.year(), 1, 1).unwrap_or(self)
    }

    /// January 1 of the following year
    #[must_use]
    pub fn next_year_start(self) -> Self {
        Self::from_ymd(self.year() + 1, 1, 1).unwrap_or(self)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Map a point in time to the local calendar day in `tz`
#[must_use]
pub fn day_key<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> DayKey {
    DayKey(timestamp.with_timezone(tz).date_naive())
}

/// Signed number of days from `a` to `b` (`b - a`)
#[must_use]
pub fn days_between(a: DayKey, b: DayKey) -> i64 {
    b.0.signed_duration_since(a.0).num_days()
}

/// First instant of `day` in `tz`, as UTC
///
/// Ambiguous midnights resolve to the earlier instant. When midnight falls in
/// a DST gap the first valid local minute of the day is used.
#[must_use]
pub fn local_day_start<Tz: TimeZone>(day: DayKey, tz: &Tz) -> DateTime<Utc> {
    let midnight = day.0.and_time(NaiveTime::MIN);
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return start.with_timezone(&Utc);
    }

    (1..=MINUTES_PER_DAY)
        .filter_map(|minute| Duration::try_minutes(minute).map(|offset| midnight + offset))
        .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
        .map_or_else(
            || Utc.from_utc_datetime(&midnight),
            |start| start.with_timezone(&Utc),
        )
}

/// Every day from `start` through `end`, both inclusive
///
/// Empty when `start > end`.
pub fn days_inclusive(start: DayKey, end: DayKey) -> impl Iterator<Item = DayKey> {
    start
        .0
        .iter_days()
        .take_while(move |day| *day <= end.0)
        .map(DayKey)
}
