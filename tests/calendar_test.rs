// ABOUTME: Integration tests for timezone-local calendar bucketing
// ABOUTME: Validates day keys, signed day differences, local midnights and day ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use pierre_analytics::{day_key, days_between, days_inclusive, local_day_start, DayKey};

fn key(year: i32, month: u32, day: u32) -> DayKey {
    DayKey::from_ymd(year, month, day).unwrap()
}

#[test]
fn test_day_key_discards_time_of_day() {
    let morning = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 1).unwrap();
    let night = Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 59).unwrap();

    assert_eq!(day_key(&morning, &Tz::UTC), key(2025, 3, 10));
    assert_eq!(day_key(&night, &Tz::UTC), key(2025, 3, 10));
}

#[test]
fn test_day_key_follows_the_time_zone() {
    let instant = Utc.with_ymd_and_hms(2025, 3, 10, 3, 0, 0).unwrap();

    assert_eq!(day_key(&instant, &Tz::UTC), key(2025, 3, 10));
    assert_eq!(day_key(&instant, &Tz::America__New_York), key(2025, 3, 9));
    assert_eq!(day_key(&instant, &Tz::Asia__Tokyo), key(2025, 3, 10));
}

#[test]
fn test_days_between_is_signed() {
    let a = key(2025, 2, 27);
    let b = key(2025, 3, 2);

    assert_eq!(days_between(a, b), 3);
    assert_eq!(days_between(b, a), -3);
    assert_eq!(days_between(a, a), 0);
}

#[test]
fn test_day_arithmetic_crosses_month_and_year_boundaries() {
    assert_eq!(key(2024, 12, 31).succ(), key(2025, 1, 1));
    assert_eq!(key(2024, 3, 1).pred(), key(2024, 2, 29));
    assert_eq!(key(2025, 1, 1).add_days(-365), key(2024, 1, 2));
    assert_eq!(key(2025, 6, 18).week_start(), key(2025, 6, 16));
    assert_eq!(key(2025, 12, 5).next_month_start(), key(2026, 1, 1));
    assert_eq!(key(2025, 6, 18).year_start(), key(2025, 1, 1));
}

#[test]
fn test_local_day_start_is_local_midnight() {
    let paris = Tz::Europe__Paris;

    // CEST is UTC+2 in June
    assert_eq!(
        local_day_start(key(2025, 6, 18), &paris),
        Utc.with_ymd_and_hms(2025, 6, 17, 22, 0, 0).unwrap()
    );
    // CET is UTC+1 in January
    assert_eq!(
        local_day_start(key(2025, 1, 15), &paris),
        Utc.with_ymd_and_hms(2025, 1, 14, 23, 0, 0).unwrap()
    );
}

#[test]
fn test_local_day_start_skips_a_missing_midnight() {
    // Santiago springs forward at 00:00 local on 2024-09-08, so midnight never happens
    let santiago = Tz::America__Santiago;
    let start = local_day_start(key(2024, 9, 8), &santiago);

    assert_eq!(day_key(&start, &santiago), key(2024, 9, 8));
    assert_eq!(start, Utc.with_ymd_and_hms(2024, 9, 8, 4, 0, 0).unwrap());
}

#[test]
fn test_days_inclusive_covers_both_ends() {
    let days: Vec<DayKey> = days_inclusive(key(2025, 2, 27), key(2025, 3, 2)).collect();

    assert_eq!(
        days,
        vec![
            key(2025, 2, 27),
            key(2025, 2, 28),
            key(2025, 3, 1),
            key(2025, 3, 2)
        ]
    );
    assert_eq!(days_inclusive(key(2025, 3, 2), key(2025, 3, 1)).count(), 0);
}

#[test]
fn test_day_shift_saturates_at_calendar_bounds() {
    let today = key(2025, 6, 18);

    assert_eq!(today.add_days(i64::MAX).date(), NaiveDate::MAX);
    assert_eq!(today.add_days(i64::MIN).date(), NaiveDate::MIN);
    assert_eq!(today.add_days(-4_000_000_000).date(), NaiveDate::MIN);
    assert_eq!(today.add_days(4_000_000_000).date(), NaiveDate::MAX);
}
