// ABOUTME: Integration tests for period aggregation and window resolution
// ABOUTME: Covers volume, calories, frequency, weekly targets, daily series and window errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use pierre_analytics::config::{CalorieMethod, ConfigError};
use pierre_analytics::{
    AnalyticsConfig, DayKey, PeriodAggregator, PeriodMetrics, PeriodWindow, MAX_ROLLING_DAYS,
};
use pierre_strength::models::{WorkoutEvent, WorkoutKind};

use common::{days_ago, fixed_now, init_test_logging, lifting_workout, workouts_on_days};

fn config() -> AnalyticsConfig {
    init_test_logging();
    AnalyticsConfig::default()
}

#[test]
fn test_volume_sums_weight_times_reps_across_sets() {
    let config = config();
    let workouts = vec![
        lifting_workout("a", days_ago(0), "Squat", &[(5, 100.0)]),
        lifting_workout("b", days_ago(1), "Squat", &[(10, 50.0)]),
    ];

    let summary = PeriodAggregator::new(&config)
        .summarize(&workouts, &PeriodWindow::Week, fixed_now(), &Tz::UTC)
        .unwrap();

    assert!((summary.metrics.total_volume - 1000.0).abs() < f64::EPSILON);
    assert_eq!(summary.metrics.total_sets, 2);
    assert_eq!(summary.metrics.total_workouts, 2);
    assert!((summary.metrics.total_duration_minutes - 90.0).abs() < f64::EPSILON);
    assert!((summary.metrics.average_duration_minutes - 45.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_input_yields_zeroed_summary() {
    let config = config();

    for window in [
        PeriodWindow::Week,
        PeriodWindow::Month,
        PeriodWindow::Year,
        PeriodWindow::All,
    ] {
        let summary = PeriodAggregator::new(&config)
            .summarize(&[], &window, fixed_now(), &Tz::UTC)
            .unwrap();

        assert_eq!(summary.metrics, PeriodMetrics::default());
        assert_eq!(summary.active_days, 0);
        assert!(summary.workouts_per_week.abs() < f64::EPSILON);
    }
}

#[test]
fn test_week_runs_from_monday_to_monday() {
    let config = config();
    // fixed_now is a Wednesday: offsets 0..=2 fall on Mon-Wed, 3 is the previous Sunday
    let workouts = workouts_on_days(&[0, 1, 2, 3, 9]);

    let summary = PeriodAggregator::new(&config)
        .summarize(&workouts, &PeriodWindow::Week, fixed_now(), &Tz::UTC)
        .unwrap();

    assert_eq!(summary.window, "week");
    assert_eq!(
        summary.start,
        Some(Utc.with_ymd_and_hms(2025, 6, 16, 0, 0, 0).unwrap())
    );
    assert_eq!(
        summary.end,
        Some(Utc.with_ymd_and_hms(2025, 6, 23, 0, 0, 0).unwrap())
    );
    assert_eq!(summary.metrics.total_workouts, 3);
    assert_eq!(summary.active_days, 3);
    assert!((summary.workouts_per_week - 3.0).abs() < 1e-9);
}

#[test]
fn test_week_reports_progress_against_the_weekly_target() {
    let config = config();
    let workouts = workouts_on_days(&[0, 1]);
    let aggregator = PeriodAggregator::new(&config);

    let week = aggregator
        .summarize(&workouts, &PeriodWindow::Week, fixed_now(), &Tz::UTC)
        .unwrap();
    let month = aggregator
        .summarize(&workouts, &PeriodWindow::Month, fixed_now(), &Tz::UTC)
        .unwrap();

    let target = week.weekly_target.unwrap();
    assert_eq!(target.target, 5);
    assert_eq!(target.completed, 2);
    assert!((target.progress_percent - 40.0).abs() < 1e-9);
    assert!(month.weekly_target.is_none());
}

#[test]
fn test_rolling_window_includes_today_and_previous_days() {
    let config = config();
    let workouts = workouts_on_days(&[0, 6, 7]);

    let summary = PeriodAggregator::new(&config)
        .summarize(&workouts, &PeriodWindow::rolling(7).unwrap(), fixed_now(), &Tz::UTC)
        .unwrap();

    assert_eq!(summary.window, "rolling:7");
    assert_eq!(summary.metrics.total_workouts, 2);
    assert!((summary.workouts_per_week - 2.0).abs() < 1e-9);
}

#[test]
fn test_custom_range_is_half_open() {
    let config = config();
    let workouts = workouts_on_days(&[1, 2, 3]);
    let window = PeriodWindow::range(days_ago(3), days_ago(1)).unwrap();

    let summary = PeriodAggregator::new(&config)
        .summarize(&workouts, &window, fixed_now(), &Tz::UTC)
        .unwrap();

    assert_eq!(summary.metrics.total_workouts, 2);
    assert_eq!(summary.start, Some(days_ago(3)));
    assert_eq!(summary.end, Some(days_ago(1)));
}

#[test]
fn test_all_time_frequency_runs_from_the_first_workout_day() {
    let config = config();
    // 14 local days from the first workout through today
    let workouts = workouts_on_days(&[13, 6, 0]);

    let summary = PeriodAggregator::new(&config)
        .summarize(&workouts, &PeriodWindow::All, fixed_now(), &Tz::UTC)
        .unwrap();

    assert_eq!(summary.start, None);
    assert_eq!(summary.end, None);
    assert!((summary.workouts_per_week - 1.5).abs() < 1e-9);
}

#[test]
fn test_month_window_follows_the_time_zone() {
    let config = config();
    // 22:30 UTC on May 31 is already June 1 in Paris
    let edge = Utc.with_ymd_and_hms(2025, 5, 31, 22, 30, 0).unwrap();
    let workouts = vec![WorkoutEvent::new("edge", edge, WorkoutKind::Strength)];
    let aggregator = PeriodAggregator::new(&config);

    let utc = aggregator
        .summarize(&workouts, &PeriodWindow::Month, fixed_now(), &Tz::UTC)
        .unwrap();
    let paris = aggregator
        .summarize(&workouts, &PeriodWindow::Month, fixed_now(), &Tz::Europe__Paris)
        .unwrap();

    assert_eq!(utc.metrics.total_workouts, 0);
    assert_eq!(paris.metrics.total_workouts, 1);
    assert_eq!(
        paris.start,
        Some(Utc.with_ymd_and_hms(2025, 5, 31, 22, 0, 0).unwrap())
    );
}

#[test]
fn test_calories_per_workout_and_per_minute() {
    init_test_logging();
    let workouts = vec![
        WorkoutEvent::new("lift", days_ago(0), WorkoutKind::Strength).with_duration(60.0),
        WorkoutEvent::new("run", days_ago(1), WorkoutKind::Cardio).with_duration(30.0),
    ];
    let per_workout = AnalyticsConfig::default();
    let mut per_minute = AnalyticsConfig::default();
    per_minute.calories.method = CalorieMethod::PerMinute;

    let flat = PeriodAggregator::new(&per_workout)
        .summarize(&workouts, &PeriodWindow::Week, fixed_now(), &Tz::UTC)
        .unwrap();
    let timed = PeriodAggregator::new(&per_minute)
        .summarize(&workouts, &PeriodWindow::Week, fixed_now(), &Tz::UTC)
        .unwrap();

    assert!((flat.metrics.estimated_calories - 600.0).abs() < 1e-9);
    assert!((timed.metrics.estimated_calories - 660.0).abs() < 1e-9);
    assert_eq!(timed.metrics.strength_workouts, 1);
    assert_eq!(timed.metrics.cardio_workouts, 1);
}

#[test]
fn test_negative_durations_count_as_zero() {
    let config = config();
    let workouts =
        vec![WorkoutEvent::new("odd", days_ago(0), WorkoutKind::Strength).with_duration(-30.0)];

    let summary = PeriodAggregator::new(&config)
        .summarize(&workouts, &PeriodWindow::Week, fixed_now(), &Tz::UTC)
        .unwrap();

    assert_eq!(summary.metrics.total_workouts, 1);
    assert!(summary.metrics.total_duration_minutes.abs() < f64::EPSILON);
}

#[test]
fn test_daily_series_has_one_row_per_local_day() {
    let config = config();
    let workouts = workouts_on_days(&[0, 2]);

    let series = PeriodAggregator::new(&config)
        .daily_series(&workouts, &PeriodWindow::Week, fixed_now(), &Tz::UTC)
        .unwrap();

    assert_eq!(series.len(), 7);
    assert_eq!(series[0].day, DayKey::from_ymd(2025, 6, 16).unwrap());
    assert_eq!(series[6].day, DayKey::from_ymd(2025, 6, 22).unwrap());
    let counts: Vec<u32> = series.iter().map(|p| p.metrics.total_workouts).collect();
    assert_eq!(counts, vec![1, 0, 1, 0, 0, 0, 0]);
}

#[test]
fn test_all_time_daily_series_spans_first_workout_to_today() {
    let config = config();
    let aggregator = PeriodAggregator::new(&config);

    let series = aggregator
        .daily_series(&workouts_on_days(&[4, 1]), &PeriodWindow::All, fixed_now(), &Tz::UTC)
        .unwrap();
    let empty = aggregator
        .daily_series(&[], &PeriodWindow::All, fixed_now(), &Tz::UTC)
        .unwrap();

    assert_eq!(series.len(), 5);
    assert_eq!(series[4].day, DayKey::from_ymd(2025, 6, 18).unwrap());
    assert!(empty.is_empty());
}

#[test]
fn test_period_names_parse() {
    assert_eq!(PeriodWindow::parse("week").unwrap(), PeriodWindow::Week);
    assert_eq!(PeriodWindow::parse(" Month ").unwrap(), PeriodWindow::Month);
    assert_eq!(PeriodWindow::parse("YEAR").unwrap(), PeriodWindow::Year);
    assert_eq!(PeriodWindow::parse("all").unwrap(), PeriodWindow::All);
    assert_eq!(
        "rolling:14".parse::<PeriodWindow>().unwrap(),
        PeriodWindow::Rolling { days: 14 }
    );
}

#[test]
fn test_invalid_windows_are_rejected_before_aggregation() {
    let config = config();
    let aggregator = PeriodAggregator::new(&config);
    let workouts = workouts_on_days(&[0]);

    assert!(matches!(
        PeriodWindow::parse("fortnight"),
        Err(ConfigError::UnknownPeriod(_))
    ));
    assert!(matches!(
        PeriodWindow::parse("rolling:0"),
        Err(ConfigError::InvalidWindow(_))
    ));
    assert!(matches!(
        PeriodWindow::range(days_ago(0), days_ago(1)),
        Err(ConfigError::InvalidWindow(_))
    ));
    assert!(matches!(
        aggregator.summarize(
            &workouts,
            &PeriodWindow::Rolling { days: 0 },
            fixed_now(),
            &Tz::UTC
        ),
        Err(ConfigError::InvalidWindow(_))
    ));
}

#[test]
fn test_oversized_rolling_window_is_rejected_not_shrunk() {
    let config = config();
    let workouts = workouts_on_days(&[0, 1, 2, 30]);

    assert!(matches!(
        PeriodWindow::parse("rolling:4000000000"),
        Err(ConfigError::InvalidWindow(_))
    ));
    assert!(matches!(
        PeriodWindow::rolling(MAX_ROLLING_DAYS + 1),
        Err(ConfigError::InvalidWindow(_))
    ));
    assert!(matches!(
        PeriodAggregator::new(&config).summarize(
            &workouts,
            &PeriodWindow::Rolling { days: u32::MAX },
            fixed_now(),
            &Tz::UTC
        ),
        Err(ConfigError::InvalidWindow(_))
    ));

    let widest = PeriodAggregator::new(&config)
        .summarize(
            &workouts,
            &PeriodWindow::rolling(MAX_ROLLING_DAYS).unwrap(),
            fixed_now(),
            &Tz::UTC,
        )
        .unwrap();
    assert_eq!(widest.metrics.total_workouts, 4);
}

#[test]
fn test_summaries_are_deterministic() {
    let config = config();
    let workouts = vec![
        lifting_workout("a", days_ago(0), "Squat", &[(5, 100.0), (3, 110.0)]),
        lifting_workout("b", days_ago(3), "Deadlift", &[(5, 140.0)]),
        lifting_workout("c", days_ago(12), "Bench Press", &[(8, 70.0)]),
    ];
    let aggregator = PeriodAggregator::new(&config);

    let first = aggregator
        .summarize(&workouts, &PeriodWindow::Month, fixed_now(), &Tz::UTC)
        .unwrap();
    let second = aggregator
        .summarize(&workouts, &PeriodWindow::Month, fixed_now(), &Tz::UTC)
        .unwrap();

    assert_eq!(first, second);
}
