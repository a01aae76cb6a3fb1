// ABOUTME: Integration tests for the assistant tool layer over the in-memory store
// ABOUTME: Exercises every built-in tool through the registry, plus argument and lookup errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use chrono::SecondsFormat;
use chrono_tz::Tz;
use pierre_strength::errors::{AppError, ErrorCode, ErrorResponse};
use pierre_strength::store::InMemoryStore;
use pierre_strength::tools::{ToolCapabilities, ToolExecutionContext, ToolRegistry};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{days_ago, fixed_now, init_test_logging, sample_context, sample_snapshot};

async fn call(name: &str, args: Value) -> Value {
    let (_, ctx) = sample_context();
    let result = ToolRegistry::with_builtin_tools()
        .execute(name, args, &ctx)
        .await
        .unwrap();
    assert!(!result.is_error);
    result.content
}

async fn call_err(name: &str, args: Value) -> AppError {
    let (_, ctx) = sample_context();
    ToolRegistry::with_builtin_tools()
        .execute(name, args, &ctx)
        .await
        .unwrap_err()
}

fn rfc3339(days: i64) -> String {
    days_ago(days).to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn approx(value: &Value, expected: f64) -> bool {
    value.as_f64().is_some_and(|v| (v - expected).abs() < 1e-6)
}

#[test]
fn test_registry_exposes_sorted_schemas() {
    let registry = ToolRegistry::with_builtin_tools();

    let names: Vec<String> = registry.schemas().into_iter().map(|s| s.name).collect();

    assert_eq!(
        names,
        vec![
            "get_achievements",
            "get_activity_timeline",
            "get_personal_records",
            "get_profile_summary",
            "get_streaks",
            "get_workout_stats",
        ]
    );
    let stats = serde_json::to_value(registry.get("get_workout_stats").unwrap().input_schema())
        .unwrap();
    assert_eq!(stats["type"], "object");
    assert_eq!(stats["properties"]["period"]["type"], "string");
    assert_eq!(stats["properties"]["include_daily"]["type"], "boolean");
}

#[test]
fn test_capability_filter() {
    let registry = ToolRegistry::with_builtin_tools();

    let weight_tools: Vec<&str> = registry
        .filter_by_capabilities(ToolCapabilities::BODY_WEIGHT)
        .into_iter()
        .map(|tool| tool.name())
        .collect();

    assert_eq!(
        weight_tools,
        vec!["get_activity_timeline", "get_profile_summary"]
    );
    assert_eq!(
        registry
            .filter_by_capabilities(ToolCapabilities::READS_DATA)
            .len(),
        6
    );

    let stats = registry.get("get_workout_stats").unwrap().capabilities();
    assert!(stats.contains(ToolCapabilities::READS_DATA | ToolCapabilities::ANALYTICS));
    let timeline = registry.get("get_activity_timeline").unwrap().capabilities();
    assert!(!timeline.contains(ToolCapabilities::ANALYTICS));
}

#[tokio::test]
async fn test_workout_stats_defaults_to_this_week() {
    let content = call("get_workout_stats", json!({})).await;
    let summary = &content["summary"];

    assert_eq!(content["timezone"], "UTC");
    assert_eq!(summary["window"], "week");
    assert_eq!(summary["metrics"]["total_workouts"], 3);
    assert!(approx(&summary["metrics"]["total_volume"], 1820.0));
    assert_eq!(summary["metrics"]["total_sets"], 4);
    assert!(approx(&summary["metrics"]["estimated_calories"], 900.0));
    assert_eq!(summary["weekly_target"]["completed"], 3);
    assert!(approx(&summary["weekly_target"]["progress_percent"], 60.0));
    assert!(content.get("daily").is_none());
}

#[tokio::test]
async fn test_workout_stats_for_month_with_daily_rows() {
    let content = call(
        "get_workout_stats",
        json!({"period": "month", "include_daily": true}),
    )
    .await;

    assert_eq!(content["summary"]["metrics"]["total_workouts"], 5);
    assert!(approx(
        &content["summary"]["workouts_per_week"],
        5.0 / (30.0 / 7.0)
    ));
    assert!(content["summary"]["weekly_target"].is_null());
    let daily = content["daily"].as_array().unwrap();
    assert_eq!(daily.len(), 30);
    assert_eq!(daily[0]["day"], "2025-06-01");
    assert_eq!(daily[17]["total_workouts"], 1);
}

#[tokio::test]
async fn test_workout_stats_custom_range() {
    let content = call(
        "get_workout_stats",
        json!({"start": rfc3339(3), "end": rfc3339(0)}),
    )
    .await;

    assert_eq!(content["summary"]["metrics"]["total_workouts"], 2);
}

#[tokio::test]
async fn test_workout_stats_argument_errors() {
    let unknown_period = call_err("get_workout_stats", json!({"period": "fortnight"})).await;
    let lone_start = call_err("get_workout_stats", json!({"start": rfc3339(3)})).await;
    let inverted = call_err(
        "get_workout_stats",
        json!({"start": rfc3339(0), "end": rfc3339(3)}),
    )
    .await;
    let not_a_date = call_err(
        "get_workout_stats",
        json!({"start": "yesterday", "end": rfc3339(0)}),
    )
    .await;
    let not_an_object = call_err("get_workout_stats", json!(["week"])).await;
    let wrong_type = call_err("get_workout_stats", json!({"include_daily": "yes"})).await;

    assert_eq!(unknown_period.code, ErrorCode::InvalidInput);
    assert_eq!(lone_start.code, ErrorCode::MissingRequiredField);
    assert_eq!(inverted.code, ErrorCode::InvalidInput);
    assert_eq!(not_a_date.code, ErrorCode::InvalidInput);
    assert_eq!(not_an_object.code, ErrorCode::InvalidInput);
    assert_eq!(wrong_type.code, ErrorCode::InvalidInput);
    assert_eq!(unknown_period.context.details["tool"], "get_workout_stats");
}

#[tokio::test]
async fn test_streaks_tool() {
    let content = call("get_streaks", Value::Null).await;

    assert_eq!(content["current"], 3);
    assert_eq!(content["longest"], 3);
    assert_eq!(content["active_days"], 5);
    assert_eq!(content["today"], "2025-06-18");
    assert_eq!(content["active_today"], true);
}

#[tokio::test]
async fn test_timezone_argument_changes_local_today() {
    // 12:00 UTC is already 02:00 the next day at UTC+14
    let content = call("get_streaks", json!({"timezone": "Pacific/Kiritimati"})).await;
    let unknown = call_err("get_streaks", json!({"timezone": "Nowhere/Special"})).await;

    assert_eq!(content["timezone"], "Pacific/Kiritimati");
    assert_eq!(content["today"], "2025-06-19");
    assert_eq!(content["current"], 3);
    assert_eq!(unknown.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_personal_records_tool() {
    let all = call("get_personal_records", json!({})).await;
    let names: Vec<&str> = all["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["exercise"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Deadlift", "Squat", "Bench Press", "Bicep Curl"]);
    assert_eq!(all["exercise_count"], 4);
    assert!(approx(&all["compound_lift_total"], 320.0));

    let squat = call("get_personal_records", json!({"exercise": "Squat"})).await;
    assert_eq!(squat["exercise"], "Squat");
    assert_eq!(squat["exercise_count"], 1);
    assert!(approx(&squat["records"][0]["best"]["weight"], 100.0));
    assert!(approx(&squat["records"][0]["previous_best"], 95.0));
    assert_eq!(squat["records"][0]["series"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_personal_records_filters() {
    let compound = call(
        "get_personal_records",
        json!({"compound_only": true, "limit": 2, "include_series": false}),
    )
    .await;
    let missing = call("get_personal_records", json!({"exercise": "Front Squat"})).await;
    let bad_limit = call_err("get_personal_records", json!({"limit": 0})).await;

    assert_eq!(compound["exercise_count"], 2);
    assert!(compound["records"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["is_compound"] == true && r["series"].as_array().unwrap().is_empty()));
    assert_eq!(missing["exercise_count"], 0);
    assert_eq!(bad_limit.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_achievements_tool() {
    let content = call("get_achievements", json!({})).await;
    let earned_only = call("get_achievements", json!({"earned_only": true})).await;

    assert_eq!(content["total"], 12);
    assert_eq!(content["earned_count"], 4);
    assert_eq!(content["metrics"]["current_streak"], 3);
    assert_eq!(content["metrics"]["account_age_days"], 40);
    let earned_ids: Vec<&str> = earned_only["achievements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        earned_ids,
        vec!["streak_3", "first_pr", "first_workout", "member_30"]
    );
}

#[tokio::test]
async fn test_profile_summary_tool() {
    let content = call("get_profile_summary", json!({})).await;

    assert_eq!(content["streaks"]["current"], 3);
    assert_eq!(content["totals"]["total_workouts"], 5);
    assert_eq!(content["this_week"]["weekly_target"]["completed"], 3);
    assert!(approx(&content["calories_today"]["estimated"], 300.0));
    assert!(approx(&content["calories_today"]["progress_percent"], 15.0));
    assert_eq!(content["top_records"].as_array().unwrap().len(), 4);
    assert!(content["top_records"][0]["series"]
        .as_array()
        .unwrap()
        .is_empty());
    assert_eq!(content["achievements_earned"], 4);
    assert_eq!(content["achievements_total"], 12);
    assert!(approx(
        &content["goals"][0]["progress_percent"],
        5.0 / 12.0 * 100.0
    ));
    assert_eq!(content["weight_trend"]["entry_count"], 2);
}

#[tokio::test]
async fn test_profile_weight_period() {
    let all = call("get_profile_summary", json!({"weight_period": "all"})).await;
    let invalid = call_err("get_profile_summary", json!({"weight_period": "decade"})).await;

    assert_eq!(all["weight_trend"]["entry_count"], 3);
    assert!(approx(&all["weight_trend"]["change"], -1.5));
    assert_eq!(invalid.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_activity_timeline_tool() {
    let content = call("get_activity_timeline", json!({})).await;
    let limited = call("get_activity_timeline", json!({"limit": 3})).await;

    assert_eq!(content["count"], 14);
    assert_eq!(content["entries"][0]["kind"], "goal_deadline");
    assert_eq!(limited["count"], 3);
    assert_eq!(limited["entries"][1]["id"], "w-today");
}

#[tokio::test]
async fn test_unknown_tool_and_unknown_user() {
    init_test_logging();
    let registry = ToolRegistry::with_builtin_tools();
    let store = InMemoryStore::from_snapshots([sample_snapshot(Uuid::new_v4())]);
    let stranger =
        ToolExecutionContext::new(Uuid::new_v4(), Arc::new(store), Tz::UTC).with_now(fixed_now());

    let unknown_tool = registry
        .execute("get_sleep_score", json!({}), &stranger)
        .await
        .unwrap_err();
    let unknown_user = registry
        .execute("get_streaks", json!({}), &stranger)
        .await
        .unwrap_err();

    assert_eq!(unknown_tool.code, ErrorCode::ResourceNotFound);
    assert_eq!(unknown_user.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_errors_carry_the_callers_request_and_user() {
    let (user_id, ctx) = sample_context();
    let ctx = ctx.with_request_id("req-42");
    let registry = ToolRegistry::with_builtin_tools();

    let error = registry
        .execute("get_workout_stats", json!({"period": "fortnight"}), &ctx)
        .await
        .unwrap_err();
    assert_eq!(error.context.user_id, Some(user_id));

    let body = serde_json::to_value(ErrorResponse::from(error)).unwrap();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["request_id"], "req-42");
    assert_eq!(body["error"]["details"]["tool"], "get_workout_stats");

    let missing_tool = registry
        .execute("get_calendar", json!({}), &ctx)
        .await
        .unwrap_err();
    assert_eq!(missing_tool.context.request_id.as_deref(), Some("req-42"));
    assert_eq!(missing_tool.context.user_id, Some(user_id));
}

#[tokio::test]
async fn test_errors_without_request_id_leave_it_unset() {
    let error = call_err("get_workout_stats", json!({"period": "fortnight"})).await;

    assert!(error.context.request_id.is_none());
    assert!(error.context.user_id.is_some());
}

#[tokio::test]
async fn test_identical_requests_give_identical_results() {
    let first = call("get_profile_summary", json!({})).await;
    let second = call("get_profile_summary", json!({})).await;

    // user_id differs between sample contexts
    let strip = |mut value: Value| {
        value.as_object_mut().unwrap().remove("user_id");
        value
    };
    assert_eq!(strip(first), strip(second));
}
