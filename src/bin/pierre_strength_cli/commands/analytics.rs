// ABOUTME: Analytics shortcut commands for pierre-strength-cli
// ABOUTME: Translates subcommand flags into tool arguments and runs the matching tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pierre_strength::constants::tools::{
    GET_ACHIEVEMENTS, GET_ACTIVITY_TIMELINE, GET_PERSONAL_RECORDS, GET_PROFILE_SUMMARY,
    GET_STREAKS, GET_WORKOUT_STATS,
};
use pierre_strength::tools::{ToolExecutionContext, ToolRegistry};
use serde_json::{json, Map, Value};

use super::tools::run;

/// Period statistics
pub async fn stats(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    period: &str,
    daily: bool,
) -> Result<bool> {
    let args = json!({ "period": period, "include_daily": daily });
    run(registry, context, GET_WORKOUT_STATS, args).await
}

/// Current and longest streaks
pub async fn streaks(registry: &ToolRegistry, context: &ToolExecutionContext) -> Result<bool> {
    run(registry, context, GET_STREAKS, json!({})).await
}

/// Personal records
pub async fn records(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    exercise: Option<&str>,
    compound_only: bool,
    limit: Option<usize>,
) -> Result<bool> {
    let mut args = Map::new();
    args.insert("compound_only".into(), Value::Bool(compound_only));
    if let Some(exercise) = exercise {
        args.insert("exercise".into(), json!(exercise));
    }
    if let Some(limit) = limit {
        args.insert("limit".into(), json!(limit));
    }
    run(registry, context, GET_PERSONAL_RECORDS, Value::Object(args)).await
}

/// Achievement progress
pub async fn achievements(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    earned_only: bool,
) -> Result<bool> {
    let args = json!({ "earned_only": earned_only });
    run(registry, context, GET_ACHIEVEMENTS, args).await
}

/// Profile overview
pub async fn profile(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    weight_period: Option<&str>,
) -> Result<bool> {
    let args = weight_period.map_or_else(
        || json!({}),
        |period| json!({ "weight_period": period }),
    );
    run(registry, context, GET_PROFILE_SUMMARY, args).await
}

/// Activity timeline
pub async fn timeline(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    limit: Option<usize>,
) -> Result<bool> {
    let args = limit.map_or_else(|| json!({}), |limit| json!({ "limit": limit }));
    run(registry, context, GET_ACTIVITY_TIMELINE, args).await
}
