// ABOUTME: Workout statistics tools: period summaries and streaks
// ABOUTME: Implements get_workout_stats and get_streaks on top of the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Statistics Tools
//!
//! - `GetWorkoutStatsTool` - Volume, duration, sets, calories and frequency over a window
//! - `GetStreaksTool` - Current and longest consecutive-day streaks

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pierre_analytics::{
    day_key, DailyPoint, DayKey, PeriodAggregator, PeriodSummary, PeriodWindow, StreakCalculator,
    StreakSummary,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::constants::tools::{GET_STREAKS, GET_WORKOUT_STATS};
use crate::errors::AppResult;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params;
use crate::tools::result::ToolResult;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{AnalyticsTool, ToolCapabilities};

/// Shared `timezone` property
pub(super) fn timezone_property() -> (&'static str, PropertySchema) {
    (
        "timezone",
        PropertySchema::new(
            "string",
            "IANA time zone used to bucket events into local days (defaults to the server setting)",
        ),
    )
}

// ============================================================================
// GetWorkoutStatsTool
// ============================================================================

#[derive(Serialize)]
struct WorkoutStatsResponse {
    timezone: &'static str,
    generated_at: DateTime<Utc>,
    summary: PeriodSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    daily: Option<Vec<DailyPoint>>,
}

/// Period summary over a named or custom window
pub struct GetWorkoutStatsTool;

#[async_trait]
impl AnalyticsTool for GetWorkoutStatsTool {
    fn name(&self) -> &'static str {
        GET_WORKOUT_STATS
    }

    fn description(&self) -> &'static str {
        "Summarize workouts over a period: total workouts, volume, duration, sets, \
         estimated calories, active days and workouts per week"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            (
                "period",
                PropertySchema::new(
                    "string",
                    "week, month, year, all or rolling:<days> (default: week)",
                ),
            ),
            (
                "start",
                PropertySchema::new("string", "Custom range start, RFC 3339 (inclusive)"),
            ),
            (
                "end",
                PropertySchema::new("string", "Custom range end, RFC 3339 (exclusive)"),
            ),
            (
                "include_daily",
                PropertySchema::new("boolean", "Also return one row per local day"),
            ),
            timezone_property(),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::ANALYTICS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let name = self.name();
        params::ensure_object(name, &args)?;
        let tz = params::timezone(name, &args, ctx.timezone)?;
        let window = params::period_window(name, &args, PeriodWindow::Week)?;
        let include_daily = params::optional_bool(name, &args, "include_daily")?.unwrap_or(false);
        let now = ctx.now();

        let workouts = ctx
            .store
            .list_workouts(ctx.user_id, ctx.limits.workouts)
            .await?;
        debug!(
            user_id = %ctx.user_id,
            workouts = workouts.len(),
            window = %window,
            "Computing workout stats"
        );

        let aggregator = PeriodAggregator::new(&ctx.analytics);
        let summary = aggregator.summarize(&workouts, &window, now, &tz)?;
        let daily = if include_daily {
            Some(aggregator.daily_series(&workouts, &window, now, &tz)?)
        } else {
            None
        };

        ToolResult::from_serializable(&WorkoutStatsResponse {
            timezone: tz.name(),
            generated_at: now,
            summary,
            daily,
        })
    }
}

// ============================================================================
// GetStreaksTool
// ============================================================================

#[derive(Serialize)]
struct StreaksResponse {
    timezone: &'static str,
    today: DayKey,
    active_today: bool,
    #[serde(flatten)]
    streaks: StreakSummary,
}

/// Current and longest streak of active days
pub struct GetStreaksTool;

#[async_trait]
impl AnalyticsTool for GetStreaksTool {
    fn name(&self) -> &'static str {
        GET_STREAKS
    }

    fn description(&self) -> &'static str {
        "Current and longest streak of consecutive days with at least one workout. \
         A streak stays current until a full local day passes without training"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([timezone_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::ANALYTICS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let name = self.name();
        params::ensure_object(name, &args)?;
        let tz = params::timezone(name, &args, ctx.timezone)?;
        let now = ctx.now();

        let workouts = ctx
            .store
            .list_workouts(ctx.user_id, ctx.limits.workouts)
            .await?;
        let streaks = StreakCalculator::calculate(&workouts, now, &tz);
        let today = day_key(&now, &tz);

        ToolResult::from_serializable(&StreaksResponse {
            timezone: tz.name(),
            today,
            active_today: streaks.last_active_day == Some(today),
            streaks,
        })
    }
}

/// Statistics tools for registration
#[must_use]
pub fn create_statistics_tools() -> Vec<Box<dyn AnalyticsTool>> {
    vec![Box::new(GetWorkoutStatsTool), Box::new(GetStreaksTool)]
}
