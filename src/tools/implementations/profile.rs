// ABOUTME: Profile tools combining streaks, totals, records, goals and weight into one view
// ABOUTME: Implements get_profile_summary and get_activity_timeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Tools
//!
//! - `GetProfileSummaryTool` - One-shot overview for a profile screen
//! - `GetActivityTimelineTool` - Unified newest-first feed
//!
//! Both read the whole snapshot once and run several engine components on it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pierre_analytics::{
    AchievementEngine, AchievementInputs, ActivityTimeline, BodyWeightAnalyzer,
    ExerciseRecordSummary, PeriodAggregator, PeriodMetrics, PeriodSummary, PeriodWindow,
    RecordAggregator, StreakCalculator, StreakSummary, TimelineEntry, TimelineSources,
    WeightTrend,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::statistics::timezone_property;
use crate::constants::limits::{DEFAULT_TIMELINE_LIMIT, PROFILE_TOP_RECORDS};
use crate::constants::tools::{GET_ACTIVITY_TIMELINE, GET_PROFILE_SUMMARY};
use crate::errors::{AppResult, ToolError};
use crate::models::Goal;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params;
use crate::tools::result::ToolResult;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{AnalyticsTool, ToolCapabilities};

// ============================================================================
// GetProfileSummaryTool
// ============================================================================

#[derive(Serialize)]
struct GoalProgress {
    id: String,
    goal_type: String,
    target_value: f64,
    current_value: f64,
    unit: String,
    deadline: Option<DateTime<Utc>>,
    completed: bool,
    progress_percent: f64,
}

impl From<&Goal> for GoalProgress {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id.clone(),
            goal_type: goal.goal_type.clone(),
            target_value: goal.target_value,
            current_value: goal.current_value,
            unit: goal.unit.clone(),
            deadline: goal.deadline,
            completed: goal.completed,
            progress_percent: goal.progress_percent(),
        }
    }
}

#[derive(Serialize)]
struct CaloriesToday {
    estimated: f64,
    target: f64,
    progress_percent: f64,
}

#[derive(Serialize)]
struct ProfileSummaryResponse {
    user_id: String,
    timezone: &'static str,
    generated_at: DateTime<Utc>,
    member_since: Option<DateTime<Utc>>,
    streaks: StreakSummary,
    totals: PeriodMetrics,
    this_week: PeriodSummary,
    calories_today: CaloriesToday,
    top_records: Vec<ExerciseRecordSummary>,
    compound_lift_total: f64,
    achievements_earned: usize,
    achievements_total: usize,
    goals: Vec<GoalProgress>,
    weight_trend: WeightTrend,
}

/// Overview of a user's training for profile screens
pub struct GetProfileSummaryTool;

#[async_trait]
impl AnalyticsTool for GetProfileSummaryTool {
    fn name(&self) -> &'static str {
        GET_PROFILE_SUMMARY
    }

    fn description(&self) -> &'static str {
        "Profile overview: streaks, all-time totals, this week against the weekly target, \
         today's estimated calories against the daily target, top personal records, \
         goal progress and body-weight trend"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            (
                "weight_period",
                PropertySchema::new(
                    "string",
                    "Window for the body-weight trend: week, month, year, all or \
                     rolling:<days> (default: month)",
                ),
            ),
            timezone_property(),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
            | ToolCapabilities::ANALYTICS
            | ToolCapabilities::RECORDS
            | ToolCapabilities::ACHIEVEMENTS
            | ToolCapabilities::GOALS
            | ToolCapabilities::BODY_WEIGHT
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let name = self.name();
        params::ensure_object(name, &args)?;
        let tz = params::timezone(name, &args, ctx.timezone)?;
        let weight_window = match params::optional_str(name, &args, "weight_period")? {
            Some(period) => PeriodWindow::parse(period).map_err(|e| {
                ToolError::invalid_parameter(name, "weight_period", e.to_string())
            })?,
            None => PeriodWindow::Month,
        };
        let now = ctx.now();
        let config = &ctx.analytics;

        let snapshot = ctx.snapshot().await?;

        let periods = PeriodAggregator::new(config);
        let totals = periods
            .summarize(&snapshot.workouts, &PeriodWindow::All, now, &tz)?
            .metrics;
        let this_week = periods.summarize(&snapshot.workouts, &PeriodWindow::Week, now, &tz)?;
        let today = periods.summarize(&snapshot.workouts, &PeriodWindow::rolling(1)?, now, &tz)?;
        let target = config.goals.daily_calorie_target;
        let calories_today = CaloriesToday {
            estimated: today.metrics.estimated_calories,
            target,
            progress_percent: if target > 0.0 {
                (today.metrics.estimated_calories / target * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            },
        };

        let records = RecordAggregator::new(&config.records).summarize(&snapshot.personal_records);
        let compound_lift_total = RecordAggregator::compound_total(&records);
        let top_records: Vec<ExerciseRecordSummary> = records
            .into_iter()
            .take(PROFILE_TOP_RECORDS)
            .map(|mut summary| {
                summary.series.clear();
                summary
            })
            .collect();

        let catalog = config.achievements.catalog()?;
        let achievements = AchievementEngine::new(&catalog, &config.records).evaluate(
            &AchievementInputs {
                workouts: &snapshot.workouts,
                personal_records: &snapshot.personal_records,
                account_created_at: snapshot.account_created_at,
            },
            now,
            &tz,
        );

        let weight_trend =
            BodyWeightAnalyzer::trend(&snapshot.weight_entries, &weight_window, now, &tz)?;

        debug!(
            user_id = %ctx.user_id,
            events = snapshot.event_count(),
            "Built profile summary"
        );

        ToolResult::from_serializable(&ProfileSummaryResponse {
            user_id: ctx.user_id.to_string(),
            timezone: tz.name(),
            generated_at: now,
            member_since: snapshot.account_created_at,
            streaks: StreakCalculator::calculate(&snapshot.workouts, now, &tz),
            totals,
            this_week,
            calories_today,
            top_records,
            compound_lift_total,
            achievements_earned: achievements.iter().filter(|status| status.earned).count(),
            achievements_total: achievements.len(),
            goals: snapshot.goals.iter().map(GoalProgress::from).collect(),
            weight_trend,
        })
    }
}

// ============================================================================
// GetActivityTimelineTool
// ============================================================================

#[derive(Serialize)]
struct TimelineResponse {
    timezone: &'static str,
    count: usize,
    entries: Vec<TimelineEntry>,
}

/// Unified feed of workouts, records, weight entries and goal deadlines
pub struct GetActivityTimelineTool;

#[async_trait]
impl AnalyticsTool for GetActivityTimelineTool {
    fn name(&self) -> &'static str {
        GET_ACTIVITY_TIMELINE
    }

    fn description(&self) -> &'static str {
        "Newest-first activity feed merging workouts, personal records, body-weight \
         entries and goal deadlines"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            (
                "limit",
                PropertySchema::new("integer", "Maximum number of entries (default: 50)"),
            ),
            timezone_property(),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
            | ToolCapabilities::RECORDS
            | ToolCapabilities::GOALS
            | ToolCapabilities::BODY_WEIGHT
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let name = self.name();
        params::ensure_object(name, &args)?;
        let tz = params::timezone(name, &args, ctx.timezone)?;
        let limit = params::optional_limit(name, &args, "limit")?.unwrap_or(DEFAULT_TIMELINE_LIMIT);

        let snapshot = ctx.snapshot().await?;
        let entries = ActivityTimeline::build(
            &TimelineSources {
                workouts: &snapshot.workouts,
                personal_records: &snapshot.personal_records,
                weight_entries: &snapshot.weight_entries,
                goals: &snapshot.goals,
            },
            &tz,
            Some(limit),
        );

        ToolResult::from_serializable(&TimelineResponse {
            timezone: tz.name(),
            count: entries.len(),
            entries,
        })
    }
}

/// Profile tools for registration
#[must_use]
pub fn create_profile_tools() -> Vec<Box<dyn AnalyticsTool>> {
    vec![
        Box::new(GetProfileSummaryTool),
        Box::new(GetActivityTimelineTool),
    ]
}
