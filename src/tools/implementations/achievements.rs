// ABOUTME: Achievement tool evaluating the configured milestone catalog for a user
// ABOUTME: Implements get_achievements with progress, earned state and unlock dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use pierre_analytics::{AchievementEngine, AchievementInputs, AchievementMetrics, AchievementStatus};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::statistics::timezone_property;
use crate::constants::tools::GET_ACHIEVEMENTS;
use crate::errors::AppResult;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params;
use crate::tools::result::ToolResult;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{AnalyticsTool, ToolCapabilities};

#[derive(Serialize)]
struct AchievementsResponse {
    earned_count: usize,
    total: usize,
    metrics: AchievementMetrics,
    achievements: Vec<AchievementStatus>,
}

/// Milestone progress for the context user
pub struct GetAchievementsTool;

#[async_trait]
impl AnalyticsTool for GetAchievementsTool {
    fn name(&self) -> &'static str {
        GET_ACHIEVEMENTS
    }

    fn description(&self) -> &'static str {
        "Evaluate achievements: progress toward each milestone, whether it is earned \
         and when it was unlocked. Earned achievements come first"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            (
                "earned_only",
                PropertySchema::new("boolean", "Only earned achievements"),
            ),
            timezone_property(),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
            | ToolCapabilities::ANALYTICS
            | ToolCapabilities::ACHIEVEMENTS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let name = self.name();
        params::ensure_object(name, &args)?;
        let tz = params::timezone(name, &args, ctx.timezone)?;
        let earned_only = params::optional_bool(name, &args, "earned_only")?.unwrap_or(false);
        let now = ctx.now();

        let catalog = ctx.analytics.achievements.catalog()?;
        let (workouts, personal_records, account_created_at) = tokio::try_join!(
            ctx.store.list_workouts(ctx.user_id, ctx.limits.workouts),
            ctx.store.list_personal_records(ctx.user_id),
            ctx.store.account_created_at(ctx.user_id),
        )?;
        let inputs = AchievementInputs {
            workouts: &workouts,
            personal_records: &personal_records,
            account_created_at,
        };

        let engine = AchievementEngine::new(&catalog, &ctx.analytics.records);
        let (mut achievements, metrics) = engine.evaluate_with_metrics(&inputs, now, &tz);
        let earned_count = achievements.iter().filter(|status| status.earned).count();
        let total = achievements.len();
        if earned_only {
            achievements.retain(|status| status.earned);
        }
        debug!(
            user_id = %ctx.user_id,
            earned = earned_count,
            total,
            "Evaluated achievements"
        );

        ToolResult::from_serializable(&AchievementsResponse {
            earned_count,
            total,
            metrics,
            achievements,
        })
    }
}

/// Achievement tools for registration
#[must_use]
pub fn create_achievement_tools() -> Vec<Box<dyn AnalyticsTool>> {
    vec![Box::new(GetAchievementsTool)]
}
