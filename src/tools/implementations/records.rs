// ABOUTME: Personal record tool ranking each exercise's best lift with its history
// ABOUTME: Implements get_personal_records with optional exercise and compound filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use pierre_analytics::{ExerciseRecordSummary, RecordAggregator};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::constants::tools::GET_PERSONAL_RECORDS;
use crate::errors::AppResult;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params;
use crate::tools::result::ToolResult;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{AnalyticsTool, ToolCapabilities};

#[derive(Serialize)]
struct PersonalRecordsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    exercise: Option<String>,
    exercise_count: usize,
    compound_lift_total: f64,
    records: Vec<ExerciseRecordSummary>,
}

/// Best lift, runner-up and trend series per exercise
pub struct GetPersonalRecordsTool;

#[async_trait]
impl AnalyticsTool for GetPersonalRecordsTool {
    fn name(&self) -> &'static str {
        GET_PERSONAL_RECORDS
    }

    fn description(&self) -> &'static str {
        "Personal records per exercise: best weight, previous best, improvement and the \
         full record history. Compound lifts are listed first"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            (
                "exercise",
                PropertySchema::new("string", "Only this exercise (e.g. \"Squat\")"),
            ),
            (
                "compound_only",
                PropertySchema::new("boolean", "Only compound lifts"),
            ),
            (
                "include_series",
                PropertySchema::new("boolean", "Include each record history (default: true)"),
            ),
            (
                "limit",
                PropertySchema::new("integer", "Maximum number of exercises returned"),
            ),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::ANALYTICS | ToolCapabilities::RECORDS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let name = self.name();
        params::ensure_object(name, &args)?;
        let exercise = params::optional_str(name, &args, "exercise")?
            .map(str::trim)
            .filter(|exercise| !exercise.is_empty());
        let compound_only = params::optional_bool(name, &args, "compound_only")?.unwrap_or(false);
        let include_series = params::optional_bool(name, &args, "include_series")?.unwrap_or(true);
        let limit = params::optional_limit(name, &args, "limit")?;

        let events = ctx.store.list_personal_records(ctx.user_id).await?;
        let aggregator = RecordAggregator::new(&ctx.analytics.records);

        let all = aggregator.summarize(&events);
        let compound_lift_total = RecordAggregator::compound_total(&all);

        let mut records: Vec<ExerciseRecordSummary> = match exercise {
            Some(exercise) => aggregator
                .summary_for(&events, exercise)
                .into_iter()
                .collect(),
            None => all,
        };
        records.retain(|summary| !compound_only || summary.is_compound);
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        if !include_series {
            for summary in &mut records {
                summary.series.clear();
            }
        }
        debug!(
            user_id = %ctx.user_id,
            events = events.len(),
            exercises = records.len(),
            "Summarized personal records"
        );

        ToolResult::from_serializable(&PersonalRecordsResponse {
            exercise: exercise.map(str::to_owned),
            exercise_count: records.len(),
            compound_lift_total,
            records,
        })
    }
}

/// Record tools for registration
#[must_use]
pub fn create_record_tools() -> Vec<Box<dyn AnalyticsTool>> {
    vec![Box::new(GetPersonalRecordsTool)]
}
