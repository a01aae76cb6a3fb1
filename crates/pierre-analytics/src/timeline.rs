// ABOUTME: Unified activity feed merging workouts, records, weight entries and goals
// ABOUTME: Newest-first ordering with deterministic tie-breaking and optional truncation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, TimeZone, Utc};
use pierre_core::models::{Goal, PersonalRecordEvent, WeightEntry, WorkoutEvent, WorkoutKind};
use serde::{Deserialize, Serialize};

use crate::calendar::{day_key, DayKey};

/// Source of a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    /// Completed workout
    Workout,
    /// Personal record
    PersonalRecord,
    /// Body-weight measurement
    WeightEntry,
    /// Goal deadline
    GoalDeadline,
}

/// One feed row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// When it happened (or is due)
    pub occurred_at: DateTime<Utc>,
    /// Local day
    pub day: DayKey,
    /// Source kind
    pub kind: TimelineKind,
    /// Source identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Short detail line
    pub detail: String,
}

/// Event lists merged into the feed
#[derive(Debug, Clone, Copy)]
pub struct TimelineSources<'a> {
    /// Completed workouts
    pub workouts: &'a [WorkoutEvent],
    /// Personal-record events
    pub personal_records: &'a [PersonalRecordEvent],
    /// Body-weight entries
    pub weight_entries: &'a [WeightEntry],
    /// Goals, shown at their deadline
    pub goals: &'a [Goal],
}

/// Activity timeline builder
pub struct ActivityTimeline;

impl ActivityTimeline {
    /// Merge all sources newest first, keeping at most `limit` entries
    #[must_use]
    pub fn build<Tz: TimeZone>(
        sources: &TimelineSources<'_>,
        tz: &Tz,
        limit: Option<usize>,
    ) -> Vec<TimelineEntry> {
        let mut entries: Vec<TimelineEntry> = Vec::new();

        for workout in sources.workouts {
            if let Some(occurred_at) = workout.occurred_at {
                let kind_label = match workout.kind {
                    WorkoutKind::Strength => "Strength",
                    WorkoutKind::Cardio => "Cardio",
                };
                let summary = format!(
                    "{} exercises, {} sets, {:.0} volume, {:.0} min",
                    workout.exercises.len(),
                    workout.total_sets(),
                    workout.total_volume(),
                    workout.effective_duration()
                );
                let detail = match workout.notes.as_deref() {
                    Some(notes) => format!("{summary} ({notes})"),
                    None => summary,
                };
                entries.push(TimelineEntry {
                    occurred_at,
                    day: day_key(&occurred_at, tz),
                    kind: TimelineKind::Workout,
                    id: workout.id.clone(),
                    title: format!("{kind_label} workout"),
                    detail,
                });
            }
        }

        for record in sources.personal_records.iter().filter(|r| r.is_valid()) {
            if let Some(occurred_at) = record.occurred_at {
                entries.push(TimelineEntry {
                    occurred_at,
                    day: day_key(&occurred_at, tz),
                    kind: TimelineKind::PersonalRecord,
                    id: record.id.clone(),
                    title: format!("New {} record", record.exercise_name.trim()),
                    detail: format!("{} x {}", record.weight, record.reps),
                });
            }
        }

        for entry in sources.weight_entries.iter().filter(|e| e.is_valid()) {
            if let Some(occurred_at) = entry.occurred_at {
                entries.push(TimelineEntry {
                    occurred_at,
                    day: day_key(&occurred_at, tz),
                    kind: TimelineKind::WeightEntry,
                    id: entry.id.clone(),
                    title: "Weight logged".to_owned(),
                    detail: match entry.notes.as_deref() {
                        Some(notes) => format!("{} ({notes})", entry.weight),
                        None => entry.weight.to_string(),
                    },
                });
            }
        }

        for goal in sources.goals {
            if let Some(deadline) = goal.deadline {
                let status = if goal.completed { "completed" } else { "open" };
                entries.push(TimelineEntry {
                    occurred_at: deadline,
                    day: day_key(&deadline, tz),
                    kind: TimelineKind::GoalDeadline,
                    id: goal.id.clone(),
                    title: format!("Goal deadline: {}", goal.goal_type),
                    detail: format!(
                        "{}/{} {} ({:.0}%, {status})",
                        goal.current_value,
                        goal.target_value,
                        goal.unit,
                        goal.progress_percent()
                    ),
                });
            }
        }

        entries.sort_by(|a, b| {
            b.occurred_at
                .cmp(&a.occurred_at)
                .then_with(|| a.kind.cmp(&b.kind))
                .then_with(|| a.id.cmp(&b.id))
        });
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }
}
