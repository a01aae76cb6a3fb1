// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for time arithmetic, list limits, tool names and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Calendar and time arithmetic
pub mod time {
    /// Days in a calendar week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Days per week as float for frequency math
    pub const DAYS_PER_WEEK_F64: f64 = 7.0;
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR_F64: f64 = 60.0;
}

/// Limits applied when reading from the storage collaborator
pub mod limits {
    /// Default number of workouts fetched per request
    pub const DEFAULT_WORKOUT_LIMIT: usize = 1_000;
    /// Default number of body-weight entries fetched per request
    pub const DEFAULT_WEIGHT_ENTRY_LIMIT: usize = 365;
    /// Default number of timeline entries returned
    pub const DEFAULT_TIMELINE_LIMIT: usize = 50;
    /// Number of top records included in profile summaries
    pub const PROFILE_TOP_RECORDS: usize = 5;
    /// Upper bound accepted for any `limit` argument
    pub const MAX_LIST_LIMIT: usize = 10_000;
}

/// Assistant tool identifiers
pub mod tools {
    /// Period statistics tool
    pub const GET_WORKOUT_STATS: &str = "get_workout_stats";
    /// Streak summary tool
    pub const GET_STREAKS: &str = "get_streaks";
    /// Personal record ranking tool
    pub const GET_PERSONAL_RECORDS: &str = "get_personal_records";
    /// Achievement evaluation tool
    pub const GET_ACHIEVEMENTS: &str = "get_achievements";
    /// Combined profile summary tool
    pub const GET_PROFILE_SUMMARY: &str = "get_profile_summary";
    /// Unified activity feed tool
    pub const GET_ACTIVITY_TIMELINE: &str = "get_activity_timeline";
}

/// Tool categories used by the registry
pub mod tool_categories {
    /// Workout statistics and streaks
    pub const STATISTICS: &str = "statistics";
    /// Personal records
    pub const RECORDS: &str = "records";
    /// Achievements and milestones
    pub const ACHIEVEMENTS: &str = "achievements";
    /// Profile and timeline views
    pub const PROFILE: &str = "profile";
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name
    pub const PIERRE_STRENGTH: &str = "pierre-strength";
}
