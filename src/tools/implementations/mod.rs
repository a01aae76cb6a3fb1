// ABOUTME: Module containing the built-in analytics tool implementations
// ABOUTME: Each submodule corresponds to a tool category registered by the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `statistics` - `get_workout_stats`, `get_streaks`
//! - `records` - `get_personal_records`
//! - `achievements` - `get_achievements`
//! - `profile` - `get_profile_summary`, `get_activity_timeline`
//!
//! All built-in tools are read-only.

pub mod achievements;
pub mod profile;
pub mod records;
pub mod statistics;
