// ABOUTME: Assistant tool layer exposing analytics operations as named, schema-described tools
// ABOUTME: Tools share one execution context and call the same engine functions as the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analytics Tools
//!
//! Every tool implements [`AnalyticsTool`], declares its capabilities and an
//! input schema, and is looked up by name in the [`ToolRegistry`].
//!
//! ## Built-in tools
//!
//! | Tool | Category |
//! |------|----------|
//! | `get_workout_stats` | statistics |
//! | `get_streaks` | statistics |
//! | `get_personal_records` | records |
//! | `get_achievements` | achievements |
//! | `get_profile_summary` | profile |
//! | `get_activity_timeline` | profile |

/// Per-call execution context
pub mod context;
/// Built-in tool implementations
pub mod implementations;
/// Argument extraction helpers
pub mod params;
/// Tool registry
pub mod registry;
/// Tool result type
pub mod result;
/// Input schema types
pub mod schema;
/// Tool trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use schema::{JsonSchema, PropertySchema, ToolSchema};
pub use traits::{AnalyticsTool, ToolCapabilities};
