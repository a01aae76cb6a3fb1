// ABOUTME: Defines the AnalyticsTool trait and ToolCapabilities for the assistant tool layer
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analytics Tool Trait and Capabilities
//!
//! Every assistant-facing tool implements [`AnalyticsTool`], which provides:
//! - Tool metadata (name, description, input schema)
//! - Capability flags for filtering and discovery
//! - Async execution with a [`ToolExecutionContext`]
//!
//! Tools are thin adapters: they parse JSON arguments, fetch events from the
//! store and call the same engine functions the UI layer uses.

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::schema::JsonSchema;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u16 {
        /// Tool reads events from the store
        const READS_DATA = 0b0000_0001;
        /// Tool runs engine computations
        const ANALYTICS = 0b0000_0010;
        /// Tool reports personal records
        const RECORDS = 0b0000_0100;
        /// Tool evaluates achievements
        const ACHIEVEMENTS = 0b0000_1000;
        /// Tool reports goal progress
        const GOALS = 0b0001_0000;
        /// Tool reports body-weight data
        const BODY_WEIGHT = 0b0010_0000;
    }
}

impl ToolCapabilities {
    /// Comma separated flag names for logging, `none` when empty
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .iter_names()
            .map(|(name, _)| name.to_lowercase())
            .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait every assistant tool implements.
///
/// - Tools are `Send + Sync` for sharing across async tasks
/// - `name()` returns `&'static str` for zero-allocation lookup
/// - `execute()` is async because tools read from the store
#[async_trait]
pub trait AnalyticsTool: Send + Sync {
    /// Unique identifier for the tool (e.g., `get_streaks`)
    fn name(&self) -> &'static str;

    /// Human-readable description for assistant consumption
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for filtering
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with given arguments and context
    ///
    /// # Errors
    ///
    /// Returns `AppError` for invalid arguments, store failures or
    /// configuration errors
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
