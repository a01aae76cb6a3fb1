// ABOUTME: Central registry for analytics tools with capability-based filtering and execution
// ABOUTME: Provides tool discovery, categories, schema listing and timed execution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for analytics tools, providing:
//! - Tool registration and lookup
//! - Category grouping and capability-based filtering
//! - Schema generation for tool listings
//!
//! The registry is built once at startup and then used immutably. Tools are
//! `Arc`-wrapped for sharing across async tasks.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::constants::tool_categories;
use crate::errors::{AppError, AppResult, ToolError};

use super::context::ToolExecutionContext;
use super::implementations::achievements::create_achievement_tools;
use super::implementations::profile::create_profile_tools;
use super::implementations::records::create_record_tools;
use super::implementations::statistics::create_statistics_tools;
use super::result::ToolResult;
use super::schema::ToolSchema;
use super::traits::{AnalyticsTool, ToolCapabilities};

/// Central registry for analytics tools
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn AnalyticsTool>>,
    /// Tool names per category
    categories: BTreeMap<String, Vec<String>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            categories: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in tool
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Register a tool
    ///
    /// # Errors
    ///
    /// Returns `AlreadyRegistered` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn AnalyticsTool>) -> Result<(), ToolError> {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{name}' is already registered, skipping");
            return Err(ToolError::already_registered(name));
        }

        debug!(
            "Registering tool '{name}' with capabilities: {}",
            tool.capabilities().describe()
        );
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Register a tool under a category
    ///
    /// # Errors
    ///
    /// Returns `AlreadyRegistered` if a tool with the same name exists
    pub fn register_with_category(
        &mut self,
        tool: Arc<dyn AnalyticsTool>,
        category: &str,
    ) -> Result<(), ToolError> {
        let name = tool.name().to_owned();
        self.register(tool)?;
        self.categories
            .entry(category.to_owned())
            .or_default()
            .push(name);
        Ok(())
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn AnalyticsTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All tool names, sorted
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Tool names in a category, in registration order
    #[must_use]
    pub fn tools_in_category(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// All categories, sorted
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Schemas of every tool, sorted by name
    #[must_use]
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Tools declaring every capability in `required`, sorted by name
    #[must_use]
    pub fn filter_by_capabilities(
        &self,
        required: ToolCapabilities,
    ) -> Vec<&Arc<dyn AnalyticsTool>> {
        let mut tools: Vec<&Arc<dyn AnalyticsTool>> = self
            .tools
            .values()
            .filter(|tool| tool.capabilities().contains(required))
            .collect();
        tools.sort_by_key(|tool| tool.name());
        tools
    }

    /// Execute a tool by name
    ///
    /// Errors carry the caller's user id and request id, when one is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the tool is not found or its execution fails
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let Some(tool) = self.get(name) else {
            return Err(Self::with_caller(ToolError::not_found(name).into(), context));
        };

        let started = Instant::now();
        let outcome = tool.execute(args, context).await;
        let duration_ms = started.elapsed().as_millis();

        match &outcome {
            Ok(_) => info!(
                tool = name,
                user_id = %context.user_id,
                duration_ms,
                "Tool executed"
            ),
            Err(e) => warn!(
                tool = name,
                user_id = %context.user_id,
                duration_ms,
                error = %e,
                "Tool execution failed"
            ),
        }
        outcome.map_err(|e| Self::with_caller(e, context))
    }

    fn with_caller(error: AppError, context: &ToolExecutionContext) -> AppError {
        let error = error.with_user_id(context.user_id);
        match &context.request_id {
            Some(request_id) => error.with_request_id(request_id.clone()),
            None => error,
        }
    }

    /// Register all built-in tools
    pub fn register_builtin_tools(&mut self) {
        info!("Registering built-in tools...");

        self.register_category(create_statistics_tools(), tool_categories::STATISTICS);
        self.register_category(create_record_tools(), tool_categories::RECORDS);
        self.register_category(create_achievement_tools(), tool_categories::ACHIEVEMENTS);
        self.register_category(create_profile_tools(), tool_categories::PROFILE);

        info!("Registered {} built-in tools", self.len());
    }

    fn register_category(&mut self, tools: Vec<Box<dyn AnalyticsTool>>, category: &str) {
        for tool in tools {
            // Duplicates are already logged by register()
            let _ = self.register_with_category(Arc::from(tool), category);
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .field("categories", &self.categories)
            .finish()
    }
}
