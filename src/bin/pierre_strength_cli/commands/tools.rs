// ABOUTME: Tool discovery and invocation commands for pierre-strength-cli
// ABOUTME: Lists registered tool schemas and executes tools with raw JSON arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use pierre_strength::errors::ErrorResponse;
use pierre_strength::tools::{ToolExecutionContext, ToolRegistry, ToolResult};
use serde_json::Value;
use tracing::error;

use crate::helpers::display::{print_json, print_tool_result};

/// Print the schemas of all tools, or of one category
pub fn list(registry: &ToolRegistry, category: Option<&str>) -> Result<()> {
    let schemas = registry.schemas();
    let selected: Vec<_> = match category {
        Some(category) => {
            let names = registry.tools_in_category(category);
            schemas
                .into_iter()
                .filter(|schema| names.contains(&schema.name.as_str()))
                .collect()
        }
        None => schemas,
    };
    print_json(&selected)
}

/// Call a tool with a JSON argument string
pub async fn call(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    name: &str,
    raw_args: &str,
) -> Result<bool> {
    let args: Value = serde_json::from_str(raw_args)
        .with_context(|| format!("--args is not valid JSON: {raw_args}"))?;
    run(registry, context, name, args).await
}

/// Execute a tool and print its result
///
/// Tool failures are printed as an error result rather than propagated, so
/// stdout always carries JSON. Returns whether the tool succeeded.
pub async fn run(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    name: &str,
    args: Value,
) -> Result<bool> {
    let result = match registry.execute(name, args, context).await {
        Ok(result) => result,
        Err(e) => {
            error!(tool = name, "{e}");
            ToolResult::error(serde_json::to_value(ErrorResponse::from(e))?)
        }
    };
    print_tool_result(&result)?;
    Ok(!result.is_error)
}
