// ABOUTME: Defines ToolResult, the value returned by tool execution
// ABOUTME: Wraps JSON content and an error flag for assistant clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use serde_json::Value;

use crate::errors::AppResult;

/// Result returned by tool execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    /// The result value returned to the client
    pub content: Value,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Successful result
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Error result
    #[must_use]
    pub const fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Successful result from a serializable value
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value cannot be converted to JSON
    pub fn from_serializable<T: Serialize>(value: &T) -> AppResult<Self> {
        Ok(Self::ok(serde_json::to_value(value)?))
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::ok(Value::Null)
    }
}
