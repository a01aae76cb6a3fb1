// ABOUTME: Output formatting helpers for pierre-strength-cli
// ABOUTME: Writes pretty JSON to stdout for tool results and schema listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};

use anyhow::Result;
use pierre_strength::tools::ToolResult;
use serde::Serialize;

/// Write a value as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Successful results print their content; failures print the whole result
pub fn print_tool_result(result: &ToolResult) -> Result<()> {
    if result.is_error {
        print_json(result)
    } else {
        print_json(&result.content)
    }
}
