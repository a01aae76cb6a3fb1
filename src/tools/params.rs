// ABOUTME: Argument parsing helpers shared by the analytics tools
// ABOUTME: Turns loosely typed JSON arguments into windows, limits, flags and time zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use pierre_analytics::PeriodWindow;
use serde_json::Value;

use crate::constants::limits::MAX_LIST_LIMIT;
use crate::errors::{AppError, AppResult, ToolError};

/// Reject anything other than an object or `null`
///
/// # Errors
///
/// Returns `InvalidParameter` when `args` is a scalar or an array
pub fn ensure_object(tool: &str, args: &Value) -> AppResult<()> {
    if args.is_object() || args.is_null() {
        Ok(())
    } else {
        Err(ToolError::invalid_parameter(tool, "arguments", "expected a JSON object").into())
    }
}

/// Optional string argument
///
/// # Errors
///
/// Returns `InvalidParameter` when the value is present but not a string
pub fn optional_str<'a>(tool: &str, args: &'a Value, key: &str) -> AppResult<Option<&'a str>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(ToolError::invalid_parameter(tool, key, "expected a string").into()),
    }
}

/// Optional boolean argument
///
/// # Errors
///
/// Returns `InvalidParameter` when the value is present but not a boolean
pub fn optional_bool(tool: &str, args: &Value, key: &str) -> AppResult<Option<bool>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(ToolError::invalid_parameter(tool, key, "expected a boolean").into()),
    }
}

/// Optional list limit in `1..=MAX_LIST_LIMIT`
///
/// # Errors
///
/// Returns `InvalidParameter` for non-integers and out-of-range values
pub fn optional_limit(tool: &str, args: &Value, key: &str) -> AppResult<Option<usize>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|raw| usize::try_from(raw).ok())
            .filter(|limit| (1..=MAX_LIST_LIMIT).contains(limit))
            .map(Some)
            .ok_or_else(|| {
                ToolError::invalid_parameter(
                    tool,
                    key,
                    format!("expected an integer between 1 and {MAX_LIST_LIMIT}"),
                )
                .into()
            }),
    }
}

/// Aggregation window from `period`, or from `start`/`end` for a custom range
///
/// # Errors
///
/// Returns `InvalidParameter` for unknown periods, zero-day rolling windows,
/// unparseable timestamps and inverted ranges, and `MissingParameter` when
/// only one range bound is given
pub fn period_window(tool: &str, args: &Value, default: PeriodWindow) -> AppResult<PeriodWindow> {
    let start = optional_timestamp(tool, args, "start")?;
    let end = optional_timestamp(tool, args, "end")?;

    match (start, end) {
        (Some(start), Some(end)) => PeriodWindow::range(start, end)
            .map_err(|e| ToolError::invalid_parameter(tool, "start", e.to_string()).into()),
        (Some(_), None) => Err(ToolError::missing_parameter(tool, "end").into()),
        (None, Some(_)) => Err(ToolError::missing_parameter(tool, "start").into()),
        (None, None) => match optional_str(tool, args, "period")? {
            Some(name) => PeriodWindow::parse(name)
                .map_err(|e| ToolError::invalid_parameter(tool, "period", e.to_string()).into()),
            None => Ok(default),
        },
    }
}

/// Time zone from the `timezone` argument, else `default`
///
/// # Errors
///
/// Returns `InvalidParameter` for names outside the IANA database
pub fn timezone(tool: &str, args: &Value, default: Tz) -> AppResult<Tz> {
    match optional_str(tool, args, "timezone")? {
        Some(name) => name.trim().parse::<Tz>().map_err(|_| {
            ToolError::invalid_parameter(tool, "timezone", format!("unknown time zone '{name}'"))
                .into()
        }),
        None => Ok(default),
    }
}

fn optional_timestamp(tool: &str, args: &Value, key: &str) -> AppResult<Option<DateTime<Utc>>> {
    optional_str(tool, args, key)?
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw.trim())
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|e| {
                    AppError::from(ToolError::invalid_parameter(
                        tool,
                        key,
                        format!("expected RFC 3339: {e}"),
                    ))
                })
        })
        .transpose()
}
