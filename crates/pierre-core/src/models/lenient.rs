// ABOUTME: Lenient serde helpers for event fields coming from free-text UI entry
// ABOUTME: Invalid numbers become zero and unparseable timestamps become None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Lenient field deserializers.
//!
//! Partial data is expected during live use, so a bad field must never fail
//! the whole snapshot. These helpers accept numbers, numeric strings, `null`
//! or a missing field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::non_negative;

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Deserialize a non-negative float, defaulting to 0.0
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value
pub fn non_negative_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64).map_or(0.0, non_negative))
}

/// Deserialize a non-negative count, defaulting to 0
///
/// Fractional values are truncated toward zero.
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value
pub fn count_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let raw = value.as_ref().and_then(value_as_f64).map_or(0.0, non_negative);
    // Safe: clamped to the u32 range before the cast
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(raw.min(f64::from(u32::MAX)) as u32)
}

/// Deserialize an optional timestamp from RFC 3339 text or epoch milliseconds
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }))
}
