// ABOUTME: Environment-based application configuration for the analytics service
// ABOUTME: Resolves the default time zone, snapshot file location and store list limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::PathBuf;

use chrono_tz::Tz;
use tracing::{debug, info};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Default snapshot file location
pub const DEFAULT_SNAPSHOT_PATH: &str = "./data/snapshot.json";

/// Application settings read from the environment
///
/// | Variable | Default |
/// |----------|---------|
/// | `PIERRE_TIMEZONE` | `UTC` |
/// | `PIERRE_SNAPSHOT_PATH` | `./data/snapshot.json` |
/// | `PIERRE_WORKOUT_LIMIT` | 1000 |
/// | `PIERRE_WEIGHT_ENTRY_LIMIT` | 365 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Time zone used for local day bucketing
    pub timezone: Tz,
    /// JSON snapshot read by the in-memory store
    pub snapshot_path: PathBuf,
    /// Most recent workouts fetched per request
    pub workout_limit: usize,
    /// Most recent weight entries fetched per request
    pub weight_entry_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            workout_limit: limits::DEFAULT_WORKOUT_LIMIT,
            weight_entry_limit: limits::DEFAULT_WEIGHT_ENTRY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown time zone or a limit
    /// that is not a positive integer within bounds
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let defaults = Self::default();
        let config = Self {
            timezone: match env::var("PIERRE_TIMEZONE") {
                Ok(name) => parse_timezone(&name)?,
                Err(_) => defaults.timezone,
            },
            snapshot_path: env::var("PIERRE_SNAPSHOT_PATH")
                .map_or(defaults.snapshot_path, PathBuf::from),
            workout_limit: env_limit("PIERRE_WORKOUT_LIMIT", defaults.workout_limit)?,
            weight_entry_limit: env_limit(
                "PIERRE_WEIGHT_ENTRY_LIMIT",
                defaults.weight_entry_limit,
            )?,
        };

        debug!(
            timezone = %config.timezone,
            snapshot_path = %config.snapshot_path.display(),
            workout_limit = config.workout_limit,
            weight_entry_limit = config.weight_entry_limit,
            "Application configuration resolved"
        );
        Ok(config)
    }
}

/// Parse an IANA time zone name such as `Europe/Paris`
///
/// # Errors
///
/// Returns a configuration error when the name is not in the tz database
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::config(format!("Unknown time zone: {name}")))
}

fn env_limit(key: &str, default: usize) -> AppResult<usize> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if (1..=limits::MAX_LIST_LIMIT).contains(&value) => Ok(value),
        _ => Err(AppError::config(format!(
            "Invalid {key}: expected an integer between 1 and {}",
            limits::MAX_LIST_LIMIT
        ))),
    }
}
