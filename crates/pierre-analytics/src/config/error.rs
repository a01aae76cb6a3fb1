// ABOUTME: Configuration error types for analytics setup and window validation
// ABOUTME: Raised eagerly before any event is processed, never for bad event data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for the analytics engine.

use pierre_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Period name is not one of the supported windows
    #[error("Unknown period '{0}': expected week, month, year, all or rolling:<days>")]
    UnknownPeriod(String),

    /// Window bounds are unusable
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// Achievement threshold is zero, negative or not finite
    #[error("Achievement '{id}' has invalid threshold {threshold}")]
    InvalidThreshold {
        /// Achievement identifier
        id: String,
        /// Offending threshold
        threshold: f64,
    },

    /// Two achievement definitions share an identifier
    #[error("Duplicate achievement id '{0}'")]
    DuplicateAchievement(String),
}

impl ConfigError {
    /// Whether the error comes from caller-supplied request arguments
    #[must_use]
    pub const fn is_request_error(&self) -> bool {
        matches!(self, Self::UnknownPeriod(_) | Self::InvalidWindow(_))
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = if error.is_request_error() {
            ErrorCode::InvalidInput
        } else if matches!(error, ConfigError::MissingField(_)) {
            ErrorCode::ConfigMissing
        } else {
            ErrorCode::ConfigInvalid
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
