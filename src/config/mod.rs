// ABOUTME: Configuration module for the analytics service
// ABOUTME: Re-exports environment settings and the engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Pierre strength analytics
//!
//! - **Environment**: time zone, snapshot location and list limits
//! - **Analytics**: engine heuristics, re-exported from `pierre-analytics`

/// Environment-only application configuration
pub mod environment;

pub use environment::AppConfig;
pub use pierre_analytics::config::{AnalyticsConfig, ConfigError};
