// ABOUTME: Main library entry point for the Pierre strength analytics service
// ABOUTME: Wires the analytics engine to a storage collaborator, assistant tools and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Derived activity analytics (streaks, personal records, period summaries,
//! achievements, body-weight trend and a unified timeline) computed from a
//! user's raw event log.
//!
//! ## Architecture
//!
//! - **`pierre-core`**: event models, error types and constants
//! - **`pierre-analytics`**: the pure, synchronous analytics engine
//! - **store**: async storage collaborator contract and an in-memory snapshot store
//! - **tools**: assistant tool layer calling the same engine functions
//! - **config**: environment-driven application settings
//! - **logging**: structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pierre_strength::config::AppConfig;
//! use pierre_strength::store::InMemoryStore;
//! use pierre_strength::tools::{ToolExecutionContext, ToolRegistry};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = AppConfig::from_env()?;
//! let store = InMemoryStore::load(&config.snapshot_path).await?;
//! let user_id = store.sole_user().await.ok_or_else(|| anyhow::anyhow!("no single user"))?;
//! let context = ToolExecutionContext::new(user_id, Arc::new(store), config.timezone);
//!
//! let registry = ToolRegistry::with_builtin_tools();
//! let result = registry
//!     .execute("get_streaks", serde_json::json!({}), &context)
//!     .await?;
//! println!("{}", result.content);
//! # Ok(())
//! # }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Storage collaborator contract and implementations
pub mod store;

/// Assistant tool layer over the analytics engine
pub mod tools;

pub use pierre_core::{constants, errors, models};
