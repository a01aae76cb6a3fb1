// ABOUTME: Core types and constants for Pierre strength analytics
// ABOUTME: Foundation crate with event models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! strength analytics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Event models consumed by the analytics engine (workouts, records, weight, goals)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core event models (workouts, personal records, weight entries, goals)
pub mod models;
