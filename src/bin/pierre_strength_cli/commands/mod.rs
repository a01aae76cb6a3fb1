// ABOUTME: Re-exports command modules for pierre-strength-cli
// ABOUTME: Provides access to analytics shortcuts and raw tool commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analytics;
pub mod tools;
