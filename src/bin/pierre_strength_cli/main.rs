// ABOUTME: Pierre strength CLI - runs analytics tools against a JSON activity snapshot
// ABOUTME: Prints streaks, records, period stats, achievements and the timeline as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Weekly summary with a daily series
//! pierre-strength-cli --snapshot ./data/snapshot.json stats --period week --daily
//!
//! # Streaks in a specific time zone
//! pierre-strength-cli --timezone Europe/Paris streaks
//!
//! # Personal records for one exercise
//! pierre-strength-cli records --exercise "Bench Press"
//!
//! # List the available tools and call one directly
//! pierre-strength-cli tools list
//! pierre-strength-cli tools call get_achievements --args '{"earned_only": true}'
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use pierre_strength::config::environment::parse_timezone;
use pierre_strength::config::AppConfig;
use pierre_strength::logging::LoggingConfig;
use pierre_strength::store::{InMemoryStore, ListLimits};
use pierre_strength::tools::{ToolExecutionContext, ToolRegistry};
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "pierre-strength-cli",
    about = "Pierre strength analytics CLI",
    long_about = "Compute streaks, personal records, period statistics, achievements and the \
                  activity timeline from a JSON snapshot of a user's training log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot file override (defaults to `PIERRE_SNAPSHOT_PATH`)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// User ID (optional when the snapshot holds a single user)
    #[arg(long, global = true)]
    user: Option<Uuid>,

    /// IANA time zone override (defaults to `PIERRE_TIMEZONE`)
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Evaluate as of this RFC 3339 instant instead of the current time
    #[arg(long, global = true)]
    now: Option<DateTime<Utc>>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Volume, duration, sets, calories and frequency over a period
    Stats {
        /// week, month, year, all or rolling:<days>
        #[arg(long, default_value = "week")]
        period: String,

        /// Include the per-day series
        #[arg(long)]
        daily: bool,
    },

    /// Current and longest workout streaks
    Streaks,

    /// Personal records per exercise
    Records {
        /// Only this exercise, matched per ANALYTICS_CASE_SENSITIVE_NAMES (exact case by default)
        #[arg(long)]
        exercise: Option<String>,

        /// Only compound lifts
        #[arg(long)]
        compound_only: bool,

        /// Maximum number of exercises
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Achievement progress and unlock dates
    Achievements {
        /// Only earned achievements
        #[arg(long)]
        earned_only: bool,
    },

    /// Profile overview
    Profile {
        /// Window for the body-weight trend
        #[arg(long)]
        weight_period: Option<String>,
    },

    /// Newest-first activity feed
    Timeline {
        /// Maximum number of entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Tool discovery and direct invocation
    Tools {
        #[command(subcommand)]
        action: ToolsCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ToolsCommand {
    /// List registered tools with their schemas
    List {
        /// Only tools in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Call a tool by name with JSON arguments
    Call {
        /// Tool name
        name: String,

        /// JSON object of tool arguments
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let registry = ToolRegistry::with_builtin_tools();

    // Listing tools needs no data
    if let Command::Tools {
        action: ToolsCommand::List { category },
    } = &cli.command
    {
        commands::tools::list(&registry, category.as_deref())?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = AppConfig::from_env()?;
    if let Some(snapshot) = cli.snapshot {
        config.snapshot_path = snapshot;
    }
    if let Some(name) = cli.timezone.as_deref() {
        config.timezone = parse_timezone(name)?;
    }

    info!("Loading snapshot from {}", config.snapshot_path.display());
    let store = InMemoryStore::load(&config.snapshot_path)
        .await
        .with_context(|| format!("failed to load {}", config.snapshot_path.display()))?;
    let user_id = match cli.user {
        Some(user_id) => user_id,
        None => store.sole_user().await.ok_or_else(|| {
            anyhow!("snapshot holds several users or none; pass --user <uuid>")
        })?,
    };

    let mut context = ToolExecutionContext::new(user_id, Arc::new(store), config.timezone)
        .with_limits(ListLimits {
            workouts: config.workout_limit,
            weight_entries: config.weight_entry_limit,
        })
        .with_request_id(Uuid::new_v4().to_string());
    if let Some(now) = cli.now {
        context = context.with_now(now);
    }

    let succeeded = match cli.command {
        Command::Stats { period, daily } => {
            commands::analytics::stats(&registry, &context, &period, daily).await?
        }
        Command::Streaks => commands::analytics::streaks(&registry, &context).await?,
        Command::Records {
            exercise,
            compound_only,
            limit,
        } => {
            commands::analytics::records(
                &registry,
                &context,
                exercise.as_deref(),
                compound_only,
                limit,
            )
            .await?
        }
        Command::Achievements { earned_only } => {
            commands::analytics::achievements(&registry, &context, earned_only).await?
        }
        Command::Profile { weight_period } => {
            commands::analytics::profile(&registry, &context, weight_period.as_deref()).await?
        }
        Command::Timeline { limit } => {
            commands::analytics::timeline(&registry, &context, limit).await?
        }
        Command::Tools { action } => match action {
            ToolsCommand::Call { name, args } => {
                commands::tools::call(&registry, &context, &name, &args).await?
            }
            ToolsCommand::List { category } => {
                commands::tools::list(&registry, category.as_deref())?;
                true
            }
        },
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
