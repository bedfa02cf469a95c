// ABOUTME: coach-insights CLI - runs the coaching analyzers over a client snapshot file
// ABOUTME: Prints progress reports, difficulty adjustments and achievement rankings as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full progress report, recommendation and goal evaluation
//! coach-insights analyze --input client.json
//!
//! # Reproducible report for a fixed date and message seed
//! coach-insights analyze --input client.json --now 2024-08-15T12:00:00Z --seed 7
//!
//! # Difficulty adjustment for one exercise
//! coach-insights adjust --input client.json --exercise "Push-ups"
//!
//! # Rank the snapshot's achievement candidates
//! coach-insights score --input client.json
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use coach_insights::errors::AppResult;
use coach_insights::logging::LoggingConfig;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "coach-insights",
    version,
    about = "Coaching analytics over client snapshots",
    long_about = "Runs trend, progression, difficulty and compatibility analysis over a client snapshot and prints the result as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Progress insights, workout recommendation and goal evaluation
    Analyze {
        /// Client snapshot JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Reference time (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<String>,

        /// Seed for the motivational message pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Difficulty adjustment for one exercise
    Adjust {
        /// Client snapshot JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Exercise name as logged
        #[arg(long, short = 'e')]
        exercise: String,
    },

    /// Rank achievement candidates by compatibility
    Score {
        /// Client snapshot JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Reference time (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<String>,
    },
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Analyze { input, now, seed } => {
            commands::analyze::run(&input, now.as_deref(), seed)
        }
        Command::Adjust { input, exercise } => commands::adjust::run(&input, &exercise),
        Command::Score { input, now } => commands::score::run(&input, now.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: {e}");
    }
    debug!("coach-insights CLI starting");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "Command failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
