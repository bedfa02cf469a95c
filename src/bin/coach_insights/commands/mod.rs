// ABOUTME: Subcommand implementations for the coach-insights CLI
// ABOUTME: Shared helpers for reference-time parsing and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod adjust;
pub mod analyze;
pub mod score;

use chrono::{DateTime, Utc};
use coach_insights::errors::{AppError, AppResult};
use serde::Serialize;

/// Parse `--now`, falling back to the current time
pub fn reference_time(now: Option<&str>) -> AppResult<DateTime<Utc>> {
    now.map_or_else(
        || Ok(Utc::now()),
        |raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|e| {
                    AppError::invalid_format("now", format!("Invalid RFC 3339 time '{raw}'"))
                        .with_source(e)
                })
        },
    )
}

/// Pretty-print a result to stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
