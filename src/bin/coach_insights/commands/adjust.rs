// ABOUTME: adjust subcommand - difficulty adjustment for one logged exercise
// ABOUTME: Collects the exercise's samples from the snapshot logs and prints the adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use coach_insights::errors::AppResult;
use coach_insights::snapshot::ClientSnapshot;

use super::print_json;

/// Adjust the named exercise and print the result
pub fn run(input: &Path, exercise: &str) -> AppResult<()> {
    let snapshot = ClientSnapshot::from_path(input)?;
    print_json(&snapshot.adjust(exercise)?)
}
