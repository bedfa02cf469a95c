// ABOUTME: score subcommand - compatibility ranking of achievement candidates
// ABOUTME: Prints candidates best fit first with their score and reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use coach_insights::errors::AppResult;
use coach_insights::snapshot::ClientSnapshot;
use tracing::warn;

use super::{print_json, reference_time};

/// Rank the snapshot's candidates and print them
pub fn run(input: &Path, now: Option<&str>) -> AppResult<()> {
    let now = reference_time(now)?;
    let snapshot = ClientSnapshot::from_path(input)?;
    if snapshot.candidates.is_empty() {
        warn!(input = %input.display(), "Snapshot has no achievement candidates");
    }
    print_json(&snapshot.score_candidates(now)?)
}
