// ABOUTME: analyze subcommand - full progress report for a client snapshot
// ABOUTME: Combines progress insights, workout recommendation and goal evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use coach_insights::errors::AppResult;
use coach_insights::snapshot::ClientSnapshot;
use coach_insights::RandomSelector;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use super::{print_json, reference_time};

/// Analyze the snapshot and print the report
pub fn run(input: &Path, now: Option<&str>, seed: Option<u64>) -> AppResult<()> {
    let now = reference_time(now)?;
    let snapshot = ClientSnapshot::from_path(input)?;

    let mut selector = seed.map_or_else(RandomSelector::from_entropy, |seed| {
        RandomSelector::new(StdRng::seed_from_u64(seed))
    });
    let report = snapshot.analyze(now, &mut selector)?;

    info!(
        input = %input.display(),
        recommendations = report.progress.recommendations.len(),
        "Client analysis complete"
    );
    print_json(&report)
}
