// ABOUTME: Progress report configuration for adaptive recommendations
// ABOUTME: Thresholds that turn completion and improvement rates into coaching advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Thresholds used when building a client progress report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Improvement rate (%) below which technique review is suggested
    pub low_improvement_threshold: f64,
    /// Completion rate (%) below which a consistency nudge is issued
    pub low_completion_threshold: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            low_improvement_threshold: 5.0,
            low_completion_threshold: 70.0,
        }
    }
}
