// ABOUTME: Recommendation engine configuration for workout focus suggestions
// ABOUTME: Configures consistency thresholds and preference analysis defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration

use coach_core::constants::form_rating;
use serde::{Deserialize, Serialize};

/// Recommendation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Consistency score below which a "build consistency" adjustment is issued
    pub low_consistency_threshold: f64,
    /// Consistency score above which an "increase frequency" adjustment is issued
    pub high_consistency_threshold: f64,
    /// Exercises kept as best performers and as areas of improvement
    pub highlighted_exercise_count: usize,
    /// Form rating assumed for samples without one
    pub default_form_rating: f64,
}

impl Default for RecommendationEngineConfig {
    fn default() -> Self {
        Self {
            low_consistency_threshold: 60.0,
            high_consistency_threshold: 80.0,
            highlighted_exercise_count: 3,
            default_form_rating: form_rating::DEFAULT,
        }
    }
}
