// ABOUTME: Difficulty adjuster configuration for sets/reps/load progression
// ABOUTME: Confidence gate, completion thresholds, prescription bounds and per-level step sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Difficulty Adjustment Configuration
//!
//! Step sizes are applied additively to the current prescription; the
//! increase/decrease factors are reported alongside for load-based plans.

use coach_core::constants::difficulty;
use coach_core::models::FitnessLevel;
use serde::{Deserialize, Serialize};

/// Sets/reps/load step applied for one fitness level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelStep {
    /// Sets added (or removed)
    pub sets: u32,
    /// Reps added (or removed)
    pub reps: u32,
    /// Load added (or removed)
    pub weight: f64,
}

/// Step table indexed by fitness level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSteps {
    /// Beginner step
    pub beginner: LevelStep,
    /// Intermediate step
    pub intermediate: LevelStep,
    /// Advanced step
    pub advanced: LevelStep,
}

impl LevelSteps {
    /// Step for the given level
    #[must_use]
    pub const fn for_level(&self, level: FitnessLevel) -> LevelStep {
        match level {
            FitnessLevel::Beginner => self.beginner,
            FitnessLevel::Intermediate => self.intermediate,
            FitnessLevel::Advanced => self.advanced,
        }
    }
}

impl Default for LevelSteps {
    fn default() -> Self {
        Self {
            beginner: LevelStep {
                sets: 1,
                reps: 2,
                weight: 2.5,
            },
            intermediate: LevelStep {
                sets: 1,
                reps: 3,
                weight: 5.0,
            },
            advanced: LevelStep {
                sets: 2,
                reps: 4,
                weight: 7.5,
            },
        }
    }
}

/// Difficulty adjuster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Samples needed for 100% confidence
    pub full_confidence_samples: usize,
    /// Confidence (0-100) required before any adjustment is made
    pub min_confidence: f64,
    /// Completion ratio (0-1) required to increase
    pub increase_completion_threshold: f64,
    /// Completion ratio (0-1) below which difficulty decreases
    pub decrease_completion_threshold: f64,
    /// Reported load multiplier for increases
    pub increase_factor: f64,
    /// Reported load multiplier for decreases
    pub decrease_factor: f64,
    /// Lowest prescribed sets
    pub min_sets: u32,
    /// Highest prescribed sets
    pub max_sets: u32,
    /// Lowest prescribed reps
    pub min_reps: u32,
    /// Highest prescribed reps
    pub max_reps: u32,
    /// Per-level step sizes
    pub steps: LevelSteps,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            full_confidence_samples: difficulty::FULL_CONFIDENCE_SAMPLES,
            min_confidence: difficulty::MIN_CONFIDENCE,
            increase_completion_threshold: difficulty::INCREASE_COMPLETION_THRESHOLD,
            decrease_completion_threshold: difficulty::DECREASE_COMPLETION_THRESHOLD,
            increase_factor: difficulty::INCREASE_FACTOR,
            decrease_factor: difficulty::DECREASE_FACTOR,
            min_sets: difficulty::MIN_SETS,
            max_sets: difficulty::MAX_SETS,
            min_reps: difficulty::MIN_REPS,
            max_reps: difficulty::MAX_REPS,
            steps: LevelSteps::default(),
        }
    }
}
