// ABOUTME: Compatibility scoring configuration for client/achievement fit
// ABOUTME: Configures penalties, bonuses and activity tiers of the 0-100 score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::constants::{scores, windows};
use serde::{Deserialize, Serialize};

/// One activity bonus tier: at least `min_active_days` earns `bonus`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityTier {
    /// Active days required in the window
    pub min_active_days: usize,
    /// Points awarded
    pub bonus: f64,
}

/// Compatibility scorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityConfig {
    /// Starting score before penalties and bonuses
    pub base_score: f64,
    /// Points removed per step of level/difficulty mismatch
    pub level_penalty_per_step: f64,
    /// Points added when the candidate category serves the client goal
    pub goal_match_bonus: f64,
    /// Days of logs considered for activity and completion
    pub activity_window_days: i64,
    /// Activity tiers, highest requirement first
    pub activity_tiers: Vec<ActivityTier>,
    /// Points awarded for a 100% completion rate in the window
    pub completion_bonus_max: f64,
    /// Completion ratio at which completion becomes the headline reason
    pub strong_completion_ratio: f64,
    /// Active days at which activity becomes the headline reason
    pub strong_activity_days: usize,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        Self {
            base_score: scores::MAX_SCORE,
            level_penalty_per_step: 15.0,
            goal_match_bonus: 25.0,
            activity_window_days: windows::COMPATIBILITY_ACTIVITY_DAYS,
            activity_tiers: vec![
                ActivityTier {
                    min_active_days: 12,
                    bonus: 20.0,
                },
                ActivityTier {
                    min_active_days: 8,
                    bonus: 15.0,
                },
                ActivityTier {
                    min_active_days: 4,
                    bonus: 10.0,
                },
            ],
            completion_bonus_max: 15.0,
            strong_completion_ratio: 0.8,
            strong_activity_days: 8,
        }
    }
}
