// ABOUTME: Client/achievement compatibility scoring with a single headline justification
// ABOUTME: Combines level mismatch, goal pairing, recent activity and completion into a 0-100 score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Compatibility scoring
//!
//! `score = base - level_diff x penalty + goal bonus + activity bonus + completion bonus`,
//! clamped to 0-100. The reason is the first matching rule of goal match,
//! activity, completion and level match.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use coach_core::errors::AppResult;
use coach_core::models::{AchievementCandidate, AchievementCategory, ClientProfile, GoalType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{CompatibilityConfig, IntelligenceConfig};
use crate::time_series::{clamp_score, saturating_days, window_since};

/// Score plus its headline justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    /// 0-100
    pub score: f64,
    /// Most relevant justification
    pub reason: String,
}

/// Individual score components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    /// `|level rank - difficulty|`
    pub level_diff: u8,
    /// Whether the candidate category pairs with the client goal
    pub goal_match: bool,
    /// Distinct days with a completed workout in the window
    pub active_days: usize,
    /// Completed logs / logs in the window, 0-1
    pub completion_ratio: f64,
    /// Points removed for level mismatch
    pub level_penalty: f64,
    /// Points added for goal match
    pub goal_bonus: f64,
    /// Points added for activity
    pub activity_bonus: f64,
    /// Points added for completion
    pub completion_bonus: f64,
}

/// Goal served by an achievement category
#[must_use]
pub const fn paired_goal(category: AchievementCategory) -> Option<GoalType> {
    match category {
        AchievementCategory::Workout => Some(GoalType::Consistency),
        AchievementCategory::Strength => Some(GoalType::MuscleGain),
        AchievementCategory::Nutrition => Some(GoalType::WeightLoss),
        AchievementCategory::Endurance => Some(GoalType::Endurance),
        AchievementCategory::Other => None,
    }
}

/// Scorer for client/candidate fit
pub struct CompatibilityScorer {
    config: CompatibilityConfig,
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CompatibilityScorer {
    /// Create a scorer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().compatibility.clone(),
        }
    }

    /// Create a scorer with explicit configuration
    #[must_use]
    pub const fn with_config(config: CompatibilityConfig) -> Self {
        Self { config }
    }

    /// Score components for a client and candidate
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate difficulty is outside 1-5 or a log
    /// fails validation
    pub fn breakdown(
        &self,
        client: &ClientProfile,
        candidate: &AchievementCandidate,
        now: DateTime<Utc>,
    ) -> AppResult<CompatibilityBreakdown> {
        candidate.validate()?;
        client.validate()?;

        let level_diff = client.fitness_level.rank().abs_diff(candidate.difficulty);
        let goal_match = paired_goal(candidate.category) == Some(client.goal);

        let window = window_since(
            &client.recent_logs,
            now,
            saturating_days(self.config.activity_window_days),
        )?;
        let active_days = window
            .iter()
            .filter(|log| log.workout_completed)
            .map(|log| log.date.date_naive())
            .collect::<BTreeSet<_>>()
            .len();
        let completion_ratio = if window.is_empty() {
            0.0
        } else {
            window.iter().filter(|log| log.workout_completed).count() as f64 / window.len() as f64
        };

        let activity_bonus = self
            .config
            .activity_tiers
            .iter()
            .find(|tier| active_days >= tier.min_active_days)
            .map_or(0.0, |tier| tier.bonus);

        Ok(CompatibilityBreakdown {
            level_diff,
            goal_match,
            active_days,
            completion_ratio,
            level_penalty: f64::from(level_diff) * self.config.level_penalty_per_step,
            goal_bonus: if goal_match {
                self.config.goal_match_bonus
            } else {
                0.0
            },
            activity_bonus,
            completion_bonus: (completion_ratio * self.config.completion_bonus_max).round(),
        })
    }

    /// Compatibility score and headline reason
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate difficulty is outside 1-5 or a log
    /// fails validation
    pub fn score(
        &self,
        client: &ClientProfile,
        candidate: &AchievementCandidate,
        now: DateTime<Utc>,
    ) -> AppResult<CompatibilityScore> {
        let parts = self.breakdown(client, candidate, now)?;
        let score = clamp_score(
            self.config.base_score - parts.level_penalty
                + parts.goal_bonus
                + parts.activity_bonus
                + parts.completion_bonus,
        );
        let reason = self.reason_for(client, &parts);

        debug!(
            candidate = %candidate.title,
            score,
            level_diff = parts.level_diff,
            goal_match = parts.goal_match,
            active_days = parts.active_days,
            "Scored achievement compatibility"
        );
        Ok(CompatibilityScore { score, reason })
    }

    /// Single most relevant justification for the pairing
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate difficulty is outside 1-5 or a log
    /// fails validation
    pub fn reason(
        &self,
        client: &ClientProfile,
        candidate: &AchievementCandidate,
        now: DateTime<Utc>,
    ) -> AppResult<String> {
        let parts = self.breakdown(client, candidate, now)?;
        Ok(self.reason_for(client, &parts))
    }

    /// Score every candidate, best fit first; ties keep input order
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered
    pub fn rank(
        &self,
        client: &ClientProfile,
        candidates: &[AchievementCandidate],
        now: DateTime<Utc>,
    ) -> AppResult<Vec<(AchievementCandidate, CompatibilityScore)>> {
        let mut ranked = candidates
            .iter()
            .map(|candidate| Ok((candidate.clone(), self.score(client, candidate, now)?)))
            .collect::<AppResult<Vec<_>>>()?;
        ranked.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));
        Ok(ranked)
    }

    fn reason_for(&self, client: &ClientProfile, parts: &CompatibilityBreakdown) -> String {
        if parts.goal_match {
            format!("Aligns with your {} goal", client.goal.label())
        } else if parts.active_days >= self.config.strong_activity_days {
            "Great fit for your active training schedule".to_owned()
        } else if parts.completion_ratio >= self.config.strong_completion_ratio {
            "Builds on your strong workout completion record".to_owned()
        } else if parts.level_diff == 0 {
            format!("Matches your {} fitness level", client.fitness_level)
        } else {
            "A fresh challenge to keep your training varied".to_owned()
        }
    }
}
