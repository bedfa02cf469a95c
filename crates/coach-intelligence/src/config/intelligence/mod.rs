// ABOUTME: Intelligence module configuration for coaching analytics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Provides type-safe configuration for all analytical components. Defaults
//! reproduce the documented rule set; environment variables prefixed with
//! `COACH_` override individual thresholds.
//!
//! # Module Structure
//!
//! - `trend` - Completion window and trend classification tail
//! - `progression` - Progress report thresholds
//! - `difficulty` - Difficulty adjuster gate, thresholds, bounds and steps
//! - `recommendation` - Recommendation engine consistency thresholds
//! - `compatibility` - Compatibility score penalties and bonuses

pub mod compatibility;
pub mod difficulty;
pub mod error;
pub mod progression;
pub mod recommendation;
pub mod trend;

pub use compatibility::{ActivityTier, CompatibilityConfig};
pub use difficulty::{DifficultyConfig, LevelStep, LevelSteps};
pub use error::ConfigError;
pub use progression::ProgressionConfig;
pub use recommendation::RecommendationEngineConfig;
pub use trend::TrendAnalysisConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Longest completion window accepted, about ten years
pub const MAX_RECENT_WINDOW_WEEKS: i64 = 520;

/// Longest activity window accepted, about ten years
pub const MAX_ACTIVITY_WINDOW_DAYS: i64 = 3650;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for completion and metric trend analysis
    pub trend: TrendAnalysisConfig,
    /// Configuration for progress report recommendations
    pub progression: ProgressionConfig,
    /// Configuration for the difficulty adjuster
    pub difficulty: DifficultyConfig,
    /// Configuration for the recommendation engine
    pub recommendation_engine: RecommendationEngineConfig,
    /// Configuration for compatibility scoring
    pub compatibility: CompatibilityConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend.recent_window_weeks <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_window_weeks must be positive",
            ));
        }
        if self.trend.recent_window_weeks > MAX_RECENT_WINDOW_WEEKS {
            return Err(ConfigError::ValueOutOfRange(
                "recent_window_weeks must be at most 520",
            ));
        }
        if self.trend.trend_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_window must cover at least 2 values",
            ));
        }

        self.validate_difficulty()?;

        let rec = &self.recommendation_engine;
        if rec.low_consistency_threshold >= rec.high_consistency_threshold {
            return Err(ConfigError::InvalidRange(
                "low_consistency_threshold must be < high_consistency_threshold",
            ));
        }
        if rec.highlighted_exercise_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "highlighted_exercise_count must be at least 1",
            ));
        }

        let compat = &self.compatibility;
        if compat.activity_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "activity_window_days must be positive",
            ));
        }
        if compat.activity_window_days > MAX_ACTIVITY_WINDOW_DAYS {
            return Err(ConfigError::ValueOutOfRange(
                "activity_window_days must be at most 3650",
            ));
        }
        if compat
            .activity_tiers
            .windows(2)
            .any(|pair| pair[0].min_active_days <= pair[1].min_active_days)
        {
            return Err(ConfigError::InvalidRange(
                "activity tiers must be ordered by descending day requirement",
            ));
        }
        if !(0.0..=1.0).contains(&compat.strong_completion_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "strong_completion_ratio must be between 0 and 1",
            ));
        }

        Ok(())
    }

    fn validate_difficulty(&self) -> Result<(), ConfigError> {
        let diff = &self.difficulty;
        if diff.full_confidence_samples == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "full_confidence_samples must be at least 1",
            ));
        }
        if !(0.0..=100.0).contains(&diff.min_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "min_confidence must be between 0 and 100",
            ));
        }
        if diff.decrease_completion_threshold >= diff.increase_completion_threshold {
            return Err(ConfigError::InvalidRange(
                "decrease_completion_threshold must be < increase_completion_threshold",
            ));
        }
        if !(0.0..=1.0).contains(&diff.increase_completion_threshold)
            || !(0.0..=1.0).contains(&diff.decrease_completion_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "completion thresholds must be ratios between 0 and 1",
            ));
        }
        if diff.min_sets > diff.max_sets {
            return Err(ConfigError::InvalidRange("min_sets must be <= max_sets"));
        }
        if diff.min_reps > diff.max_reps {
            return Err(ConfigError::InvalidRange("min_reps must be <= max_reps"));
        }
        if diff.decrease_factor > 1.0 || diff.increase_factor < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "decrease_factor must be <= 1.0 and increase_factor >= 1.0",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Trend analysis overrides
        Self::apply_env_var(
            "COACH_TREND_RECENT_WINDOW_WEEKS",
            &mut self.trend.recent_window_weeks,
        )?;
        Self::apply_env_var("COACH_TREND_WINDOW", &mut self.trend.trend_window)?;

        // Difficulty adjuster overrides
        Self::apply_env_var(
            "COACH_DIFFICULTY_MIN_CONFIDENCE",
            &mut self.difficulty.min_confidence,
        )?;
        Self::apply_env_var(
            "COACH_DIFFICULTY_FULL_CONFIDENCE_SAMPLES",
            &mut self.difficulty.full_confidence_samples,
        )?;
        Self::apply_env_var(
            "COACH_DIFFICULTY_INCREASE_COMPLETION",
            &mut self.difficulty.increase_completion_threshold,
        )?;
        Self::apply_env_var(
            "COACH_DIFFICULTY_DECREASE_COMPLETION",
            &mut self.difficulty.decrease_completion_threshold,
        )?;

        // Recommendation engine overrides
        Self::apply_env_var(
            "COACH_RECOMMENDATION_LOW_CONSISTENCY",
            &mut self.recommendation_engine.low_consistency_threshold,
        )?;
        Self::apply_env_var(
            "COACH_RECOMMENDATION_HIGH_CONSISTENCY",
            &mut self.recommendation_engine.high_consistency_threshold,
        )?;

        // Compatibility overrides
        Self::apply_env_var(
            "COACH_COMPATIBILITY_ACTIVITY_WINDOW_DAYS",
            &mut self.compatibility.activity_window_days,
        )?;

        Ok(self)
    }
}
