// ABOUTME: Per-exercise progression analysis over append-only performance histories
// ABOUTME: Computes first-to-last improvement rate and the recent directional trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use coach_core::errors::AppResult;
use coach_core::models::{ExerciseProgressionRecord, FitnessLevel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, TrendAnalysisConfig};
use crate::time_series::{classify_trend, round_to_tenth};
use crate::types::TrendResult;

/// Progression summary for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInsight {
    /// Exercise the insight refers to
    pub exercise_name: String,
    /// Percent change from the first to the last recorded performance
    pub improvement_rate: f64,
    /// Direction of the most recent performances
    pub trend: TrendResult,
    /// Passed through from the record
    pub current_level: FitnessLevel,
    /// Passed through from the record
    pub next_milestone: Option<String>,
}

/// Analyzer for per-exercise performance histories
pub struct ExerciseProgressionAnalyzer {
    config: TrendAnalysisConfig,
}

impl Default for ExerciseProgressionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseProgressionAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().trend.clone(),
        }
    }

    /// Create an analyzer with explicit configuration
    #[must_use]
    pub const fn with_config(config: TrendAnalysisConfig) -> Self {
        Self { config }
    }

    /// Improvement rate and trend for a single exercise
    ///
    /// Histories shorter than two points report a zero rate and a neutral
    /// trend. A zero first value also yields a zero rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no name or holds non-finite values
    pub fn analyze_exercise(&self, record: &ExerciseProgressionRecord) -> AppResult<ExerciseInsight> {
        record.validate()?;

        let values = record.values();
        let improvement_rate = match (values.first(), values.last()) {
            (Some(&first), Some(&last)) if values.len() >= 2 && first > 0.0 => {
                round_to_tenth((last - first) / first * 100.0)
            }
            _ => 0.0,
        };
        let trend = classify_trend(&values, self.config.trend_window);

        debug!(
            exercise = %record.exercise_name,
            points = values.len(),
            improvement_rate,
            trend = %trend,
            "Analyzed exercise progression"
        );
        Ok(ExerciseInsight {
            exercise_name: record.exercise_name.clone(),
            improvement_rate,
            trend,
            current_level: record.current_level,
            next_milestone: record.next_milestone.clone(),
        })
    }

    /// Analyze every record, keyed by exercise name
    ///
    /// Records are independent, so they are analyzed in parallel. When two
    /// records share a name the later one wins.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered
    pub fn analyze_exercises(
        &self,
        records: &[ExerciseProgressionRecord],
    ) -> AppResult<BTreeMap<String, ExerciseInsight>> {
        let insights = records
            .par_iter()
            .map(|record| self.analyze_exercise(record))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(insights
            .into_iter()
            .map(|insight| (insight.exercise_name.clone(), insight))
            .collect())
    }
}
