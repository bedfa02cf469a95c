// ABOUTME: Confidence-gated difficulty adjustment for a single prescribed exercise
// ABOUTME: Classifies recent samples into increase/decrease/maintain and applies bounded level steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Difficulty Adjuster
//!
//! A pure classifier recomputed on every call:
//!
//! 1. No samples: `maintain` with zero confidence.
//! 2. Confidence grows linearly with sample count up to
//!    `full_confidence_samples`; below `min_confidence` the result is always
//!    `maintain`.
//! 3. `increase` needs a high completion ratio and at least one pairwise gain
//!    in each of reps, load and form.
//! 4. `decrease` triggers on a low completion ratio.
//!
//! Level-scaled steps are then applied to the prescription and clamped to the
//! configured set and rep bounds. Load is only touched for weighted work and
//! never drops below zero.

use coach_core::constants::difficulty::{DEFAULT_REPS, DEFAULT_SETS};
use coach_core::errors::AppResult;
use coach_core::models::{ExerciseSample, ExerciseType, FitnessLevel, ProgressLogEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{DifficultyConfig, IntelligenceConfig};
use crate::types::AdjustmentDirection;

/// Pairwise gains across consecutive samples; only increases are counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionCounters {
    /// Pairs where reps went up
    pub reps: u32,
    /// Pairs where load went up
    pub weight: u32,
    /// Pairs where form rating went up
    pub form: u32,
}

impl ProgressionCounters {
    const fn all_positive(self) -> bool {
        self.reps > 0 && self.weight > 0 && self.form > 0
    }
}

/// Result of classifying a sample history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    /// Classifier verdict after the confidence gate
    pub direction: AdjustmentDirection,
    /// 0-100, driven by sample count
    pub confidence: f64,
    /// Fraction of completed samples, 0-1
    pub completion_rate: f64,
    /// Pairwise progression counters
    pub counters: ProgressionCounters,
    /// Informational load multiplier for the verdict
    pub adjustment_factor: f64,
}

/// Sets, reps and load of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    /// Exercise name
    pub name: String,
    /// Sets per session
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// External load, absent for bodyweight work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Default for ExercisePrescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            sets: DEFAULT_SETS,
            reps: DEFAULT_REPS,
            weight: None,
        }
    }
}

impl ExercisePrescription {
    /// Prescription implied by a logged sample; zero sets or reps fall back
    /// to the defaults
    #[must_use]
    pub fn from_sample(sample: &ExerciseSample) -> Self {
        let reps = sample.rep_value();
        Self {
            name: sample.name.clone(),
            sets: if sample.sets == 0 { DEFAULT_SETS } else { sample.sets },
            reps: if reps == 0 { DEFAULT_REPS } else { reps },
            weight: sample.weight,
        }
    }
}

/// Explainable difficulty adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyAdjustment {
    /// Verdict
    pub direction: AdjustmentDirection,
    /// 0-100
    pub confidence: f64,
    /// Signed set step for the client's level, zero when maintaining
    pub delta_sets: i64,
    /// Signed rep step for the client's level, zero when maintaining
    pub delta_reps: i64,
    /// Signed load step, zero when maintaining or for bodyweight work
    pub delta_weight: f64,
    /// Informational load multiplier (1.15 / 0.85 / 1.0 by default)
    pub adjustment_factor: f64,
    /// Prescription after applying the bounded steps
    pub adjusted: ExercisePrescription,
    /// Human-readable explanation
    pub rationale: String,
}

/// Static progression guideline for a level and exercise kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressionGuideline {
    /// Resistance work
    Strength {
        /// Load added per progression step
        weight_increment: f64,
        /// Reps added per progression step
        rep_increment: u32,
        /// Sets added per progression step
        set_increment: u32,
        /// Rest between sets
        rest_period_seconds: u32,
    },
    /// Cardio work
    Cardio {
        /// Minutes added per progression step
        duration_increment_minutes: u32,
        /// Percent intensity added per progression step
        intensity_increment_percent: u32,
        /// Rest between intervals
        rest_period_seconds: u32,
    },
}

/// Progression guideline for a level and exercise kind
///
/// Kinds without a dedicated table use the beginner strength guideline.
#[must_use]
pub const fn progression_guidelines(level: FitnessLevel, kind: ExerciseType) -> ProgressionGuideline {
    const BEGINNER_STRENGTH: ProgressionGuideline = ProgressionGuideline::Strength {
        weight_increment: 2.5,
        rep_increment: 1,
        set_increment: 1,
        rest_period_seconds: 90,
    };

    match (kind, level) {
        (ExerciseType::Strength, FitnessLevel::Beginner) => BEGINNER_STRENGTH,
        (ExerciseType::Strength, FitnessLevel::Intermediate) => ProgressionGuideline::Strength {
            weight_increment: 5.0,
            rep_increment: 2,
            set_increment: 1,
            rest_period_seconds: 75,
        },
        (ExerciseType::Strength, FitnessLevel::Advanced) => ProgressionGuideline::Strength {
            weight_increment: 7.5,
            rep_increment: 2,
            set_increment: 2,
            rest_period_seconds: 60,
        },
        (ExerciseType::Cardio, FitnessLevel::Beginner) => ProgressionGuideline::Cardio {
            duration_increment_minutes: 2,
            intensity_increment_percent: 5,
            rest_period_seconds: 60,
        },
        (ExerciseType::Cardio, FitnessLevel::Intermediate) => ProgressionGuideline::Cardio {
            duration_increment_minutes: 5,
            intensity_increment_percent: 7,
            rest_period_seconds: 45,
        },
        (ExerciseType::Cardio, FitnessLevel::Advanced) => ProgressionGuideline::Cardio {
            duration_increment_minutes: 7,
            intensity_increment_percent: 10,
            rest_period_seconds: 30,
        },
        _ => BEGINNER_STRENGTH,
    }
}

/// Samples of one exercise across logs, in log order
#[must_use]
pub fn collect_samples(logs: &[ProgressLogEntry], exercise_name: &str) -> Vec<ExerciseSample> {
    logs.iter()
        .flat_map(|log| log.exercises.iter())
        .filter(|sample| sample.name == exercise_name)
        .cloned()
        .collect()
}

/// Difficulty adjuster
pub struct DifficultyAdjuster {
    config: DifficultyConfig,
}

impl Default for DifficultyAdjuster {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultyAdjuster {
    /// Create an adjuster using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().difficulty.clone(),
        }
    }

    /// Create an adjuster with explicit configuration
    #[must_use]
    pub const fn with_config(config: DifficultyConfig) -> Self {
        Self { config }
    }

    /// Classify a chronological sample history for one exercise
    ///
    /// # Errors
    ///
    /// Returns an error if any sample fails validation
    pub fn analyze_performance(&self, samples: &[ExerciseSample]) -> AppResult<PerformanceAnalysis> {
        for sample in samples {
            sample.validate()?;
        }

        if samples.is_empty() {
            return Ok(PerformanceAnalysis {
                direction: AdjustmentDirection::Maintain,
                confidence: 0.0,
                completion_rate: 0.0,
                counters: ProgressionCounters::default(),
                adjustment_factor: 1.0,
            });
        }

        let completed = samples.iter().filter(|s| s.is_completed()).count();
        let completion_rate = completed as f64 / samples.len() as f64;

        let counters = samples
            .windows(2)
            .fold(ProgressionCounters::default(), |mut acc, pair| {
                let (previous, current) = (&pair[0], &pair[1]);
                if current.rep_value() > previous.rep_value() {
                    acc.reps += 1;
                }
                if current.load() > previous.load() {
                    acc.weight += 1;
                }
                if current.form_rating.unwrap_or(0) > previous.form_rating.unwrap_or(0) {
                    acc.form += 1;
                }
                acc
            });

        let confidence = (samples.len() as f64 / self.config.full_confidence_samples as f64
            * 100.0)
            .min(100.0);

        let direction = if confidence < self.config.min_confidence {
            AdjustmentDirection::Maintain
        } else if completion_rate >= self.config.increase_completion_threshold
            && counters.all_positive()
        {
            AdjustmentDirection::Increase
        } else if completion_rate < self.config.decrease_completion_threshold {
            AdjustmentDirection::Decrease
        } else {
            AdjustmentDirection::Maintain
        };

        let adjustment_factor = match direction {
            AdjustmentDirection::Increase => self.config.increase_factor,
            AdjustmentDirection::Decrease => self.config.decrease_factor,
            AdjustmentDirection::Maintain => 1.0,
        };

        Ok(PerformanceAnalysis {
            direction,
            confidence,
            completion_rate,
            counters,
            adjustment_factor,
        })
    }

    /// Adjust the prescription implied by the most recent sample
    ///
    /// # Errors
    ///
    /// Returns an error if any sample fails validation
    pub fn adjust(
        &self,
        samples: &[ExerciseSample],
        level: FitnessLevel,
    ) -> AppResult<DifficultyAdjustment> {
        let baseline = samples
            .last()
            .map(ExercisePrescription::from_sample)
            .unwrap_or_default();
        self.adjust_prescription(&baseline, samples, level)
    }

    /// Adjust an explicit prescription using the sample history
    ///
    /// # Errors
    ///
    /// Returns an error if any sample fails validation
    pub fn adjust_prescription(
        &self,
        prescription: &ExercisePrescription,
        samples: &[ExerciseSample],
        level: FitnessLevel,
    ) -> AppResult<DifficultyAdjustment> {
        let analysis = self.analyze_performance(samples)?;
        let step = self.config.steps.for_level(level);

        let sign: i64 = match analysis.direction {
            AdjustmentDirection::Increase => 1,
            AdjustmentDirection::Decrease => -1,
            AdjustmentDirection::Maintain => 0,
        };
        let delta_sets = sign * i64::from(step.sets);
        let delta_reps = sign * i64::from(step.reps);

        let (weight, delta_weight) = match prescription.weight {
            Some(current) if current > 0.0 && sign != 0 => {
                let delta = sign as f64 * step.weight;
                (Some((current + delta).max(0.0)), delta)
            }
            other => (other, 0.0),
        };

        let adjusted = ExercisePrescription {
            name: prescription.name.clone(),
            sets: step_within(
                prescription.sets,
                delta_sets,
                self.config.min_sets,
                self.config.max_sets,
            ),
            reps: step_within(
                prescription.reps,
                delta_reps,
                self.config.min_reps,
                self.config.max_reps,
            ),
            weight,
        };

        let rationale = if analysis.confidence < self.config.min_confidence {
            format!(
                "Difficulty {} until more sessions are logged (confidence: {}%)",
                analysis.direction.past_tense(),
                analysis.confidence
            )
        } else {
            format!(
                "Difficulty {} based on performance analysis (confidence: {}%)",
                analysis.direction.past_tense(),
                analysis.confidence
            )
        };

        debug!(
            exercise = %prescription.name,
            samples = samples.len(),
            direction = %analysis.direction,
            confidence = analysis.confidence,
            completion_rate = analysis.completion_rate,
            "Computed difficulty adjustment"
        );

        Ok(DifficultyAdjustment {
            direction: analysis.direction,
            confidence: analysis.confidence,
            delta_sets,
            delta_reps,
            delta_weight,
            adjustment_factor: analysis.adjustment_factor,
            adjusted,
            rationale,
        })
    }
}

fn step_within(current: u32, delta: i64, min: u32, max: u32) -> u32 {
    let next = (i64::from(current) + delta).clamp(i64::from(min), i64::from(max));
    u32::try_from(next).unwrap_or(min)
}
