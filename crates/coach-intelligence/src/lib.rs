// ABOUTME: Coaching intelligence engine: trends, progression, difficulty and compatibility
// ABOUTME: Pure synchronous analytics over caller-supplied client records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Intelligence
//!
//! Deterministic, rule-based analytics for client coaching. Every operation is
//! a pure function of its arguments (plus an explicitly passed `now`), holds no
//! state between calls and is safe to invoke concurrently.
//!
//! Not enough data never fails: operations return neutral defaults. Malformed
//! records fail with an [`AppError`](coach_core::errors::AppError).
//!
//! ## Modules
//!
//! - **`time_series`**: windowing, ISO-week grouping, strict trend classification
//! - **`trend_analyzer`**: completion rates and weekly metric trends
//! - **`exercise_progression`**: per-exercise improvement rates
//! - **`difficulty_adjuster`**: confidence-gated set/rep/load adjustment
//! - **`recommendation_engine`**: goal focus, suggestions, schedule and progression path
//! - **`compatibility`**: client/achievement fit score and reason
//! - **`insights`**: combined progress report with adaptive recommendations
//! - **`motivation`**: fixed message pool with injectable selection
//! - **`goal_policy`**: goal completion and points

/// Analyzer configuration with environment overrides
pub mod config;

/// Shared time-series helpers
pub mod time_series;

/// Result enums shared across analyzers
pub mod types;

/// Completion and metric trend analysis
pub mod trend_analyzer;

/// Per-exercise progression analysis
pub mod exercise_progression;

/// Difficulty adjustment
pub mod difficulty_adjuster;

/// Workout recommendations
pub mod recommendation_engine;

/// Compatibility scoring
pub mod compatibility;

/// Progress report orchestration
pub mod insights;

/// Motivational messages
pub mod motivation;

/// Goal completion policy
pub mod goal_policy;

pub use compatibility::{CompatibilityBreakdown, CompatibilityScore, CompatibilityScorer};
pub use config::IntelligenceConfig;
pub use difficulty_adjuster::{
    collect_samples, progression_guidelines, DifficultyAdjuster, DifficultyAdjustment,
    ExercisePrescription, PerformanceAnalysis, ProgressionGuideline,
};
pub use exercise_progression::{ExerciseInsight, ExerciseProgressionAnalyzer};
pub use goal_policy::{GoalEvaluation, GoalProgressPolicy};
pub use insights::{AdaptiveRecommendation, AdaptiveRecommendationKind, InsightEngine, ProgressInsights};
pub use motivation::{MessageSelector, RandomSelector, RoundRobinSelector};
pub use recommendation_engine::{
    ClientPreferences, ExerciseTypeLookup, RecommendationEngine, WorkoutRecommendation,
};
pub use trend_analyzer::{CompletionAnalysis, PerformanceTrends, TrendAnalyzer};
pub use types::{AdjustmentDirection, CompletionTrend, RecommendationPriority, TrendResult};
