// ABOUTME: Facade crate for the coaching insight engine
// ABOUTME: Re-exports the core records and analyzers and adds snapshot loading plus logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Insights
//!
//! Rule-based coaching analytics over a client's training history: completion
//! trends, per-exercise progression, difficulty adjustment, workout
//! recommendations, achievement compatibility and goal completion.
//!
//! The engine itself is synchronous and stateless. Callers load the client's
//! records (see [`snapshot::ClientSnapshot`]), pass an explicit `now` and get
//! serializable results back.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use coach_insights::snapshot::ClientSnapshot;
//! use coach_insights::RoundRobinSelector;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshot = ClientSnapshot::from_path(Path::new("client.json"))?;
//! let report = snapshot.analyze(Utc::now(), &mut RoundRobinSelector::default())?;
//! println!("completion rate: {}", report.progress.completion.rate);
//! # Ok(())
//! # }
//! ```

/// Structured logging setup
pub mod logging;

/// Client snapshot loading and whole-client analysis
pub mod snapshot;

pub use coach_core::{constants, errors, models};
pub use coach_intelligence::{
    collect_samples, compatibility, config, difficulty_adjuster, exercise_progression,
    goal_policy, insights, motivation, progression_guidelines, recommendation_engine,
    time_series, trend_analyzer, types, AdaptiveRecommendation, AdaptiveRecommendationKind,
    AdjustmentDirection, ClientPreferences, CompatibilityBreakdown, CompatibilityScore,
    CompatibilityScorer, CompletionAnalysis, CompletionTrend, DifficultyAdjuster,
    DifficultyAdjustment, ExerciseInsight, ExercisePrescription, ExerciseProgressionAnalyzer,
    ExerciseTypeLookup, GoalEvaluation, GoalProgressPolicy, InsightEngine, IntelligenceConfig,
    MessageSelector, PerformanceAnalysis, PerformanceTrends, ProgressInsights,
    ProgressionGuideline, RandomSelector, RecommendationEngine, RecommendationPriority,
    RoundRobinSelector, TrendAnalyzer, TrendResult, WorkoutRecommendation,
};
