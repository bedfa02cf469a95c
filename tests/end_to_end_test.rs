// ABOUTME: End-to-end coaching scenarios across every analyzer
// ABOUTME: Covers a steadily progressing beginner and a brand new client with no history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

mod common;

use coach_insights::models::{
    AchievementCandidate, AchievementCategory, ExerciseType, FitnessLevel,
};
use coach_insights::recommendation_engine::goal_focus;
use coach_insights::snapshot::ClientSnapshot;
use coach_insights::{
    collect_samples, AdjustmentDirection, CompatibilityScorer, CompletionTrend,
    DifficultyAdjuster, ExerciseProgressionAnalyzer, InsightEngine, RecommendationEngine,
    RoundRobinSelector, TrendAnalyzer, TrendResult,
};

use common::{
    beginner, default_config, progressing_squat_history, push_up_history, reference_now,
};

#[test]
fn test_push_up_beginner_completion_is_full_and_stable() {
    let now = reference_now();
    let logs = push_up_history(now);
    let config = default_config();

    let completion = TrendAnalyzer::with_config(config.trend)
        .analyze_completion(&logs, now)
        .unwrap();

    assert!((completion.rate - 100.0).abs() < f64::EPSILON);
    assert!((completion.recent_rate - 100.0).abs() < f64::EPSILON);
    assert_eq!(completion.trend, CompletionTrend::Stable);
}

#[test]
fn test_push_up_beginner_without_form_or_load_gains_maintains_with_clamped_reps() {
    let now = reference_now();
    let logs = push_up_history(now);
    let samples = collect_samples(&logs, "Push-ups");
    assert_eq!(samples.len(), 10);

    let adjustment = DifficultyAdjuster::with_config(default_config().difficulty)
        .adjust(&samples, FitnessLevel::Beginner)
        .unwrap();

    assert!((adjustment.confidence - 100.0).abs() < f64::EPSILON);
    // Full completion alone does not increase. Reps rise but form stays flat and
    // there is no load, so only the reps counter is positive and it maintains.
    assert_eq!(adjustment.direction, AdjustmentDirection::Maintain);
    assert_eq!(adjustment.adjusted.reps, 15);
    assert_eq!(adjustment.adjusted.sets, 3);
    assert!(adjustment.rationale.contains("100%"));
}

#[test]
fn test_progressing_squats_increase_within_bounds() {
    let now = reference_now();
    let logs = progressing_squat_history(now, 5);
    let samples = collect_samples(&logs, "Squat");

    let adjustment = DifficultyAdjuster::with_config(default_config().difficulty)
        .adjust(&samples, FitnessLevel::Beginner)
        .unwrap();

    assert_eq!(adjustment.direction, AdjustmentDirection::Increase);
    assert!((adjustment.confidence - 100.0).abs() < f64::EPSILON);
    assert_eq!(adjustment.delta_sets, 1);
    assert_eq!(adjustment.delta_reps, 2);
    assert!((adjustment.delta_weight - 2.5).abs() < f64::EPSILON);
    assert_eq!(adjustment.adjusted.sets, 4);
    assert_eq!(adjustment.adjusted.reps, 14);
    assert_eq!(adjustment.adjusted.weight, Some(72.5));
    assert!(adjustment.rationale.contains("increased"));
}

#[test]
fn test_new_client_gets_neutral_defaults_everywhere() {
    let now = reference_now();
    let config = default_config();
    let profile = beginner(Vec::new());

    let trends = TrendAnalyzer::with_config(config.trend.clone());
    let completion = trends.analyze_completion(&[], now).unwrap();
    assert!(completion.rate.abs() < f64::EPSILON);
    assert!(completion.recent_rate.abs() < f64::EPSILON);
    assert_eq!(completion.trend, CompletionTrend::Stable);

    let metrics = trends.analyze_metric_trends(&[]).unwrap();
    assert_eq!(metrics.trend, TrendResult::Neutral);
    assert_eq!(metrics.weeks_analyzed, 0);

    let insights = ExerciseProgressionAnalyzer::with_config(config.trend.clone())
        .analyze_exercises(&[])
        .unwrap();
    assert!(insights.is_empty());

    let adjustment = DifficultyAdjuster::with_config(config.difficulty.clone())
        .adjust(&[], profile.fitness_level)
        .unwrap();
    assert_eq!(adjustment.direction, AdjustmentDirection::Maintain);
    assert!(adjustment.confidence.abs() < f64::EPSILON);

    let recommendation = RecommendationEngine::new()
        .recommend(&profile, &[], &[])
        .unwrap();
    assert!(recommendation.suggested_exercises.is_empty());
    assert_eq!(recommendation.progression_path.len(), 3);

    let candidate = AchievementCandidate::new("First Workout", AchievementCategory::Workout, 1);
    let score = CompatibilityScorer::with_config(config.compatibility.clone())
        .score(&profile, &candidate, now)
        .unwrap();
    assert!((0.0..=100.0).contains(&score.score));

    let report = InsightEngine::with_config(&config)
        .analyze_client_progress(&[], &[], now, &mut RoundRobinSelector::default())
        .unwrap();
    assert!(report.exercise_insights.is_empty());
    assert_eq!(report.performance_trends.trend, TrendResult::Neutral);
}

#[test]
fn test_snapshot_analysis_suggests_logged_strength_work() {
    let now = reference_now();
    let snapshot = ClientSnapshot::new(beginner(progressing_squat_history(now, 6)));

    let report = snapshot
        .analyze(now, &mut RoundRobinSelector::default())
        .unwrap();

    let focus = goal_focus(report.recommendation.primary_goal).unwrap();
    assert!(focus.primary.contains(&ExerciseType::Strength));
    assert_eq!(report.recommendation.suggested_exercises.len(), 1);
    assert_eq!(report.recommendation.suggested_exercises[0].name, "Squat");
    assert!((report.progress.completion.rate - 100.0).abs() < f64::EPSILON);
    assert_eq!(report.points_awarded, 0);
}

#[test]
fn test_repeated_analysis_is_identical() {
    let now = reference_now();
    let snapshot = ClientSnapshot::new(beginner(push_up_history(now)));

    let first = snapshot
        .analyze(now, &mut RoundRobinSelector::default())
        .unwrap();
    let second = snapshot
        .analyze(now, &mut RoundRobinSelector::default())
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
