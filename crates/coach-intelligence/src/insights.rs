// ABOUTME: Client progress report combining completion, exercise and metric trend analysis
// ABOUTME: Derives adaptive coaching recommendations from the combined analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress insight orchestration

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use coach_core::errors::AppResult;
use coach_core::models::{ExerciseProgressionRecord, ProgressLogEntry};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::intelligence::{IntelligenceConfig, ProgressionConfig};
use crate::exercise_progression::{ExerciseInsight, ExerciseProgressionAnalyzer};
use crate::motivation::{motivation_message, MessageSelector};
use crate::trend_analyzer::{CompletionAnalysis, PerformanceTrends, TrendAnalyzer};
use crate::types::{RecommendationPriority, TrendResult};

/// What an adaptive recommendation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptiveRecommendationKind {
    /// Adherence
    Motivation,
    /// Exercise execution
    Technique,
    /// Load progression
    Progression,
}

/// Coaching recommendation derived from a progress analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveRecommendation {
    /// Topic
    #[serde(rename = "type")]
    pub kind: AdaptiveRecommendationKind,
    /// Urgency
    pub priority: RecommendationPriority,
    /// Human-readable advice
    pub message: String,
}

/// Full progress report for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressInsights {
    /// Completion rate analysis
    pub completion: CompletionAnalysis,
    /// Per-exercise progression, keyed by exercise name
    pub exercise_insights: BTreeMap<String, ExerciseInsight>,
    /// Weekly metric trends
    pub performance_trends: PerformanceTrends,
    /// Adaptive recommendations in priority order of their rules
    pub recommendations: Vec<AdaptiveRecommendation>,
    /// Motivational message drawn from the fixed pool
    pub motivation: String,
    /// The `now` the report was computed for
    pub generated_at: DateTime<Utc>,
}

/// Orchestrates the analyzers into a progress report
pub struct InsightEngine {
    trends: TrendAnalyzer,
    progression: ExerciseProgressionAnalyzer,
    config: ProgressionConfig,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global())
    }

    /// Create an engine from an explicit configuration
    #[must_use]
    pub fn with_config(config: &IntelligenceConfig) -> Self {
        Self {
            trends: TrendAnalyzer::with_config(config.trend.clone()),
            progression: ExerciseProgressionAnalyzer::with_config(config.trend.clone()),
            config: config.progression.clone(),
        }
    }

    /// Analyze a client's logs and exercise progressions
    ///
    /// All-or-nothing: any malformed record fails the whole report.
    ///
    /// # Errors
    ///
    /// Returns an error if any log or progression record fails validation
    pub fn analyze_client_progress(
        &self,
        logs: &[ProgressLogEntry],
        progressions: &[ExerciseProgressionRecord],
        now: DateTime<Utc>,
        selector: &mut dyn MessageSelector,
    ) -> AppResult<ProgressInsights> {
        let completion = self.trends.analyze_completion(logs, now)?;
        let exercise_insights = self.progression.analyze_exercises(progressions)?;
        let performance_trends = self.trends.analyze_metric_trends(logs)?;

        let recommendations =
            self.adaptive_recommendations(&completion, &exercise_insights, &performance_trends);

        info!(
            logs = logs.len(),
            exercises = exercise_insights.len(),
            recommendations = recommendations.len(),
            completion_rate = completion.rate,
            "Generated client progress insights"
        );

        Ok(ProgressInsights {
            completion,
            exercise_insights,
            performance_trends,
            recommendations,
            motivation: motivation_message(selector).to_owned(),
            generated_at: now,
        })
    }

    /// Rules: low completion, then each stalled exercise, then overall improvement
    #[must_use]
    pub fn adaptive_recommendations(
        &self,
        completion: &CompletionAnalysis,
        exercise_insights: &BTreeMap<String, ExerciseInsight>,
        performance_trends: &PerformanceTrends,
    ) -> Vec<AdaptiveRecommendation> {
        let mut recommendations = Vec::new();

        if completion.rate < self.config.low_completion_threshold {
            recommendations.push(AdaptiveRecommendation {
                kind: AdaptiveRecommendationKind::Motivation,
                priority: RecommendationPriority::High,
                message: "Focus on consistency. Try setting specific workout times in your calendar."
                    .to_owned(),
            });
        }

        recommendations.extend(
            exercise_insights
                .iter()
                .filter(|(_, insight)| insight.improvement_rate < self.config.low_improvement_threshold)
                .map(|(name, _)| AdaptiveRecommendation {
                    kind: AdaptiveRecommendationKind::Technique,
                    priority: RecommendationPriority::Medium,
                    message: format!(
                        "Consider reviewing {name} technique or adjusting weight/resistance."
                    ),
                }),
        );

        if performance_trends.trend == TrendResult::Improving {
            recommendations.push(AdaptiveRecommendation {
                kind: AdaptiveRecommendationKind::Progression,
                priority: RecommendationPriority::Medium,
                message: "Great progress! Consider increasing intensity on key exercises.".to_owned(),
            });
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motivation::{RoundRobinSelector, MOTIVATION_MESSAGES};
    use chrono::{Duration, TimeZone};
    use coach_core::models::FitnessLevel;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 15, 12, 0, 0).unwrap()
    }

    fn engine() -> InsightEngine {
        InsightEngine::with_config(&IntelligenceConfig::default())
    }

    #[test]
    fn test_empty_history_yields_defaults() {
        let insights = engine()
            .analyze_client_progress(&[], &[], now(), &mut RoundRobinSelector::default())
            .unwrap();
        assert!(insights.completion.rate.abs() < f64::EPSILON);
        assert!(insights.exercise_insights.is_empty());
        assert_eq!(insights.performance_trends.trend, TrendResult::Neutral);
        assert_eq!(insights.generated_at, now());
        assert_eq!(insights.recommendations.len(), 1);
        assert_eq!(
            insights.recommendations[0].kind,
            AdaptiveRecommendationKind::Motivation
        );
        assert!(MOTIVATION_MESSAGES.contains(&insights.motivation.as_str()));
    }

    #[test]
    fn test_recommendation_rules_in_order() {
        let logs: Vec<_> = (0..3)
            .map(|w| {
                ProgressLogEntry::new(now() - Duration::weeks(3 - w), true)
                    .with_metric("intensity", 5.0 + w as f64)
                    .with_metric("volume", 100.0 + w as f64)
            })
            .collect();
        let progressions = vec![
            ExerciseProgressionRecord::new("Squat", FitnessLevel::Beginner)
                .with_point(now() - Duration::weeks(2), 50.0)
                .with_point(now() - Duration::weeks(1), 51.0),
            ExerciseProgressionRecord::new("Row", FitnessLevel::Beginner)
                .with_point(now() - Duration::weeks(2), 40.0)
                .with_point(now() - Duration::weeks(1), 50.0),
        ];
        let insights = engine()
            .analyze_client_progress(&logs, &progressions, now(), &mut RoundRobinSelector::default())
            .unwrap();
        let kinds: Vec<_> = insights.recommendations.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AdaptiveRecommendationKind::Technique,
                AdaptiveRecommendationKind::Progression
            ]
        );
        assert!(insights.recommendations[0].message.contains("Squat"));
    }

    #[test]
    fn test_malformed_progression_fails_whole_report() {
        let progressions = vec![ExerciseProgressionRecord::new("", FitnessLevel::Beginner)];
        assert!(engine()
            .analyze_client_progress(&[], &progressions, now(), &mut RoundRobinSelector::default())
            .is_err());
    }
}
