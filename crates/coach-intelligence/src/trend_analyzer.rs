// ABOUTME: Completion-rate and weekly metric trend analysis over client progress logs
// ABOUTME: Compares recent adherence with overall adherence and classifies indicator trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Behavioral trend analysis
//!
//! The overall performance trend uses a 2-of-3 majority over the tracked
//! indicators rather than a weighted blend.

use chrono::{DateTime, Utc};
use coach_core::constants::metric_keys;
use coach_core::errors::AppResult;
use coach_core::models::{validate_logs, ProgressLogEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, TrendAnalysisConfig};
use crate::time_series::{
    classify_trend, group_by_week, percentage, round_to_tenth, saturating_weeks, window_since,
};
use crate::types::{CompletionTrend, TrendResult};

/// Overall and recent workout completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionAnalysis {
    /// Completed logs / all logs, percent, one decimal
    pub rate: f64,
    /// Recent rate relative to overall rate
    pub trend: CompletionTrend,
    /// Completion rate within the recent window, percent, one decimal
    pub recent_rate: f64,
}

/// Weekly trend of each tracked metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricIndicators {
    /// Intensity trend
    pub intensity: TrendResult,
    /// Volume trend
    pub volume: TrendResult,
    /// Consistency trend
    pub consistency: TrendResult,
}

impl MetricIndicators {
    fn iter(&self) -> impl Iterator<Item = TrendResult> {
        [self.intensity, self.volume, self.consistency].into_iter()
    }
}

/// Metric trends plus the majority verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceTrends {
    /// `Improving` when more than one indicator improves, otherwise `Neutral`
    pub trend: TrendResult,
    /// Per-indicator trends
    pub indicators: MetricIndicators,
    /// Number of ISO weeks that contributed data
    pub weeks_analyzed: usize,
}

/// Analyzer for completion rates and weekly metric trends
pub struct TrendAnalyzer {
    config: TrendAnalysisConfig,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer {
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

    /// Overall completion rate, recent completion rate and their relation
    ///
    /// # Errors
    ///
    /// Returns an error if any log fails validation
    pub fn analyze_completion(
        &self,
        logs: &[ProgressLogEntry],
        now: DateTime<Utc>,
    ) -> AppResult<CompletionAnalysis> {
        validate_logs(logs)?;

        let rate = completion_rate(logs.iter());
        let recent = window_since(logs, now, saturating_weeks(self.config.recent_window_weeks))?;
        let recent_rate = completion_rate(recent.into_iter());

        let trend = if recent_rate > rate {
            CompletionTrend::Improving
        } else if recent_rate < rate {
            CompletionTrend::Declining
        } else {
            CompletionTrend::Stable
        };

        let analysis = CompletionAnalysis {
            rate: round_to_tenth(rate),
            trend,
            recent_rate: round_to_tenth(recent_rate),
        };
        debug!(
            logs = logs.len(),
            rate = analysis.rate,
            recent_rate = analysis.recent_rate,
            trend = %analysis.trend,
            "Analyzed workout completion"
        );
        Ok(analysis)
    }

    /// Weekly trend of intensity, volume and consistency metrics
    ///
    /// # Errors
    ///
    /// Returns an error if any log fails validation
    pub fn analyze_metric_trends(&self, logs: &[ProgressLogEntry]) -> AppResult<PerformanceTrends> {
        validate_logs(logs)?;
        if logs.is_empty() {
            return Ok(PerformanceTrends::default());
        }

        let weeks = group_by_week(logs);
        let weekly_average = |key: &str| -> Vec<f64> {
            weeks
                .values()
                .map(|entries| {
                    entries.iter().map(|e| e.metric(key)).sum::<f64>() / entries.len() as f64
                })
                .collect()
        };

        let window = self.config.trend_window;
        let indicators = MetricIndicators {
            intensity: classify_trend(&weekly_average(metric_keys::INTENSITY), window),
            volume: classify_trend(&weekly_average(metric_keys::VOLUME), window),
            consistency: classify_trend(&weekly_average(metric_keys::CONSISTENCY), window),
        };

        let improving = indicators
            .iter()
            .filter(|t| *t == TrendResult::Improving)
            .count();
        let trend = if improving > 1 {
            TrendResult::Improving
        } else {
            TrendResult::Neutral
        };

        debug!(
            weeks = weeks.len(),
            improving,
            trend = %trend,
            "Analyzed weekly metric trends"
        );
        Ok(PerformanceTrends {
            trend,
            indicators,
            weeks_analyzed: weeks.len(),
        })
    }
}

fn completion_rate<'a>(logs: impl Iterator<Item = &'a ProgressLogEntry>) -> f64 {
    let (completed, total) = logs.fold((0, 0), |(completed, total), log| {
        (completed + usize::from(log.workout_completed), total + 1)
    });
    percentage(completed, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn analyzer() -> TrendAnalyzer {
        TrendAnalyzer::with_config(TrendAnalysisConfig::default())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 18, 0, 0).unwrap()
    }

    fn weekly_log(weeks_ago: i64, intensity: f64, volume: f64, consistency: f64) -> ProgressLogEntry {
        ProgressLogEntry::new(now() - Duration::weeks(weeks_ago), true)
            .with_metric("intensity", intensity)
            .with_metric("volume", volume)
            .with_metric("consistency", consistency)
    }

    #[test]
    fn test_empty_logs_are_stable_zero() {
        let result = analyzer().analyze_completion(&[], now()).unwrap();
        assert!(result.rate.abs() < f64::EPSILON);
        assert!(result.recent_rate.abs() < f64::EPSILON);
        assert_eq!(result.trend, CompletionTrend::Stable);
    }

    #[test]
    fn test_recent_improvement_detected() {
        let logs = vec![
            ProgressLogEntry::new(now() - Duration::weeks(10), false),
            ProgressLogEntry::new(now() - Duration::weeks(9), false),
            ProgressLogEntry::new(now() - Duration::weeks(1), true),
            ProgressLogEntry::new(now() - Duration::days(2), true),
        ];
        let result = analyzer().analyze_completion(&logs, now()).unwrap();
        assert!((result.rate - 50.0).abs() < f64::EPSILON);
        assert!((result.recent_rate - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.trend, CompletionTrend::Improving);
    }

    #[test]
    fn test_unbounded_window_covers_whole_history() {
        let analyzer = TrendAnalyzer::with_config(TrendAnalysisConfig {
            recent_window_weeks: i64::MAX,
            ..TrendAnalysisConfig::default()
        });
        let logs = vec![
            ProgressLogEntry::new(now() - Duration::weeks(400), false),
            ProgressLogEntry::new(now() - Duration::days(2), true),
        ];
        let result = analyzer.analyze_completion(&logs, now()).unwrap();
        assert!((result.recent_rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(result.trend, CompletionTrend::Stable);
    }

    #[test]
    fn test_no_recent_logs_is_declining() {
        let logs = vec![ProgressLogEntry::new(now() - Duration::weeks(8), true)];
        let result = analyzer().analyze_completion(&logs, now()).unwrap();
        assert!(result.recent_rate.abs() < f64::EPSILON);
        assert_eq!(result.trend, CompletionTrend::Declining);
    }

    #[test]
    fn test_rate_rounded_to_one_decimal() {
        let logs = vec![
            ProgressLogEntry::new(now() - Duration::days(3), true),
            ProgressLogEntry::new(now() - Duration::days(2), true),
            ProgressLogEntry::new(now() - Duration::days(1), false),
        ];
        let result = analyzer().analyze_completion(&logs, now()).unwrap();
        assert!((result.rate - 66.7).abs() < 1e-9);
    }

    #[test]
    fn test_two_of_three_indicators_improving() {
        let logs = vec![
            weekly_log(3, 5.0, 100.0, 9.0),
            weekly_log(2, 6.0, 110.0, 8.0),
            weekly_log(1, 7.0, 120.0, 9.0),
        ];
        let trends = analyzer().analyze_metric_trends(&logs).unwrap();
        assert_eq!(trends.indicators.intensity, TrendResult::Improving);
        assert_eq!(trends.indicators.volume, TrendResult::Improving);
        assert_eq!(trends.indicators.consistency, TrendResult::Fluctuating);
        assert_eq!(trends.trend, TrendResult::Improving);
        assert_eq!(trends.weeks_analyzed, 3);
    }

    #[test]
    fn test_single_improving_indicator_is_neutral() {
        let logs = vec![
            weekly_log(3, 5.0, 100.0, 9.0),
            weekly_log(2, 6.0, 90.0, 8.0),
            weekly_log(1, 7.0, 80.0, 7.0),
        ];
        let trends = analyzer().analyze_metric_trends(&logs).unwrap();
        assert_eq!(trends.indicators.volume, TrendResult::Declining);
        assert_eq!(trends.trend, TrendResult::Neutral);
    }

    #[test]
    fn test_missing_metrics_average_as_zero() {
        let logs = vec![
            weekly_log(2, 4.0, 0.0, 0.0),
            ProgressLogEntry::new(now() - Duration::weeks(1), true),
        ];
        let trends = analyzer().analyze_metric_trends(&logs).unwrap();
        assert_eq!(trends.indicators.intensity, TrendResult::Declining);
        assert_eq!(trends.indicators.volume, TrendResult::Fluctuating);
    }

    #[test]
    fn test_empty_logs_have_neutral_trends() {
        let trends = analyzer().analyze_metric_trends(&[]).unwrap();
        assert_eq!(trends, PerformanceTrends::default());
        assert_eq!(trends.indicators.intensity, TrendResult::Neutral);
    }
}
