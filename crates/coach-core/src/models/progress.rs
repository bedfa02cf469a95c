// ABOUTME: Daily progress log entries as read from the persistence layer
// ABOUTME: Workout completion flag, exercise samples and a free-form metric map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ExerciseSample;
use crate::errors::{AppError, AppResult};

/// One logged training day
///
/// Callers pass these ordered by `date`, most recent last, with timestamps
/// already normalized to UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLogEntry {
    /// When the log was recorded
    pub date: DateTime<Utc>,
    /// Whether the scheduled workout was completed
    #[serde(default)]
    pub workout_completed: bool,
    /// Exercises performed, in order
    #[serde(default)]
    pub exercises: Vec<ExerciseSample>,
    /// Free-form metrics; unknown keys are carried but ignored by the engine
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

impl ProgressLogEntry {
    /// Create an entry without exercises or metrics
    #[must_use]
    pub const fn new(date: DateTime<Utc>, workout_completed: bool) -> Self {
        Self {
            date,
            workout_completed,
            exercises: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Append an exercise sample
    #[must_use]
    pub fn with_exercise(mut self, sample: ExerciseSample) -> Self {
        self.exercises.push(sample);
        self
    }

    /// Set a metric value
    #[must_use]
    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }

    /// Metric value, zero when the key is missing
    #[must_use]
    pub fn metric(&self, key: &str) -> f64 {
        self.metrics.get(key).copied().unwrap_or(0.0)
    }

    /// Boundary validation of the entry and all of its samples
    ///
    /// # Errors
    ///
    /// Returns an error if a metric value is not finite or a sample is invalid
    pub fn validate(&self) -> AppResult<()> {
        if let Some((key, value)) = self.metrics.iter().find(|(_, value)| !value.is_finite()) {
            return Err(AppError::out_of_range(
                "metrics",
                format!("Metric '{key}' must be a finite number, got {value}"),
            )
            .with_resource_id(self.date.to_rfc3339()));
        }
        for sample in &self.exercises {
            sample.validate()?;
        }
        Ok(())
    }
}

/// Validate a whole log snapshot
///
/// # Errors
///
/// Returns the first validation error found
pub fn validate_logs(logs: &[ProgressLogEntry]) -> AppResult<()> {
    logs.iter().try_for_each(ProgressLogEntry::validate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_metric_reads_as_zero() {
        let entry = ProgressLogEntry::new(day(1), true).with_metric("intensity", 7.5);
        assert!((entry.metric("intensity") - 7.5).abs() < f64::EPSILON);
        assert!(entry.metric("volume").abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_metric_is_rejected() {
        let entry = ProgressLogEntry::new(day(1), true).with_metric("volume", f64::INFINITY);
        assert!(entry.validate().is_err());
        assert!(validate_logs(&[entry]).is_err());
    }

    #[test]
    fn test_unknown_metric_keys_pass_validation() {
        let entry = ProgressLogEntry::new(day(2), false).with_metric("sleep_quality", 4.0);
        assert!(entry.validate().is_ok());
    }
}
