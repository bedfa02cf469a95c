// ABOUTME: Append-only per-exercise performance histories
// ABOUTME: Carries current skill tier and the next milestone for pass-through reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FitnessLevel;
use crate::errors::{AppError, AppResult};

/// One dated performance measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    /// Measurement date
    pub date: DateTime<Utc>,
    /// Performance value (load, reps, time - exercise specific)
    pub performance_value: f64,
}

/// Historical progression of a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgressionRecord {
    /// Exercise name
    pub exercise_name: String,
    /// Chronological measurements
    #[serde(default)]
    pub history: Vec<ProgressionPoint>,
    /// Current skill tier for this exercise
    #[serde(default)]
    pub current_level: FitnessLevel,
    /// Description of the next milestone
    #[serde(default)]
    pub next_milestone: Option<String>,
}

impl ExerciseProgressionRecord {
    /// Create a record with an empty history
    pub fn new(exercise_name: impl Into<String>, current_level: FitnessLevel) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            history: Vec::new(),
            current_level,
            next_milestone: None,
        }
    }

    /// Append a measurement
    #[must_use]
    pub fn with_point(mut self, date: DateTime<Utc>, performance_value: f64) -> Self {
        self.history.push(ProgressionPoint {
            date,
            performance_value,
        });
        self
    }

    /// Set the next milestone description
    #[must_use]
    pub fn with_milestone(mut self, milestone: impl Into<String>) -> Self {
        self.next_milestone = Some(milestone.into());
        self
    }

    /// Performance values in chronological order
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.history.iter().map(|p| p.performance_value).collect()
    }

    /// Boundary validation
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or a value is not finite
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise_name.trim().is_empty() {
            return Err(AppError::missing_field("exercise_name"));
        }
        if let Some(point) = self
            .history
            .iter()
            .find(|p| !p.performance_value.is_finite())
        {
            return Err(AppError::out_of_range(
                "performance_value",
                format!(
                    "Performance value recorded on {} must be finite",
                    point.date.to_rfc3339()
                ),
            )
            .with_resource_id(self.exercise_name.clone()));
        }
        Ok(())
    }
}
