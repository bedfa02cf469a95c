// ABOUTME: Single-exercise performance samples recorded inside progress logs
// ABOUTME: Handles numeric and textual rep prescriptions and sample validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::form_rating;
use crate::errors::{AppError, AppResult};

/// Training modality of an exercise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Resistance training
    #[default]
    Strength,
    /// Steady-state cardio
    Cardio,
    /// High-intensity interval training
    Hiit,
    /// Muscle-building volume work
    Hypertrophy,
    /// Circuit training
    Circuit,
    /// Explosive / power work
    Power,
    /// Mobility and stretching
    Flexibility,
    /// Anything outside the known vocabulary
    #[serde(other)]
    Other,
}

impl ExerciseType {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Hiit => "hiit",
            Self::Hypertrophy => "hypertrophy",
            Self::Circuit => "circuit",
            Self::Power => "power",
            Self::Flexibility => "flexibility",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reps as logged: either a plain count or a textual prescription such as
/// `"8-10"`, `"10 each leg"` or `"20-30 seconds"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepCount {
    /// Exact number of reps
    Count(u32),
    /// Textual range or prescription
    Range(String),
}

impl RepCount {
    /// Numeric value used for comparisons; ranges resolve to their upper bound
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Count(count) => Some(*count),
            Self::Range(text) => match text.split_once('-') {
                Some((low, high)) => leading_number(high).or_else(|| leading_number(low)),
                None => leading_number(text),
            },
        }
    }
}

impl Default for RepCount {
    fn default() -> Self {
        Self::Count(0)
    }
}

impl From<u32> for RepCount {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// One exercise as performed (or prescribed) in a logged workout
///
/// Identity is the `name`; no numeric exercise ids are assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSample {
    /// Exercise name
    pub name: String,
    /// Sets performed
    #[serde(default)]
    pub sets: u32,
    /// Reps performed per set
    #[serde(default)]
    pub reps: RepCount,
    /// External load, absent for bodyweight work
    #[serde(default)]
    pub weight: Option<f64>,
    /// Coach or self-assessed form quality, 1-10
    #[serde(default)]
    pub form_rating: Option<u8>,
    /// Whether the prescription was completed; absent means completed
    #[serde(default)]
    pub completed: Option<bool>,
    /// Training modality, when known
    #[serde(default, rename = "type")]
    pub exercise_type: Option<ExerciseType>,
}

impl ExerciseSample {
    /// Create a completed sample with the given sets and reps
    pub fn new(name: impl Into<String>, sets: u32, reps: impl Into<RepCount>) -> Self {
        Self {
            name: name.into(),
            sets,
            reps: reps.into(),
            weight: None,
            form_rating: None,
            completed: None,
            exercise_type: None,
        }
    }

    /// Set the external load
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the form rating
    #[must_use]
    pub const fn with_form_rating(mut self, rating: u8) -> Self {
        self.form_rating = Some(rating);
        self
    }

    /// Mark completion explicitly
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Set the training modality
    #[must_use]
    pub const fn with_type(mut self, exercise_type: ExerciseType) -> Self {
        self.exercise_type = Some(exercise_type);
        self
    }

    /// Samples lacking the completion flag count as completed
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(true)
    }

    /// Resolved rep count, zero when unresolvable
    #[must_use]
    pub fn rep_value(&self) -> u32 {
        self.reps.value().unwrap_or(0)
    }

    /// Load used for comparisons, zero for bodyweight work
    #[must_use]
    pub fn load(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    /// Boundary validation
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, reps cannot be resolved to a
    /// number, the weight is negative or not finite, or the form rating is
    /// outside 1-10
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if self.reps.value().is_none() {
            return Err(AppError::invalid_format(
                "reps",
                format!("Cannot read a rep count from {:?}", self.reps),
            )
            .with_resource_id(self.name.clone()));
        }
        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::out_of_range(
                    "weight",
                    format!("Weight must be a non-negative number, got {weight}"),
                )
                .with_resource_id(self.name.clone()));
            }
        }
        if let Some(rating) = self.form_rating {
            if !(form_rating::MIN..=form_rating::MAX).contains(&rating) {
                return Err(AppError::out_of_range(
                    "form_rating",
                    format!(
                        "Form rating must be between {} and {}, got {rating}",
                        form_rating::MIN,
                        form_rating::MAX
                    ),
                )
                .with_resource_id(self.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rep_ranges_resolve_to_upper_bound() {
        assert_eq!(RepCount::Count(12).value(), Some(12));
        assert_eq!(RepCount::Range("8-10".into()).value(), Some(10));
        assert_eq!(RepCount::Range("10 each leg".into()).value(), Some(10));
        assert_eq!(RepCount::Range("20-30 seconds".into()).value(), Some(30));
        assert_eq!(RepCount::Range("to failure".into()).value(), None);
    }

    #[test]
    fn test_reps_deserialize_from_number_or_string() {
        let sample: ExerciseSample =
            serde_json::from_str(r#"{"name":"Squat","sets":3,"reps":"8-10"}"#).unwrap();
        assert_eq!(sample.reps, RepCount::Range("8-10".into()));
        let sample: ExerciseSample =
            serde_json::from_str(r#"{"name":"Squat","sets":3,"reps":8,"type":"power"}"#).unwrap();
        assert_eq!(sample.reps, RepCount::Count(8));
        assert_eq!(sample.exercise_type, Some(ExerciseType::Power));
    }

    #[test]
    fn test_missing_completion_counts_as_completed() {
        let sample = ExerciseSample::new("Push-ups", 3, 10);
        assert!(sample.is_completed());
        assert!(!sample.with_completed(false).is_completed());
    }

    #[test]
    fn test_validation_rejects_bad_form_rating() {
        let sample = ExerciseSample::new("Push-ups", 3, 10).with_form_rating(11);
        let error = sample.validate().unwrap_err();
        assert_eq!(error.context.field.as_deref(), Some("form_rating"));
    }

    #[test]
    fn test_validation_rejects_negative_weight() {
        let sample = ExerciseSample::new("Row", 3, 10).with_weight(-5.0);
        assert!(sample.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unreadable_reps() {
        let sample = ExerciseSample::new("Plank", 2, RepCount::Range("hold".into()));
        assert!(sample.validate().is_err());
    }
}
