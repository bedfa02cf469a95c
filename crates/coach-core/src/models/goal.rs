// ABOUTME: Client goal vocabulary and persisted goal records
// ABOUTME: Goal types drive recommendation focus tables and compatibility pairing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Fixed goal vocabulary of the coaching platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Reduce body weight / body fat
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Improve aerobic endurance
    Endurance,
    /// Increase maximal strength
    #[default]
    Strength,
    /// Train regularly
    Consistency,
    /// Improve mobility
    Flexibility,
    /// General health and fitness
    GeneralFitness,
    /// Any goal outside the known vocabulary
    #[serde(other)]
    Other,
}

impl GoalType {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Endurance => "endurance",
            Self::Strength => "strength",
            Self::Consistency => "consistency",
            Self::Flexibility => "flexibility",
            Self::GeneralFitness => "general_fitness",
            Self::Other => "other",
        }
    }

    /// Human-readable label ("weight loss")
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a persisted goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Being worked on
    #[default]
    InProgress,
    /// Target reached
    Completed,
    /// No longer pursued
    Abandoned,
}

/// A client goal as stored by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Display title
    pub title: String,
    /// Goal category, when the goal maps onto the known vocabulary
    #[serde(default)]
    pub goal_type: Option<GoalType>,
    /// Value at which the goal counts as reached
    pub target_value: f64,
    /// Latest measured value
    #[serde(default)]
    pub current_value: f64,
    /// Lifecycle status
    #[serde(default)]
    pub status: GoalStatus,
}

impl GoalRecord {
    /// Whether the goal is still being pursued
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::InProgress
    }

    /// Boundary validation
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or a value is not finite
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::missing_field("title"));
        }
        if !self.target_value.is_finite() || !self.current_value.is_finite() {
            return Err(AppError::out_of_range(
                "target_value",
                format!("Goal '{}' has a non-finite value", self.title),
            )
            .with_resource_id(self.title.clone()));
        }
        Ok(())
    }
}
