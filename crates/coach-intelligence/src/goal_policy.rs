// ABOUTME: Pure goal-progress policy evaluated by an external scheduler
// ABOUTME: Decides goal completion and completion points without touching persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::constants::points;
use coach_core::errors::AppResult;
use coach_core::models::{GoalRecord, GoalStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::time_series::{clamp_score, round_to_tenth};

/// Verdict for one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalEvaluation {
    /// The goal is completed after this evaluation
    pub completed: bool,
    /// Points to award now; only newly completed goals earn points
    pub points_awarded: u32,
    /// `current / target`, percent, clamped to 0-100
    pub progress_percent: f64,
}

/// Goal completion policy
#[derive(Debug, Clone, Copy)]
pub struct GoalProgressPolicy {
    completion_points: u32,
}

impl Default for GoalProgressPolicy {
    fn default() -> Self {
        Self {
            completion_points: points::GOAL_COMPLETION,
        }
    }
}

impl GoalProgressPolicy {
    /// Policy awarding a custom number of points per completed goal
    #[must_use]
    pub const fn with_points(completion_points: u32) -> Self {
        Self { completion_points }
    }

    /// Evaluate a single goal
    ///
    /// # Errors
    ///
    /// Returns an error if the goal fails validation
    pub fn evaluate(&self, goal: &GoalRecord) -> AppResult<GoalEvaluation> {
        goal.validate()?;

        let reached = goal.current_value >= goal.target_value;
        let progress_percent = if goal.target_value > 0.0 {
            round_to_tenth(clamp_score(goal.current_value / goal.target_value * 100.0))
        } else if reached {
            100.0
        } else {
            0.0
        };

        let (completed, points_awarded) = match goal.status {
            GoalStatus::InProgress if reached => (true, self.completion_points),
            GoalStatus::InProgress | GoalStatus::Abandoned => (false, 0),
            GoalStatus::Completed => (true, 0),
        };

        debug!(
            goal = %goal.title,
            completed,
            points_awarded,
            progress_percent,
            "Evaluated goal progress"
        );
        Ok(GoalEvaluation {
            completed,
            points_awarded,
            progress_percent,
        })
    }

    /// Evaluate every goal and total the points
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered
    pub fn evaluate_all(&self, goals: &[GoalRecord]) -> AppResult<(Vec<GoalEvaluation>, u32)> {
        let evaluations = goals
            .iter()
            .map(|goal| self.evaluate(goal))
            .collect::<AppResult<Vec<_>>>()?;
        let total = evaluations.iter().map(|e| e.points_awarded).sum();
        Ok((evaluations, total))
    }
}
