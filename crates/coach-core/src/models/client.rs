// ABOUTME: Client profile snapshot handed to recommendation and compatibility scoring
// ABOUTME: Fitness level, primary goal and recent logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{validate_logs, FitnessLevel, GoalType, ProgressLogEntry};
use crate::errors::AppResult;

/// Client profile as supplied by the persistence collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Current fitness tier
    pub fitness_level: FitnessLevel,
    /// Primary goal
    pub goal: GoalType,
    /// Recent progress logs ordered by date, most recent last
    #[serde(default)]
    pub recent_logs: Vec<ProgressLogEntry>,
}

impl ClientProfile {
    /// Create a profile without logs
    #[must_use]
    pub const fn new(fitness_level: FitnessLevel, goal: GoalType) -> Self {
        Self {
            fitness_level,
            goal,
            recent_logs: Vec::new(),
        }
    }

    /// Attach recent logs
    #[must_use]
    pub fn with_logs(mut self, logs: Vec<ProgressLogEntry>) -> Self {
        self.recent_logs = logs;
        self
    }

    /// Boundary validation of the embedded logs
    ///
    /// # Errors
    ///
    /// Returns the first log validation error
    pub fn validate(&self) -> AppResult<()> {
        validate_logs(&self.recent_logs)
    }
}
