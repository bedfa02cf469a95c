// ABOUTME: Candidate achievements and recommendations scored against a client
// ABOUTME: Category vocabulary and difficulty scale validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::errors::{AppError, AppResult};

/// Valid difficulty scale of a candidate
pub const DIFFICULTY_RANGE: RangeInclusive<u8> = 1..=5;

/// Achievement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    /// Workout attendance and streaks
    Workout,
    /// Lifting milestones
    Strength,
    /// Nutrition adherence
    Nutrition,
    /// Endurance milestones
    Endurance,
    /// Anything else
    #[serde(other)]
    Other,
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Workout => "workout",
            Self::Strength => "strength",
            Self::Nutrition => "nutrition",
            Self::Endurance => "endurance",
            Self::Other => "other",
        })
    }
}

/// A gamified achievement (or recommendation) considered for a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementCandidate {
    /// Display title
    pub title: String,
    /// Category used for goal pairing
    pub category: AchievementCategory,
    /// Difficulty on a 1-5 scale
    pub difficulty: u8,
}

impl AchievementCandidate {
    /// Create a candidate
    pub fn new(title: impl Into<String>, category: AchievementCategory, difficulty: u8) -> Self {
        Self {
            title: title.into(),
            category,
            difficulty,
        }
    }

    /// Boundary validation
    ///
    /// # Errors
    ///
    /// Returns an error if the difficulty is outside 1-5
    pub fn validate(&self) -> AppResult<()> {
        if !DIFFICULTY_RANGE.contains(&self.difficulty) {
            return Err(AppError::out_of_range(
                "difficulty",
                format!(
                    "Difficulty must be between {} and {}, got {}",
                    DIFFICULTY_RANGE.start(),
                    DIFFICULTY_RANGE.end(),
                    self.difficulty
                ),
            )
            .with_resource_id(self.title.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_bounds() {
        assert!(AchievementCandidate::new("Streak", AchievementCategory::Workout, 1)
            .validate()
            .is_ok());
        assert!(AchievementCandidate::new("Streak", AchievementCategory::Workout, 5)
            .validate()
            .is_ok());
        assert!(AchievementCandidate::new("Streak", AchievementCategory::Workout, 0)
            .validate()
            .is_err());
        assert!(AchievementCandidate::new("Streak", AchievementCategory::Workout, 6)
            .validate()
            .is_err());
    }
}
