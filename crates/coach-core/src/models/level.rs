// ABOUTME: Client fitness level tiers with ordinal ranks
// ABOUTME: Parsing and display for the beginner/intermediate/advanced vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Skill tier of a client or of an exercise progression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Regular trainee
    Intermediate,
    /// Experienced trainee
    Advanced,
}

impl FitnessLevel {
    /// Ordinal rank used for difficulty comparisons (beginner=1 .. advanced=3)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_format(
                "fitness_level",
                format!("Unknown fitness level: {other}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert_eq!(FitnessLevel::Beginner.rank(), 1);
        assert_eq!(FitnessLevel::Intermediate.rank(), 2);
        assert_eq!(FitnessLevel::Advanced.rank(), 3);
        assert!(FitnessLevel::Beginner < FitnessLevel::Advanced);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Advanced".parse::<FitnessLevel>().unwrap(),
            FitnessLevel::Advanced
        );
        assert!("elite".parse::<FitnessLevel>().is_err());
    }
}
