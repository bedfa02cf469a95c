// ABOUTME: Shared result enums for the coaching intelligence engine
// ABOUTME: Trend labels, completion trends, adjustment directions and priorities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a short numeric sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendResult {
    /// Strictly increasing tail
    Improving,
    /// Strictly decreasing tail
    Declining,
    /// Any plateau or direction change in the tail
    Fluctuating,
    /// Fewer than two values
    #[default]
    Neutral,
}

impl TrendResult {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Fluctuating => "fluctuating",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for TrendResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recent completion rate compared with the overall rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionTrend {
    /// Recent rate above overall rate
    Improving,
    /// Recent rate below overall rate
    Declining,
    /// Rates equal
    #[default]
    Stable,
}

impl fmt::Display for CompletionTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        })
    }
}

/// Outcome of the difficulty classifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    /// Make the exercise harder
    Increase,
    /// Make the exercise easier
    Decrease,
    /// Keep the prescription
    #[default]
    Maintain,
}

impl AdjustmentDirection {
    /// Past-tense verb used in rationales
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Increase => "increased",
            Self::Decrease => "decreased",
            Self::Maintain => "maintained",
        }
    }
}

impl fmt::Display for AdjustmentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Maintain => "maintain",
        })
    }
}

/// Priority attached to coaching suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    /// Act on this first
    High,
    /// Worth doing soon
    Medium,
    /// Nice to have
    Low,
}
