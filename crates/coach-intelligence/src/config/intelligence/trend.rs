// ABOUTME: Trend analysis configuration for completion and metric trends
// ABOUTME: Configures the recent-activity window and trend classification tail length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::constants::windows;
use serde::{Deserialize, Serialize};

/// Trend analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysisConfig {
    /// Weeks of logs counted as "recent" when comparing completion rates
    pub recent_window_weeks: i64,
    /// Trailing values inspected when classifying a direction
    pub trend_window: usize,
}

impl Default for TrendAnalysisConfig {
    fn default() -> Self {
        Self {
            recent_window_weeks: windows::RECENT_COMPLETION_WEEKS,
            trend_window: windows::TREND_WINDOW,
        }
    }
}
