// ABOUTME: Engine-wide constants organized by analytical domain
// ABOUTME: Metric keys, score bounds, analysis windows and difficulty defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Known keys of the free-form `metrics` map on a progress log
pub mod metric_keys {
    /// Perceived or measured workout intensity
    pub const INTENSITY: &str = "intensity";
    /// Training volume
    pub const VOLUME: &str = "volume";
    /// Adherence / consistency rating
    pub const CONSISTENCY: &str = "consistency";
    /// Indicators tracked by weekly metric trend analysis, in report order
    pub const TRACKED: [&str; 3] = [INTENSITY, VOLUME, CONSISTENCY];
}

/// Bounds shared by every rate and score the engine produces
pub mod scores {
    /// Lowest possible rate or score
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest possible rate or score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Analysis window defaults
pub mod windows {
    /// Weeks considered "recent" for completion rate comparison
    pub const RECENT_COMPLETION_WEEKS: i64 = 4;
    /// Number of trailing values inspected by trend classification
    pub const TREND_WINDOW: usize = 3;
    /// Days of activity considered by compatibility scoring
    pub const COMPATIBILITY_ACTIVITY_DAYS: i64 = 30;
}

/// Form rating scale used on exercise samples
pub mod form_rating {
    /// Lowest valid form rating
    pub const MIN: u8 = 1;
    /// Highest valid form rating
    pub const MAX: u8 = 10;
    /// Rating assumed when a sample carries none
    pub const DEFAULT: f64 = 7.0;
}

/// Difficulty adjustment defaults
pub mod difficulty {
    /// Samples required for full confidence
    pub const FULL_CONFIDENCE_SAMPLES: usize = 5;
    /// Confidence below which no adjustment is made
    pub const MIN_CONFIDENCE: f64 = 50.0;
    /// Completion ratio required to increase difficulty
    pub const INCREASE_COMPLETION_THRESHOLD: f64 = 0.8;
    /// Completion ratio below which difficulty is decreased
    pub const DECREASE_COMPLETION_THRESHOLD: f64 = 0.6;
    /// Load multiplier reported for an increase
    pub const INCREASE_FACTOR: f64 = 1.15;
    /// Load multiplier reported for a decrease
    pub const DECREASE_FACTOR: f64 = 0.85;
    /// Minimum prescribed sets
    pub const MIN_SETS: u32 = 2;
    /// Maximum prescribed sets
    pub const MAX_SETS: u32 = 5;
    /// Minimum prescribed reps
    pub const MIN_REPS: u32 = 8;
    /// Maximum prescribed reps
    pub const MAX_REPS: u32 = 15;
    /// Sets assumed when a prescription is built without history
    pub const DEFAULT_SETS: u32 = 3;
    /// Reps assumed when a prescription is built without history
    pub const DEFAULT_REPS: u32 = 10;
}

/// Gamification points
pub mod points {
    /// Points awarded when a goal is completed
    pub const GOAL_COMPLETION: u32 = 100;
}
