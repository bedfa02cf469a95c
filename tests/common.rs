// ABOUTME: Shared fixtures for coaching engine integration tests
// ABOUTME: Builds deterministic log histories, progressions and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
//! Shared test fixtures for `coach_insights`

use chrono::{DateTime, Duration, TimeZone, Utc};
use coach_insights::models::{
    ClientProfile, ExerciseProgressionRecord, ExerciseSample, FitnessLevel, GoalType,
    ProgressLogEntry,
};
use coach_insights::IntelligenceConfig;

/// Fixed reference time for every test
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 15, 12, 0, 0).unwrap()
}

/// Default configuration, independent of the process environment
pub fn default_config() -> IntelligenceConfig {
    IntelligenceConfig::default()
}

/// `count` daily completed logs ending at `now`, oldest first
pub fn daily_logs(count: usize, now: DateTime<Utc>) -> Vec<ProgressLogEntry> {
    (0..count)
        .map(|i| ProgressLogEntry::new(now - Duration::days((count - 1 - i) as i64), true))
        .collect()
}

/// Ten daily logs of Push-ups with reps 10..=19 and form constant at 8
pub fn push_up_history(now: DateTime<Utc>) -> Vec<ProgressLogEntry> {
    daily_logs(10, now)
        .into_iter()
        .enumerate()
        .map(|(i, log)| {
            log.with_exercise(
                ExerciseSample::new("Push-ups", 3, 10 + i as u32)
                    .with_form_rating(8)
                    .with_completed(true),
            )
        })
        .collect()
}

/// Squat sessions where reps, load and form all rise every session
pub fn progressing_squat_history(now: DateTime<Utc>, sessions: usize) -> Vec<ProgressLogEntry> {
    daily_logs(sessions, now)
        .into_iter()
        .enumerate()
        .map(|(i, log)| {
            log.with_exercise(
                ExerciseSample::new("Squat", 3, 8 + i as u32)
                    .with_weight(60.0 + 2.5 * i as f64)
                    .with_form_rating(5 + i as u8)
                    .with_completed(true),
            )
        })
        .collect()
}

/// Beginner strength client with the given logs
pub fn beginner(logs: Vec<ProgressLogEntry>) -> ClientProfile {
    ClientProfile::new(FitnessLevel::Beginner, GoalType::Strength).with_logs(logs)
}

/// Weekly progression history for one exercise
pub fn weekly_progression(
    name: &str,
    values: &[f64],
    now: DateTime<Utc>,
) -> ExerciseProgressionRecord {
    values
        .iter()
        .enumerate()
        .fold(
            ExerciseProgressionRecord::new(name, FitnessLevel::Beginner),
            |record, (i, value)| {
                record.with_point(now - Duration::weeks((values.len() - i) as i64), *value)
            },
        )
}
