// ABOUTME: Domain records consumed by the coaching insight engine
// ABOUTME: Logs, exercise samples, progression histories, client profiles, goals and achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! Every record here is built fresh by the caller from persisted data and is
//! read-only to the engine. Each record exposes `validate()`, which is the
//! boundary check run before any analysis touches the data.

mod achievement;
mod client;
mod exercise;
mod goal;
mod level;
mod progress;
mod progression;

pub use achievement::{AchievementCandidate, AchievementCategory, DIFFICULTY_RANGE};
pub use client::ClientProfile;
pub use exercise::{ExerciseSample, ExerciseType, RepCount};
pub use goal::{GoalRecord, GoalStatus, GoalType};
pub use level::FitnessLevel;
pub use progress::{validate_logs, ProgressLogEntry};
pub use progression::{ExerciseProgressionRecord, ProgressionPoint};
