// ABOUTME: Serializable snapshot of one client's records as handed over by persistence
// ABOUTME: Runs the analyzers over a snapshot to produce reports, adjustments and rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Client snapshots
//!
//! A snapshot bundles everything the engine needs for one client. It is
//! loaded from JSON, validated once at the boundary and then fed to the
//! analyzers with an explicit `now`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{
    AchievementCandidate, AchievementCategory, ClientProfile, ExerciseProgressionRecord,
    ExerciseType, GoalRecord,
};
use coach_intelligence::{
    collect_samples, CompatibilityScorer, DifficultyAdjuster, DifficultyAdjustment,
    GoalEvaluation, GoalProgressPolicy, InsightEngine, MessageSelector, ProgressInsights,
    RecommendationEngine, WorkoutRecommendation,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything known about one client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSnapshot {
    /// Level, goal and recent logs
    pub profile: ClientProfile,
    /// Per-exercise performance histories
    #[serde(default)]
    pub progressions: Vec<ExerciseProgressionRecord>,
    /// Tracked goals
    #[serde(default)]
    pub goals: Vec<GoalRecord>,
    /// Achievements to rank for this client
    #[serde(default)]
    pub candidates: Vec<AchievementCandidate>,
    /// Exercise name to type lookup used by the recommendation engine
    #[serde(default)]
    pub exercise_catalog: BTreeMap<String, ExerciseType>,
}

/// Combined analysis of a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientReport {
    /// Progress insights
    pub progress: ProgressInsights,
    /// Workout recommendation
    pub recommendation: WorkoutRecommendation,
    /// One evaluation per goal, in input order
    pub goals: Vec<GoalEvaluation>,
    /// Points earned by goals completed in this evaluation
    pub points_awarded: u32,
}

/// Achievement candidate with its compatibility score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// Candidate title
    pub title: String,
    /// Candidate category
    pub category: AchievementCategory,
    /// Candidate difficulty, 1-5
    pub difficulty: u8,
    /// Compatibility score, 0-100
    pub score: f64,
    /// Headline reason for the score
    pub reason: String,
}

impl ClientSnapshot {
    /// Snapshot for a profile with no other records
    #[must_use]
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            profile,
            progressions: Vec::new(),
            goals: Vec::new(),
            candidates: Vec::new(),
            exercise_catalog: BTreeMap::new(),
        }
    }

    /// Parse and validate a snapshot from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any record fails validation
    pub fn from_json(json: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read, parse and validate a snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read snapshot {}", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "Loaded client snapshot");
        Self::from_json(&contents)
    }

    /// Validate every record in the snapshot
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered
    pub fn validate(&self) -> AppResult<()> {
        self.profile.validate()?;
        for record in &self.progressions {
            record.validate()?;
        }
        for goal in &self.goals {
            goal.validate()?;
        }
        for candidate in &self.candidates {
            candidate.validate()?;
        }
        Ok(())
    }

    /// Progress report, workout recommendation and goal evaluation in one pass
    ///
    /// # Errors
    ///
    /// Returns an error if any record fails validation
    pub fn analyze(
        &self,
        now: DateTime<Utc>,
        selector: &mut dyn MessageSelector,
    ) -> AppResult<ClientReport> {
        let logs = &self.profile.recent_logs;

        let progress =
            InsightEngine::new().analyze_client_progress(logs, &self.progressions, now, selector)?;
        let recommendation = RecommendationEngine::with_catalog(&self.exercise_catalog)
            .recommend(&self.profile, logs, &self.goals)?;
        let (goals, points_awarded) = GoalProgressPolicy::default().evaluate_all(&self.goals)?;

        info!(
            level = %self.profile.fitness_level,
            goal = %self.profile.goal,
            goals = goals.len(),
            points_awarded,
            "Analyzed client snapshot"
        );

        Ok(ClientReport {
            progress,
            recommendation,
            goals,
            points_awarded,
        })
    }

    /// Difficulty adjustment for one exercise, from its samples in the recent logs
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise name is empty or a sample fails validation
    pub fn adjust(&self, exercise: &str) -> AppResult<DifficultyAdjustment> {
        if exercise.trim().is_empty() {
            return Err(AppError::missing_field("exercise"));
        }
        let samples = collect_samples(&self.profile.recent_logs, exercise);
        debug!(exercise, samples = samples.len(), "Collected exercise samples");

        let mut adjustment =
            DifficultyAdjuster::new().adjust(&samples, self.profile.fitness_level)?;
        if adjustment.adjusted.name.is_empty() {
            exercise.clone_into(&mut adjustment.adjusted.name);
        }
        Ok(adjustment)
    }

    /// Rank the snapshot's achievement candidates, best fit first
    ///
    /// # Errors
    ///
    /// Returns an error if the profile or any candidate fails validation
    pub fn score_candidates(&self, now: DateTime<Utc>) -> AppResult<Vec<RankedCandidate>> {
        let ranked = CompatibilityScorer::new().rank(&self.profile, &self.candidates, now)?;
        Ok(ranked
            .into_iter()
            .map(|(candidate, score)| RankedCandidate {
                title: candidate.title,
                category: candidate.category,
                difficulty: candidate.difficulty,
                score: score.score,
                reason: score.reason,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::models::{FitnessLevel, GoalType};

    #[test]
    fn test_minimal_json_uses_defaults() {
        let snapshot = ClientSnapshot::from_json(
            r#"{"profile": {"fitness_level": "beginner", "goal": "strength"}}"#,
        )
        .unwrap();
        assert!(snapshot.profile.recent_logs.is_empty());
        assert!(snapshot.candidates.is_empty());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        assert!(ClientSnapshot::from_json("{not json").is_err());
    }

    #[test]
    fn test_adjust_without_history_keeps_exercise_name() {
        let snapshot = ClientSnapshot::new(ClientProfile::new(
            FitnessLevel::Beginner,
            GoalType::Strength,
        ));
        let adjustment = snapshot.adjust("Squat").unwrap();
        assert_eq!(adjustment.adjusted.name, "Squat");
        assert_eq!(adjustment.adjusted.sets, 3);
        assert_eq!(adjustment.adjusted.reps, 10);
    }

    #[test]
    fn test_adjust_rejects_blank_exercise() {
        let snapshot = ClientSnapshot::new(ClientProfile::new(
            FitnessLevel::Beginner,
            GoalType::Strength,
        ));
        assert!(snapshot.adjust("  ").is_err());
    }
}
