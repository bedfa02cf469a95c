// ABOUTME: Workout-focus recommendation engine driven by client goals and logged preferences
// ABOUTME: Builds focus bands, suggested exercises, schedule advice and a staged progression path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout recommendation engine

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::BuildHasher;

use coach_core::errors::AppResult;
use coach_core::models::{
    validate_logs, ClientProfile, ExerciseType, FitnessLevel, GoalRecord, GoalType,
    ProgressLogEntry,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, RecommendationEngineConfig};
use crate::time_series::{clamp_score, round_to_tenth};
use crate::types::RecommendationPriority;

/// Static lookup of exercise types by exercise name
///
/// Consulted when a logged sample carries no type of its own.
pub trait ExerciseTypeLookup {
    /// Type of the named exercise, if catalogued
    fn exercise_type(&self, name: &str) -> Option<ExerciseType>;
}

/// Lookup that knows no exercises
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCatalog;

impl ExerciseTypeLookup for NoCatalog {
    fn exercise_type(&self, _name: &str) -> Option<ExerciseType> {
        None
    }
}

impl<T: ExerciseTypeLookup + ?Sized> ExerciseTypeLookup for &T {
    fn exercise_type(&self, name: &str) -> Option<ExerciseType> {
        (**self).exercise_type(name)
    }
}

impl<S: BuildHasher> ExerciseTypeLookup for HashMap<String, ExerciseType, S> {
    fn exercise_type(&self, name: &str) -> Option<ExerciseType> {
        self.get(name).copied()
    }
}

impl ExerciseTypeLookup for BTreeMap<String, ExerciseType> {
    fn exercise_type(&self, name: &str) -> Option<ExerciseType> {
        self.get(name).copied()
    }
}

/// Focus band for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalFocus {
    /// Main exercise types
    pub primary: &'static [ExerciseType],
    /// Supporting exercise types
    pub secondary: &'static [ExerciseType],
    /// Intensity band
    pub intensity: &'static str,
    /// Rest between sets
    pub rest: &'static str,
}

impl GoalFocus {
    fn includes(&self, exercise_type: ExerciseType) -> bool {
        self.primary.contains(&exercise_type) || self.secondary.contains(&exercise_type)
    }
}

/// Focus table entry for a goal; only four goals have one
#[must_use]
pub const fn goal_focus(goal: GoalType) -> Option<GoalFocus> {
    match goal {
        GoalType::WeightLoss => Some(GoalFocus {
            primary: &[ExerciseType::Cardio, ExerciseType::Hiit],
            secondary: &[ExerciseType::Strength],
            intensity: "moderate-high",
            rest: "30-45 seconds",
        }),
        GoalType::MuscleGain => Some(GoalFocus {
            primary: &[ExerciseType::Strength],
            secondary: &[ExerciseType::Hypertrophy],
            intensity: "high",
            rest: "60-90 seconds",
        }),
        GoalType::Endurance => Some(GoalFocus {
            primary: &[ExerciseType::Cardio, ExerciseType::Circuit],
            secondary: &[ExerciseType::Strength],
            intensity: "moderate",
            rest: "15-30 seconds",
        }),
        GoalType::Strength => Some(STRENGTH_FOCUS),
        _ => None,
    }
}

/// Aggregated performance of one exercise across completed workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseStats {
    /// Type taken from the first sample, the catalog, or strength
    pub exercise_type: ExerciseType,
    /// Number of samples
    pub count: usize,
    /// Sum of sets x reps x load (bodyweight counts as 1)
    pub total_volume: f64,
    /// Percent of samples not explicitly marked incomplete
    pub completion_rate: f64,
    /// Mean form rating
    pub performance_score: f64,
}

/// Named exercise with its stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePerformance {
    /// Exercise name
    pub name: String,
    /// Aggregated stats
    pub stats: ExerciseStats,
}

/// Preferences derived from a client's completed workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPreferences {
    /// Distinct types among the best performers
    pub preferred_types: Vec<ExerciseType>,
    /// Top performers
    pub best_performance: Vec<ExercisePerformance>,
    /// Bottom performers
    pub areas_of_improvement: Vec<ExercisePerformance>,
    /// Trained days over the tracked calendar span, 0-100
    pub consistency_score: f64,
}

impl Default for ClientPreferences {
    fn default() -> Self {
        Self {
            preferred_types: vec![ExerciseType::Strength],
            best_performance: Vec::new(),
            areas_of_improvement: Vec::new(),
            consistency_score: 0.0,
        }
    }
}

/// Focus band in output form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutFocus {
    /// Main exercise types
    pub primary_types: Vec<ExerciseType>,
    /// Supporting exercise types
    pub secondary_types: Vec<ExerciseType>,
    /// Intensity band
    pub intensity_range: String,
    /// Rest between sets
    pub rest_periods: String,
}

impl From<GoalFocus> for WorkoutFocus {
    fn from(focus: GoalFocus) -> Self {
        Self {
            primary_types: focus.primary.to_vec(),
            secondary_types: focus.secondary.to_vec(),
            intensity_range: focus.intensity.to_owned(),
            rest_periods: focus.rest.to_owned(),
        }
    }
}

/// Exercise worth keeping in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedExercise {
    /// Exercise name
    pub name: String,
    /// Exercise type
    pub exercise_type: ExerciseType,
    /// Why it was suggested
    pub reason: String,
}

/// Kind of schedule change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleAdjustmentKind {
    /// Change how often the client trains
    Frequency,
    /// Change how hard the client trains
    Intensity,
}

/// Suggested schedule change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAdjustment {
    /// What to change
    pub kind: ScheduleAdjustmentKind,
    /// Human-readable suggestion
    pub suggestion: String,
    /// Urgency
    pub priority: RecommendationPriority,
}

/// One staged target in a progression path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionMilestone {
    /// `2 weeks`, `1 month` or `2 months`
    pub timeframe: String,
    /// What to work on
    pub focus_areas: Vec<String>,
    /// Illustrative targets keyed by metric
    pub target_metrics: BTreeMap<String, String>,
}

/// Full workout recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    /// Goal the recommendation was built for
    pub primary_goal: GoalType,
    /// Client level at the time of the recommendation
    pub fitness_level: FitnessLevel,
    /// Focus band
    pub workout_focus: WorkoutFocus,
    /// Best performers matching the focus band
    pub suggested_exercises: Vec<SuggestedExercise>,
    /// Zero or one schedule change
    pub schedule_adjustments: Vec<ScheduleAdjustment>,
    /// Three staged milestones
    pub progression_path: Vec<ProgressionMilestone>,
}

const MILESTONE_TIMEFRAMES: [&str; 3] = ["2 weeks", "1 month", "2 months"];

/// Staged targets for a goal; goals without a dedicated path use strength's
#[must_use]
pub fn progression_path(goal: GoalType) -> Vec<ProgressionMilestone> {
    MILESTONE_TIMEFRAMES
        .iter()
        .zip(0u32..)
        .map(|(timeframe, i)| {
            let step = f64::from(i);
            let (focus_areas, metrics): ([&str; 2], [(&str, String); 2]) = match goal {
                GoalType::WeightLoss => (
                    ["Increase cardio intensity", "Add resistance training"],
                    [
                        ("cardio_duration", format!("{} minutes", 20 + i * 10)),
                        ("intensity", format!("{}% max heart rate", 65 + i * 5)),
                    ],
                ),
                GoalType::MuscleGain => (
                    ["Progressive overload", "Form refinement"],
                    [
                        ("weight_increase", format!("{}%", 2.5_f64.mul_add(step, 5.0))),
                        ("sets_per_muscle", format!("{} sets/week", 9 + i * 3)),
                    ],
                ),
                GoalType::Endurance => (
                    ["Aerobic base", "Circuit density"],
                    [
                        ("cardio_duration", format!("{} minutes", 30 + i * 15)),
                        ("circuit_rounds", format!("{} rounds", 3 + i)),
                    ],
                ),
                _ => (
                    ["Compound movements", "Progressive overload"],
                    [
                        ("strength_increase", format!("{}%", 10 + i * 5)),
                        ("working_sets", format!("{} sets", 3 + i)),
                    ],
                ),
            };
            ProgressionMilestone {
                timeframe: (*timeframe).to_owned(),
                focus_areas: focus_areas.iter().map(|s| (*s).to_owned()).collect(),
                target_metrics: metrics
                    .into_iter()
                    .map(|(key, value)| (key.to_owned(), value))
                    .collect(),
            }
        })
        .collect()
}

#[derive(Default)]
struct StatsAccumulator {
    exercise_type: ExerciseType,
    count: usize,
    completed: usize,
    total_volume: f64,
    form_total: f64,
}

/// Recommendation engine with an optional exercise catalog
pub struct RecommendationEngine<L: ExerciseTypeLookup = NoCatalog> {
    catalog: L,
    config: RecommendationEngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine without a catalog using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(NoCatalog)
    }
}

impl<L: ExerciseTypeLookup> RecommendationEngine<L> {
    /// Create an engine backed by an exercise catalog
    #[must_use]
    pub fn with_catalog(catalog: L) -> Self {
        Self {
            catalog,
            config: IntelligenceConfig::global().recommendation_engine.clone(),
        }
    }

    /// Create with explicit configuration
    #[must_use]
    pub const fn with_config(catalog: L, config: RecommendationEngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Analyze exercise preferences over completed workouts
    ///
    /// # Errors
    ///
    /// Returns an error if any log fails validation
    pub fn analyze_preferences(&self, logs: &[ProgressLogEntry]) -> AppResult<ClientPreferences> {
        self.preferences(logs).map(|(preferences, _)| preferences)
    }

    /// Preferences plus the unrounded consistency score used for thresholds
    fn preferences(&self, logs: &[ProgressLogEntry]) -> AppResult<(ClientPreferences, f64)> {
        validate_logs(logs)?;

        let mut order: Vec<String> = Vec::new();
        let mut stats: HashMap<String, StatsAccumulator> = HashMap::new();
        let mut workout_days = BTreeSet::new();

        for log in logs.iter().filter(|log| log.workout_completed) {
            workout_days.insert(log.date.date_naive());
            for sample in &log.exercises {
                let entry = stats.entry(sample.name.clone()).or_insert_with(|| {
                    order.push(sample.name.clone());
                    StatsAccumulator {
                        exercise_type: sample
                            .exercise_type
                            .or_else(|| self.catalog.exercise_type(&sample.name))
                            .unwrap_or_default(),
                        ..StatsAccumulator::default()
                    }
                });
                entry.count += 1;
                entry.completed += usize::from(sample.is_completed());
                entry.total_volume += f64::from(sample.sets)
                    * f64::from(sample.rep_value())
                    * sample.weight.unwrap_or(1.0);
                entry.form_total += sample
                    .form_rating
                    .map_or(self.config.default_form_rating, f64::from);
            }
        }

        if order.is_empty() && workout_days.is_empty() {
            return Ok((ClientPreferences::default(), 0.0));
        }

        let mut ranked: Vec<ExercisePerformance> = order
            .into_iter()
            .filter_map(|name| {
                let acc = stats.remove(&name)?;
                let count = acc.count as f64;
                Some(ExercisePerformance {
                    name,
                    stats: ExerciseStats {
                        exercise_type: acc.exercise_type,
                        count: acc.count,
                        total_volume: acc.total_volume,
                        completion_rate: acc.completed as f64 / count * 100.0,
                        performance_score: acc.form_total / count,
                    },
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.stats
                .completion_rate
                .total_cmp(&a.stats.completion_rate)
                .then_with(|| b.stats.performance_score.total_cmp(&a.stats.performance_score))
        });

        let highlighted = self.config.highlighted_exercise_count;
        let best_performance: Vec<_> = ranked.iter().take(highlighted).cloned().collect();
        let areas_of_improvement = ranked[ranked.len().saturating_sub(highlighted)..].to_vec();

        let mut preferred_types = Vec::new();
        for perf in &best_performance {
            if !preferred_types.contains(&perf.stats.exercise_type) {
                preferred_types.push(perf.stats.exercise_type);
            }
        }
        if preferred_types.is_empty() {
            preferred_types.push(ExerciseType::Strength);
        }

        let consistency = match (workout_days.first(), workout_days.last()) {
            (Some(first), Some(last)) => {
                let span = (*last - *first).num_days() + 1;
                clamp_score(workout_days.len() as f64 / span as f64 * 100.0)
            }
            _ => 0.0,
        };
        let consistency_score = round_to_tenth(consistency);

        debug!(
            exercises = ranked.len(),
            workout_days = workout_days.len(),
            consistency_score,
            "Analyzed client preferences"
        );
        Ok((
            ClientPreferences {
                preferred_types,
                best_performance,
                areas_of_improvement,
                consistency_score,
            },
            consistency,
        ))
    }

    /// Build a workout recommendation for the client
    ///
    /// # Errors
    ///
    /// Returns an error if any log or goal fails validation
    pub fn recommend(
        &self,
        profile: &ClientProfile,
        logs: &[ProgressLogEntry],
        goals: &[GoalRecord],
    ) -> AppResult<WorkoutRecommendation> {
        for goal in goals {
            goal.validate()?;
        }
        let (preferences, consistency) = self.preferences(logs)?;

        let primary_goal = resolve_primary_goal(profile, goals);
        let focus = goal_focus(primary_goal).unwrap_or(STRENGTH_FOCUS);

        let suggested_exercises = preferences
            .best_performance
            .iter()
            .filter(|perf| focus.includes(perf.stats.exercise_type))
            .map(|perf| SuggestedExercise {
                name: perf.name.clone(),
                exercise_type: perf.stats.exercise_type,
                reason: "Strong performance history".to_owned(),
            })
            .collect();

        let mut schedule_adjustments = Vec::new();
        // Thresholds compare the unrounded score
        if consistency < self.config.low_consistency_threshold {
            schedule_adjustments.push(ScheduleAdjustment {
                kind: ScheduleAdjustmentKind::Frequency,
                suggestion: "Start with 3 workouts per week to build consistency".to_owned(),
                priority: RecommendationPriority::High,
            });
        } else if consistency > self.config.high_consistency_threshold {
            schedule_adjustments.push(ScheduleAdjustment {
                kind: ScheduleAdjustmentKind::Intensity,
                suggestion: "Consider increasing workout frequency or intensity".to_owned(),
                priority: RecommendationPriority::Medium,
            });
        }

        debug!(
            goal = %primary_goal,
            level = %profile.fitness_level,
            consistency = preferences.consistency_score,
            "Generated workout recommendation"
        );
        Ok(WorkoutRecommendation {
            primary_goal,
            fitness_level: profile.fitness_level,
            workout_focus: focus.into(),
            suggested_exercises,
            schedule_adjustments,
            progression_path: progression_path(primary_goal),
        })
    }
}

const STRENGTH_FOCUS: GoalFocus = GoalFocus {
    primary: &[ExerciseType::Strength, ExerciseType::Power],
    secondary: &[ExerciseType::Hypertrophy],
    intensity: "high",
    rest: "90-120 seconds",
};

fn resolve_primary_goal(profile: &ClientProfile, goals: &[GoalRecord]) -> GoalType {
    if goal_focus(profile.goal).is_some() {
        return profile.goal;
    }
    goals
        .iter()
        .filter(|goal| goal.is_active())
        .filter_map(|goal| goal.goal_type)
        .find(|goal_type| goal_focus(*goal_type).is_some())
        .unwrap_or(GoalType::Strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use coach_core::models::{ExerciseSample, GoalStatus};

    fn day(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap() + Duration::days(offset)
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::with_config(NoCatalog, RecommendationEngineConfig::default())
    }

    fn goal(goal_type: GoalType, status: GoalStatus) -> GoalRecord {
        GoalRecord {
            title: format!("{goal_type} goal"),
            goal_type: Some(goal_type),
            target_value: 10.0,
            current_value: 0.0,
            status,
        }
    }

    #[test]
    fn test_empty_logs_default_preferences() {
        let prefs = engine().analyze_preferences(&[]).unwrap();
        assert_eq!(prefs.preferred_types, vec![ExerciseType::Strength]);
        assert!(prefs.best_performance.is_empty());
        assert!(prefs.consistency_score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_incomplete_workouts_ignored() {
        let logs = vec![ProgressLogEntry::new(day(0), false)
            .with_exercise(ExerciseSample::new("Row", 3, 10))];
        let prefs = engine().analyze_preferences(&logs).unwrap();
        assert!(prefs.best_performance.is_empty());
    }

    #[test]
    fn test_ranking_by_completion_then_form() {
        let logs = vec![
            ProgressLogEntry::new(day(0), true)
                .with_exercise(ExerciseSample::new("Row", 3, 10).with_form_rating(6))
                .with_exercise(ExerciseSample::new("Squat", 3, 8).with_form_rating(9))
                .with_exercise(
                    ExerciseSample::new("Lunge", 3, 10)
                        .with_form_rating(10)
                        .with_completed(false),
                ),
            ProgressLogEntry::new(day(1), true)
                .with_exercise(ExerciseSample::new("Plank", 3, 1)),
        ];
        let prefs = engine().analyze_preferences(&logs).unwrap();
        let names: Vec<_> = prefs.best_performance.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Squat", "Plank", "Row"]);
        let worst: Vec<_> = prefs
            .areas_of_improvement
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(worst, vec!["Plank", "Row", "Lunge"]);
        assert!((prefs.consistency_score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_volume_treats_bodyweight_as_one() {
        let logs = vec![ProgressLogEntry::new(day(0), true)
            .with_exercise(ExerciseSample::new("Squat", 3, 10).with_weight(20.0))
            .with_exercise(ExerciseSample::new("Push-ups", 2, 15))];
        let prefs = engine().analyze_preferences(&logs).unwrap();
        let squat = prefs.best_performance.iter().find(|p| p.name == "Squat").unwrap();
        let push = prefs.best_performance.iter().find(|p| p.name == "Push-ups").unwrap();
        assert!((squat.stats.total_volume - 600.0).abs() < f64::EPSILON);
        assert!((push.stats.total_volume - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_consistency_over_calendar_span() {
        let logs: Vec<_> = [0, 2, 4, 9]
            .iter()
            .map(|d| ProgressLogEntry::new(day(*d), true))
            .collect();
        let prefs = engine().analyze_preferences(&logs).unwrap();
        assert!((prefs.consistency_score - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_supplies_missing_types() {
        let catalog: HashMap<String, ExerciseType> =
            HashMap::from([("Rowing".to_owned(), ExerciseType::Cardio)]);
        let engine = RecommendationEngine::with_config(catalog, RecommendationEngineConfig::default());
        let logs = vec![ProgressLogEntry::new(day(0), true)
            .with_exercise(ExerciseSample::new("Rowing", 1, 20))];
        let prefs = engine.analyze_preferences(&logs).unwrap();
        assert_eq!(prefs.preferred_types, vec![ExerciseType::Cardio]);
    }

    #[test]
    fn test_weight_loss_focus_filters_suggestions() {
        let logs = vec![ProgressLogEntry::new(day(0), true)
            .with_exercise(ExerciseSample::new("Sprints", 6, 1).with_type(ExerciseType::Hiit))
            .with_exercise(ExerciseSample::new("Yoga", 1, 1).with_type(ExerciseType::Flexibility))];
        let profile = ClientProfile::new(FitnessLevel::Beginner, GoalType::WeightLoss);
        let rec = engine().recommend(&profile, &logs, &[]).unwrap();
        assert_eq!(rec.workout_focus.intensity_range, "moderate-high");
        assert_eq!(rec.suggested_exercises.len(), 1);
        assert_eq!(rec.suggested_exercises[0].name, "Sprints");
        assert_eq!(rec.schedule_adjustments[0].kind, ScheduleAdjustmentKind::Intensity);
    }

    #[test]
    fn test_low_consistency_asks_for_three_sessions() {
        let profile = ClientProfile::new(FitnessLevel::Beginner, GoalType::Strength);
        let rec = engine().recommend(&profile, &[], &[]).unwrap();
        assert_eq!(rec.schedule_adjustments.len(), 1);
        assert_eq!(rec.schedule_adjustments[0].priority, RecommendationPriority::High);
        assert_eq!(rec.progression_path.len(), 3);
    }

    #[test]
    fn test_consistency_just_below_threshold_is_low_despite_rounding() {
        // 241 trained days over a 402 day span is 59.95%, reported as 60.0
        let logs: Vec<_> = (0..240)
            .chain([401])
            .map(|d| ProgressLogEntry::new(day(d), true))
            .collect();
        let profile = ClientProfile::new(FitnessLevel::Beginner, GoalType::Strength);
        let rec = engine().recommend(&profile, &logs, &[]).unwrap();
        let prefs = engine().analyze_preferences(&logs).unwrap();
        assert!((prefs.consistency_score - 60.0).abs() < f64::EPSILON);
        assert_eq!(rec.schedule_adjustments.len(), 1);
        assert_eq!(rec.schedule_adjustments[0].kind, ScheduleAdjustmentKind::Frequency);
        assert_eq!(rec.schedule_adjustments[0].priority, RecommendationPriority::High);
    }

    #[test]
    fn test_unknown_profile_goal_uses_active_goal() {
        let profile = ClientProfile::new(FitnessLevel::Advanced, GoalType::Flexibility);
        let goals = vec![
            goal(GoalType::WeightLoss, GoalStatus::Completed),
            goal(GoalType::Consistency, GoalStatus::InProgress),
            goal(GoalType::MuscleGain, GoalStatus::InProgress),
        ];
        let rec = engine().recommend(&profile, &[], &goals).unwrap();
        assert_eq!(rec.primary_goal, GoalType::MuscleGain);

        let rec = engine().recommend(&profile, &[], &[]).unwrap();
        assert_eq!(rec.primary_goal, GoalType::Strength);
        assert_eq!(rec.workout_focus.rest_periods, "90-120 seconds");
    }

    #[test]
    fn test_progression_targets_scale_per_milestone() {
        let path = progression_path(GoalType::WeightLoss);
        let durations: Vec<_> = path
            .iter()
            .map(|m| m.target_metrics["cardio_duration"].as_str())
            .collect();
        assert_eq!(durations, vec!["20 minutes", "30 minutes", "40 minutes"]);
        assert_eq!(path[2].timeframe, "2 months");

        let gain = progression_path(GoalType::MuscleGain);
        assert_eq!(gain[1].target_metrics["weight_increase"], "7.5%");
        assert_eq!(
            progression_path(GoalType::Other),
            progression_path(GoalType::Strength)
        );
    }
}
