// ABOUTME: Integration tests for the coach-insights binary
// ABOUTME: Runs each subcommand against snapshot files written to a temp directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

const NOW: &str = "2024-08-15T12:00:00Z";

fn snapshot() -> Value {
    let logs: Vec<Value> = (0..6)
        .map(|i| {
            json!({
                "date": format!("2024-08-{:02}T07:30:00Z", 10 + i),
                "workout_completed": true,
                "exercises": [{
                    "name": "Squat",
                    "sets": 3,
                    "reps": 8 + i,
                    "weight": 60.0 + 2.5 * f64::from(i),
                    "form_rating": 4 + i,
                    "completed": true
                }],
                "metrics": {"intensity": 5.0 + f64::from(i), "volume": 100.0}
            })
        })
        .collect();

    json!({
        "profile": {
            "fitness_level": "beginner",
            "goal": "muscle_gain",
            "recent_logs": logs
        },
        "goals": [
            {"title": "Squat 80kg", "goal_type": "strength", "target_value": 80.0, "current_value": 72.5, "status": "in_progress"},
            {"title": "Six sessions", "target_value": 6.0, "current_value": 6.0, "status": "in_progress"}
        ],
        "candidates": [
            {"title": "Iron Legs", "category": "strength", "difficulty": 1},
            {"title": "Marathon Ready", "category": "endurance", "difficulty": 3}
        ]
    })
}

fn write_snapshot(dir: &TempDir, value: &Value) -> PathBuf {
    let path = dir.path().join("client.json");
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn run(args: &[&str], input: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coach-insights"))
        .args(args)
        .arg("--input")
        .arg(input)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch coach-insights")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_analyze_prints_full_report() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, &snapshot());

    let report = stdout_json(&run(&["analyze", "--now", NOW, "--seed", "3"], &input));

    assert_eq!(report["progress"]["completion"]["rate"], 100.0);
    assert_eq!(report["progress"]["completion"]["trend"], "stable");
    assert_eq!(report["progress"]["generated_at"], NOW);
    assert_eq!(report["recommendation"]["primary_goal"], "muscle_gain");
    assert_eq!(
        report["recommendation"]["suggested_exercises"][0]["name"],
        "Squat"
    );
    assert_eq!(
        report["recommendation"]["progression_path"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
    assert_eq!(report["goals"][1]["completed"], true);
    assert_eq!(report["points_awarded"], 100);
}

#[test]
fn test_analyze_with_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, &snapshot());

    let first = run(&["analyze", "--now", NOW, "--seed", "9"], &input);
    let second = run(&["analyze", "--now", NOW, "--seed", "9"], &input);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_adjust_increases_progressing_exercise() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, &snapshot());

    let adjustment = stdout_json(&run(&["adjust", "--exercise", "Squat"], &input));

    assert_eq!(adjustment["direction"], "increase");
    assert_eq!(adjustment["confidence"], 100.0);
    assert_eq!(adjustment["adjusted"]["name"], "Squat");
    assert_eq!(adjustment["adjusted"]["sets"], 4);
    assert_eq!(adjustment["adjusted"]["reps"], 15);
}

#[test]
fn test_score_ranks_goal_match_first() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, &snapshot());

    let ranked = stdout_json(&run(&["score", "--now", NOW], &input));
    let ranked = ranked.as_array().unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["title"], "Iron Legs");
    assert!(ranked[0]["reason"]
        .as_str()
        .unwrap()
        .starts_with("Aligns with your muscle gain goal"));
    assert!(ranked[0]["score"].as_f64().unwrap() >= ranked[1]["score"].as_f64().unwrap());
}

#[test]
fn test_invalid_record_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let mut value = snapshot();
    value["candidates"][0]["difficulty"] = json!(9);
    let input = write_snapshot(&dir, &value);

    let output = run(&["score", "--now", NOW], &input);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Difficulty"));
}

#[test]
fn test_missing_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let output = run(&["analyze"], &dir.path().join("absent.json"));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot read snapshot"));
}

#[test]
fn test_bad_reference_time_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, &snapshot());
    let output = run(&["score", "--now", "yesterday"], &input);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("RFC 3339"));
}
