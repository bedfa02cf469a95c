// ABOUTME: Shared time-series helpers for windowing, weekly bucketing and trend labels
// ABOUTME: Also hosts the percentage and rounding helpers every analyzer reports with
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Time-series utilities
//!
//! Trend classification uses a strict monotonic rule over the tail of the
//! sequence: a single plateau or dip yields [`TrendResult::Fluctuating`].

use chrono::{DateTime, Datelike, Duration, Utc};
use coach_core::constants::scores::{MAX_SCORE, MIN_SCORE};
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{ProgressLogEntry, ProgressionPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::TrendResult;

/// Anything carrying a timestamp
pub trait Dated {
    /// Timestamp of the record
    fn date(&self) -> DateTime<Utc>;
}

impl Dated for ProgressLogEntry {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Dated for ProgressionPoint {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl<T: Dated> Dated for &T {
    fn date(&self) -> DateTime<Utc> {
        (*self).date()
    }
}

/// ISO week bucket; ordering is chronological
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    /// ISO week-numbering year
    pub iso_year: i32,
    /// ISO week number (1-53)
    pub week: u32,
}

impl WeekKey {
    /// Bucket containing the given instant
    #[must_use]
    pub fn of(date: DateTime<Utc>) -> Self {
        let iso = date.iso_week();
        Self {
            iso_year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.week)
    }
}

/// Records dated on or after `now - duration`, in input order
///
/// # Errors
///
/// Returns an error if `duration` is negative
pub fn window_since<T: Dated>(
    records: &[T],
    now: DateTime<Utc>,
    duration: Duration,
) -> AppResult<Vec<&T>> {
    if duration < Duration::zero() {
        return Err(AppError::out_of_range(
            "duration",
            format!("Window duration must not be negative, got {duration}"),
        ));
    }
    // A cutoff before the representable range keeps everything
    Ok(match now.checked_sub_signed(duration) {
        Some(cutoff) => records.iter().filter(|r| r.date() >= cutoff).collect(),
        None => records.iter().collect(),
    })
}

/// `weeks` as a duration, saturating at the representable bounds
#[must_use]
pub fn saturating_weeks(weeks: i64) -> Duration {
    Duration::try_weeks(weeks).unwrap_or(if weeks < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

/// `days` as a duration, saturating at the representable bounds
#[must_use]
pub fn saturating_days(days: i64) -> Duration {
    Duration::try_days(days).unwrap_or(if days < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

/// Bucket records by ISO week, preserving input order inside each bucket
#[must_use]
pub fn group_by_week<T: Dated>(records: &[T]) -> BTreeMap<WeekKey, Vec<&T>> {
    let mut weeks: BTreeMap<WeekKey, Vec<&T>> = BTreeMap::new();
    for record in records {
        weeks.entry(WeekKey::of(record.date())).or_default().push(record);
    }
    weeks
}

/// Classify the direction of the last `window` values
///
/// Fewer than two values are `Neutral`; windows shorter than two are widened
/// to two.
#[must_use]
pub fn classify_trend(values: &[f64], window: usize) -> TrendResult {
    if values.len() < 2 {
        return TrendResult::Neutral;
    }
    let tail = &values[values.len().saturating_sub(window.max(2))..];
    if tail.windows(2).all(|pair| pair[0] < pair[1]) {
        TrendResult::Improving
    } else if tail.windows(2).all(|pair| pair[0] > pair[1]) {
        TrendResult::Declining
    } else {
        TrendResult::Fluctuating
    }
}

/// `part / total * 100`, zero when `total` is zero
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return MIN_SCORE;
    }
    clamp_score(part as f64 / total as f64 * MAX_SCORE)
}

/// Round to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp into the shared [0, 100] score range
#[must_use]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}
