// ABOUTME: Fixed pool of motivational messages with pluggable selection strategies
// ABOUTME: Round-robin for reproducible output, rand-backed selection for variety
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Motivational messages
//!
//! Message choice sits outside the deterministic contract of the engine.
//! Callers inject a [`MessageSelector`]; tests should assert pool membership.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Messages shown on training days
pub const MOTIVATION_MESSAGES: [&str; 4] = [
    "You're crushing it! Keep pushing!",
    "Every rep brings you closer to your goals!",
    "Stay strong, stay focused!",
    "You've got this! Make it count!",
];

/// Message shown on rest days
pub const REST_DAY_MESSAGE: &str = "Recovery is key to progress!";

/// Strategy for picking an index into a message pool
pub trait MessageSelector {
    /// Index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Cycles through the pool in order
#[derive(Debug, Clone, Default)]
pub struct RoundRobinSelector {
    next: usize,
}

impl RoundRobinSelector {
    /// Start at the given offset
    #[must_use]
    pub const fn starting_at(offset: usize) -> Self {
        Self { next: offset }
    }
}

impl MessageSelector for RoundRobinSelector {
    fn pick(&mut self, len: usize) -> usize {
        let index = self.next % len;
        self.next = index + 1;
        index
    }
}

/// Uniformly random selection from any `rand` source
#[derive(Debug, Clone)]
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap a random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<StdRng> {
    /// Selector seeded from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MessageSelector for RandomSelector<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Pick a training-day message
pub fn motivation_message(selector: &mut dyn MessageSelector) -> &'static str {
    MOTIVATION_MESSAGES[selector.pick(MOTIVATION_MESSAGES.len()) % MOTIVATION_MESSAGES.len()]
}

/// Message for a scheduled day
pub fn day_message(rest_day: bool, selector: &mut dyn MessageSelector) -> &'static str {
    if rest_day {
        REST_DAY_MESSAGE
    } else {
        motivation_message(selector)
    }
}
