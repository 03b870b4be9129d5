//! Game configuration types.
//!
//! A round is defined by two numbers:
//! - `goal`: the target sum; whoever brings the running total to or past it wins
//! - `max_step`: the largest amount a single move may add
//!
//! `ConfigBounds` holds the ranges these are drawn from at every reset.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;

/// Default range the goal is drawn from.
pub const DEFAULT_GOAL_RANGE: RangeInclusive<u32> = 40..=70;

/// Default range the maximum step is drawn from.
pub const DEFAULT_MAX_STEP_RANGE: RangeInclusive<u32> = 3..=7;

/// Immutable configuration of one round.
///
/// Deserialization goes through `GameConfig::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    goal: u32,
    max_step: u32,
}

#[derive(Deserialize)]
struct RawGameConfig {
    goal: u32,
    max_step: u32,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.goal, raw.max_step)
    }
}

impl GameConfig {
    /// Create a config from explicit values.
    ///
    /// `goal + max_step` must fit in a `u32`; the running total never exceeds
    /// `goal - 1 + max_step`.
    pub fn new(goal: u32, max_step: u32) -> Result<Self, ConfigError> {
        if goal == 0 {
            return Err(ConfigError::ZeroGoal);
        }
        if max_step == 0 {
            return Err(ConfigError::ZeroMaxStep);
        }
        check_total(goal, max_step)?;
        Ok(Self { goal, max_step })
    }

    /// Draw a fresh config from `bounds`.
    pub fn generate(bounds: &ConfigBounds, rng: &mut GameRng) -> Self {
        Self {
            goal: rng.gen_range_inclusive(bounds.goal.clone()),
            max_step: rng.gen_range_inclusive(bounds.max_step.clone()),
        }
    }

    /// Target sum.
    #[must_use]
    pub const fn goal(&self) -> u32 {
        self.goal
    }

    /// Largest legal single move.
    #[must_use]
    pub const fn max_step(&self) -> u32 {
        self.max_step
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "goal {} (steps 1..={})", self.goal, self.max_step)
    }
}

/// Ranges the goal and maximum step are drawn from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigBounds {
    /// Inclusive range for the goal.
    pub goal: RangeInclusive<u32>,

    /// Inclusive range for the maximum step.
    pub max_step: RangeInclusive<u32>,
}

impl Default for ConfigBounds {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL_RANGE,
            max_step: DEFAULT_MAX_STEP_RANGE,
        }
    }
}

impl ConfigBounds {
    /// Set the goal range.
    pub fn with_goal_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.goal = range;
        self
    }

    /// Set the maximum step range.
    pub fn with_max_step_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.max_step = range;
        self
    }

    /// Check both ranges are non-empty, exclude zero, and that the largest
    /// goal plus the largest step fits in a `u32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("goal", &self.goal)?;
        check_range("max_step", &self.max_step)?;
        check_total(*self.goal.end(), *self.max_step.end())
    }
}

fn check_total(goal: u32, max_step: u32) -> Result<(), ConfigError> {
    match goal.checked_add(max_step) {
        Some(_) => Ok(()),
        None => Err(ConfigError::TotalOverflow { goal, max_step }),
    }
}

fn check_range(name: &'static str, range: &RangeInclusive<u32>) -> Result<(), ConfigError> {
    if range.is_empty() {
        return Err(ConfigError::EmptyRange {
            name,
            start: *range.start(),
            end: *range.end(),
        });
    }
    if *range.start() == 0 {
        return Err(ConfigError::ZeroLowerBound { name });
    }
    Ok(())
}
