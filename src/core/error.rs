//! Error types for game transitions and configuration.
//!
//! Every error here is a usage error by the caller (typically a UI letting a
//! disabled control fire). A rejected call leaves the game untouched.

use thiserror::Error;

/// Rejected state-machine transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A move was attempted when it is not the player's turn, or outside the
    /// playing phase.
    #[error("it is not the player's turn")]
    InvalidTurn,

    /// The step lies outside `1..=max_step`.
    #[error("step {step} is outside the allowed range 1..={max_step}")]
    InvalidStep {
        /// Rejected step.
        step: u32,
        /// Largest legal step for this round.
        max_step: u32,
    },

    /// The first player has already been chosen this round.
    #[error("the first player has already been chosen")]
    FirstPlayerAlreadyChosen,
}

/// Invalid game configuration or generation bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Goal must be positive.
    #[error("goal must be at least 1")]
    ZeroGoal,

    /// Maximum step must be positive.
    #[error("max step must be at least 1")]
    ZeroMaxStep,

    /// `goal + max_step` does not fit in a `u32`, so the running total could
    /// overflow on the final move.
    #[error("goal {goal} plus max step {max_step} overflows u32")]
    TotalOverflow {
        /// Rejected goal.
        goal: u32,
        /// Rejected maximum step.
        max_step: u32,
    },

    /// A generation range contains no values.
    #[error("{name} range {start}..={end} is empty")]
    EmptyRange {
        /// Which range (`goal` or `max_step`).
        name: &'static str,
        start: u32,
        end: u32,
    },

    /// A generation range admits zero.
    #[error("{name} range must start at 1 or above")]
    ZeroLowerBound {
        /// Which range (`goal` or `max_step`).
        name: &'static str,
    },
}
