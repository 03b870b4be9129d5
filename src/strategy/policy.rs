//! Opponent move selection.
//!
//! The race is a subtraction game with moves `1..=max_step`. The mover who
//! leaves a gap that is a multiple of `max_step + 1` can always answer the
//! other side's move `k` with `max_step + 1 - k`, so the forcing move is the
//! remainder class itself. When the class is zero no forcing move exists and
//! the opponent plays arbitrarily.

use tracing::trace;

use crate::core::{GameRng, GameView};
use crate::rules::{legal_steps, remainder_class};

/// The forcing move from `position`, if one exists.
#[must_use]
pub fn winning_move(position: u32, goal: u32, max_step: u32) -> Option<u32> {
    match remainder_class(position, goal, max_step) {
        0 => None,
        step => Some(step),
    }
}

/// Compute the computer's step.
///
/// Returns the remainder class when it is non-zero (no randomness consumed),
/// otherwise a uniform draw from `1..=max_step`. The result is always a legal
/// step for `max_step >= 1`.
///
/// Meant to be called with `position < goal`. Past the goal the gap saturates
/// to zero and the fallback draw is returned.
pub fn compute_move(position: u32, goal: u32, max_step: u32, rng: &mut GameRng) -> u32 {
    match winning_move(position, goal, max_step) {
        Some(step) => {
            trace!(position, goal, max_step, step, "forcing move");
            step
        }
        None => {
            let step = rng.gen_range_inclusive(legal_steps(max_step));
            trace!(position, goal, max_step, step, "no forcing move, random step");
            step
        }
    }
}

/// Policy the computer uses to pick its step.
pub trait OpponentPolicy {
    /// Choose a step in `1..=view.max_step`.
    fn choose_step(&self, view: &GameView, rng: &mut GameRng) -> u32;
}

/// Plays the forcing move whenever one exists, otherwise a random step.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimalOpponent;

impl OpponentPolicy for OptimalOpponent {
    fn choose_step(&self, view: &GameView, rng: &mut GameRng) -> u32 {
        compute_move(view.position, view.goal, view.max_step, rng)
    }
}

/// Uniform random opponent policy.
///
/// Ignores the position entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_step(&self, view: &GameView, rng: &mut GameRng) -> u32 {
        rng.gen_range_inclusive(legal_steps(view.max_step))
    }
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for &P {
    fn choose_step(&self, view: &GameView, rng: &mut GameRng) -> u32 {
        (**self).choose_step(view, rng)
    }
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose_step(&self, view: &GameView, rng: &mut GameRng) -> u32 {
        (**self).choose_step(view, rng)
    }
}
