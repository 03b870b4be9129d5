//! Arithmetic helpers for the race.
//!
//! Free functions over plain integers; the state machine and the opponent
//! both call them.
//!
//! - A move adds between 1 and `max_step` to the running total
//! - The side whose move brings the total to or past the goal wins

use std::ops::RangeInclusive;

use crate::core::GameError;

/// Legal step sizes for a round.
#[must_use]
pub fn legal_steps(max_step: u32) -> RangeInclusive<u32> {
    1..=max_step
}

/// Reject steps outside `1..=max_step`.
pub fn validate_step(step: u32, max_step: u32) -> Result<(), GameError> {
    if legal_steps(max_step).contains(&step) {
        Ok(())
    } else {
        Err(GameError::InvalidStep { step, max_step })
    }
}

/// Has the running total reached the goal?
#[must_use]
pub const fn reached_goal(position: u32, goal: u32) -> bool {
    position >= goal
}

/// `(goal - position) mod (max_step + 1)`.
///
/// Always in `0..=max_step`. A position at or past the goal has gap zero and
/// therefore class zero. The modulus is taken in `u64` so `max_step + 1`
/// cannot wrap.
#[must_use]
pub const fn remainder_class(position: u32, goal: u32, max_step: u32) -> u32 {
    let gap = goal.saturating_sub(position) as u64;
    // gap <= u32::MAX, so the remainder fits back into u32.
    (gap % (max_step as u64 + 1)) as u32
}
