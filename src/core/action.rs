//! Move records for the current round.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// A single accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub side: Side,
    /// Amount added to the running total.
    pub step: u32,
    /// Running total after the move.
    pub position_after: u32,
}

impl MoveRecord {
    /// Create a new record.
    #[must_use]
    pub const fn new(side: Side, step: u32, position_after: u32) -> Self {
        Self {
            side,
            step,
            position_after,
        }
    }

    /// Running total before the move.
    #[must_use]
    pub const fn position_before(&self) -> u32 {
        self.position_after - self.step
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} +{} -> {}", self.side, self.step, self.position_after)
    }
}
