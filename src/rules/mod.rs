//! Rules of the race-to-goal game.
//!
//! Shared by the state machine (step validation, goal test) and the
//! opponent strategy (remainder class). Nothing here holds state.

pub mod arith;

pub use arith::{legal_steps, reached_goal, remainder_class, validate_step};
