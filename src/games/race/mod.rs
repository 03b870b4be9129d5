//! Race to the goal, player against computer.
//!
//! - A round draws a goal (default 40-70) and a maximum step (default 3-7)
//! - The player chooses who moves first
//! - Each move adds 1..=max_step to a shared running total
//! - Whoever brings the total to or past the goal wins

mod game;

pub use game::{RaceGame, RaceGameBuilder};
