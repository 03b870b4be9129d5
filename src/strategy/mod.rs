//! Opponent strategy.
//!
//! `compute_move` is the stateless move rule; `OpponentPolicy` is the seam the
//! state machine calls through, so tests and frontends can swap in a weaker
//! opponent.

pub mod policy;

pub use policy::{compute_move, winning_move, OpponentPolicy, OptimalOpponent, UniformOpponent};
