//! # nim-race
//!
//! A race-to-the-goal arithmetic game against a computer opponent.
//!
//! Each round draws a goal (40-70 by default) and a maximum step (3-7). The
//! player and the computer take turns adding `1..=max_step` to a shared
//! running total; whoever brings it to or past the goal wins. The computer
//! plays the classic subtraction-game strategy: leave a gap that is a multiple
//! of `max_step + 1`, and play randomly when that is impossible.
//!
//! ## Design Principles
//!
//! 1. **No presentation**: The engine knows nothing about windows, buttons or
//!    text. Frontends issue intents (`choose_first`, `apply_move`, `reset`)
//!    and poll observers.
//!
//! 2. **Seeded randomness**: All randomness flows from a `GameRng` seed, so a
//!    round can be replayed exactly.
//!
//! 3. **Atomic turns**: The computer answers inside the call that made the
//!    player's move.
//!
//! ## Modules
//!
//! - `core`: Sides, configuration, progress, RNG, errors
//! - `rules`: Step validation, goal test, remainder class
//! - `strategy`: Opponent move selection
//! - `games`: The `RaceGame` state machine
//! - `play`: Automated self-play rounds
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ```
//! use nim_race::{GameConfig, Phase, RaceGame};
//!
//! let mut game = RaceGame::builder()
//!     .config(GameConfig::new(50, 4).unwrap())
//!     .build(42)
//!     .unwrap();
//!
//! game.choose_first(true).unwrap();
//! game.apply_move(4).unwrap();
//!
//! // The computer answered: 4 + 1 leaves a gap of 45, a multiple of 5.
//! assert_eq!(game.position(), 5);
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

pub mod core;
pub mod rules;
pub mod strategy;
pub mod games;
pub mod play;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigBounds, ConfigError, GameConfig, GameError, GameProgress, GameRng, GameView, MoveRecord, Phase, Side,
    Turn,
};

pub use crate::rules::{legal_steps, reached_goal, remainder_class, validate_step};

pub use crate::strategy::{compute_move, winning_move, OpponentPolicy, OptimalOpponent, UniformOpponent};

pub use crate::games::race::{RaceGame, RaceGameBuilder};

pub use crate::play::{RoundSummary, SelfPlayConfig, SelfPlayStats, SelfPlayWorker};
