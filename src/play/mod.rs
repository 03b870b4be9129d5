//! Automated play for exercising the engine and its opponent.
//!
//! ## Usage
//!
//! ```
//! use nim_race::games::race::RaceGame;
//! use nim_race::play::{SelfPlayConfig, SelfPlayStats, SelfPlayWorker};
//! use nim_race::strategy::OptimalOpponent;
//!
//! let mut game = RaceGame::new(42);
//! let mut worker = SelfPlayWorker::new(OptimalOpponent, SelfPlayConfig::default(), 7);
//!
//! let rounds = worker.play_rounds(&mut game, 10).unwrap();
//! let stats = SelfPlayStats::tally(&rounds);
//! assert_eq!(stats.rounds(), 10);
//! ```

pub mod self_play;

pub use self_play::{RoundSummary, SelfPlayConfig, SelfPlayStats, SelfPlayWorker};
