//! Core game types: sides, configuration, progress, RNG, errors.
//!
//! Everything here is plain data. The state machine that drives it lives in
//! `games::race`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::MoveRecord;
pub use config::{ConfigBounds, GameConfig, DEFAULT_GOAL_RANGE, DEFAULT_MAX_STEP_RANGE};
pub use error::{ConfigError, GameError};
pub use player::{Side, Turn};
pub use rng::GameRng;
pub use state::{GameProgress, GameView, Phase};
