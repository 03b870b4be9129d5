//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ConfigError, GameConfig, GameError};
use crate::games::race::RaceGame;

use super::py_core::PyMoveRecord;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

impl From<ConfigError> for PyErr {
    fn from(err: ConfigError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for RaceGame.
///
/// The computer answers inside `apply_move`, so after every call the
/// getters already reflect its reply.
#[pyclass(name = "RaceGame")]
pub struct PyRaceGame {
    game: RaceGame,
}

#[pymethods]
impl PyRaceGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - goal, max_step: pin every round to this config (both or neither)
    #[new]
    #[pyo3(signature = (seed = 42, goal = None, max_step = None))]
    fn new(seed: u64, goal: Option<u32>, max_step: Option<u32>) -> PyResult<Self> {
        let builder = RaceGame::builder();
        let builder = match (goal, max_step) {
            (None, None) => builder,
            (Some(goal), Some(max_step)) => builder.config(GameConfig::new(goal, max_step)?),
            _ => return Err(PyValueError::new_err("goal and max_step must be given together")),
        };
        Ok(Self {
            game: builder.build(seed)?,
        })
    }

    /// Choose who moves first. The computer moves at once if it goes first.
    fn choose_first(&mut self, is_player_first: bool) -> PyResult<()> {
        Ok(self.game.choose_first(is_player_first)?)
    }

    /// Apply the player's step and the computer's answer.
    fn apply_move(&mut self, step: u32) -> PyResult<()> {
        Ok(self.game.apply_move(step)?)
    }

    /// Start a new round.
    fn reset(&mut self) {
        self.game.reset();
    }

    /// Steps the player may choose from.
    fn legal_steps(&self) -> Vec<u32> {
        self.game.legal_steps().collect()
    }

    /// Moves made this round.
    fn history(&self) -> Vec<PyMoveRecord> {
        self.game.history().iter().copied().map(PyMoveRecord).collect()
    }

    #[getter]
    fn phase(&self) -> &'static str {
        self.game.phase().as_str()
    }

    #[getter]
    fn turn(&self) -> &'static str {
        self.game.turn().as_str()
    }

    #[getter]
    fn position(&self) -> u32 {
        self.game.position()
    }

    #[getter]
    fn goal(&self) -> u32 {
        self.game.goal()
    }

    #[getter]
    fn max_step(&self) -> u32 {
        self.game.max_step()
    }

    /// "player", "computer" or None while the round is running.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.game.winner().map(|side| side.as_str())
    }

    #[getter]
    fn last_bot_move(&self) -> Option<u32> {
        self.game.last_bot_move()
    }

    #[getter]
    fn remaining(&self) -> u32 {
        self.game.remaining()
    }

    fn __repr__(&self) -> String {
        format!(
            "RaceGame(position={}, goal={}, max_step={}, phase={})",
            self.game.position(),
            self.game.goal(),
            self.game.max_step(),
            self.game.phase()
        )
    }
}
