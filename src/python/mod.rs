//! Python bindings for the nim-race engine.
//!
//! Lets a Python frontend (pygame, a web view, a notebook) drive the game
//! through the same transitions as Rust callers.
//!
//! # Quick Start
//!
//! ```python
//! import nim_race
//!
//! game = nim_race.RaceGame(seed=42)
//! game.choose_first(True)
//!
//! while game.phase == "playing":
//!     game.apply_move(game.legal_steps()[-1])
//!
//! print(game.winner, game.history())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// nim_race: race-to-goal subtraction game against a Nim-style opponent.
#[pymodule]
fn nim_race(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMoveRecord>()?;
    m.add_class::<PyRaceGame>()?;

    Ok(())
}
