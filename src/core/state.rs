//! Round progress and the read-only view handed to opponents and UIs.
//!
//! ## GameProgress
//!
//! Mutable bookkeeping for one round:
//! - Running total, whose turn it is, lifecycle phase, winner
//! - The computer's last move and the round's move history
//!
//! ## GameView
//!
//! A copyable snapshot of config plus progress. Opponent policies read it;
//! presentation layers can poll or serialize it.

use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::GameConfig;
use super::player::{Side, Turn};

/// Lifecycle stage of one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first-player choice.
    #[default]
    ChoosingFirstPlayer,
    /// Moves are being made.
    Playing,
    /// Someone reached the goal.
    GameOver,
}

impl Phase {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::ChoosingFirstPlayer => "choosing_first_player",
            Phase::Playing => "playing",
            Phase::GameOver => "game_over",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable progress of one round.
///
/// `winner` is set iff `phase` is `GameOver`. Only the state machine mutates
/// this; callers see it through `RaceGame::progress`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    position: u32,
    turn: Turn,
    phase: Phase,
    winner: Option<Side>,
    last_bot_move: Option<u32>,
    history: Vec<MoveRecord>,
}

impl GameProgress {
    /// Fresh progress: position 0, choosing the first player.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Running total.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Whose move is next.
    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Lifecycle stage.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winner, once the round is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// The computer's most recent step this round.
    #[must_use]
    pub fn last_bot_move(&self) -> Option<u32> {
        self.last_bot_move
    }

    /// Every accepted move this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Enter the playing phase with `side` to move.
    pub(crate) fn start(&mut self, side: Side) {
        self.phase = Phase::Playing;
        self.turn = side.into();
    }

    /// Hand the turn to `side`.
    pub(crate) fn pass_turn(&mut self, side: Side) {
        self.turn = side.into();
    }

    /// Add `step` for `side` and return the new position.
    ///
    /// Callers only move while `position < goal` with `step <= max_step`, and
    /// `GameConfig` guarantees `goal + max_step` fits in a `u32`.
    pub(crate) fn advance(&mut self, side: Side, step: u32) -> u32 {
        self.position += step;
        if side == Side::Computer {
            self.last_bot_move = Some(step);
        }
        self.history.push(MoveRecord::new(side, step, self.position));
        self.position
    }

    /// End the round.
    pub(crate) fn finish(&mut self, winner: Side) {
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
    }
}

/// Read-only snapshot of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Target sum.
    pub goal: u32,
    /// Largest legal single move.
    pub max_step: u32,
    /// Running total.
    pub position: u32,
    /// Whose move is next.
    pub turn: Turn,
    /// Lifecycle stage.
    pub phase: Phase,
    /// Winner, set only in `GameOver`.
    pub winner: Option<Side>,
    /// The computer's most recent step this round.
    pub last_bot_move: Option<u32>,
}

impl GameView {
    /// Build a view from config and progress.
    #[must_use]
    pub fn new(config: &GameConfig, progress: &GameProgress) -> Self {
        Self {
            goal: config.goal(),
            max_step: config.max_step(),
            position: progress.position(),
            turn: progress.turn(),
            phase: progress.phase(),
            winner: progress.winner(),
            last_bot_move: progress.last_bot_move(),
        }
    }

    /// Distance still to cover, zero once the goal is reached.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.goal.saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress() {
        let progress = GameProgress::new();
        assert_eq!(progress.position(), 0);
        assert_eq!(progress.turn(), Turn::Undetermined);
        assert_eq!(progress.phase(), Phase::ChoosingFirstPlayer);
        assert_eq!(progress.winner(), None);
        assert!(progress.history().is_empty());
    }

    #[test]
    fn test_advance_records_moves() {
        let mut progress = GameProgress::new();
        progress.start(Side::Player);

        assert_eq!(progress.advance(Side::Player, 3), 3);
        assert_eq!(progress.last_bot_move(), None);

        assert_eq!(progress.advance(Side::Computer, 2), 5);
        assert_eq!(progress.last_bot_move(), Some(2));

        assert_eq!(
            progress.history(),
            &[
                MoveRecord::new(Side::Player, 3, 3),
                MoveRecord::new(Side::Computer, 2, 5),
            ]
        );
    }

    #[test]
    fn test_finish_sets_winner() {
        let mut progress = GameProgress::new();
        progress.start(Side::Computer);
        progress.finish(Side::Computer);

        assert_eq!(progress.phase(), Phase::GameOver);
        assert_eq!(progress.winner(), Some(Side::Computer));
        assert_eq!(progress.turn(), Turn::Computer);
    }

    #[test]
    fn test_view_remaining() {
        let config = GameConfig::new(40, 5).unwrap();
        let mut progress = GameProgress::new();
        progress.start(Side::Player);
        progress.advance(Side::Player, 5);

        let view = GameView::new(&config, &progress);
        assert_eq!(view.remaining(), 35);
        assert_eq!(view.phase, Phase::Playing);
    }

    #[test]
    fn test_view_serde() {
        let config = GameConfig::new(40, 5).unwrap();
        let view = GameView::new(&config, &GameProgress::new());

        let json = serde_json::to_string(&view).unwrap();
        let deserialized: GameView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
