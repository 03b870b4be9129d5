//! Automated rounds with a policy standing in for the human player.
//!
//! Drives `RaceGame` only through its public transitions, the same way a
//! frontend would.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameConfig, GameError, GameRng, MoveRecord, Phase, Side};
use crate::games::race::RaceGame;
use crate::strategy::OpponentPolicy;

/// Configuration for self-play.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Whether the automated player moves first.
    pub player_first: bool,

    /// Maximum player moves per round before giving up.
    /// Every move adds at least 1, so `goal` moves always suffice.
    pub max_moves: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            player_first: true,
            max_moves: 500,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set who moves first.
    pub fn with_player_first(mut self, player_first: bool) -> Self {
        self.player_first = player_first;
        self
    }

    /// Set maximum player moves per round.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }
}

/// Outcome of one automated round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Config the round was played with.
    pub config: GameConfig,
    /// Whether the scripted player opened.
    pub player_first: bool,
    /// `None` if `max_moves` ran out first.
    pub winner: Option<Side>,
    /// Every move of the round, oldest first.
    pub moves: Vec<MoveRecord>,
}

/// Win counts over many rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayStats {
    /// Rounds the scripted player won.
    pub player_wins: usize,
    /// Rounds the computer won.
    pub computer_wins: usize,
    /// Rounds cut off by `max_moves`.
    pub unfinished: usize,
}

impl SelfPlayStats {
    /// Count outcomes.
    pub fn tally(rounds: &[RoundSummary]) -> Self {
        rounds.iter().fold(Self::default(), |mut stats, round| {
            match round.winner {
                Some(Side::Player) => stats.player_wins += 1,
                Some(Side::Computer) => stats.computer_wins += 1,
                None => stats.unfinished += 1,
            }
            stats
        })
    }

    /// Total rounds counted.
    pub fn rounds(&self) -> usize {
        self.player_wins + self.computer_wins + self.unfinished
    }
}

/// Plays rounds against a `RaceGame` with `player` choosing the player's steps.
pub struct SelfPlayWorker<P: OpponentPolicy> {
    player: P,
    config: SelfPlayConfig,
    rng: GameRng,
}

impl<P: OpponentPolicy> SelfPlayWorker<P> {
    /// Create a new self-play worker.
    pub fn new(player: P, config: SelfPlayConfig, seed: u64) -> Self {
        Self {
            player,
            config,
            rng: GameRng::new(seed).for_context("player"),
        }
    }

    /// Get the self-play config.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play the current round to completion.
    ///
    /// A round already past the first-player choice is reset first.
    pub fn play_round<O: OpponentPolicy>(&mut self, game: &mut RaceGame<O>) -> Result<RoundSummary, GameError> {
        if game.phase() != Phase::ChoosingFirstPlayer {
            game.reset();
        }
        game.choose_first(self.config.player_first)?;

        let mut moves = 0;
        while game.phase() == Phase::Playing && moves < self.config.max_moves {
            let step = self.player.choose_step(&game.view(), &mut self.rng);
            game.apply_move(step)?;
            moves += 1;
        }

        debug!(goal = game.goal(), max_step = game.max_step(), winner = ?game.winner(), moves, "self-play round done");

        Ok(RoundSummary {
            config: *game.config(),
            player_first: self.config.player_first,
            winner: game.winner(),
            moves: game.history().to_vec(),
        })
    }

    /// Play `count` rounds, resetting between them.
    pub fn play_rounds<O: OpponentPolicy>(
        &mut self,
        game: &mut RaceGame<O>,
        count: usize,
    ) -> Result<Vec<RoundSummary>, GameError> {
        (0..count).map(|_| self.play_round(&mut *game)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{OptimalOpponent, UniformOpponent};

    #[test]
    fn test_config_builder() {
        let config = SelfPlayConfig::new().with_player_first(false).with_max_moves(10);
        assert!(!config.player_first);
        assert_eq!(config.max_moves, 10);
    }

    #[test]
    fn test_round_completes() {
        let mut game = RaceGame::new(42);
        let mut worker = SelfPlayWorker::new(UniformOpponent, SelfPlayConfig::default(), 1);

        let summary = worker.play_round(&mut game).unwrap();

        assert!(summary.winner.is_some());
        let last = summary.moves.last().unwrap();
        assert_eq!(Some(last.side), summary.winner);
        assert!(last.position_after >= summary.config.goal());
    }

    #[test]
    fn test_move_limit_leaves_round_unfinished() {
        let mut game = RaceGame::builder()
            .config(GameConfig::new(70, 3).unwrap())
            .build(42)
            .unwrap();
        let config = SelfPlayConfig::default().with_max_moves(1);
        let mut worker = SelfPlayWorker::new(UniformOpponent, config, 1);

        let summary = worker.play_round(&mut game).unwrap();
        assert_eq!(summary.winner, None);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_tally() {
        let mut game = RaceGame::new(5);
        let mut worker = SelfPlayWorker::new(OptimalOpponent, SelfPlayConfig::default(), 5);

        let rounds = worker.play_rounds(&mut game, 20).unwrap();
        let stats = SelfPlayStats::tally(&rounds);

        assert_eq!(stats.rounds(), 20);
        assert_eq!(stats.unfinished, 0);
    }
}
