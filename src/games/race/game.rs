//! Race game state machine.

use std::ops::RangeInclusive;

use tracing::{debug, info, warn};

use crate::core::{
    ConfigBounds, ConfigError, GameConfig, GameError, GameProgress, GameRng, GameView, MoveRecord, Phase, Side,
    Turn,
};
use crate::rules::{legal_steps, reached_goal, validate_step};
use crate::strategy::{OpponentPolicy, OptimalOpponent};

/// RNG stream used to draw each round's config.
const SETUP_STREAM: &str = "setup";

/// RNG stream used by the opponent policy.
const OPPONENT_STREAM: &str = "opponent";

/// One player against the computer, racing to the goal.
///
/// ```text
/// ChoosingFirstPlayer --choose_first--> Playing --apply_move--> GameOver
///          ^                                                      |
///          +------------------------ reset -----------------------+
/// ```
///
/// The computer answers inside the same call that made the player's move, so
/// callers never observe `Turn::Computer` while the round is still in play.
#[derive(Clone, Debug)]
pub struct RaceGame<P = OptimalOpponent> {
    config: GameConfig,
    progress: GameProgress,
    bounds: ConfigBounds,
    /// Reused on every reset instead of drawing from `bounds`.
    pinned: Option<GameConfig>,
    setup_rng: GameRng,
    opponent_rng: GameRng,
    policy: P,
    seed: u64,
}

/// Builder for creating a RaceGame.
#[derive(Clone, Debug)]
pub struct RaceGameBuilder<P = OptimalOpponent> {
    bounds: ConfigBounds,
    config: Option<GameConfig>,
    policy: P,
}

impl Default for RaceGameBuilder {
    fn default() -> Self {
        Self {
            bounds: ConfigBounds::default(),
            config: None,
            policy: OptimalOpponent,
        }
    }
}

impl RaceGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> RaceGameBuilder<P> {
    /// Ranges each round's goal and maximum step are drawn from.
    pub fn bounds(mut self, bounds: ConfigBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Play every round with this exact config.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Swap the opponent policy.
    pub fn policy<Q: OpponentPolicy>(self, policy: Q) -> RaceGameBuilder<Q> {
        RaceGameBuilder {
            bounds: self.bounds,
            config: self.config,
            policy,
        }
    }

    /// Build the game, drawing the first round's config from `seed`.
    pub fn build(self, seed: u64) -> Result<RaceGame<P>, ConfigError>
    where
        P: OpponentPolicy,
    {
        self.bounds.validate()?;
        Ok(RaceGame::from_parts(seed, self.bounds, self.config, self.policy))
    }
}

impl RaceGame {
    /// Game with default bounds and the optimal opponent.
    pub fn new(seed: u64) -> Self {
        Self::from_parts(seed, ConfigBounds::default(), None, OptimalOpponent)
    }

    /// Start building a game.
    pub fn builder() -> RaceGameBuilder {
        RaceGameBuilder::new()
    }
}

impl<P> RaceGame<P> {
    /// Seed both RNG streams and set up the first round. `bounds` must
    /// already be valid.
    fn from_parts(seed: u64, bounds: ConfigBounds, pinned: Option<GameConfig>, policy: P) -> Self {
        let root = GameRng::new(seed);
        let mut setup_rng = root.for_context(SETUP_STREAM);
        let opponent_rng = root.for_context(OPPONENT_STREAM);
        let config = pinned.unwrap_or_else(|| GameConfig::generate(&bounds, &mut setup_rng));

        debug!(seed, goal = config.goal(), max_step = config.max_step(), "new race game");

        Self {
            config,
            progress: GameProgress::new(),
            bounds,
            pinned,
            setup_rng,
            opponent_rng,
            policy,
            seed,
        }
    }
}

impl<P: OpponentPolicy> RaceGame<P> {
    // === Transitions ===

    /// Decide who moves first.
    ///
    /// When the computer goes first it moves before this returns.
    pub fn choose_first(&mut self, is_player_first: bool) -> Result<(), GameError> {
        if self.progress.phase() != Phase::ChoosingFirstPlayer {
            return Err(GameError::FirstPlayerAlreadyChosen);
        }

        if is_player_first {
            debug!(goal = self.config.goal(), max_step = self.config.max_step(), "player moves first");
            self.progress.start(Side::Player);
        } else {
            debug!(goal = self.config.goal(), max_step = self.config.max_step(), "computer moves first");
            self.progress.start(Side::Computer);
            self.computer_move();
        }
        Ok(())
    }

    /// Apply the player's step, then the computer's answer unless the player
    /// just won.
    pub fn apply_move(&mut self, step: u32) -> Result<(), GameError> {
        if self.progress.phase() != Phase::Playing || self.progress.turn() != Turn::Player {
            return Err(GameError::InvalidTurn);
        }
        validate_step(step, self.config.max_step())?;

        let position = self.progress.advance(Side::Player, step);
        debug!(step, position, goal = self.config.goal(), "player moved");

        if reached_goal(position, self.config.goal()) {
            self.end_round(Side::Player);
            return Ok(());
        }

        self.progress.pass_turn(Side::Computer);
        self.computer_move();
        Ok(())
    }

    /// Start a new round with a fresh config.
    ///
    /// Accepted in any phase; an unfinished round is abandoned.
    pub fn reset(&mut self) {
        if self.progress.phase() != Phase::GameOver {
            debug!(phase = %self.progress.phase(), "abandoning unfinished round");
        }

        self.config = match self.pinned {
            Some(config) => config,
            None => GameConfig::generate(&self.bounds, &mut self.setup_rng),
        };
        self.progress = GameProgress::new();

        debug!(goal = self.config.goal(), max_step = self.config.max_step(), "round reset");
    }

    fn computer_move(&mut self) {
        let view = self.view();
        let max_step = self.config.max_step();
        let mut step = self.policy.choose_step(&view, &mut self.opponent_rng);
        if validate_step(step, max_step).is_err() {
            warn!(step, max_step, "opponent policy chose an illegal step, clamping");
            step = step.clamp(1, max_step);
        }

        let position = self.progress.advance(Side::Computer, step);
        debug!(step, position, goal = self.config.goal(), "computer moved");

        if reached_goal(position, self.config.goal()) {
            self.end_round(Side::Computer);
        } else {
            self.progress.pass_turn(Side::Player);
        }
    }

    fn end_round(&mut self, winner: Side) {
        self.progress.finish(winner);
        info!(
            %winner,
            position = self.progress.position(),
            goal = self.config.goal(),
            moves = self.progress.history().len(),
            "round over"
        );
    }
}

impl<P> RaceGame<P> {
    // === Observers ===

    /// Lifecycle stage.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.progress.phase()
    }

    /// Whose move is next.
    #[must_use]
    pub fn turn(&self) -> Turn {
        self.progress.turn()
    }

    /// Running total.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.progress.position()
    }

    /// Target sum for this round.
    #[must_use]
    pub fn goal(&self) -> u32 {
        self.config.goal()
    }

    /// Largest legal step this round.
    #[must_use]
    pub fn max_step(&self) -> u32 {
        self.config.max_step()
    }

    /// Winner, once the round is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.progress.winner()
    }

    /// This round's config.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// This round's progress.
    #[must_use]
    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    /// The computer's most recent step this round.
    #[must_use]
    pub fn last_bot_move(&self) -> Option<u32> {
        self.progress.last_bot_move()
    }

    /// Every accepted move this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        self.progress.history()
    }

    /// Steps the player may choose from this round.
    #[must_use]
    pub fn legal_steps(&self) -> RangeInclusive<u32> {
        legal_steps(self.config.max_step())
    }

    /// Distance still to cover.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.config.goal().saturating_sub(self.progress.position())
    }

    /// Snapshot for polling frontends and opponent policies.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::new(&self.config, &self.progress)
    }

    /// Seed the game was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
