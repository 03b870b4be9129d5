//! Integration tests for the race game state machine.
//!
//! Drives `RaceGame` only through its public transitions and observers,
//! the way a frontend would.

use nim_race::{ConfigBounds, GameConfig, GameError, Phase, RaceGame, Side, Turn};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pinned(goal: u32, max_step: u32, seed: u64) -> RaceGame {
    RaceGame::builder()
        .config(GameConfig::new(goal, max_step).unwrap())
        .build(seed)
        .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Player always plays 4 towards 50; the computer keeps the gap a multiple of 5.
#[test]
fn test_scenario_player_plays_max_step() {
    init_tracing();
    let mut game = pinned(50, 4, 42);
    game.choose_first(true).unwrap();

    while game.phase() == Phase::Playing {
        game.apply_move(4).unwrap();

        if game.phase() == Phase::Playing {
            assert_eq!(game.last_bot_move(), Some(1));
            assert_eq!(game.position() % 5, 0);
            assert_eq!((game.goal() - game.position()) % 5, 0);
        }
    }

    assert_eq!(game.position(), 50);
    assert_eq!(game.winner(), Some(Side::Computer));

    let last = game.history().last().unwrap();
    assert_eq!(last.side, Side::Computer);
    assert_eq!(last.position_before(), 49);

    // Ten player moves and ten computer answers.
    assert_eq!(game.history().len(), 20);
}

/// A move while the computer holds the turn is rejected.
#[test]
fn test_scenario_move_on_computer_turn() {
    let mut game = pinned(50, 4, 42);
    game.choose_first(true).unwrap();
    while game.phase() == Phase::Playing {
        game.apply_move(4).unwrap();
    }
    assert_eq!(game.turn(), Turn::Computer);

    let before = game.view();
    assert_eq!(game.apply_move(3), Err(GameError::InvalidTurn));
    assert_eq!(game.view(), before);
}

/// A step above the maximum is rejected.
#[test]
fn test_scenario_step_too_large() {
    let mut game = pinned(50, 5, 42);
    game.choose_first(true).unwrap();

    assert_eq!(game.apply_move(9), Err(GameError::InvalidStep { step: 9, max_step: 5 }));
    assert_eq!(game.position(), 0);
    assert_eq!(game.turn(), Turn::Player);

    // Still usable afterwards.
    game.apply_move(5).unwrap();
    assert!(game.position() > 5);
}

/// With default bounds the computer's opening move can never reach the goal.
#[test]
fn test_scenario_computer_first() {
    for seed in 0..200 {
        let mut game = RaceGame::new(seed);
        game.choose_first(false).unwrap();

        assert_eq!(game.turn(), Turn::Player, "seed {seed}");
        assert_eq!(game.phase(), Phase::Playing, "seed {seed}");
        assert!(game.legal_steps().contains(&game.position()), "seed {seed}");
        assert_eq!(game.last_bot_move(), Some(game.position()));
        assert_eq!(game.history().len(), 1);
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_reset_restores_initial_state() {
    for seed in 0..100 {
        let mut game = RaceGame::new(seed);
        game.choose_first(seed % 2 == 0).unwrap();
        while game.phase() == Phase::Playing {
            game.apply_move(1).unwrap();
        }
        assert_eq!(game.phase(), Phase::GameOver);

        game.reset();

        assert_eq!(game.position(), 0);
        assert_eq!(game.phase(), Phase::ChoosingFirstPlayer);
        assert_eq!(game.turn(), Turn::Undetermined);
        assert_eq!(game.winner(), None);
        assert!((40..=70).contains(&game.goal()));
        assert!((3..=7).contains(&game.max_step()));
    }
}

#[test]
fn test_reset_draws_new_configs() {
    let mut game = RaceGame::new(11);
    let mut configs = vec![*game.config()];
    for _ in 0..20 {
        game.reset();
        configs.push(*game.config());
    }

    configs.sort_by_key(|c| (c.goal(), c.max_step()));
    configs.dedup();
    assert!(configs.len() > 1, "every reset produced the same config");
}

#[test]
fn test_custom_bounds() {
    let bounds = ConfigBounds::default()
        .with_goal_range(10..=12)
        .with_max_step_range(2..=3);
    let mut game = RaceGame::builder().bounds(bounds).build(9).unwrap();

    for _ in 0..20 {
        assert!((10..=12).contains(&game.goal()));
        assert!((2..=3).contains(&game.max_step()));
        game.reset();
    }
}

#[test]
fn test_transitions_rejected_after_game_over() {
    let mut game = pinned(3, 3, 1);
    game.choose_first(true).unwrap();
    game.apply_move(3).unwrap();
    assert_eq!(game.winner(), Some(Side::Player));

    assert_eq!(game.apply_move(1), Err(GameError::InvalidTurn));
    assert_eq!(game.choose_first(true), Err(GameError::FirstPlayerAlreadyChosen));
    assert_eq!(game.winner(), Some(Side::Player));
}

// =============================================================================
// Determinism and observers
// =============================================================================

#[test]
fn test_same_seed_same_round() {
    let play = |seed: u64| {
        let mut game = RaceGame::new(seed);
        let mut rounds = Vec::new();
        for _ in 0..5 {
            game.choose_first(false).unwrap();
            while game.phase() == Phase::Playing {
                game.apply_move(1).unwrap();
            }
            rounds.push((*game.config(), game.history().to_vec()));
            game.reset();
        }
        rounds
    };

    assert_eq!(play(77), play(77));
}

#[test]
fn test_observers_are_idempotent() {
    let mut game = pinned(50, 4, 3);
    game.choose_first(true).unwrap();
    game.apply_move(2).unwrap();

    assert_eq!(game.phase(), game.phase());
    assert_eq!(game.turn(), game.turn());
    assert_eq!(game.position(), game.position());
    assert_eq!(game.winner(), game.winner());
    assert_eq!(game.view(), game.view());
}

#[test]
fn test_view_serializes() {
    let mut game = pinned(50, 4, 3);
    game.choose_first(false).unwrap();

    let json = serde_json::to_value(game.view()).unwrap();
    assert_eq!(json["goal"], 50);
    assert_eq!(json["max_step"], 4);
    assert_eq!(json["phase"], "Playing");
    assert_eq!(json["turn"], "Player");
    assert_eq!(json["winner"], serde_json::Value::Null);
}
