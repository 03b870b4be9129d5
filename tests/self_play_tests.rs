//! Self-play tests verifying the opponent strategy against known theory.
//!
//! In this subtraction game the side to move wins with perfect play iff the
//! gap to the goal is not a multiple of `max_step + 1`.

use nim_race::{
    GameConfig, OptimalOpponent, RaceGame, SelfPlayConfig, SelfPlayStats, SelfPlayWorker, Side, UniformOpponent,
};

fn first_mover_wins(config: &GameConfig) -> bool {
    config.goal() % (config.max_step() + 1) != 0
}

#[test]
fn test_optimal_player_first() {
    let mut game = RaceGame::new(2024);
    let mut worker = SelfPlayWorker::new(OptimalOpponent, SelfPlayConfig::default(), 1);

    let rounds = worker.play_rounds(&mut game, 200).unwrap();
    for round in &rounds {
        let expected = if first_mover_wins(&round.config) {
            Side::Player
        } else {
            Side::Computer
        };
        assert_eq!(round.winner, Some(expected), "config {}", round.config);
    }
}

#[test]
fn test_optimal_computer_first() {
    let mut game = RaceGame::new(99);
    let config = SelfPlayConfig::default().with_player_first(false);
    let mut worker = SelfPlayWorker::new(OptimalOpponent, config, 2);

    let rounds = worker.play_rounds(&mut game, 200).unwrap();
    for round in &rounds {
        let expected = if first_mover_wins(&round.config) {
            Side::Computer
        } else {
            Side::Player
        };
        assert_eq!(round.winner, Some(expected), "config {}", round.config);
    }
}

/// Once the computer holds a losing gap for the player, it never lets go.
#[test]
fn test_computer_keeps_winning_gap() {
    let mut game = RaceGame::builder()
        .config(GameConfig::new(60, 5).unwrap())
        .build(5)
        .unwrap();
    let mut worker = SelfPlayWorker::new(UniformOpponent, SelfPlayConfig::default(), 5);

    for _ in 0..50 {
        let round = worker.play_round(&mut game).unwrap();
        assert_eq!(round.winner, Some(Side::Computer));

        for record in round.moves.iter().filter(|r| r.side == Side::Computer) {
            assert_eq!((60 - record.position_after) % 6, 0);
        }
    }
}

#[test]
fn test_optimal_opponent_beats_random_player() {
    let mut game = RaceGame::new(7);
    let mut worker = SelfPlayWorker::new(UniformOpponent, SelfPlayConfig::default(), 7);

    let rounds = worker.play_rounds(&mut game, 300).unwrap();
    let stats = SelfPlayStats::tally(&rounds);

    assert_eq!(stats.rounds(), 300);
    assert_eq!(stats.unfinished, 0);
    assert!(
        stats.computer_wins > stats.player_wins,
        "computer {} vs player {}",
        stats.computer_wins,
        stats.player_wins
    );
}

#[test]
fn test_self_play_is_reproducible() {
    let run = || {
        let mut game = RaceGame::new(31);
        let mut worker = SelfPlayWorker::new(UniformOpponent, SelfPlayConfig::default(), 31);
        worker.play_rounds(&mut game, 10).unwrap()
    };

    assert_eq!(run(), run());
}
