//! Simple Game
//!
//! Scores the first two balls of a game, then a whole game, and checks the
//! results.
//!
//! Run with: RUST_LOG=debug cargo run --example simple_game

use deuce::core::Player::{PlayerOne, PlayerTwo};
use deuce::core::{PointCount, Points, ScoreState};
use deuce::engine::{advance, GameTracker};
use log::info;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("=== Simple Game ===\n");

    let new_game = ScoreState::new();
    let first_ball = advance(new_game, PlayerOne);
    let second_ball = advance(first_ball, PlayerOne);

    let mut game = GameTracker::new();
    let simple_game = game.play([
        PlayerTwo, PlayerTwo, PlayerOne, PlayerTwo, PlayerOne, PlayerOne, PlayerTwo, PlayerTwo,
    ]);

    println!("first ball:  {}", first_ball);
    println!("second ball: {}", second_ball);
    println!("simple game: {}\n", simple_game);

    println!("Point by point:");
    for point in game.history().points() {
        println!("  {:<10} {} -> {}", point.winner, point.from, point.to);
    }

    assert_eq!(
        first_ball,
        ScoreState::Points(Points::new(PointCount::Fifteen, PointCount::Love))
    );
    assert_eq!(
        second_ball,
        ScoreState::Points(Points::new(PointCount::Thirty, PointCount::Love))
    );
    assert_eq!(simple_game, ScoreState::Game { player: PlayerTwo });
    info!("All assertions passed");

    println!("\n=== Example Complete ===");
}
