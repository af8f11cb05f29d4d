//! Deuce: a tennis game scorer built as a pure state machine
//!
//! The score of a game is a single enum whose shape rules out impossible
//! scores, and one pure, total function moves it forward a point at a time.
//! Everything stateful (history, logging, checkpoints) lives in a thin shell
//! around that function.
//!
//! # Core Concepts
//!
//! - **ScoreState**: `Points`, `Forty`, `Deuce`, `Advantage` or `Game`
//! - **advance**: the transition function `(score, winner) -> score`
//! - **fold**: scoring a whole sequence of point winners
//! - **GameTracker**: history and checkpoints for one game
//!
//! # Example
//!
//! ```rust
//! use deuce::core::{Player, PointCount, Points, ScoreState};
//! use deuce::engine::{advance, fold};
//!
//! let first_ball = advance(ScoreState::new(), Player::PlayerOne);
//! let second_ball = advance(first_ball, Player::PlayerOne);
//! assert_eq!(
//!     second_ball,
//!     ScoreState::Points(Points::new(PointCount::Thirty, PointCount::Love))
//! );
//!
//! let deuce = fold([
//!     Player::PlayerOne,
//!     Player::PlayerTwo,
//!     Player::PlayerOne,
//!     Player::PlayerTwo,
//!     Player::PlayerOne,
//!     Player::PlayerTwo,
//! ]);
//! assert_eq!(deuce, ScoreState::Deuce);
//! ```

pub mod checkpoint;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Player, PointCount, Points, ScoreState};
pub use engine::{advance, fold, Event, GameTracker};
