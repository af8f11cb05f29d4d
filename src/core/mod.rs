//! Core score types.
//!
//! This module contains the pure data model of a tennis game:
//! - Players and sub-forty point counts
//! - The `ScoreState` sum type, which cannot hold an impossible score
//! - Immutable point-by-point history
//!
//! Nothing in this module performs I/O or logging.

mod history;
mod player;
mod point;
mod score;

pub use history::{GameHistory, PointRecord};
pub use player::{ParsePlayerError, Player};
pub use point::{ParsePointError, PointCount, Points};
pub use score::{ParseScoreError, ScoreState};
