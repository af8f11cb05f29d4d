//! The scoring engine.
//!
//! This module provides the transition function over [`ScoreState`] and
//! the tracker shell that drives it.
//!
//! # Key Concepts
//!
//! - **advance**: pure, total transition from one score to the next
//! - **fold**: left reduction of `advance` over point winners
//! - **Events**: point scored, plus event kinds with no transition
//! - **GameTracker**: owns a game's score, history and metadata
//!
//! [`ScoreState`]: crate::core::ScoreState

mod machine;
mod transition;

pub use machine::GameTracker;
pub use transition::{advance, apply_event, fold, fold_from, scan, Event, EventError};
