//! Tracker that plays a game point by point.

use crate::checkpoint::{Checkpoint, CheckpointError, GameMetadata, CHECKPOINT_VERSION};
use crate::core::{GameHistory, Player, PointRecord, ScoreState};
use crate::engine::transition::{advance, Event, EventError};
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

/// Owns one game's score and the history of how it got there.
///
/// The score itself is computed by the pure [`advance`] function; the
/// tracker only threads states through it in point order and records them.
///
/// # Example
///
/// ```rust
/// use deuce::core::{Player, ScoreState};
/// use deuce::engine::GameTracker;
///
/// let mut game = GameTracker::new();
/// game.play([Player::PlayerOne; 4]);
///
/// assert!(game.is_final());
/// assert_eq!(game.winner(), Some(Player::PlayerOne));
/// assert_eq!(game.history().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct GameTracker {
    initial: ScoreState,
    current: ScoreState,
    history: GameHistory,
    metadata: GameMetadata,
}

impl GameTracker {
    /// Start a game at love-all.
    pub fn new() -> Self {
        Self::from_state(ScoreState::new())
    }

    /// Start tracking from an arbitrary score.
    pub fn from_state(initial: ScoreState) -> Self {
        Self {
            initial,
            current: initial,
            history: GameHistory::new(),
            metadata: GameMetadata::default(),
        }
    }

    pub fn current_state(&self) -> &ScoreState {
        &self.current
    }

    pub fn initial_state(&self) -> &ScoreState {
        &self.initial
    }

    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn winner(&self) -> Option<Player> {
        self.current.winner()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn metadata(&self) -> &GameMetadata {
        &self.metadata
    }

    /// Score one point and return the new score.
    ///
    /// Points after the game is won are recorded but do not change the score.
    pub fn score_point(&mut self, winner: Player) -> ScoreState {
        let from = self.current;
        let to = advance(from, winner);

        if from.is_final() {
            warn!("Point for {} scored after {}; score unchanged", winner, from);
        } else if to.is_final() {
            info!("Game {} after {} points", winner, self.history.len() + 1);
        } else {
            debug!("{} wins point: {} -> {}", winner, from, to);
        }

        let timestamp = Utc::now();
        self.history = self.history.record(PointRecord {
            from,
            to,
            winner,
            timestamp,
        });
        self.current = to;
        self.metadata.updated_at = timestamp;
        self.metadata.tally.increment(winner);
        to
    }

    /// Apply an event to the game.
    ///
    /// Events without a transition leave the tracker untouched.
    pub fn apply(&mut self, event: &Event) -> Result<ScoreState, EventError> {
        match event {
            Event::ScorePoint(winner) => Ok(self.score_point(*winner)),
            Event::RainedOff | Event::PlayerInjury(_) => {
                warn!("Ignoring {} event at {}", event.name(), self.current);
                Err(EventError::Unsupported {
                    event: event.name().to_string(),
                    from: self.current.to_string(),
                })
            }
        }
    }

    /// Score every point in order and return the final score.
    pub fn play<I>(&mut self, winners: I) -> ScoreState
    where
        I: IntoIterator<Item = Player>,
    {
        for winner in winners {
            self.score_point(winner);
        }
        self.current
    }

    /// Snapshot the game so it can be stored and resumed later.
    pub fn checkpoint(&self) -> Checkpoint {
        let checkpoint = Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.initial,
            current_state: self.current,
            history: self.history.clone(),
            metadata: self.metadata.clone(),
        };
        debug!(
            "Created checkpoint {} at {} ({} points)",
            checkpoint.id,
            checkpoint.current_state,
            checkpoint.history.len()
        );
        checkpoint
    }

    /// Rebuild a tracker from a checkpoint after validating it.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        info!(
            "Resuming game from checkpoint {} at {}",
            checkpoint.id, checkpoint.current_state
        );
        Ok(Self {
            initial: checkpoint.initial_state,
            current: checkpoint.current_state,
            history: checkpoint.history,
            metadata: checkpoint.metadata,
        })
    }
}

impl Default for GameTracker {
    fn default() -> Self {
        Self::new()
    }
}
