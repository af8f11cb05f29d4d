//! Checkpoint and resume for tracked games.
//!
//! A checkpoint is a plain serializable value. Storing it is up to the
//! caller; JSON is provided for readability and bincode for compactness.

use crate::core::{GameHistory, Player, ScoreState};
use crate::engine::advance;
use chrono::{DateTime, Utc};
use log::trace;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Points won by each player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTally {
    pub player_one: usize,
    pub player_two: usize,
}

impl PointTally {
    pub fn get(&self, player: Player) -> usize {
        match player {
            Player::PlayerOne => self.player_one,
            Player::PlayerTwo => self.player_two,
        }
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::PlayerOne => self.player_one += 1,
            Player::PlayerTwo => self.player_two += 1,
        }
    }
}

/// Metadata tracked alongside a game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMetadata {
    /// When the tracker was created
    pub created_at: DateTime<Utc>,

    /// When the last point was scored
    pub updated_at: DateTime<Utc>,

    /// Points won per player, including points after the game ended
    pub tally: PointTally,
}

impl Default for GameMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            tally: PointTally::default(),
        }
    }
}

/// Serializable snapshot of a tracked game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Score the game was started from
    pub initial_state: ScoreState,

    /// Score at the time of the checkpoint
    pub current_state: ScoreState,

    /// Every point played so far
    pub history: GameHistory,

    /// Game metadata
    pub metadata: GameMetadata,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check that the checkpoint describes a game that could have been played.
    ///
    /// Every recorded point must start where the previous one ended and
    /// follow the scoring rules, beginning at `initial_state` and ending at
    /// `current_state`. The tally must agree with the history.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let mut expected = self.initial_state;
        for (index, point) in self.history.points().iter().enumerate() {
            if point.from != expected {
                return Err(CheckpointError::ValidationFailed(format!(
                    "point {} starts at '{}' but the previous score was '{}'",
                    index, point.from, expected
                )));
            }
            let next = advance(point.from, point.winner);
            if point.to != next {
                return Err(CheckpointError::ValidationFailed(format!(
                    "point {} won by {} moves '{}' to '{}', expected '{}'",
                    index, point.winner, point.from, point.to, next
                )));
            }
            expected = next;
        }

        if expected != self.current_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "history ends at '{}' but current score is '{}'",
                expected, self.current_state
            )));
        }

        for player in Player::ALL {
            let recorded = self.history.points_won(player);
            if self.metadata.tally.get(player) != recorded {
                return Err(CheckpointError::ValidationFailed(format!(
                    "tally for {} is {} but history has {}",
                    player,
                    self.metadata.tally.get(player),
                    recorded
                )));
            }
        }

        trace!("Checkpoint {} is valid", self.id);
        Ok(())
    }
}
