//! The two sides of a tennis game.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the two players in a game.
///
/// # Example
///
/// ```rust
/// use deuce::core::Player;
///
/// assert_eq!(Player::PlayerOne.opponent(), Player::PlayerTwo);
/// assert_eq!(Player::PlayerTwo.opponent(), Player::PlayerOne);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Both players, in serving order.
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::PlayerOne => f.pad("playerOne"),
            Player::PlayerTwo => f.pad("playerTwo"),
        }
    }
}

/// Text that does not name a player.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown player '{0}', expected 'playerOne' or 'playerTwo'")]
pub struct ParsePlayerError(pub String);

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playerOne" => Ok(Player::PlayerOne),
            "playerTwo" => Ok(Player::PlayerTwo),
            other => Err(ParsePlayerError(other.to_string())),
        }
    }
}
