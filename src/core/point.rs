//! Point counts below forty.

use super::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A player's count while still below forty.
///
/// There is no `Forty` value. A player reaching forty moves the
/// whole score into [`ScoreState::Forty`](super::ScoreState::Forty).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum PointCount {
    Love,
    Fifteen,
    Thirty,
}

impl PointCount {
    /// The count after winning one more point, or `None` once forty is reached.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deuce::core::PointCount;
    ///
    /// assert_eq!(PointCount::Love.next(), Some(PointCount::Fifteen));
    /// assert_eq!(PointCount::Fifteen.next(), Some(PointCount::Thirty));
    /// assert_eq!(PointCount::Thirty.next(), None);
    /// ```
    pub fn next(self) -> Option<PointCount> {
        match self {
            PointCount::Love => Some(PointCount::Fifteen),
            PointCount::Fifteen => Some(PointCount::Thirty),
            PointCount::Thirty => None,
        }
    }
}

impl fmt::Display for PointCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointCount::Love => f.pad("love"),
            PointCount::Fifteen => f.pad("15"),
            PointCount::Thirty => f.pad("30"),
        }
    }
}

/// Text that is not a sub-forty count.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown point count '{0}', expected 'love', '15' or '30'")]
pub struct ParsePointError(pub String);

impl FromStr for PointCount {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "love" => Ok(PointCount::Love),
            "15" => Ok(PointCount::Fifteen),
            "30" => Ok(PointCount::Thirty),
            other => Err(ParsePointError(other.to_string())),
        }
    }
}

/// Both players' counts while neither has reached forty.
///
/// # Example
///
/// ```rust
/// use deuce::core::{Player, PointCount, Points};
///
/// let points = Points::default().with(Player::PlayerTwo, PointCount::Thirty);
/// assert_eq!(points.get(Player::PlayerOne), PointCount::Love);
/// assert_eq!(points.get(Player::PlayerTwo), PointCount::Thirty);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Points {
    pub player_one: PointCount,
    pub player_two: PointCount,
}

impl Points {
    pub fn new(player_one: PointCount, player_two: PointCount) -> Self {
        Self {
            player_one,
            player_two,
        }
    }

    /// The count held by `player`.
    pub fn get(&self, player: Player) -> PointCount {
        match player {
            Player::PlayerOne => self.player_one,
            Player::PlayerTwo => self.player_two,
        }
    }

    /// A copy with `player`'s count replaced.
    pub fn with(self, player: Player, count: PointCount) -> Self {
        match player {
            Player::PlayerOne => Self {
                player_one: count,
                ..self
            },
            Player::PlayerTwo => Self {
                player_two: count,
                ..self
            },
        }
    }
}

impl Default for Points {
    fn default() -> Self {
        Self::new(PointCount::Love, PointCount::Love)
    }
}
