//! The score of a single game.
//!
//! `ScoreState` only admits scores that can occur in real tennis: there is
//! no forty-all outside `Deuce`, no advantage without a player, and no
//! count past forty.

use super::player::{ParsePlayerError, Player};
use super::point::{ParsePointError, PointCount, Points};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Score of a game in progress or finished.
///
/// Values are immutable; every transition produces a new one.
///
/// # Example
///
/// ```rust
/// use deuce::core::{Player, PointCount, ScoreState};
///
/// let score = ScoreState::Forty {
///     player: Player::PlayerOne,
///     other_player_point: PointCount::Fifteen,
/// };
///
/// assert_eq!(score.name(), "Forty");
/// assert_eq!(score.to_string(), "40-15");
/// assert!(!score.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ScoreState {
    /// Both players below forty
    Points(Points),
    /// `player` is at forty, the opponent is below
    Forty {
        player: Player,
        other_player_point: PointCount,
    },
    /// Forty-all
    Deuce,
    /// `player` is one point clear after deuce
    Advantage { player: Player },
    /// `player` has won the game
    Game { player: Player },
}

impl ScoreState {
    /// Love-all, the score every game starts from.
    pub fn new() -> Self {
        ScoreState::Points(Points::default())
    }

    /// Variant name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            ScoreState::Points(_) => "Points",
            ScoreState::Forty { .. } => "Forty",
            ScoreState::Deuce => "Deuce",
            ScoreState::Advantage { .. } => "Advantage",
            ScoreState::Game { .. } => "Game",
        }
    }

    /// Whether the game is over. Only `Game` is terminal.
    pub fn is_final(&self) -> bool {
        matches!(self, ScoreState::Game { .. })
    }

    /// The player who won the game, if it is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            ScoreState::Game { player } => Some(*player),
            _ => None,
        }
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

const FORTY: &str = "40";

impl fmt::Display for ScoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreState::Points(points) => write!(f, "{}-{}", points.player_one, points.player_two),
            ScoreState::Forty {
                player: Player::PlayerOne,
                other_player_point,
            } => write!(f, "{}-{}", FORTY, other_player_point),
            ScoreState::Forty {
                player: Player::PlayerTwo,
                other_player_point,
            } => write!(f, "{}-{}", other_player_point, FORTY),
            ScoreState::Deuce => f.write_str("deuce"),
            ScoreState::Advantage { player } => write!(f, "advantage {}", player),
            ScoreState::Game { player } => write!(f, "game {}", player),
        }
    }
}

/// Errors from parsing the display form of a score.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseScoreError {
    #[error("Malformed score '{0}'")]
    Malformed(String),

    #[error("Forty-all is written as 'deuce'")]
    FortyAll,

    #[error(transparent)]
    Player(#[from] ParsePlayerError),

    #[error(transparent)]
    Point(#[from] ParsePointError),
}

impl FromStr for ScoreState {
    type Err = ParseScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s == "deuce" {
            return Ok(ScoreState::Deuce);
        }

        if let Some((keyword, player)) = s.split_once(' ') {
            let player: Player = player.trim().parse()?;
            return match keyword {
                "advantage" => Ok(ScoreState::Advantage { player }),
                "game" => Ok(ScoreState::Game { player }),
                _ => Err(ParseScoreError::Malformed(s.to_string())),
            };
        }

        let (one, two) = s
            .split_once('-')
            .ok_or_else(|| ParseScoreError::Malformed(s.to_string()))?;

        match (one, two) {
            (FORTY, FORTY) => Err(ParseScoreError::FortyAll),
            (FORTY, other) => Ok(ScoreState::Forty {
                player: Player::PlayerOne,
                other_player_point: other.parse()?,
            }),
            (other, FORTY) => Ok(ScoreState::Forty {
                player: Player::PlayerTwo,
                other_player_point: other.parse()?,
            }),
            (one, two) => Ok(ScoreState::Points(Points::new(one.parse()?, two.parse()?))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_state() -> Vec<ScoreState> {
        let counts = [PointCount::Love, PointCount::Fifteen, PointCount::Thirty];
        let mut states = Vec::new();
        for one in counts {
            for two in counts {
                states.push(ScoreState::Points(Points::new(one, two)));
            }
        }
        for player in Player::ALL {
            for other_player_point in counts {
                states.push(ScoreState::Forty {
                    player,
                    other_player_point,
                });
            }
            states.push(ScoreState::Advantage { player });
            states.push(ScoreState::Game { player });
        }
        states.push(ScoreState::Deuce);
        states
    }

    #[test]
    fn new_is_love_all() {
        assert_eq!(ScoreState::new(), ScoreState::Points(Points::default()));
        assert_eq!(ScoreState::default(), ScoreState::new());
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(ScoreState::new().name(), "Points");
        assert_eq!(ScoreState::Deuce.name(), "Deuce");
        assert_eq!(
            ScoreState::Advantage {
                player: Player::PlayerOne
            }
            .name(),
            "Advantage"
        );
        assert_eq!(
            ScoreState::Game {
                player: Player::PlayerTwo
            }
            .name(),
            "Game"
        );
    }

    #[test]
    fn only_game_is_final() {
        for state in every_state() {
            assert_eq!(state.is_final(), state.name() == "Game");
            assert_eq!(state.winner().is_some(), state.is_final());
        }
    }

    #[test]
    fn display_uses_tennis_calls() {
        assert_eq!(ScoreState::new().to_string(), "love-love");
        assert_eq!(
            ScoreState::Points(Points::new(PointCount::Fifteen, PointCount::Thirty)).to_string(),
            "15-30"
        );
        assert_eq!(
            ScoreState::Forty {
                player: Player::PlayerTwo,
                other_player_point: PointCount::Love,
            }
            .to_string(),
            "love-40"
        );
        assert_eq!(ScoreState::Deuce.to_string(), "deuce");
        assert_eq!(
            ScoreState::Advantage {
                player: Player::PlayerOne
            }
            .to_string(),
            "advantage playerOne"
        );
        assert_eq!(
            ScoreState::Game {
                player: Player::PlayerTwo
            }
            .to_string(),
            "game playerTwo"
        );
    }

    #[test]
    fn every_state_display_parses_back() {
        for state in every_state() {
            let parsed: ScoreState = state.to_string().parse().unwrap();
            assert_eq!(parsed, state);
        }
    }

    #[test]
    fn forty_all_is_rejected() {
        assert_eq!("40-40".parse::<ScoreState>(), Err(ParseScoreError::FortyAll));
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert!(matches!(
            "forty".parse::<ScoreState>(),
            Err(ParseScoreError::Malformed(_))
        ));
        assert!(matches!(
            "serve playerOne".parse::<ScoreState>(),
            Err(ParseScoreError::Malformed(_))
        ));
        assert!(matches!(
            "game nobody".parse::<ScoreState>(),
            Err(ParseScoreError::Player(_))
        ));
        assert!(matches!(
            "45-love".parse::<ScoreState>(),
            Err(ParseScoreError::Point(_))
        ));
    }

    #[test]
    fn state_serializes_correctly() {
        for state in every_state() {
            let json = serde_json::to_string(&state).unwrap();
            let deserialized: ScoreState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, deserialized);
        }
    }
}
