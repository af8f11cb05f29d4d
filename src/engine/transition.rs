//! The transition function and the events that drive it.

use crate::core::{Player, ScoreState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Score the next point for `winner`.
///
/// Total and pure: every state has a successor for either winner, and a
/// finished game absorbs any further point.
///
/// # Example
///
/// ```rust
/// use deuce::core::{Player, PointCount, Points, ScoreState};
/// use deuce::engine::advance;
///
/// let score = advance(ScoreState::new(), Player::PlayerOne);
/// assert_eq!(
///     score,
///     ScoreState::Points(Points::new(PointCount::Fifteen, PointCount::Love))
/// );
/// ```
pub fn advance(state: ScoreState, winner: Player) -> ScoreState {
    match state {
        ScoreState::Points(points) => match points.get(winner).next() {
            Some(next) => ScoreState::Points(points.with(winner, next)),
            None => ScoreState::Forty {
                player: winner,
                other_player_point: points.get(winner.opponent()),
            },
        },
        ScoreState::Forty { player, .. } if player == winner => ScoreState::Game { player },
        ScoreState::Forty {
            player,
            other_player_point,
        } => match other_player_point.next() {
            Some(next) => ScoreState::Forty {
                player,
                other_player_point: next,
            },
            None => ScoreState::Deuce,
        },
        ScoreState::Deuce => ScoreState::Advantage { player: winner },
        ScoreState::Advantage { player } if player == winner => ScoreState::Game { player },
        ScoreState::Advantage { .. } => ScoreState::Deuce,
        ScoreState::Game { player } => ScoreState::Game { player },
    }
}

/// Score a whole sequence of points from love-all.
///
/// # Example
///
/// ```rust
/// use deuce::core::Player::{PlayerOne, PlayerTwo};
/// use deuce::core::ScoreState;
/// use deuce::engine::fold;
///
/// let score = fold([PlayerTwo, PlayerTwo, PlayerOne, PlayerTwo, PlayerOne, PlayerOne, PlayerTwo, PlayerTwo]);
/// assert_eq!(score, ScoreState::Game { player: PlayerTwo });
/// ```
pub fn fold<I>(winners: I) -> ScoreState
where
    I: IntoIterator<Item = Player>,
{
    fold_from(ScoreState::new(), winners)
}

/// Score a sequence of points starting from `initial`.
pub fn fold_from<I>(initial: ScoreState, winners: I) -> ScoreState
where
    I: IntoIterator<Item = Player>,
{
    winners.into_iter().fold(initial, advance)
}

/// Every score reached while playing `winners` from `initial`, seed included.
pub fn scan<I>(initial: ScoreState, winners: I) -> Vec<ScoreState>
where
    I: IntoIterator<Item = Player>,
{
    let mut states = vec![initial];
    let mut current = initial;
    for winner in winners {
        current = advance(current, winner);
        states.push(current);
    }
    states
}

/// Something that can happen during a game.
///
/// Only `ScorePoint` moves the score. The other kinds have no transitions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A point won by the given player
    ScorePoint(Player),
    /// Play stopped for rain
    RainedOff,
    /// A player is injured
    PlayerInjury(Player),
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::ScorePoint(_) => "ScorePoint",
            Event::RainedOff => "RainedOff",
            Event::PlayerInjury(_) => "PlayerInjury",
        }
    }

    /// Whether the event has a defined transition.
    pub fn is_supported(&self) -> bool {
        matches!(self, Event::ScorePoint(_))
    }
}

impl From<Player> for Event {
    fn from(winner: Player) -> Self {
        Event::ScorePoint(winner)
    }
}

/// Apply an event to a score.
///
/// Events without a transition leave the score unchanged.
pub fn apply_event(state: ScoreState, event: &Event) -> ScoreState {
    match event {
        Event::ScorePoint(winner) => advance(state, *winner),
        Event::RainedOff | Event::PlayerInjury(_) => state,
    }
}

/// Errors from applying events to a tracked game.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EventError {
    #[error("Event '{event}' has no transition from '{from}'")]
    Unsupported { event: String, from: String },
}
