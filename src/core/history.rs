//! Point-by-point history of a game.
//!
//! Provides immutable tracking of scored points over time, following
//! functional programming principles.

use super::player::Player;
use super::score::ScoreState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single scored point.
///
/// # Example
///
/// ```rust
/// use deuce::core::{Player, PointRecord, ScoreState};
/// use chrono::Utc;
///
/// let record = PointRecord {
///     from: ScoreState::Deuce,
///     to: ScoreState::Advantage { player: Player::PlayerOne },
///     winner: Player::PlayerOne,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Score before the point
    pub from: ScoreState,
    /// Score after the point
    pub to: ScoreState,
    /// Who won the point
    pub winner: Player,
    /// When the point was scored
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of scored points.
///
/// History is immutable - `record` returns a new history with the point
/// added.
///
/// # Example
///
/// ```rust
/// use deuce::core::{GameHistory, Player, PointRecord, ScoreState};
/// use deuce::engine::advance;
/// use chrono::Utc;
///
/// let start = ScoreState::new();
/// let after = advance(start, Player::PlayerTwo);
///
/// let history = GameHistory::new().record(PointRecord {
///     from: start,
///     to: after,
///     winner: Player::PlayerTwo,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&start, &after]);
/// assert_eq!(history.points_won(Player::PlayerTwo), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameHistory {
    points: Vec<PointRecord>,
}

impl GameHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Record a point, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, point: PointRecord) -> Self {
        let mut points = self.points.clone();
        points.push(point);
        Self { points }
    }

    /// Scores traversed: the first `from`, then the `to` of every point.
    pub fn get_path(&self) -> Vec<&ScoreState> {
        let mut path = Vec::with_capacity(self.points.len() + 1);
        if let Some(first) = self.points.first() {
            path.push(&first.from);
        }
        for point in &self.points {
            path.push(&point.to);
        }
        path
    }

    /// Point winners in the order the points were played.
    pub fn winners(&self) -> impl Iterator<Item = Player> + '_ {
        self.points.iter().map(|point| point.winner)
    }

    /// Number of recorded points won by `player`.
    pub fn points_won(&self, player: Player) -> usize {
        self.winners().filter(|winner| *winner == player).count()
    }

    /// Time between the first and last recorded point.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded points, oldest first.
    pub fn points(&self) -> &[PointRecord] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PointCount, Points};

    fn fifteen_love() -> ScoreState {
        ScoreState::Points(Points::new(PointCount::Fifteen, PointCount::Love))
    }

    fn thirty_love() -> ScoreState {
        ScoreState::Points(Points::new(PointCount::Thirty, PointCount::Love))
    }

    fn point(from: ScoreState, to: ScoreState, winner: Player) -> PointRecord {
        PointRecord {
            from,
            to,
            winner,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = GameHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = GameHistory::new();

        let new_history =
            history.record(point(ScoreState::new(), fifteen_love(), Player::PlayerOne));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_score_sequence() {
        let history = GameHistory::new()
            .record(point(ScoreState::new(), fifteen_love(), Player::PlayerOne))
            .record(point(fifteen_love(), thirty_love(), Player::PlayerOne));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &ScoreState::new());
        assert_eq!(path[1], &fifteen_love());
        assert_eq!(path[2], &thirty_love());
    }

    #[test]
    fn points_won_counts_each_player() {
        let advantage = ScoreState::Advantage {
            player: Player::PlayerTwo,
        };
        let history = GameHistory::new()
            .record(point(ScoreState::Deuce, advantage, Player::PlayerTwo))
            .record(point(advantage, ScoreState::Deuce, Player::PlayerOne))
            .record(point(
                ScoreState::Deuce,
                ScoreState::Advantage {
                    player: Player::PlayerOne,
                },
                Player::PlayerOne,
            ));

        assert_eq!(history.points_won(Player::PlayerOne), 2);
        assert_eq!(history.points_won(Player::PlayerTwo), 1);
        assert_eq!(
            history.winners().collect::<Vec<_>>(),
            vec![Player::PlayerTwo, Player::PlayerOne, Player::PlayerOne]
        );
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = GameHistory::new().record(PointRecord {
            from: ScoreState::new(),
            to: fifteen_love(),
            winner: Player::PlayerOne,
            timestamp: start,
        });

        let history = history.record(PointRecord {
            from: fifteen_love(),
            to: thirty_love(),
            winner: Player::PlayerOne,
            timestamp: start + chrono::Duration::milliseconds(10),
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn single_point_has_duration_zero() {
        let history =
            GameHistory::new().record(point(ScoreState::new(), fifteen_love(), Player::PlayerOne));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            GameHistory::new().record(point(ScoreState::new(), fifteen_love(), Player::PlayerOne));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: GameHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
