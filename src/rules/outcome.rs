//! Result of a completed game.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher automation points.
    Winner(PlayerId),
    /// Equal automation points.
    Tie,
}

impl GameResult {
    /// Decide the game from both players' final scores.
    ///
    /// ```
    /// use domination::core::{PlayerId, PlayerMap};
    /// use domination::rules::GameResult;
    ///
    /// let scores = PlayerMap::new(|p| if p == PlayerId::FIRST { 12 } else { 9 });
    /// assert_eq!(GameResult::from_scores(&scores), GameResult::Winner(PlayerId::FIRST));
    /// ```
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let first = scores[PlayerId::FIRST];
        let second = scores[PlayerId::SECOND];

        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Tie => None,
        }
    }
}
