//! The card value type.
//!
//! A `Card` is a closed sum over the two archetypes the game knows:
//! point cards (score at game end) and coin cards (purchasing power in hand).
//! Cards are plain values. The supply clones its definition for every
//! purchase, so each owned card is independent of the catalog entry.

use serde::{Deserialize, Serialize};

/// A purchasable card.
///
/// ## Example
///
/// ```
/// use domination::cards::Card;
///
/// let framework = Card::point("Framework", 8, 6);
/// let gold = Card::coin("Dogecoin", 6, 3);
///
/// assert_eq!(framework.score_value(), 6);
/// assert_eq!(framework.purchasing_value(), 0);
/// assert_eq!(gold.purchasing_value(), 3);
/// assert_eq!(gold.score_value(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    /// Contributes `points` to the owner's final score.
    Point { name: String, cost: u32, points: u32 },
    /// Contributes `coins` to purchasing power while in hand.
    Coin { name: String, cost: u32, coins: u32 },
}

impl Card {
    /// Create a point card.
    #[must_use]
    pub fn point(name: impl Into<String>, cost: u32, points: u32) -> Self {
        Card::Point {
            name: name.into(),
            cost,
            points,
        }
    }

    /// Create a coin card.
    #[must_use]
    pub fn coin(name: impl Into<String>, cost: u32, coins: u32) -> Self {
        Card::Coin {
            name: name.into(),
            cost,
            coins,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Point { name, .. } | Card::Coin { name, .. } => name,
        }
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        match self {
            Card::Point { cost, .. } | Card::Coin { cost, .. } => *cost,
        }
    }

    /// Points contributed at game end. Zero for coin cards.
    #[must_use]
    pub fn score_value(&self) -> u32 {
        match self {
            Card::Point { points, .. } => *points,
            Card::Coin { .. } => 0,
        }
    }

    /// Coins contributed while held in hand. Zero for point cards.
    #[must_use]
    pub fn purchasing_value(&self) -> u32 {
        match self {
            Card::Point { .. } => 0,
            Card::Coin { coins, .. } => *coins,
        }
    }

    #[must_use]
    pub fn is_point_card(&self) -> bool {
        matches!(self, Card::Point { .. })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
