//! Purchase policies for the scripted opponent.
//!
//! Policies are trait-based so the game controller can be driven by a
//! different buyer in tests or experiments. The game ships with one:
//! `BestCardHeuristic`, which always takes the most valuable affordable card.

use crate::cards::Card;
use crate::supply::SupplyPile;

/// Multiplier that puts every point card ahead of every coin card.
pub const POINT_CARD_WEIGHT: u32 = 100;

/// Policy for choosing which card to buy.
pub trait PurchasePolicy {
    /// Pick a pile to buy from, or `None` to skip the purchase.
    ///
    /// `catalog` is a supply snapshot in catalog order.
    fn choose<'a>(&self, coins: u32, catalog: &'a [SupplyPile]) -> Option<&'a SupplyPile>;
}

/// Buy the highest-scoring affordable card.
///
/// Point cards score `points * 100`, coin cards score their cost. Piles are
/// scanned in catalog order and the best is replaced only on a strictly
/// higher score, so the earliest entry wins a tie.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestCardHeuristic;

impl BestCardHeuristic {
    /// Desirability score of a card.
    #[must_use]
    pub fn score(card: &Card) -> u32 {
        match card {
            Card::Point { points, .. } => points * POINT_CARD_WEIGHT,
            Card::Coin { cost, .. } => *cost,
        }
    }
}

impl PurchasePolicy for BestCardHeuristic {
    fn choose<'a>(&self, coins: u32, catalog: &'a [SupplyPile]) -> Option<&'a SupplyPile> {
        let mut best: Option<(u32, &SupplyPile)> = None;

        for pile in catalog {
            if pile.remaining == 0 || pile.card.cost() > coins {
                continue;
            }
            let score = Self::score(&pile.card);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, pile));
            }
        }

        best.map(|(_, pile)| pile)
    }
}
