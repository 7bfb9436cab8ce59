//! A player: a name and the piles they own.
//!
//! `Player` is a thin aggregator over `Piles`. Other components read a
//! player's cards through it but can only change them through the turn
//! operations below.

use crate::cards::{Card, BITCOIN, METHOD};
use crate::core::{RandomSource, StarterAllotment};
use crate::supply::Supply;
use crate::zones::{CardHandle, Pile, Piles};

/// The standard starter allotment: 7 Bitcoin, then 3 Method.
#[must_use]
pub fn standard_starter() -> Vec<StarterAllotment> {
    vec![
        StarterAllotment::new(BITCOIN, 7),
        StarterAllotment::new(METHOD, 3),
    ]
}

#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    piles: Piles,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, hand_size: usize) -> Self {
        Self {
            name: name.into(),
            piles: Piles::new(hand_size),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of this player's deck and piles.
    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Every card this player owns.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        self.piles.deck()
    }

    /// Add an acquired card to the deck and discard pile.
    pub fn append(&mut self, card: Card) -> CardHandle {
        self.piles.append(card)
    }

    /// Buy the standard starter deck and deal the opening hand.
    ///
    /// Returns how many starter cards were actually acquired.
    pub fn setup_starter_deck<R: RandomSource>(&mut self, supply: &mut Supply, rng: &mut R) -> usize {
        self.setup_starter_deck_with(supply, &standard_starter(), rng)
    }

    /// Buy `allotment` from the supply, then reshuffle and deal.
    ///
    /// Purchases the supply cannot satisfy are skipped; setup continues
    /// with whatever was acquired.
    pub fn setup_starter_deck_with<R: RandomSource>(
        &mut self,
        supply: &mut Supply,
        allotment: &[StarterAllotment],
        rng: &mut R,
    ) -> usize {
        let mut acquired = 0;
        for entry in allotment {
            for _ in 0..entry.count {
                if let Ok(card) = supply.purchase(&entry.card) {
                    self.piles.append(card);
                    acquired += 1;
                }
            }
        }

        self.piles.end_turn(rng);
        acquired
    }

    pub fn deal_hand(&mut self, count: usize) {
        self.piles.deal_hand(count);
    }

    /// Move the hand to discard. Runs before `end_turn`.
    pub fn cleanup(&mut self) {
        self.piles.cleanup();
    }

    /// Reshuffle if the draw pile is empty, then deal a fresh hand.
    ///
    /// Returns true if a reshuffle happened.
    pub fn end_turn<R: RandomSource>(&mut self, rng: &mut R) -> bool {
        self.piles.end_turn(rng)
    }

    pub fn hand(&self) -> impl Iterator<Item = &Card> + '_ {
        self.piles.hand()
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.piles.len(Pile::Hand)
    }

    /// Coins from cards in hand.
    #[must_use]
    pub fn available_coins(&self) -> u32 {
        self.piles.available_coins()
    }

    /// Points from every owned card.
    #[must_use]
    pub fn automation_points(&self) -> u32 {
        self.piles.automation_points()
    }
}
