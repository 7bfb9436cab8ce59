//! Per-player card storage: the deck record and its three piles.
//!
//! Every card a player acquires is appended to the deck, which never
//! shrinks. The draw, discard and hand piles hold `CardHandle`s into that
//! deck, and every handle is in exactly one pile at all times:
//!
//! `deck_len() == len(Draw) + len(Discard) + len(Hand)`
//!
//! Draw piles are ordered with the top card at the end of the vec.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{RandomSource, DEFAULT_HAND_SIZE};

/// Stable reference to one owned card (its position in the deck record).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardHandle(pub u32);

impl CardHandle {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The three piles an owned card can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Draw,
    Discard,
    Hand,
}

/// A player's deck and piles.
///
/// ## Usage
///
/// ```
/// use domination::cards::Card;
/// use domination::core::FixedRandom;
/// use domination::zones::{Pile, Piles};
///
/// let mut piles = Piles::new(5);
/// for _ in 0..7 {
///     piles.append(Card::coin("Bitcoin", 0, 1));
/// }
///
/// // Everything starts in discard; ending the turn reshuffles and deals.
/// piles.end_turn(&mut FixedRandom::default());
///
/// assert_eq!(piles.len(Pile::Hand), 5);
/// assert_eq!(piles.len(Pile::Draw), 2);
/// assert_eq!(piles.available_coins(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Piles {
    deck: Vec<Card>,
    draw: Vec<CardHandle>,
    discard: Vec<CardHandle>,
    hand: SmallVec<[CardHandle; DEFAULT_HAND_SIZE]>,
    hand_size: usize,
}

impl Default for Piles {
    fn default() -> Self {
        Self::new(DEFAULT_HAND_SIZE)
    }
}

impl Piles {
    /// Create empty piles that deal hands of `hand_size`.
    #[must_use]
    pub fn new(hand_size: usize) -> Self {
        Self {
            deck: Vec::new(),
            draw: Vec::new(),
            discard: Vec::new(),
            hand: SmallVec::new(),
            hand_size,
        }
    }

    /// Target hand size used by `end_turn`.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Add a newly acquired card to the deck record and the discard pile.
    pub fn append(&mut self, card: Card) -> CardHandle {
        let handle = CardHandle(self.deck.len() as u32);
        self.deck.push(card);
        self.discard.push(handle);
        handle
    }

    /// Replace the hand with up to `count` cards from the top of draw.
    ///
    /// Cards still in hand go to discard first. If draw runs out early the
    /// hand is simply smaller; dealing never reshuffles.
    pub fn deal_hand(&mut self, count: usize) {
        self.discard.extend(self.hand.drain(..));

        let take = count.min(self.draw.len());
        let split = self.draw.len() - take;
        // Top of draw is the end of the vec; deal top card first.
        self.hand.extend(self.draw.drain(split..).rev());
    }

    /// Move the whole discard pile into an empty draw pile and shuffle it.
    ///
    /// Returns true if a reshuffle happened.
    pub fn reshuffle<R: RandomSource>(&mut self, rng: &mut R) -> bool {
        if !self.draw.is_empty() || self.discard.is_empty() {
            return false;
        }

        self.draw.append(&mut self.discard);
        rng.shuffle(self.draw.as_mut_slice());
        true
    }

    /// Reshuffle if needed, then deal a fresh hand.
    ///
    /// Returns true if a reshuffle happened.
    pub fn end_turn<R: RandomSource>(&mut self, rng: &mut R) -> bool {
        let reshuffled = self.reshuffle(rng);
        self.deal_hand(self.hand_size);
        reshuffled
    }

    /// Move every card in hand to discard.
    pub fn cleanup(&mut self) {
        self.discard.extend(self.hand.drain(..));
    }

    /// All owned cards, in acquisition order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn get(&self, handle: CardHandle) -> Option<&Card> {
        self.deck.get(handle.index())
    }

    fn handles(&self, pile: Pile) -> &[CardHandle] {
        match pile {
            Pile::Draw => self.draw.as_slice(),
            Pile::Discard => self.discard.as_slice(),
            Pile::Hand => self.hand.as_slice(),
        }
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn len(&self, pile: Pile) -> usize {
        self.handles(pile).len()
    }

    /// Cards in a pile, in pile order (draw: bottom to top).
    pub fn cards(&self, pile: Pile) -> impl Iterator<Item = &Card> + '_ {
        self.handles(pile).iter().map(|h| &self.deck[h.index()])
    }

    /// Cards currently in hand.
    pub fn hand(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards(Pile::Hand)
    }

    /// Which pile a handle is in.
    #[must_use]
    pub fn location(&self, handle: CardHandle) -> Option<Pile> {
        [Pile::Draw, Pile::Discard, Pile::Hand]
            .into_iter()
            .find(|&pile| self.handles(pile).contains(&handle))
    }

    /// Final score: points over the entire deck, whatever pile each card is in.
    #[must_use]
    pub fn automation_points(&self) -> u32 {
        self.deck.iter().map(Card::score_value).sum()
    }

    /// Purchasing power: coins over the hand only.
    #[must_use]
    pub fn available_coins(&self) -> u32 {
        self.hand().map(Card::purchasing_value).sum()
    }

    /// Check the pile partition invariant.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen: Vec<CardHandle> = self
            .draw
            .iter()
            .chain(&self.discard)
            .chain(&self.hand)
            .copied()
            .collect();
        seen.sort_unstable();

        seen.len() == self.deck.len()
            && seen.iter().enumerate().all(|(i, h)| h.index() == i)
    }
}
