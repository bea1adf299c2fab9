use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::card::{Card, DECK_SIZE};

/// Mask with one bit for every card in the deck.
const FULL_DECK_MASK: u64 = (1u64 << DECK_SIZE) - 1;

/// A set of cards packed into a single `u64`.
///
/// Bit `i` is the card whose [`Card::index`] is `i`, so walking the set
/// from the lowest bit up visits cards in canonical deck order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardBitSet {
    cards: u64,
}

impl CardBitSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Every one of the 52 cards.
    pub fn full() -> Self {
        Self {
            cards: FULL_DECK_MASK,
        }
    }

    /// Add a card. Returns false if it was already there.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let fresh = self.cards & bit == 0;
        self.cards |= bit;
        fresh
    }

    /// Remove a card. Returns false if it wasn't there.
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let present = self.cards & bit != 0;
        self.cards &= !bit;
        present
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards & (1u64 << card.index()) != 0
    }

    /// How many cards are in the set.
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// True if no card is in both sets.
    pub fn is_disjoint(&self, other: &CardBitSet) -> bool {
        self.cards & other.cards == 0
    }

    /// Iterate the cards in canonical deck order.
    pub fn iter(&self) -> CardBitSetIter {
        CardBitSetIter { remaining: self.cards }
    }
}

impl fmt::Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|c| c.to_string())).finish()
    }
}

impl BitOr for CardBitSet {
    type Output = CardBitSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign for CardBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl BitAnd for CardBitSet {
    type Output = CardBitSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitAndAssign for CardBitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.cards &= rhs.cards;
    }
}

impl BitXor for CardBitSet {
    type Output = CardBitSet;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

impl BitXorAssign for CardBitSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.cards ^= rhs.cards;
    }
}

/// Complement within the 52 card deck.
impl Not for CardBitSet {
    type Output = CardBitSet;

    fn not(self) -> Self::Output {
        Self {
            cards: !self.cards & FULL_DECK_MASK,
        }
    }
}

impl From<Card> for CardBitSet {
    fn from(card: Card) -> Self {
        let mut set = CardBitSet::new();
        set.insert(card);
        set
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardBitSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// Iterator over the cards of a `CardBitSet`, lowest index first.
#[derive(Debug, Clone)]
pub struct CardBitSetIter {
    remaining: u64,
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.remaining.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.remaining &= self.remaining - 1;
        Card::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardBitSetIter {}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}

impl IntoIterator for &CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}
