use std::ops::{Index, RangeFull};

use super::{Card, CardBitSet, CardIter, DeckError};

/// The set of cards that can still be dealt.
///
/// A `Deck` is never changed in place by the search. Taking cards out
/// with [`Deck::remove`] hands back a new deck, so every phase can derive
/// its own view from the same starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: CardBitSet,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self {
            cards: CardBitSet::new(),
        }
    }

    /// All 52 cards.
    pub fn full_deck() -> Self {
        Self {
            cards: CardBitSet::full(),
        }
    }

    /// Does this deck still hold the card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(card)
    }

    /// Return a copy of this deck without `cards`.
    ///
    /// Every card asked for has to be in the deck. Asking for one that isn't,
    /// or asking for the same card twice, is an error and the deck is left
    /// as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_board_search::core::{Card, Deck, DeckError};
    ///
    /// let ace: Card = "AH".parse().unwrap();
    /// let deck = Deck::default().remove([ace]).unwrap();
    /// assert_eq!(51, deck.len());
    /// assert_eq!(Err(DeckError::CardNotInDeck(ace)), deck.remove([ace]));
    /// ```
    pub fn remove<I>(&self, cards: I) -> Result<Deck, DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut remaining = self.cards;
        for card in cards {
            if !remaining.remove(card) {
                return Err(DeckError::CardNotInDeck(card));
            }
        }
        Ok(Deck { cards: remaining })
    }

    /// How many cards are left.
    pub fn len(&self) -> usize {
        self.cards.count()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate the cards in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Card> {
        self.cards.iter()
    }

    pub fn as_bit_set(&self) -> CardBitSet {
        self.cards
    }

    /// Lay the deck out as an ordered list, ready for enumeration.
    pub fn flatten(&self) -> FlatDeck {
        FlatDeck {
            cards: self.cards.iter().collect(),
        }
    }
}

/// The default deck is the full 52 cards.
impl Default for Deck {
    fn default() -> Self {
        Self::full_deck()
    }
}

impl From<CardBitSet> for Deck {
    fn from(cards: CardBitSet) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// A deck laid out in canonical order.
///
/// Use this when the order of the cards matters, e.g. when walking
/// every combination of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlatDeck {
    cards: Vec<Card>,
}

impl FlatDeck {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every group of `k` cards from this deck exactly once.
    ///
    /// The iterator is lazy and can be recreated at will; the sequence only
    /// depends on the cards in the deck.
    pub fn combinations(&self, k: usize) -> CardIter<'_> {
        CardIter::new(&self.cards, k)
    }
}

impl From<Deck> for FlatDeck {
    fn from(deck: Deck) -> Self {
        deck.flatten()
    }
}

impl Index<RangeFull> for FlatDeck {
    type Output = [Card];

    fn index(&self, _: RangeFull) -> &[Card] {
        &self.cards[..]
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
