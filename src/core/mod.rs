/// card.rs has value and suit for playing card.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value, DECK_SIZE};

/// The errors for parsing cards and keeping the deck straight.
mod error;
/// Export the errors
pub use self::error::{CardError, DeckError};

/// A compact set of cards
mod card_bit_set;
/// Export `CardBitSet`
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Two hole cards for one player.
mod hand;
/// Export `Hand`
pub use self::hand::Hand;

/// Code related to cards that can still be dealt.
mod deck;
/// Export `Deck` and its ordered form `FlatDeck`
pub use self::deck::{Deck, FlatDeck};

/// Walk every k card combination of a set of cards.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::CardIter;

/// Rank the best five card hand.
mod rank;
/// Export `Rank` and `Rankable`
pub use self::rank::{Rank, Rankable};
