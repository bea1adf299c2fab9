//! RS-Board-Search
//!
//! Work backwards from how three poker hands compared on each street to the
//! boards that could have been dealt.
//!
//! Given the hole cards of P1, P2 and P3 and, for the flop, turn and river,
//! the relative order of their hand strengths, the search lists every flop,
//! every flop + turn and every full board that reproduce that order at each
//! street.
//!
//! # Core
//!
//! The core module contains the card primitives: `Value`, `Suit`, `Card`,
//! the `CardBitSet` set type, two card `Hand`s, the `Deck` and its ordered
//! `FlatDeck`, a combination iterator and a best five card hand ranker.
//!
//! ```
//! use rs_board_search::core::{Deck, Hand};
//!
//! let hand = Hand::new_from_str("6CAH").unwrap();
//! let deck = Deck::default().remove(hand.iter()).unwrap();
//! assert_eq!(50, deck.len());
//! ```
//!
//! # Search
//!
//! The search module holds the staged flop, turn and river search, the
//! relative order comparison it is built on and the hand strength oracle
//! it consults.
//!
//! ```
//! use rs_board_search::search::{rankings_equal, RankingPattern};
//!
//! // Only the order matters, not the values.
//! assert!(rankings_equal(&[10, 2, 5], &[3, 1, 2]));
//! assert!(RankingPattern::new(3, 1, 2).matches(&[900, 1, 20]));
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to the search.
pub mod core;

/// The staged board search.
pub mod search;
