use thiserror::Error;

use super::Card;

/// Errors from parsing cards or building hands out of them.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used chars found while parsing")]
    UnparsedCharsRemaining,
    #[error("A hand needs exactly two cards, found {0}")]
    WrongHandSize(usize),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Deck bookkeeping went wrong.
///
/// Seeing this means the caller asked for a card that was already taken
/// out, usually because two players were given the same hole card.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DeckError {
    #[error("Card {0} is not in the deck")]
    CardNotInDeck(Card),
}
