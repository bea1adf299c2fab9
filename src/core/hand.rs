use std::fmt;
use std::str::FromStr;

use super::{Card, CardBitSet, CardError};

/// A player's two hole cards.
///
/// The two cards are always different and keep the order they were given
/// in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Card>", into = "Vec<Card>")
)]
pub struct Hand {
    cards: [Card; 2],
}

impl Hand {
    /// Create a hand from two distinct cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_board_search::core::{Card, CardError, Hand, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Heart);
    /// let six = Card::new(Value::Six, Suit::Club);
    /// assert!(Hand::new(six, ace).is_ok());
    /// assert_eq!(Err(CardError::DuplicateCard(ace)), Hand::new(ace, ace));
    /// ```
    pub fn new(first: Card, second: Card) -> Result<Self, CardError> {
        if first == second {
            return Err(CardError::DuplicateCard(first));
        }
        Ok(Self {
            cards: [first, second],
        })
    }

    /// Parse the concatenated form, e.g. `"6CAH"`. Whitespace between the
    /// two tokens is allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_board_search::core::Hand;
    ///
    /// let hand = Hand::new_from_str("9h 2c").unwrap();
    /// assert_eq!("9H2C", hand.to_string());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, CardError> {
        let compact: String = hand_string.chars().filter(|c| !c.is_whitespace()).collect();
        let chars: Vec<char> = compact.chars().collect();
        if chars.len() < 4 {
            return Err(CardError::TooFewChars);
        }
        if chars.len() > 4 {
            return Err(CardError::UnparsedCharsRemaining);
        }
        let first: Card = chars[0..2].iter().collect::<String>().parse()?;
        let second: Card = chars[2..4].iter().collect::<String>().parse()?;
        Self::new(first, second)
    }

    pub fn cards(&self) -> &[Card; 2] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}

impl FromStr for Hand {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = CardError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.as_slice() {
            [first, second] => Self::new(*first, *second),
            _ => Err(CardError::WrongHandSize(cards.len())),
        }
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl From<Hand> for CardBitSet {
    fn from(hand: Hand) -> Self {
        hand.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_keeps_order() {
        let hand = Hand::new_from_str("6CAH").unwrap();
        assert_eq!(Card::new(Value::Six, Suit::Club), hand.cards()[0]);
        assert_eq!(Card::new(Value::Ace, Suit::Heart), hand.cards()[1]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(CardError::TooFewChars), Hand::new_from_str("6C"));
        assert_eq!(
            Err(CardError::UnparsedCharsRemaining),
            Hand::new_from_str("6CAHKS")
        );
        assert_eq!(
            Err(CardError::UnexpectedSuitChar),
            Hand::new_from_str("6CAX")
        );
        assert_eq!(
            Err(CardError::DuplicateCard(Card::new(Value::Ace, Suit::Heart))),
            Hand::new_from_str("AHah")
        );
    }

    #[test]
    fn test_try_from_vec() {
        let cards = vec![
            Card::new(Value::King, Suit::Spade),
            Card::new(Value::Eight, Suit::Diamond),
        ];
        let hand = Hand::try_from(cards.clone()).unwrap();
        assert_eq!(cards, Vec::<Card>::from(hand));
        assert_eq!(
            Err(CardError::WrongHandSize(1)),
            Hand::try_from(vec![Card::new(Value::King, Suit::Spade)])
        );
    }

    #[test]
    fn test_into_bit_set() {
        let hand = Hand::new_from_str("KS8D").unwrap();
        let set: CardBitSet = hand.into();
        assert_eq!(2, set.count());
        assert!(set.contains(Card::new(Value::Eight, Suit::Diamond)));
    }
}
