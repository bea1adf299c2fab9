use std::fmt;
use std::str::FromStr;

use super::error::CardError;

/// Card rank or value.
/// This is basically the face value - 2
///
/// The discriminants are used as bit positions by the hand ranking code, so
/// `Two` has to stay at zero and `Ace` at twelve.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Values in the order the canonical deck lists them: Ace first.
const VALUES_HIGH_TO_LOW: [Value; 13] = [
    Value::Ace,
    Value::King,
    Value::Queen,
    Value::Jack,
    Value::Ten,
    Value::Nine,
    Value::Eight,
    Value::Seven,
    Value::Six,
    Value::Five,
    Value::Four,
    Value::Three,
    Value::Two,
];

impl Value {
    /// All the values, from the highest to the lowest.
    ///
    /// This is the outer loop of the canonical deck order.
    pub const fn values_high_to_low() -> [Value; 13] {
        VALUES_HIGH_TO_LOW
    }

    /// Take a u8 that's the discriminant of the value and turn it back into
    /// a `Value`. Anything above twelve is clamped to `Ace`.
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Value::Two,
            1 => Value::Three,
            2 => Value::Four,
            3 => Value::Five,
            4 => Value::Six,
            5 => Value::Seven,
            6 => Value::Eight,
            7 => Value::Nine,
            8 => Value::Ten,
            9 => Value::Jack,
            10 => Value::Queen,
            11 => Value::King,
            _ => Value::Ace,
        }
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_board_search::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('X'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
///
/// The order here is the inner loop of the canonical deck: H, D, C, S.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Hearts
    Heart = 0,
    /// Diamonds
    Diamond = 1,
    /// Clubs
    Club = 2,
    /// Spades
    Spade = 3,
}

const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// All the suits in canonical order.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Self {
        match s {
            0 => Suit::Heart,
            1 => Suit::Diamond,
            2 => Suit::Club,
            _ => Suit::Spade,
        }
    }

    /// Given a character that represents a suit try and parse that char.
    /// If the char can represent a suit return it.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_uppercase() {
            'H' => Some(Suit::Heart),
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// This Suit to a character.
    pub fn to_char(self) -> char {
        match self {
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Spade => 'S',
        }
    }
}

/// The number of distinct cards in a deck.
pub const DECK_SIZE: usize = 52;

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards order by value first and then by suit. That ordering is only
/// used for sorting output; enumeration order comes from [`Card::index`].
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Position of this card in the canonical deck.
    ///
    /// The canonical deck walks the values from Ace down to Two and, for
    /// every value, the suits Hearts, Diamonds, Clubs, Spades. So `AH` is 0,
    /// `AS` is 3 and `2S` is 51.
    pub fn index(&self) -> usize {
        (Value::Ace as usize - self.value as usize) * 4 + self.suit as usize
    }

    /// Inverse of [`Card::index`]. Returns `None` for anything past the end
    /// of the deck.
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= DECK_SIZE {
            return None;
        }
        let value = Value::from_u8((Value::Ace as usize - idx / 4) as u8);
        let suit = Suit::from_u8((idx % 4) as u8);
        Some(Self { value, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parse a single two character token like `"6C"` or `"ah"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let value = chars
            .next()
            .ok_or(CardError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(CardError::UnexpectedValueChar))?;
        let suit = chars
            .next()
            .ok_or(CardError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(CardError::UnexpectedSuitChar))?;
        if chars.next().is_some() {
            return Err(CardError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_index_corners() {
        assert_eq!(0, Card::new(Value::Ace, Suit::Heart).index());
        assert_eq!(3, Card::new(Value::Ace, Suit::Spade).index());
        assert_eq!(4, Card::new(Value::King, Suit::Heart).index());
        assert_eq!(51, Card::new(Value::Two, Suit::Spade).index());
    }

    #[test]
    fn test_from_index_inverts_index() {
        for idx in 0..DECK_SIZE {
            let card = Card::from_index(idx).unwrap();
            assert_eq!(idx, card.index());
        }
        assert_eq!(None, Card::from_index(DECK_SIZE));
    }

    #[test]
    fn test_parse_and_display() {
        let card: Card = "6c".parse().unwrap();
        assert_eq!(Card::new(Value::Six, Suit::Club), card);
        assert_eq!("6C", card.to_string());
        assert_eq!("TD", Card::new(Value::Ten, Suit::Diamond).to_string());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(CardError::TooFewChars), "".parse::<Card>());
        assert_eq!(Err(CardError::TooFewChars), "A".parse::<Card>());
        assert_eq!(Err(CardError::UnexpectedValueChar), "1H".parse::<Card>());
        assert_eq!(Err(CardError::UnexpectedSuitChar), "AX".parse::<Card>());
        assert_eq!(Err(CardError::UnparsedCharsRemaining), "AHK".parse::<Card>());
    }

    #[test]
    fn test_value_chars_round_trip() {
        for v in Value::values_high_to_low() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
    }

    #[test]
    fn test_value_order() {
        assert!(Value::Ace > Value::King);
        assert!(Value::Two < Value::Three);
        assert_eq!(Value::Ace, Value::from_u8(12));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_token() {
        let card = Card::new(Value::King, Suit::Spade);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!("\"KS\"", json);
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
        assert!(serde_json::from_str::<Card>("\"ZZ\"").is_err());
    }
}
