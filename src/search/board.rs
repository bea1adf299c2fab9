use std::fmt;

use crate::core::Card;

/// The three dealing stages of the board.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    /// Public cards on the table once this street is dealt.
    pub fn public_cards(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Cards this street adds to the table.
    pub fn cards_dealt(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    pub fn next(&self) -> Option<Street> {
        match self {
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(name)
    }
}

/// Community cards in the order they were dealt.
///
/// Holds three cards after the flop, four after the turn and five after
/// the river.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create a board from a flop.
    pub fn from_flop(flop: [Card; 3]) -> Self {
        Self {
            cards: flop.to_vec(),
        }
    }

    /// A copy of this board with one more card dealt.
    pub fn extend(&self, card: Card) -> Self {
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        cards.extend_from_slice(&self.cards);
        cards.push(card);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The street this board has reached, `None` for anything that isn't
    /// three to five cards long.
    pub fn street(&self) -> Option<Street> {
        match self.cards.len() {
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    pub fn flop(&self) -> &[Card] {
        &self.cards[..self.cards.len().min(3)]
    }

    pub fn turn(&self) -> Option<Card> {
        self.cards.get(3).copied()
    }

    pub fn river(&self) -> Option<Card> {
        self.cards.get(4).copied()
    }

    /// The board as it stood after `street`, if it got that far.
    pub fn prefix(&self, street: Street) -> Option<Board> {
        let n = street.public_cards();
        (self.cards.len() >= n).then(|| Board {
            cards: self.cards[..n].to_vec(),
        })
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Flop cards separated by single spaces, then the turn and the river each
/// after two spaces: `6C AH 2D  5S  3H`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.flop().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        for card in self.cards.iter().skip(3) {
            write!(f, "  {card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<Card>>()
            .into()
    }

    #[test]
    fn test_street_progression() {
        assert_eq!(Some(Street::Turn), Street::Flop.next());
        assert_eq!(Some(Street::River), Street::Turn.next());
        assert_eq!(None, Street::River.next());

        let dealt: usize = [Street::Flop, Street::Turn, Street::River]
            .iter()
            .map(|s| s.cards_dealt())
            .sum();
        assert_eq!(Street::River.public_cards(), dealt);
    }

    #[test]
    fn test_accessors() {
        let b = board("6C AH 2D 5S 3H");
        assert_eq!(Some(Street::River), b.street());
        assert_eq!(3, b.flop().len());
        assert_eq!(Some("5S".parse().unwrap()), b.turn());
        assert_eq!(Some("3H".parse().unwrap()), b.river());

        let flop = board("6C AH 2D");
        assert_eq!(Some(Street::Flop), flop.street());
        assert_eq!(None, flop.turn());
        assert_eq!(None, flop.river());
        assert_eq!(None, board("6C AH").street());
    }

    #[test]
    fn test_extend_leaves_prefix_untouched() {
        let flop = board("6C AH 2D");
        let turn = flop.extend("5S".parse().unwrap());
        assert_eq!(3, flop.len());
        assert_eq!(4, turn.len());
        assert_eq!(Some(flop.clone()), turn.prefix(Street::Flop));
        assert_eq!(None, flop.prefix(Street::Turn));
    }

    #[test]
    fn test_display() {
        assert_eq!("6C AH 2D  5S  3H", board("6C AH 2D 5S 3H").to_string());
        assert_eq!("6C AH 2D  5S", board("6C AH 2D 5S").to_string());
        assert_eq!("6C AH 2D", board("6C AH 2D").to_string());
    }

    #[test]
    fn test_street_display() {
        assert_eq!("flop", Street::Flop.to_string());
        assert_eq!("river", Street::River.to_string());
    }
}
