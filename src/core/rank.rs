use super::Card;

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
///
/// Higher is better: `Rank::StraightFlush(_) > Rank::HighCard(_)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u32),
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Look for five values in a row in a bit set of values.
///
/// Gives back the position of the top card of the best run, with the
/// wheel ranked lowest at zero. `None` when there is no run.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Any bit still set after and-ing five shifted copies starts a run of
    // five.
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();
    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Keep only the most significant bit.
fn keep_highest(rank: u32) -> u32 {
    1 << (32 - rank.leading_zeros() - 1)
}

/// Keep the N most significant bits by clearing low bits one at a time.
fn keep_n(rank: u32, to_keep: u32) -> u32 {
    let mut result = rank;
    while result.count_ones() > to_keep {
        result &= result - 1;
    }
    result
}

/// Index of the first suit holding five or more values.
fn find_flush(suit_value_sets: &[u32]) -> Option<usize> {
    suit_value_sets.iter().position(|sv| sv.count_ones() >= 5)
}

/// Anything that can hand out the cards making up a poker hand.
///
/// Hole cards plus board, five to seven cards in total, is the usual
/// input.
pub trait Rankable {
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Find the best five card hand among the cards.
    ///
    /// Nothing is cached, every call re-evaluates.
    ///
    /// # Examples
    /// ```
    /// use rs_board_search::core::{Card, Rank, Rankable};
    ///
    /// let cards: Vec<Card> = ["2H", "2D", "8D", "8S", "KD", "6S", "TH"]
    ///     .iter()
    ///     .map(|s| s.parse().unwrap())
    ///     .collect();
    /// let rank = cards.rank();
    /// assert!(Rank::TwoPair(0) <= rank);
    /// assert!(Rank::TwoPair(u32::MAX) >= rank);
    /// ```
    fn rank(&self) -> Rank {
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut count_to_value: [u32; 5] = [0; 5];
        let mut suit_value_sets: [u32; 4] = [0; 4];
        let mut value_set: u32 = 0;

        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
            suit_value_sets[s as usize] |= 1 << v;
        }

        // Flip value -> count into count -> bit set of values.
        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_value[count as usize] |= 1 << value;
        }

        if let Some(flush_idx) = find_flush(&suit_value_sets) {
            // Only the flush suit can make a straight flush.
            if let Some(rank) = rank_straight(suit_value_sets[flush_idx]) {
                Rank::StraightFlush(rank)
            } else {
                Rank::Flush(keep_n(suit_value_sets[flush_idx], 5))
            }
        } else if count_to_value[4] != 0 {
            let high = keep_highest(value_set ^ count_to_value[4]);
            Rank::FourOfAKind((count_to_value[4] << 13) | high)
        } else if count_to_value[3] != 0 && count_to_value[3].count_ones() == 2 {
            // Two sets, the lower one plays as the pair.
            let set = keep_highest(count_to_value[3]);
            let pair = count_to_value[3] ^ set;
            Rank::FullHouse((set << 13) | pair)
        } else if count_to_value[3] != 0 && count_to_value[2] != 0 {
            let set = count_to_value[3];
            let pair = keep_highest(count_to_value[2]);
            Rank::FullHouse((set << 13) | pair)
        } else if let Some(s_rank) = rank_straight(value_set) {
            Rank::Straight(s_rank)
        } else if count_to_value[3] != 0 {
            let low = keep_n(value_set ^ count_to_value[3], 2);
            Rank::ThreeOfAKind((count_to_value[3] << 13) | low)
        } else if count_to_value[2].count_ones() >= 2 {
            // With three pairs the lowest one can still be a kicker.
            let pairs = keep_n(count_to_value[2], 2);
            let low = keep_highest(value_set ^ pairs);
            Rank::TwoPair((pairs << 13) | low)
        } else if count_to_value[2] == 0 {
            Rank::HighCard(keep_n(value_set, 5))
        } else {
            let pair = count_to_value[2];
            let low = keep_n(value_set ^ count_to_value[2], 3);
            Rank::OnePair((pair << 13) | low)
        }
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_keep_highest() {
        assert_eq!(0b100, keep_highest(0b111));
    }

    #[test]
    fn test_keep_n() {
        assert_eq!(3, keep_n(0b1111, 3).count_ones());
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::HighCard(0) < Rank::StraightFlush(0));
        assert!(Rank::HighCard(0) < Rank::FourOfAKind(0));
        assert!(Rank::HighCard(100) > Rank::HighCard(0));
    }

    #[test]
    fn test_high_card_hand() {
        let rank = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);
        assert_eq!(Rank::HighCard(rank), cards("AD 8H 9C TC 5C").rank());
    }

    #[test]
    fn test_flush() {
        let rank = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);
        assert_eq!(Rank::Flush(rank), cards("AD 8D 9D TD 5D").rank());
    }

    #[test]
    fn test_flush_keeps_top_five_of_seven() {
        let rank = cards("AD 8D 9D TD 5D 2D 3D").rank();
        let expected = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);
        assert_eq!(Rank::Flush(expected), rank);
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        assert_eq!(Rank::Straight(0), cards("AD 2H 3C 4S 5D").rank());
        assert!(cards("6D 2H 3C 4S 5D").rank() > cards("AD 2H 3C 4S 5D").rank());
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(
            Rank::StraightFlush(9),
            cards("AS KS QS JS TS 2D 3C").rank()
        );
    }

    #[test]
    fn test_full_house_from_two_sets() {
        let rank = cards("AD AH AC 8D 8H 8C 2S").rank();
        let expected = (1 << ((Value::Ace as u32) + 13)) | (1 << Value::Eight as u32);
        assert_eq!(Rank::FullHouse(expected), rank);
    }

    #[test]
    fn test_four_of_a_kind() {
        let rank = cards("9D 9H 9C 9S KD 2H 3C").rank();
        let expected = (1 << ((Value::Nine as u32) + 13)) | (1 << Value::King as u32);
        assert_eq!(Rank::FourOfAKind(expected), rank);
    }

    #[test]
    fn test_three_pairs_plays_best_two() {
        let rank = cards("AD AH 9C 9D 2S 2H 7C").rank();
        let pairs = (1 << Value::Ace as u32) | (1 << Value::Nine as u32);
        let kicker = 1 << Value::Seven as u32;
        assert_eq!(Rank::TwoPair((pairs << 13) | kicker), rank);
    }

    #[test]
    fn test_pair_beats_high_card() {
        assert!(cards("2D 2H 3C 4S 7D").rank() > cards("AD KH QC JS 9D").rank());
    }
}
