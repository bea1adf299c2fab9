use std::cmp::Reverse;
use std::fmt::Debug;

use crate::core::{Card, CardBitSet, Hand, Rank, Rankable};

use super::error::EvaluationError;

/// Hole cards for P1, P2 and P3, in that order.
pub type Players = [Hand; 3];

/// One strength per player, in the same P1, P2, P3 order as [`Players`].
pub type StrengthTriple<S> = [S; 3];

/// The hand evaluator the search consults.
///
/// Implementations only need to be deterministic: the same cards must
/// always give the same strength. The scale and direction of `Strength`
/// are up to the implementation. The search only ever compares strengths
/// against each other, so the target patterns have to be written in the
/// same convention.
///
/// `Sync` is required so a phase can score candidates from several
/// threads.
pub trait StrengthOracle: Sync {
    type Strength: Ord + Copy + Debug + Send;

    /// Score a hand. `cards` is the two hole cards followed by the public
    /// cards, five to seven cards in total.
    fn strength_of(&self, cards: &[Card]) -> Self::Strength;
}

/// Scores hands with [`Rankable::rank`].
///
/// The strength is reversed so that a *lower* strength is a *stronger*
/// hand. Patterns such as `(3, 1, 2)` then read as "P2 is best, P3 second,
/// P1 last".
#[derive(Debug, Clone, Copy, Default)]
pub struct RankOracle;

impl StrengthOracle for RankOracle {
    type Strength = Reverse<Rank>;

    fn strength_of(&self, cards: &[Card]) -> Reverse<Rank> {
        Reverse(cards.rank())
    }
}

impl<O: StrengthOracle> StrengthOracle for &O {
    type Strength = O::Strength;

    fn strength_of(&self, cards: &[Card]) -> Self::Strength {
        (*self).strength_of(cards)
    }
}

/// Smallest and largest number of public cards: flop to river.
const MIN_PUBLIC_CARDS: usize = 3;
const MAX_PUBLIC_CARDS: usize = 5;

/// Score one player's hand against the public cards.
///
/// The cards are checked before the oracle sees them: there must be three
/// to five public cards and no card may show up twice across the hand and
/// the board.
pub fn strength<O: StrengthOracle>(
    oracle: &O,
    hand: &Hand,
    public_cards: &[Card],
) -> Result<O::Strength, EvaluationError> {
    if !(MIN_PUBLIC_CARDS..=MAX_PUBLIC_CARDS).contains(&public_cards.len()) {
        return Err(EvaluationError::InvalidCardCount {
            count: 2 + public_cards.len(),
        });
    }

    let mut seen = CardBitSet::new();
    let mut cards = Vec::with_capacity(2 + public_cards.len());
    for card in hand.iter().chain(public_cards.iter().copied()) {
        if !seen.insert(card) {
            return Err(EvaluationError::DuplicateCard(card));
        }
        cards.push(card);
    }

    Ok(oracle.strength_of(&cards))
}

/// Score all three players against the same public cards.
pub fn strength_triple<O: StrengthOracle>(
    oracle: &O,
    players: &Players,
    public_cards: &[Card],
) -> Result<StrengthTriple<O::Strength>, EvaluationError> {
    Ok([
        strength(oracle, &players[0], public_cards)?,
        strength(oracle, &players[1], public_cards)?,
        strength(oracle, &players[2], public_cards)?,
    ])
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn players() -> Players {
        [
            Hand::new_from_str("6CAH").unwrap(),
            Hand::new_from_str("9H2C").unwrap(),
            Hand::new_from_str("KS8D").unwrap(),
        ]
    }

    /// Remembers every call so tests can look at what the oracle was given.
    #[derive(Default)]
    struct RecordingOracle {
        calls: Mutex<Vec<Vec<Card>>>,
    }

    impl StrengthOracle for RecordingOracle {
        type Strength = usize;

        fn strength_of(&self, cards: &[Card]) -> usize {
            self.calls.lock().unwrap().push(cards.to_vec());
            cards.len()
        }
    }

    #[test]
    fn test_strength_passes_hand_then_board() {
        let oracle = RecordingOracle::default();
        let hand = Hand::new_from_str("6CAH").unwrap();
        let board = cards("9D 2D 8C");

        assert_eq!(Ok(5), strength(&oracle, &hand, &board));

        let calls = oracle.calls.lock().unwrap();
        assert_eq!(vec![cards("6C AH 9D 2D 8C")], *calls);
    }

    #[test]
    fn test_strength_card_counts() {
        let oracle = RecordingOracle::default();
        let hand = Hand::new_from_str("6CAH").unwrap();

        assert_eq!(
            Err(EvaluationError::InvalidCardCount { count: 4 }),
            strength(&oracle, &hand, &cards("9D 2D"))
        );
        assert_eq!(
            Err(EvaluationError::InvalidCardCount { count: 8 }),
            strength(&oracle, &hand, &cards("9D 2D 8C 7C 6D 5D"))
        );
        assert_eq!(Ok(6), strength(&oracle, &hand, &cards("9D 2D 8C 7C")));
        assert_eq!(Ok(7), strength(&oracle, &hand, &cards("9D 2D 8C 7C 3S")));
    }

    #[test]
    fn test_strength_rejects_duplicates() {
        let oracle = RecordingOracle::default();
        let hand = Hand::new_from_str("6CAH").unwrap();
        let ace: Card = "AH".parse().unwrap();
        let nine: Card = "9D".parse().unwrap();

        assert_eq!(
            Err(EvaluationError::DuplicateCard(ace)),
            strength(&oracle, &hand, &cards("9D AH 8C"))
        );
        assert_eq!(
            Err(EvaluationError::DuplicateCard(nine)),
            strength(&oracle, &hand, &cards("9D 9D 8C"))
        );
        assert!(oracle.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_strength_triple_keeps_player_order() {
        let oracle = RecordingOracle::default();
        let triple = strength_triple(&oracle, &players(), &cards("9D 2D 8C")).unwrap();
        assert_eq!([5, 5, 5], triple);

        let calls = oracle.calls.lock().unwrap();
        let holes: Vec<String> = calls
            .iter()
            .map(|c| format!("{}{}", c[0], c[1]))
            .collect();
        assert_eq!(vec!["6CAH", "9H2C", "KS8D"], holes);
    }

    #[test]
    fn test_strength_triple_rejects_board_overlapping_any_player() {
        let king: Card = "KS".parse().unwrap();
        assert_eq!(
            Err(EvaluationError::DuplicateCard(king)),
            strength_triple(&RankOracle, &players(), &cards("9D KS 8C"))
        );
    }

    #[test]
    fn test_rank_oracle_lower_is_stronger() {
        // P2 flops two pair, P3 a pair of eights and P1 only ace high.
        let triple = strength_triple(&RankOracle, &players(), &cards("9D 2D 8C")).unwrap();
        assert!(triple[1] < triple[2]);
        assert!(triple[2] < triple[0]);
    }

    #[test]
    fn test_rank_oracle_is_deterministic() {
        let hand = Hand::new_from_str("KS8D").unwrap();
        let board = cards("9D 2D 8C AD 3S");
        assert_eq!(
            strength(&RankOracle, &hand, &board),
            strength(&RankOracle, &hand, &board)
        );
    }
}
