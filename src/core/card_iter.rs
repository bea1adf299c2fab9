use crate::core::{Card, FlatDeck};

/// Given some cards create every group of `num_cards` of them.
///
/// Groups come out in lexicographic order of their positions in
/// `possible_cards`, and the cards inside a group keep that order too. Two
/// iterators over the same slice always produce the same sequence.
#[derive(Debug, Clone)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// Offsets into `possible_cards` for the group handed out last.
    idx: Vec<usize>,

    /// size of card sets requested.
    num_cards: usize,
}

impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` represents how many cards should be in each group.
    ///
    /// Asking for zero cards, or for more cards than there are, gives an
    /// empty iterator.
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        let mut idx: Vec<usize> = (0..num_cards).collect();
        // Back the last offset up by one so the first call to `next` lands
        // on 0, 1, .., n - 1. With a single card there is nothing to back up
        // into, see `next`.
        if num_cards > 1 {
            idx[num_cards - 1] -= 1;
        }
        CardIter {
            possible_cards,
            idx,
            num_cards,
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.num_cards == 0 {
            return None;
        }
        // A single offset can't start at -1, so it's walked directly.
        if self.num_cards == 1 {
            let c = self.possible_cards.get(self.idx[0]).copied()?;
            self.idx[0] += 1;
            return Some(vec![c]);
        }

        // Start at the last offset and carry to the left when it runs off
        // the end.
        let mut current_level: usize = self.num_cards - 1;

        while current_level < self.num_cards {
            self.idx[current_level] += 1;

            // Every offset to the right still needs its own card.
            let cards_needed_after = self.num_cards - (current_level + 1);
            if self.idx[current_level] + cards_needed_after >= self.possible_cards.len() {
                if current_level == 0 {
                    return None;
                }
                current_level -= 1;
            } else {
                // Reset the next offset to sit right behind this one.
                if current_level < self.num_cards - 1 {
                    self.idx[current_level + 1] = self.idx[current_level];
                }
                current_level += 1;
            }
        }

        Some(self.idx.iter().map(|i| self.possible_cards[*i]).collect())
    }
}

/// Every flop that can come off this deck.
impl<'a> IntoIterator for &'a FlatDeck {
    type Item = Vec<Card>;
    type IntoIter = CardIter<'a>;

    fn into_iter(self) -> CardIter<'a> {
        CardIter::new(&self[..], 3)
    }
}
