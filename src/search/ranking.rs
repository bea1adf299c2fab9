use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

/// Pairs of player positions that get compared: (P1, P2), (P2, P3), (P1, P3).
const PAIRS: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 2)];

/// How three values sit relative to each other.
///
/// Only the order between each pair is kept, never the values themselves.
/// Two triples with the same `RelativeOrder` rank the three players the
/// same way, ties included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeOrder {
    orderings: [Ordering; 3],
}

impl RelativeOrder {
    /// Compute the pairwise orderings of a triple.
    pub fn of<T: Ord>(triple: &[T; 3]) -> Self {
        Self {
            orderings: PAIRS.map(|(i, j)| triple[i].cmp(&triple[j])),
        }
    }

    /// The orderings for (P1, P2), (P2, P3) and (P1, P3).
    pub fn orderings(&self) -> [Ordering; 3] {
        self.orderings
    }

    /// Could a real triple of values produce these orderings?
    ///
    /// Orderings taken from actual values always can. A hand written
    /// pattern can't say "P1 < P2, P2 < P3 and P3 < P1"; this catches that.
    pub fn is_consistent(&self) -> bool {
        let [a, b, c] = self.orderings;
        // a is P1 vs P2, b is P2 vs P3, c is P1 vs P3.
        let implied = match (a, b) {
            (Ordering::Equal, x) | (x, Ordering::Equal) => Some(x),
            (x, y) if x == y => Some(x),
            _ => None,
        };
        implied.map_or(true, |expected| expected == c)
    }
}

/// Do two triples put the players in the same relative order?
///
/// For every pair of positions the two triples have to agree on less,
/// equal or greater. The size of the gaps is ignored, so any order
/// preserving rescaling of either side gives the same answer.
///
/// # Examples
///
/// ```
/// use rs_board_search::search::rankings_equal;
///
/// assert!(rankings_equal(&[3, 1, 2], &[300, 7, 12]));
/// assert!(!rankings_equal(&[3, 1, 2], &[1, 3, 2]));
/// // Ties only match ties.
/// assert!(rankings_equal(&[1, 1, 2], &[5, 5, 9]));
/// assert!(!rankings_equal(&[1, 1, 2], &[4, 5, 9]));
/// ```
pub fn rankings_equal<A: Ord, B: Ord>(a: &[A; 3], b: &[B; 3]) -> bool {
    RelativeOrder::of(a) == RelativeOrder::of(b)
}

/// The relative order expected between P1, P2 and P3 at one street.
///
/// The values themselves carry no meaning beyond how they compare, and they
/// have to follow the same convention as the oracle's strengths. With
/// [`RankOracle`](super::RankOracle) lower means stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RankingPattern<T> {
    values: [T; 3],
}

impl<T: Ord> RankingPattern<T> {
    pub fn new(p1: T, p2: T, p3: T) -> Self {
        Self {
            values: [p1, p2, p3],
        }
    }

    pub fn values(&self) -> &[T; 3] {
        &self.values
    }

    pub fn relative_order(&self) -> RelativeOrder {
        RelativeOrder::of(&self.values)
    }

    /// Does the triple order the players the way this pattern does.
    pub fn matches<S: Ord>(&self, triple: &[S; 3]) -> bool {
        rankings_equal(triple, &self.values)
    }
}

impl<T> From<[T; 3]> for RankingPattern<T> {
    fn from(values: [T; 3]) -> Self {
        Self { values }
    }
}

impl<T> From<(T, T, T)> for RankingPattern<T> {
    fn from((p1, p2, p3): (T, T, T)) -> Self {
        Self {
            values: [p1, p2, p3],
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PatternParseError {
    #[error("A ranking pattern needs exactly three values, found {0}")]
    WrongLength(usize),

    #[error("Unable to parse ranking value {0:?}")]
    InvalidValue(String),
}

impl FromStr for RankingPattern<i64> {
    type Err = PatternParseError;

    /// Parse `"3,1,2"`. Whitespace around the values is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| {
                let v = v.trim();
                v.parse::<i64>()
                    .map_err(|_| PatternParseError::InvalidValue(v.to_string()))
            })
            .collect::<Result<Vec<i64>, _>>()?;

        match values.as_slice() {
            [p1, p2, p3] => Ok(Self::new(*p1, *p2, *p3)),
            _ => Err(PatternParseError::WrongLength(values.len())),
        }
    }
}
