use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{CardError, Hand};

use super::engine::{BoardSearch, StagePatterns};
use super::oracle::{Players, RankOracle};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse search input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Hole cards keyed by seat, the way they're written in input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatHands {
    #[serde(rename = "P1")]
    pub p1: Hand,
    #[serde(rename = "P2")]
    pub p2: Hand,
    #[serde(rename = "P3")]
    pub p3: Hand,
}

/// A complete search request.
///
/// ```json
/// {
///   "hands": { "P1": ["6C", "AH"], "P2": ["9H", "2C"], "P3": ["KS", "8D"] },
///   "hand_ranks": { "flop": [3, 1, 2], "turn": [2, 1, 3], "river": [1, 3, 2] }
/// }
/// ```
///
/// Pattern values follow the [`RankOracle`] convention: lower is stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub hands: SeatHands,
    pub hand_ranks: StagePatterns<i64>,
}

impl SearchInput {
    /// The hands and patterns used as the worked example throughout the
    /// docs.
    pub fn example() -> Result<Self, CardError> {
        Ok(Self {
            hands: SeatHands {
                p1: Hand::new_from_str("6CAH")?,
                p2: Hand::new_from_str("9H2C")?,
                p3: Hand::new_from_str("KS8D")?,
            },
            hand_ranks: StagePatterns::new((3, 1, 2), (2, 1, 3), (1, 3, 2)),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        debug!(?path, "Loading search input");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn players(&self) -> Players {
        [self.hands.p1, self.hands.p2, self.hands.p3]
    }

    /// A search scored by the [`RankOracle`].
    pub fn into_search(self) -> BoardSearch<RankOracle, i64> {
        BoardSearch::new(RankOracle, self.players(), self.hand_ranks)
    }
}
