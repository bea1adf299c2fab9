//! Reconstruct the community cards behind a history of relative hand
//! strengths.
//!
//! Three players' hole cards are known, along with how the three hands
//! compared after the flop, the turn and the river. [`BoardSearch`] finds
//! every flop, every flop + turn and every complete board that reproduce
//! exactly that history.
//!
//! Hands are scored by a [`StrengthOracle`]. [`RankOracle`] is the default;
//! tests and other callers can plug in their own.
//!
//! # Example
//!
//! ```
//! use rs_board_search::core::Hand;
//! use rs_board_search::search::{BoardSearch, RankOracle, StagePatterns, Street};
//!
//! let players = [
//!     Hand::new_from_str("6CAH").unwrap(),
//!     Hand::new_from_str("9H2C").unwrap(),
//!     Hand::new_from_str("KS8D").unwrap(),
//! ];
//! // Lower is stronger: after the flop P2 leads, then P3, then P1.
//! let patterns = StagePatterns::new((3, 1, 2), (2, 1, 3), (1, 3, 2));
//! let result = BoardSearch::new(RankOracle, players, patterns).run().unwrap();
//!
//! for board in result.boards(Street::River) {
//!     println!("{board}");
//! }
//! ```

mod board;
mod config;
mod engine;
mod error;
mod oracle;
mod ranking;

#[cfg(feature = "serde")]
mod input;

pub use board::{Board, Street};
pub use config::SearchConfig;
pub use engine::{BoardSearch, BoardSearchBuilder, PhaseStats, SearchResult, StagePatterns};
pub use error::{EvaluationError, Result, SearchError};
pub use oracle::{strength, strength_triple, Players, RankOracle, StrengthOracle, StrengthTriple};
pub use ranking::{rankings_equal, PatternParseError, RankingPattern, RelativeOrder};

#[cfg(feature = "serde")]
pub use input::{InputError, SearchInput, SeatHands};
