use thiserror::Error;

use crate::core::{Card, DeckError};

/// The hand evaluator was handed something it can't score.
///
/// The search never builds such inputs itself, so this points at a bug
/// rather than bad luck.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EvaluationError {
    #[error("Expected 5, 6 or 7 cards to evaluate, got {count}")]
    InvalidCardCount { count: usize },

    #[error("Card {0} appears more than once in the evaluated cards")]
    DuplicateCard(Card),
}

/// Everything that can stop a board search.
///
/// None of these are retried. The first one aborts the search and no
/// partial results are handed back.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SearchError {
    #[error("Invalid deck state: {0}")]
    InvalidState(#[from] DeckError),

    #[error("Hand evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Configuration validation error: {0}")]
    InvalidConfig(String),

    #[error("Builder needs the hole cards of all three players")]
    NeedHands,

    #[error("Builder needs ranking patterns for flop, turn and river")]
    NeedPatterns,
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
