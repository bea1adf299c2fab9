use std::fmt::Debug;

use tracing::{debug, info, instrument, trace, warn};

use crate::core::{CardIter, Deck, Hand};

use super::board::{Board, Street};
use super::config::SearchConfig;
use super::error::{EvaluationError, Result, SearchError};
use super::oracle::{strength_triple, Players, RankOracle, StrengthOracle};
use super::ranking::RankingPattern;

/// Target relative order for each street.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StagePatterns<T> {
    pub flop: RankingPattern<T>,
    pub turn: RankingPattern<T>,
    pub river: RankingPattern<T>,
}

impl<T> StagePatterns<T> {
    pub fn new(
        flop: impl Into<RankingPattern<T>>,
        turn: impl Into<RankingPattern<T>>,
        river: impl Into<RankingPattern<T>>,
    ) -> Self {
        Self {
            flop: flop.into(),
            turn: turn.into(),
            river: river.into(),
        }
    }

    pub fn for_street(&self, street: Street) -> &RankingPattern<T> {
        match street {
            Street::Flop => &self.flop,
            Street::Turn => &self.turn,
            Street::River => &self.river,
        }
    }
}

/// How much one phase looked at and kept.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseStats {
    pub street: Street,
    pub candidates: usize,
    pub accepted: usize,
}

/// Everything a finished search found.
///
/// All three levels are kept: `turns` only extends boards from `flops`
/// and `rivers` only extends boards from `turns`. Within each level boards
/// are in enumeration order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    /// Accepted three card flops.
    pub flops: Vec<Board>,
    /// Accepted flop + turn boards.
    pub turns: Vec<Board>,
    /// Accepted complete boards.
    pub rivers: Vec<Board>,
    /// One entry per phase, flop first.
    pub stats: Vec<PhaseStats>,
}

impl SearchResult {
    /// The accepted boards for a street.
    pub fn boards(&self, street: Street) -> &[Board] {
        match street {
            Street::Flop => &self.flops,
            Street::Turn => &self.turns,
            Street::River => &self.rivers,
        }
    }
}

/// Finds every flop, turn and river that reproduce a given history of
/// relative hand strengths between three players.
///
/// The search runs in three phases. The flop phase tries every three card
/// combination left after the hole cards are taken out. The turn phase
/// tries every remaining card on top of each accepted flop, and the river
/// phase does the same on top of each accepted turn. A candidate is kept
/// when the oracle's strengths for P1, P2 and P3 order the players the way
/// that street's [`RankingPattern`] does.
///
/// # Example
///
/// ```
/// use rs_board_search::core::Hand;
/// use rs_board_search::search::{BoardSearch, RankOracle, StagePatterns};
///
/// let players = [
///     Hand::new_from_str("6CAH").unwrap(),
///     Hand::new_from_str("9H2C").unwrap(),
///     Hand::new_from_str("KS8D").unwrap(),
/// ];
/// let patterns = StagePatterns::new((3, 1, 2), (2, 1, 3), (1, 3, 2));
/// let search = BoardSearch::new(RankOracle, players, patterns);
///
/// let deck = search.remaining_deck().unwrap();
/// let flops = search.search_flops(&deck).unwrap();
/// assert!(!flops.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BoardSearch<O = RankOracle, T = i64> {
    oracle: O,
    players: Players,
    patterns: StagePatterns<T>,
    config: SearchConfig,
}

impl<O, T> BoardSearch<O, T>
where
    O: StrengthOracle,
    T: Ord + Sync + Debug,
{
    /// Create a search with the default [`SearchConfig`].
    pub fn new(oracle: O, players: Players, patterns: StagePatterns<T>) -> Self {
        Self {
            oracle,
            players,
            patterns,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The oracle scoring every hand.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Hole cards for P1, P2 and P3.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The target pattern for each street.
    pub fn patterns(&self) -> &StagePatterns<T> {
        &self.patterns
    }

    /// Get the search configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The full deck without anybody's hole cards.
    ///
    /// Fails if two players were given the same card.
    pub fn remaining_deck(&self) -> Result<Deck> {
        let hole_cards = self.players.iter().flat_map(|hand| hand.iter());
        Ok(Deck::default().remove(hole_cards)?)
    }

    /// Score `board` for all three players and compare against `pattern`.
    pub fn accepts(&self, board: &Board, pattern: &RankingPattern<T>) -> Result<bool> {
        let triple = strength_triple(&self.oracle, &self.players, board.cards())?;
        Ok(pattern.matches(&triple))
    }

    /// Phase one: every flop out of `deck` that matches the flop pattern.
    ///
    /// Candidates are scored as they are enumerated. Only accepted flops are
    /// kept, in enumeration order.
    #[instrument(level = "debug", skip_all, fields(deck_size = deck.len()))]
    pub fn search_flops(&self, deck: &Deck) -> Result<Vec<Board>> {
        let pattern = self.patterns.for_street(Street::Flop);
        let flat = deck.flatten();
        let cards = &flat[..];

        // One group per leading card. Walking the groups in order gives the
        // same sequence as every three card combination of `cards`.
        let leads: Vec<usize> = (0..cards.len()).collect();
        self.filter_groups(Street::Flop, choose_three(cards.len()), &leads, |&lead| {
            let flops = CardIter::new(&cards[lead + 1..], 2)
                .map(|rest| Board::from_flop([cards[lead], rest[0], rest[1]]));
            self.keep_matching(pattern, flops)
        })
    }

    /// Phase two or three: deal one more card on top of every board in
    /// `prefixes` and keep the ones that match the pattern for `street`.
    ///
    /// Every prefix has to be one street short of `street`. The new card
    /// comes from `deck` minus the prefix's own cards.
    #[instrument(level = "debug", skip(self, deck, prefixes), fields(prefixes = prefixes.len()))]
    pub fn extend_boards(
        &self,
        deck: &Deck,
        prefixes: &[Board],
        street: Street,
    ) -> Result<Vec<Board>> {
        if let Some(prefix) = prefixes
            .iter()
            .find(|prefix| prefix.len() + 1 != street.public_cards())
        {
            return Err(EvaluationError::InvalidCardCount {
                count: 2 + prefix.len() + 1,
            }
            .into());
        }

        let pattern = self.patterns.for_street(street);
        let per_prefix = deck.len().saturating_sub(street.public_cards() - 1);
        self.filter_groups(street, prefixes.len() * per_prefix, prefixes, |prefix| {
            let remaining = deck.remove(prefix.cards().iter().copied())?;
            self.keep_matching(pattern, remaining.iter().map(|card| prefix.extend(card)))
        })
    }

    /// Run all three phases.
    ///
    /// Each phase only starts once the previous one has scored all of its
    /// candidates. The first error stops the search.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&self) -> Result<SearchResult> {
        self.config.validate()?;
        self.warn_on_inconsistent_patterns();

        let deck = self.remaining_deck()?;
        let deck_size = deck.len();
        debug!(deck_size, "Starting board search");

        let flops = self.search_flops(&deck)?;
        let turns = self.extend_boards(&deck, &flops, Street::Turn)?;
        let rivers = self.extend_boards(&deck, &turns, Street::River)?;

        let stats = vec![
            PhaseStats {
                street: Street::Flop,
                candidates: choose_three(deck_size),
                accepted: flops.len(),
            },
            PhaseStats {
                street: Street::Turn,
                candidates: flops.len() * deck_size.saturating_sub(3),
                accepted: turns.len(),
            },
            PhaseStats {
                street: Street::River,
                candidates: turns.len() * deck_size.saturating_sub(4),
                accepted: rivers.len(),
            },
        ];

        info!(
            flops = flops.len(),
            turns = turns.len(),
            rivers = rivers.len(),
            "Board search complete"
        );

        Ok(SearchResult {
            flops,
            turns,
            rivers,
            stats,
        })
    }

    fn warn_on_inconsistent_patterns(&self) {
        for street in [Street::Flop, Street::Turn, Street::River] {
            let pattern = self.patterns.for_street(street);
            if !pattern.relative_order().is_consistent() {
                warn!(
                    %street,
                    pattern = ?pattern.values(),
                    "Ranking pattern is not a possible order, nothing will match it"
                );
            }
        }
    }

    /// Score one group of candidates, keeping the matches in order.
    fn keep_matching<I>(&self, pattern: &RankingPattern<T>, candidates: I) -> Result<Vec<Board>>
    where
        I: IntoIterator<Item = Board>,
    {
        let mut accepted = Vec::new();
        for board in candidates {
            if self.accepts(&board, pattern)? {
                trace!(%board, "Accepted board");
                accepted.push(board);
            }
        }
        Ok(accepted)
    }

    /// Run `score_group` over every group and join the accepted boards in
    /// group order.
    fn filter_groups<G, F>(
        &self,
        street: Street,
        candidates: usize,
        groups: &[G],
        score_group: F,
    ) -> Result<Vec<Board>>
    where
        G: Sync,
        F: Fn(&G) -> Result<Vec<Board>> + Sync + Send,
    {
        info!(%street, candidates, "Searching for possible boards");

        let per_group = if self.config.use_parallel(candidates) {
            score_parallel(groups, score_group)?
        } else {
            groups.iter().map(score_group).collect::<Result<Vec<_>>>()?
        };
        let accepted: Vec<Board> = per_group.into_iter().flatten().collect();

        info!(
            %street,
            candidates,
            accepted = accepted.len(),
            "Phase complete"
        );
        Ok(accepted)
    }
}

/// Scores the groups on the rayon pool. Each group fills its own slot and
/// the slots come back in group order.
#[cfg(feature = "parallel")]
fn score_parallel<G, F>(groups: &[G], score_group: F) -> Result<Vec<Vec<Board>>>
where
    G: Sync,
    F: Fn(&G) -> Result<Vec<Board>> + Sync + Send,
{
    use rayon::prelude::*;

    groups.par_iter().map(score_group).collect()
}

#[cfg(not(feature = "parallel"))]
fn score_parallel<G, F>(groups: &[G], score_group: F) -> Result<Vec<Vec<Board>>>
where
    G: Sync,
    F: Fn(&G) -> Result<Vec<Board>> + Sync + Send,
{
    groups.iter().map(score_group).collect()
}

fn choose_three(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}

/// Builder for [`BoardSearch`].
///
/// # Example
///
/// ```
/// use rs_board_search::core::Hand;
/// use rs_board_search::search::{BoardSearch, BoardSearchBuilder, RankingPattern, SearchConfig};
///
/// let search: BoardSearch = BoardSearchBuilder::new()
///     .p1(Hand::new_from_str("6CAH").unwrap())
///     .p2(Hand::new_from_str("9H2C").unwrap())
///     .p3(Hand::new_from_str("KS8D").unwrap())
///     .flop(RankingPattern::new(3, 1, 2))
///     .turn(RankingPattern::new(2, 1, 3))
///     .river(RankingPattern::new(1, 3, 2))
///     .config(SearchConfig::sequential())
///     .build()
///     .unwrap();
/// assert!(!search.config().parallel);
/// ```
#[derive(Debug)]
pub struct BoardSearchBuilder<O = RankOracle, T = i64> {
    oracle: Option<O>,
    hands: [Option<Hand>; 3],
    flop: Option<RankingPattern<T>>,
    turn: Option<RankingPattern<T>>,
    river: Option<RankingPattern<T>>,
    config: Option<SearchConfig>,
}

impl<O, T> Default for BoardSearchBuilder<O, T> {
    fn default() -> Self {
        Self {
            oracle: None,
            hands: [None; 3],
            flop: None,
            turn: None,
            river: None,
            config: None,
        }
    }
}

impl<O, T> BoardSearchBuilder<O, T>
where
    O: StrengthOracle + Default,
    T: Ord + Sync + Debug,
{
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this oracle instead of `O::default()`.
    pub fn oracle(mut self, oracle: O) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Set the hole cards of all three players at once.
    pub fn hands(mut self, players: Players) -> Self {
        self.hands = players.map(Some);
        self
    }

    /// Set P1's hole cards
    pub fn p1(mut self, hand: Hand) -> Self {
        self.hands[0] = Some(hand);
        self
    }

    /// Set P2's hole cards
    pub fn p2(mut self, hand: Hand) -> Self {
        self.hands[1] = Some(hand);
        self
    }

    /// Set P3's hole cards
    pub fn p3(mut self, hand: Hand) -> Self {
        self.hands[2] = Some(hand);
        self
    }

    /// Set the patterns for all three streets at once.
    pub fn patterns(mut self, patterns: StagePatterns<T>) -> Self {
        self.flop = Some(patterns.flop);
        self.turn = Some(patterns.turn);
        self.river = Some(patterns.river);
        self
    }

    /// Set the pattern expected after the flop
    pub fn flop(mut self, pattern: RankingPattern<T>) -> Self {
        self.flop = Some(pattern);
        self
    }

    /// Set the pattern expected after the turn
    pub fn turn(mut self, pattern: RankingPattern<T>) -> Self {
        self.turn = Some(pattern);
        self
    }

    /// Set the pattern expected after the river
    pub fn river(mut self, pattern: RankingPattern<T>) -> Self {
        self.river = Some(pattern);
        self
    }

    /// Set the search configuration
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the search, checking that nothing is missing.
    pub fn build(self) -> Result<BoardSearch<O, T>> {
        let players = match self.hands {
            [Some(p1), Some(p2), Some(p3)] => [p1, p2, p3],
            _ => return Err(SearchError::NeedHands),
        };
        let patterns = match (self.flop, self.turn, self.river) {
            (Some(flop), Some(turn), Some(river)) => StagePatterns { flop, turn, river },
            _ => return Err(SearchError::NeedPatterns),
        };
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(BoardSearch {
            oracle: self.oracle.unwrap_or_default(),
            players,
            patterns,
            config,
        })
    }
}
