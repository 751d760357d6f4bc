//! The recursive tree searches
//!
//! All three variants walk the tree the same way. Agents move round-robin, depth drops after the
//! last adversary of a round (see [TurnCursor]), and a node is a leaf when there is no depth left
//! or the protagonist has already won or lost. They only differ in how an adversary's children
//! are combined:
//!
//! - [SearchVariant::Minimax] takes the minimum
//! - [SearchVariant::AlphaBeta] takes the minimum, skipping children that can't change the result
//! - [SearchVariant::Expectimax] takes the mean, as if the adversary moved uniformly at random
//!
//! The protagonist always takes the maximum.
//!
//! ```rust
//! use pacman_minimax::{search::{SearchContext, TurnCursor}, MultiAgentGame, SearchVariant};
//!
//! // A countdown that both agents take turns decrementing by 1 or 2
//! #[derive(Clone)]
//! struct Countdown(u32);
//!
//! impl MultiAgentGame for Countdown {
//!     type Action = u32;
//!
//!     fn legal_actions(&self, _agent: usize) -> Vec<u32> {
//!         (1..=2).filter(|n| *n <= self.0).collect()
//!     }
//!
//!     fn successor(&self, _agent: usize, action: &u32) -> Self {
//!         Countdown(self.0 - action)
//!     }
//!
//!     fn is_win(&self) -> bool { false }
//!     fn is_lose(&self) -> bool { self.0 == 0 }
//!     fn num_agents(&self) -> usize { 2 }
//! }
//!
//! let score = |game: &Countdown| f64::from(game.0);
//! let context = SearchContext::new(&score);
//!
//! let value = context
//!     .value(SearchVariant::AlphaBeta, &Countdown(5), TurnCursor::root(1, 2))
//!     .unwrap();
//!
//! // We take 1, then the opponent takes 2
//! assert_eq!(value, 2.0);
//! ```

use derivative::Derivative;

use crate::{
    instruments::{Instruments, SearchInstruments},
    MultiAgentGame, Scorable, SearchError, SearchVariant, Utility,
};

mod cursor;
pub use cursor::TurnCursor;

pub(crate) mod alpha_beta;
pub(crate) mod expectimax;
pub(crate) mod minimax;

#[cfg(test)]
pub(crate) mod fixtures;

/// What the search should do with a node
pub(crate) enum Expansion<Action> {
    /// Stop here with this utility
    Leaf(Utility),
    /// Recurse into each of these actions, in order
    Actions(Vec<Action>),
}

#[derive(Derivative)]
#[derivative(Debug(bound = "InstrumentsType: std::fmt::Debug"))]
/// Everything a recursive call needs besides the node itself
///
/// This is a cheap borrowed view so it is passed by reference through the whole recursion.
pub struct SearchContext<'a, ScorableType, InstrumentsType = Instruments> {
    #[derivative(Debug = "ignore")]
    score_function: &'a ScorableType,
    instruments: &'a InstrumentsType,
    strict_adapter: bool,
}

impl<'a, ScorableType> SearchContext<'a, ScorableType, Instruments> {
    /// A context that scores leaves with `score_function` and doesn't count anything
    pub fn new(score_function: &'a ScorableType) -> Self {
        Self {
            score_function,
            instruments: &Instruments {},
            strict_adapter: false,
        }
    }
}

impl<'a, ScorableType, InstrumentsType> SearchContext<'a, ScorableType, InstrumentsType>
where
    InstrumentsType: SearchInstruments,
{
    /// Report each generated successor and evaluated leaf to `instruments`
    pub fn with_instruments<Other: SearchInstruments>(
        self,
        instruments: &'a Other,
    ) -> SearchContext<'a, ScorableType, Other> {
        SearchContext {
            score_function: self.score_function,
            instruments,
            strict_adapter: self.strict_adapter,
        }
    }

    /// Fail with [SearchError::EmptyActionSet] instead of scoring non-terminal states that have
    /// no legal actions
    pub fn strict(mut self, strict_adapter: bool) -> Self {
        self.strict_adapter = strict_adapter;
        self
    }

    /// The utility of `game` for the protagonist, when it is `cursor.agent()`'s turn
    ///
    /// For [SearchVariant::AlphaBeta] the search starts with the full `(-inf, +inf)` window, so
    /// the result is exact and matches [SearchVariant::Minimax].
    pub fn value<GameType>(
        &self,
        variant: SearchVariant,
        game: &GameType,
        cursor: TurnCursor,
    ) -> Result<Utility, SearchError>
    where
        GameType: MultiAgentGame,
        ScorableType: Scorable<GameType>,
    {
        match variant {
            SearchVariant::Minimax => minimax::value(self, game, cursor),
            SearchVariant::AlphaBeta => {
                alpha_beta::value(self, game, cursor, Utility::NEG_INFINITY, Utility::INFINITY)
            }
            SearchVariant::Expectimax => expectimax::value(self, game, cursor),
        }
    }

    /// Alpha-beta search inside an explicit `(alpha, beta)` window
    ///
    /// If the true value lies outside the window the result is only a bound on it: at most
    /// `alpha` when the value is too low, at least `beta` when it is too high.
    pub fn alpha_beta_value<GameType>(
        &self,
        game: &GameType,
        cursor: TurnCursor,
        alpha: Utility,
        beta: Utility,
    ) -> Result<Utility, SearchError>
    where
        GameType: MultiAgentGame,
        ScorableType: Scorable<GameType>,
    {
        alpha_beta::value(self, game, cursor, alpha, beta)
    }

    /// Apply the evaluation function to a leaf
    pub(crate) fn leaf<GameType>(&self, game: &GameType) -> Utility
    where
        ScorableType: Scorable<GameType>,
    {
        self.instruments.observe_leaf();
        self.score_function.score(game)
    }

    /// The cutoff test shared by every variant
    ///
    /// A node is a leaf when the depth is used up or the game is over. A node where the moving
    /// agent has no actions is also a leaf, unless we were asked to be strict about it.
    pub(crate) fn expand<GameType>(
        &self,
        game: &GameType,
        cursor: TurnCursor,
    ) -> Result<Expansion<GameType::Action>, SearchError>
    where
        GameType: MultiAgentGame,
        ScorableType: Scorable<GameType>,
    {
        if cursor.is_exhausted() || game.is_terminal() {
            return Ok(Expansion::Leaf(self.leaf(game)));
        }

        let actions = game.legal_actions(cursor.agent());
        if actions.is_empty() {
            if self.strict_adapter {
                return Err(SearchError::EmptyActionSet {
                    agent: cursor.agent(),
                });
            }

            return Ok(Expansion::Leaf(self.leaf(game)));
        }

        Ok(Expansion::Actions(actions))
    }

    /// Generate the state after the current agent plays `action`
    pub(crate) fn child<GameType>(
        &self,
        game: &GameType,
        cursor: TurnCursor,
        action: &GameType::Action,
    ) -> GameType
    where
        GameType: MultiAgentGame,
    {
        self.instruments.observe_successor(cursor.agent());
        game.successor(cursor.agent(), action)
    }
}

impl<'a, ScorableType, InstrumentsType> Clone for SearchContext<'a, ScorableType, InstrumentsType> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, ScorableType, InstrumentsType> Copy for SearchContext<'a, ScorableType, InstrumentsType> {}
