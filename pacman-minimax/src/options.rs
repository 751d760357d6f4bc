use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
/// Which tree search to run
pub enum SearchVariant {
    /// Every adversary minimizes the protagonist's utility
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning. Picks the same value as [SearchVariant::Minimax], but
    /// breaks ties at the root by keeping the first best action instead of choosing randomly
    #[serde(alias = "alpha_beta", alias = "alpha-beta")]
    AlphaBeta,
    /// Every adversary picks uniformly at random from its legal actions
    Expectimax,
}

impl SearchVariant {
    /// All the variants, in a stable order
    pub fn all() -> [SearchVariant; 3] {
        [Self::Minimax, Self::AlphaBeta, Self::Expectimax]
    }

    /// Whether ties between equally good root actions are broken with the random source
    pub fn breaks_ties_randomly(&self) -> bool {
        !matches!(self, Self::AlphaBeta)
    }
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minimax => "minimax",
            Self::AlphaBeta => "alphabeta",
            Self::Expectimax => "expectimax",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for SearchVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Self::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Self::AlphaBeta),
            "expectimax" => Ok(Self::Expectimax),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Optional properties that can be defined for an [crate::ActionSelector]
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use pacman_minimax::{SearchOptions, SearchVariant};
///
/// let defaults: SearchOptions = Default::default();
///
/// assert_eq!(defaults.depth, 2);
/// assert_eq!(defaults.variant, SearchVariant::Minimax);
/// assert!(!defaults.parallel_root);
/// assert!(!defaults.strict_adapter);
/// ```
pub struct SearchOptions {
    /// How many full rounds to look ahead. A round is one move by every agent
    ///
    /// Defaults to 2
    pub depth: usize,
    /// Which search to run
    pub variant: SearchVariant,
    /// Evaluate the subtree under each root action on the rayon thread pool
    ///
    /// Results are gathered in root action order before a move is picked, so a seeded random
    /// source picks the same move either way.
    pub parallel_root: bool,
    /// Report [crate::SearchError::EmptyActionSet] when an agent has no legal actions in a state
    /// that isn't won or lost. When disabled such states are scored as leaves.
    pub strict_adapter: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: 2,
            variant: SearchVariant::Minimax,
            parallel_root: false,
            strict_adapter: false,
        }
    }
}

impl SearchOptions {
    /// Options for the given variant and depth, everything else defaulted
    pub fn new(variant: SearchVariant, depth: usize) -> Self {
        Self {
            variant,
            depth,
            ..Default::default()
        }
    }
}
