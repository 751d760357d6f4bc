use thiserror::Error;

use crate::AgentIndex;

/// Errors that can occur while searching
///
/// These are all contract violations by the caller or the game adapter. A search is a pure
/// computation so there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The protagonist has nothing to do at the root. This normally means the game is already
    /// over and the caller should not have asked for a move.
    #[error("the protagonist has no legal actions at the root")]
    NoLegalActions,

    /// An adversary or the protagonist had no legal actions in a state that was neither won nor
    /// lost. Only reported when [crate::SearchOptions::strict_adapter] is enabled.
    #[error("agent {agent} has no legal actions in a non-terminal state")]
    EmptyActionSet {
        /// The agent whose turn it was
        agent: AgentIndex,
    },

    /// The game reported zero agents
    #[error("the game must have at least one agent")]
    NoAgents,
}

/// Returned when a string doesn't name a [crate::SearchVariant]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search variant '{0}'")]
pub struct UnknownVariant(pub String);
