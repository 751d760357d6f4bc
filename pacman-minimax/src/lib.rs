#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements adversarial tree search for multi-agent pursuit games like Pacman. One
//! agent (the protagonist, always index 0) maximizes a utility, and every other agent moves in
//! turn after it. You provide a game that implements [MultiAgentGame] and a 'scoring' function
//! that turns a given state into a [Utility].
//!
//! Three searches are available, see [SearchVariant] and the [search] module:
//!
//! - minimax, where every adversary minimizes
//! - minimax with alpha-beta pruning
//! - expectimax, where every adversary moves uniformly at random
//!
//! [ActionSelector] drives a search from the root and picks the protagonist's action.
//! [select_action] is a shorthand for the common case.

mod game;
pub use game::{AgentIndex, MultiAgentGame, PROTAGONIST};

mod score;
pub use score::{Scorable, Utility};

mod error;
pub use error::{SearchError, UnknownVariant};

mod instruments;
pub use instruments::{Instruments, NodeCounter, SearchInstruments};

mod options;
pub use options::{SearchOptions, SearchVariant};

pub mod search;

mod decision;
pub use decision::RootDecision;

mod selector;
pub use selector::{select_action, ActionSelector};
