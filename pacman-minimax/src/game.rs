use std::fmt::Debug;

/// Index of an agent in the turn order. The protagonist is always [PROTAGONIST], every other
/// index is an adversary.
pub type AgentIndex = usize;

/// The maximizing agent. It always moves first in a round.
pub const PROTAGONIST: AgentIndex = 0;

/// The contract the search engine needs from a game state
///
/// The engine never mutates a state, it only asks for successors. Implementations are expected to
/// be pure: calling [MultiAgentGame::successor] twice with the same arguments should produce
/// equivalent states.
pub trait MultiAgentGame: Sized {
    /// The type of a single move made by one agent
    type Action: Clone + Debug;

    /// All the legal actions for the given agent in this state
    ///
    /// This should only be empty for states where [MultiAgentGame::is_win] or
    /// [MultiAgentGame::is_lose] is true.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state that results from `agent` taking `action`
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    /// Has the protagonist won
    fn is_win(&self) -> bool;

    /// Has the protagonist lost
    fn is_lose(&self) -> bool;

    /// The number of agents taking turns, including the protagonist. Must be at least 1
    fn num_agents(&self) -> usize;

    /// Terminal states are never expanded, no matter how much depth is left
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
