use crate::{AgentIndex, PROTAGONIST};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Where a recursive call is in the turn order
///
/// Agents move round-robin by increasing index, wrapping back to the protagonist. The remaining
/// depth only goes down after the last agent of a round has moved.
pub struct TurnCursor {
    depth: usize,
    agent: AgentIndex,
    num_agents: usize,
}

impl TurnCursor {
    /// Construct a cursor for `agent` with `depth` rounds left
    ///
    /// Panics if `num_agents` is zero or `agent` is not below `num_agents`
    pub fn new(depth: usize, agent: AgentIndex, num_agents: usize) -> Self {
        assert!(num_agents > 0, "a game needs at least one agent");
        assert!(
            agent < num_agents,
            "agent index {} is out of range for {} agents",
            agent,
            num_agents
        );

        Self {
            depth,
            agent,
            num_agents,
        }
    }

    /// The protagonist's turn with the full depth remaining
    pub fn root(depth: usize, num_agents: usize) -> Self {
        Self::new(depth, PROTAGONIST, num_agents)
    }

    /// Rounds left before the cutoff
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whose turn it is
    pub fn agent(&self) -> AgentIndex {
        self.agent
    }

    #[allow(missing_docs)]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Is it the maximizing agent's turn
    pub fn is_protagonist(&self) -> bool {
        self.agent == PROTAGONIST
    }

    /// Is this the final move of the round. With a single agent the protagonist is also the
    /// last agent.
    pub fn is_last_in_round(&self) -> bool {
        self.agent == self.num_agents - 1
    }

    /// No more rounds to search
    pub fn is_exhausted(&self) -> bool {
        self.depth == 0
    }

    /// The cursor for the agent that moves after this one
    pub fn next(&self) -> Self {
        let depth = if self.is_last_in_round() {
            self.depth.saturating_sub(1)
        } else {
            self.depth
        };

        Self {
            depth,
            agent: (self.agent + 1) % self.num_agents,
            num_agents: self.num_agents,
        }
    }
}
