#![allow(dead_code)]

use pacman_minimax::{AgentIndex, MultiAgentGame};

/// A game where every move is remembered. Agent `i` always has `branching[i]` actions, numbered
/// from zero, and nobody ever wins or loses.
#[derive(Debug, Clone)]
pub struct PathGame {
    pub branching: Vec<u8>,
    pub history: Vec<(AgentIndex, u8)>,
}

impl PathGame {
    pub fn new(branching: Vec<u8>) -> Self {
        Self {
            branching,
            history: vec![],
        }
    }

    /// The actions taken so far, without who took them
    pub fn moves(&self) -> Vec<u8> {
        self.history.iter().map(|(_, action)| *action).collect()
    }

    /// The agents that have moved so far, in order
    pub fn movers(&self) -> Vec<AgentIndex> {
        self.history.iter().map(|(agent, _)| *agent).collect()
    }
}

impl MultiAgentGame for PathGame {
    type Action = u8;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<u8> {
        (0..self.branching[agent]).collect()
    }

    fn successor(&self, agent: AgentIndex, action: &u8) -> Self {
        let mut history = self.history.clone();
        history.push((agent, *action));

        Self {
            branching: self.branching.clone(),
            history,
        }
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        self.branching.len()
    }
}

/// A deterministic score that rarely ties between different paths
pub fn hashed_score(game: &PathGame) -> f64 {
    let hash = game
        .moves()
        .iter()
        .fold(17u64, |acc, action| {
            acc.wrapping_mul(6364136223846793005)
                .wrapping_add(u64::from(*action) + 1)
        });

    ((hash >> 40) % 64) as f64 - 32.0
}
