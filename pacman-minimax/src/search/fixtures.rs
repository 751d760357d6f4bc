use std::sync::{Arc, Mutex};

use crate::{AgentIndex, MultiAgentGame, Utility};

/// A hand written game tree. Every node is scored by the value it was built with.
#[derive(Debug, Clone)]
pub(crate) enum Shape {
    Leaf(Utility),
    Branch(Vec<Shape>),
    Scored(Utility, Vec<Shape>),
    Win(Utility, Vec<Shape>),
    Lose(Utility, Vec<Shape>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Ongoing,
    Win,
    Lose,
}

#[derive(Debug)]
struct Node {
    score: Utility,
    outcome: Outcome,
    children: Vec<usize>,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<Node>,
    generated: Mutex<Vec<usize>>,
}

/// A position in a [Shape]. Actions are child indices, and every generated child is logged so
/// tests can check what a search touched.
#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    tree: Arc<Tree>,
    node: usize,
    num_agents: usize,
}

fn flatten(shape: Shape, nodes: &mut Vec<Node>) -> usize {
    let (score, outcome, children) = match shape {
        Shape::Leaf(score) => (score, Outcome::Ongoing, vec![]),
        Shape::Branch(children) => (0.0, Outcome::Ongoing, children),
        Shape::Scored(score, children) => (score, Outcome::Ongoing, children),
        Shape::Win(score, children) => (score, Outcome::Win, children),
        Shape::Lose(score, children) => (score, Outcome::Lose, children),
    };

    let id = nodes.len();
    nodes.push(Node {
        score,
        outcome,
        children: vec![],
    });

    let child_ids = children
        .into_iter()
        .map(|child| flatten(child, nodes))
        .collect();
    nodes[id].children = child_ids;

    id
}

impl TreeGame {
    pub(crate) fn new(shape: Shape, num_agents: usize) -> Self {
        let mut nodes = vec![];
        flatten(shape, &mut nodes);

        Self {
            tree: Arc::new(Tree {
                nodes,
                generated: Mutex::new(vec![]),
            }),
            node: 0,
            num_agents,
        }
    }

    pub(crate) fn score(&self) -> Utility {
        self.tree.nodes[self.node].score
    }

    /// The ids of every node generated as a successor, in the order they were generated. Ids
    /// are assigned depth first, with the root as 0.
    pub(crate) fn generated(&self) -> Vec<usize> {
        self.tree.generated.lock().unwrap().clone()
    }
}

impl MultiAgentGame for TreeGame {
    type Action = usize;

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<usize> {
        (0..self.tree.nodes[self.node].children.len()).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &usize) -> Self {
        let child = self.tree.nodes[self.node].children[*action];
        self.tree.generated.lock().unwrap().push(child);

        Self {
            tree: self.tree.clone(),
            node: child,
            num_agents: self.num_agents,
        }
    }

    fn is_win(&self) -> bool {
        self.tree.nodes[self.node].outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.tree.nodes[self.node].outcome == Outcome::Lose
    }

    fn num_agents(&self) -> usize {
        self.num_agents
    }
}
