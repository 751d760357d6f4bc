use std::sync::atomic::{AtomicUsize, Ordering};

use crate::AgentIndex;

/// Hooks the search engine calls while it walks the tree
///
/// Implementations must be `Sync` so the same instruments can be shared by the parallel root
/// search.
pub trait SearchInstruments: Sync {
    /// Called right before a successor is generated for `agent`
    fn observe_successor(&self, agent: AgentIndex);

    /// Called every time the evaluation function is applied to a leaf
    fn observe_leaf(&self);
}

#[derive(Debug, Clone, Copy, Default)]
/// Any empty struct that implements `SearchInstruments` as a no-op which can be used when you
/// don't want to count anything
pub struct Instruments {}

impl SearchInstruments for Instruments {
    fn observe_successor(&self, _agent: AgentIndex) {}

    fn observe_leaf(&self) {}
}

#[derive(Debug, Default)]
/// Counts how much of the tree a search visited
pub struct NodeCounter {
    successors: AtomicUsize,
    leaves: AtomicUsize,
}

impl NodeCounter {
    /// A counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of successor states generated so far
    pub fn successors(&self) -> usize {
        self.successors.load(Ordering::Relaxed)
    }

    /// The number of leaves evaluated so far
    pub fn leaves(&self) -> usize {
        self.leaves.load(Ordering::Relaxed)
    }

    /// Reset both counts to zero
    pub fn reset(&self) {
        self.successors.store(0, Ordering::Relaxed);
        self.leaves.store(0, Ordering::Relaxed);
    }
}

impl SearchInstruments for NodeCounter {
    fn observe_successor(&self, _agent: AgentIndex) {
        self.successors.fetch_add(1, Ordering::Relaxed);
    }

    fn observe_leaf(&self) {
        self.leaves.fetch_add(1, Ordering::Relaxed);
    }
}

impl<T: SearchInstruments + ?Sized> SearchInstruments for &T {
    fn observe_successor(&self, agent: AgentIndex) {
        (**self).observe_successor(agent)
    }

    fn observe_leaf(&self) {
        (**self).observe_leaf()
    }
}
