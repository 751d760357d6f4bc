use std::fmt::Debug;

use itertools::Itertools;
use text_trees::StringTreeNode;

use crate::{SearchVariant, Utility};

#[derive(Debug, Clone)]
/// This is returned from [crate::ActionSelector::decide]
/// It contains every root action we looked at, the utility the search gave it, and which one we
/// picked
///
/// For [SearchVariant::AlphaBeta] only the chosen utility is guaranteed to be exact. The search
/// stops looking at an action as soon as it knows the action can't beat the best one so far,
/// so the other utilities may only be upper bounds.
pub struct RootDecision<Action> {
    variant: SearchVariant,
    depth: usize,
    options: Vec<(Action, Utility)>,
    chosen: usize,
}

impl<Action: Debug> RootDecision<Action> {
    pub(crate) fn new(
        variant: SearchVariant,
        depth: usize,
        options: Vec<(Action, Utility)>,
        chosen: usize,
    ) -> Self {
        debug_assert!(chosen < options.len());

        Self {
            variant,
            depth,
            options,
            chosen,
        }
    }

    /// The action to play
    pub fn chosen_action(&self) -> &Action {
        &self.options[self.chosen].0
    }

    /// The utility of the chosen action
    pub fn value(&self) -> Utility {
        self.options[self.chosen].1
    }

    /// Position of the chosen action in [RootDecision::options]
    pub fn chosen_index(&self) -> usize {
        self.chosen
    }

    /// Every root action in the order the game listed them, with its utility
    pub fn options(&self) -> &[(Action, Utility)] {
        &self.options
    }

    /// Which search produced this decision
    pub fn variant(&self) -> SearchVariant {
        self.variant
    }

    /// How many rounds were searched below the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Positions of every action that shares the highest utility
    pub fn best_indices(&self) -> Vec<usize> {
        let best = self
            .options
            .iter()
            .map(|(_, value)| *value)
            .fold(Utility::NEG_INFINITY, Utility::max);

        self.options
            .iter()
            .positions(|(_, value)| *value == best)
            .collect()
    }

    /// Consume the decision, keeping only the chosen action
    pub fn into_action(mut self) -> Action {
        self.options.swap_remove(self.chosen).0
    }

    /// This returns a visual representation of the root of the search
    /// It shows the chosen utility, and the utility of every root action with the chosen one
    /// marked
    pub fn to_text_tree(&self) -> String {
        let mut root = StringTreeNode::new(format!(
            "{} depth {}: {:?}",
            self.variant,
            self.depth,
            self.value()
        ));

        for (i, (action, value)) in self.options.iter().enumerate() {
            let marker = if i == self.chosen { " (chosen)" } else { "" };
            root.push_node(StringTreeNode::new(format!(
                "{:?} {:?}{}",
                action, value, marker
            )));
        }

        format!("{}", root)
    }
}
