use anyhow::{anyhow, Result};
use itertools::Itertools;
use pacman_minimax::{Utility, PROTAGONIST};
use rand::{seq::SliceRandom, Rng, RngCore};
use tracing::{debug, info};

use crate::{
    evaluation::reflex_evaluation, AgentFactory, BoxedAgent, Direction, PacmanAgent, PacmanGame,
};

/// Looks one move ahead and takes whichever move scores best under [reflex_evaluation],
/// picking randomly among ties
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexAgent {}

impl ReflexAgent {
    pub fn choose_action<G, R>(&self, game: &G, rng: &mut R) -> Result<Direction>
    where
        G: PacmanGame,
        R: Rng + ?Sized,
    {
        let actions = game.legal_actions(PROTAGONIST);
        let scores = actions
            .iter()
            .map(|action| reflex_evaluation(game, action))
            .collect_vec();

        for (action, score) in actions.iter().zip(&scores) {
            debug!(%action, score, "reflex score");
        }

        let best = scores
            .iter()
            .copied()
            .fold(Utility::NEG_INFINITY, Utility::max);
        let best_indices = scores.iter().positions(|s| *s == best).collect_vec();

        let chosen = *best_indices
            .choose(rng)
            .ok_or_else(|| anyhow!("pacman has no legal actions"))?;
        info!(action = %actions[chosen], score = best, "reflex agent moved");

        Ok(actions[chosen])
    }
}

impl<G: PacmanGame> PacmanAgent<G> for ReflexAgent {
    fn name(&self) -> String {
        "ReflexAgent".to_owned()
    }

    fn get_action(&self, game: &G, rng: &mut dyn RngCore) -> Result<Direction> {
        self.choose_action(game, rng)
    }
}

pub struct ReflexAgentFactory {}

impl<G: PacmanGame + 'static> AgentFactory<G> for ReflexAgentFactory {
    fn name(&self) -> String {
        "ReflexAgent".to_owned()
    }

    /// The reflex agent doesn't search, so both arguments are ignored
    fn create(&self, _eval_fn: &str, _depth: &str) -> Result<BoxedAgent<G>> {
        Ok(Box::new(ReflexAgent {}))
    }
}
