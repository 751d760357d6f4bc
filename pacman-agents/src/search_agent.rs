use anyhow::{Context, Result};
use pacman_minimax::{ActionSelector, SearchOptions, SearchVariant};
use rand::{Rng, RngCore};
use tracing::{info, info_span};

use crate::{AgentFactory, BoxedAgent, Direction, EvaluationFunction, PacmanAgent, PacmanGame};

/// A Pacman agent that searches a few rounds ahead with one of the [SearchVariant]s and scores
/// the leaves with an [EvaluationFunction]
#[derive(Debug, Clone)]
pub struct SearchAgent {
    selector: ActionSelector<EvaluationFunction>,
}

impl SearchAgent {
    pub fn new(variant: SearchVariant, evaluation: EvaluationFunction, depth: usize) -> Self {
        Self::with_options(evaluation, SearchOptions::new(variant, depth))
    }

    pub fn with_options(evaluation: EvaluationFunction, options: SearchOptions) -> Self {
        Self {
            selector: ActionSelector::new(evaluation, options),
        }
    }

    /// Build an agent from an evaluation function name and a depth, both as strings
    ///
    /// ```rust
    /// use pacman_agents::{EvaluationFunction, SearchAgent};
    /// use pacman_minimax::SearchVariant;
    ///
    /// let agent = SearchAgent::from_args(SearchVariant::Expectimax, "better", "3").unwrap();
    ///
    /// assert_eq!(agent.evaluation(), EvaluationFunction::Better);
    /// assert_eq!(agent.depth(), 3);
    ///
    /// assert!(SearchAgent::from_args(SearchVariant::Minimax, "score", "two").is_err());
    /// ```
    pub fn from_args(variant: SearchVariant, eval_fn: &str, depth: &str) -> Result<Self> {
        let evaluation = eval_fn.parse()?;
        let depth = depth
            .parse()
            .with_context(|| format!("invalid search depth {:?}", depth))?;

        Ok(Self::new(variant, evaluation, depth))
    }

    pub fn variant(&self) -> SearchVariant {
        self.selector.options().variant
    }

    pub fn depth(&self) -> usize {
        self.selector.options().depth
    }

    pub fn evaluation(&self) -> EvaluationFunction {
        *self.selector.score_function()
    }

    pub fn choose_action<G, R>(&self, game: &G, rng: &mut R) -> Result<Direction>
    where
        G: PacmanGame,
        R: Rng + ?Sized,
    {
        let decision = info_span!("search_agent", agent = %agent_name(self.variant()))
            .in_scope(|| self.selector.decide(game, rng))?;

        info!(
            action = %decision.chosen_action(),
            value = decision.value(),
            "search agent moved"
        );

        Ok(decision.into_action())
    }
}

impl<G: PacmanGame> PacmanAgent<G> for SearchAgent {
    fn name(&self) -> String {
        agent_name(self.variant()).to_owned()
    }

    fn get_action(&self, game: &G, rng: &mut dyn RngCore) -> Result<Direction> {
        self.choose_action(game, rng)
    }
}

fn agent_name(variant: SearchVariant) -> &'static str {
    match variant {
        SearchVariant::Minimax => "MinimaxAgent",
        SearchVariant::AlphaBeta => "AlphaBetaAgent",
        SearchVariant::Expectimax => "ExpectimaxAgent",
    }
}

/// Builds [SearchAgent]s for one variant. An empty argument falls back to the defaults,
/// `scoreEvaluationFunction` and a depth of 2.
pub struct SearchAgentFactory {
    variant: SearchVariant,
}

impl SearchAgentFactory {
    pub fn new(variant: SearchVariant) -> Self {
        Self { variant }
    }
}

impl<G: PacmanGame + 'static> AgentFactory<G> for SearchAgentFactory {
    fn name(&self) -> String {
        agent_name(self.variant).to_owned()
    }

    fn create(&self, eval_fn: &str, depth: &str) -> Result<BoxedAgent<G>> {
        let eval_fn = if eval_fn.is_empty() {
            "scoreEvaluationFunction"
        } else {
            eval_fn
        };
        let depth = if depth.is_empty() { "2" } else { depth };

        Ok(Box::new(SearchAgent::from_args(
            self.variant,
            eval_fn,
            depth,
        )?))
    }
}
