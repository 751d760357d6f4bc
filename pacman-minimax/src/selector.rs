use derivative::Derivative;
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::{
    instruments::{Instruments, SearchInstruments},
    search::{SearchContext, TurnCursor},
    MultiAgentGame, RootDecision, Scorable, SearchError, SearchOptions, SearchVariant, Utility,
    PROTAGONIST,
};

#[derive(Derivative, Clone)]
#[derivative(Debug(bound = "InstrumentsType: std::fmt::Debug"))]
/// This is the struct that wraps a scoring function and a set of [SearchOptions] and picks the
/// protagonist's move for a given game state
///
/// The root of the tree is always the protagonist's turn. We generate every root successor
/// ourselves and run the configured search below each one, starting with agent 1.
///
/// It also outputs traces using the [tracing] crate.
pub struct ActionSelector<ScorableType, InstrumentsType = Instruments> {
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    options: SearchOptions,
    instruments: InstrumentsType,
}

impl<ScorableType> ActionSelector<ScorableType, Instruments> {
    /// Construct a new `ActionSelector`
    ///
    /// [SearchOptions] implements [Default] so you can override specific options and rely on
    /// defaults for the rest.
    ///
    /// ```rust
    /// use pacman_minimax::{ActionSelector, MultiAgentGame, SearchOptions, SearchVariant};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// // Pacman and one ghost each pick a number, the score is Pacman's minus the ghost's
    /// #[derive(Clone)]
    /// struct Pick { moves: Vec<i32> }
    ///
    /// impl MultiAgentGame for Pick {
    ///     type Action = i32;
    ///
    ///     fn legal_actions(&self, _agent: usize) -> Vec<i32> { vec![1, 2, 3] }
    ///
    ///     fn successor(&self, _agent: usize, action: &i32) -> Self {
    ///         let mut moves = self.moves.clone();
    ///         moves.push(*action);
    ///         Pick { moves }
    ///     }
    ///
    ///     fn is_win(&self) -> bool { false }
    ///     fn is_lose(&self) -> bool { false }
    ///     fn num_agents(&self) -> usize { 2 }
    /// }
    ///
    /// fn score(game: &Pick) -> f64 {
    ///     let mine: i32 = game.moves.iter().step_by(2).sum();
    ///     let theirs: i32 = game.moves.iter().skip(1).step_by(2).sum();
    ///     f64::from(mine - theirs)
    /// }
    ///
    /// let selector = ActionSelector::new(
    ///     score,
    ///     SearchOptions {
    ///         depth: 1,
    ///         variant: SearchVariant::AlphaBeta,
    ///         ..Default::default()
    ///     },
    /// );
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let decision = selector.decide(&Pick { moves: vec![] }, &mut rng).unwrap();
    ///
    /// assert_eq!(*decision.chosen_action(), 3);
    /// assert_eq!(decision.value(), 0.0);
    /// ```
    pub fn new(score_function: ScorableType, options: SearchOptions) -> Self {
        Self {
            score_function,
            options,
            instruments: Instruments {},
        }
    }
}

impl<ScorableType, InstrumentsType> ActionSelector<ScorableType, InstrumentsType>
where
    InstrumentsType: SearchInstruments,
{
    /// Report every generated successor and evaluated leaf to `instruments`
    pub fn with_instruments<Other: SearchInstruments>(
        self,
        instruments: Other,
    ) -> ActionSelector<ScorableType, Other> {
        ActionSelector {
            score_function: self.score_function,
            options: self.options,
            instruments,
        }
    }

    #[allow(missing_docs)]
    pub fn score_function(&self) -> &ScorableType {
        &self.score_function
    }

    #[allow(missing_docs)]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    #[allow(missing_docs)]
    pub fn instruments(&self) -> &InstrumentsType {
        &self.instruments
    }

    /// Pick the next action for the protagonist
    ///
    /// This is [ActionSelector::decide] without the bookkeeping
    pub fn choose_action<GameType, RngType>(
        &self,
        game: &GameType,
        rng: &mut RngType,
    ) -> Result<GameType::Action, SearchError>
    where
        GameType: MultiAgentGame + Sync,
        GameType::Action: Send + Sync,
        ScorableType: Scorable<GameType> + Sync,
        RngType: Rng + ?Sized,
    {
        self.decide(game, rng).map(RootDecision::into_action)
    }

    /// Run the configured search under every root action and pick one
    ///
    /// For [SearchVariant::Minimax] and [SearchVariant::Expectimax] an action is drawn uniformly
    /// from all the actions tied for the highest utility, using `rng`.
    ///
    /// [SearchVariant::AlphaBeta] never uses `rng`. The running alpha bound is threaded across
    /// the root actions and an action only replaces the current pick when it is strictly better,
    /// so the first of several equally good actions wins, unlike the other two variants.
    ///
    /// Returns [SearchError::NoLegalActions] if the protagonist has nothing to do at the root.
    pub fn decide<GameType, RngType>(
        &self,
        game: &GameType,
        rng: &mut RngType,
    ) -> Result<RootDecision<GameType::Action>, SearchError>
    where
        GameType: MultiAgentGame + Sync,
        GameType::Action: Send + Sync,
        ScorableType: Scorable<GameType> + Sync,
        RngType: Rng + ?Sized,
    {
        let num_agents = game.num_agents();
        if num_agents == 0 {
            return Err(SearchError::NoAgents);
        }

        let actions = game.legal_actions(PROTAGONIST);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let variant = self.options.variant;
        let depth = self.options.depth;

        let span = info_span!(
            "select_action",
            %variant,
            depth,
            num_agents,
            num_actions = actions.len(),
            chosen_value = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
        );
        let _entered = span.enter();

        let root = TurnCursor::root(depth, num_agents);
        let context = SearchContext::new(&self.score_function)
            .with_instruments(&self.instruments)
            .strict(self.options.strict_adapter);

        let (values, chosen) = match variant {
            SearchVariant::AlphaBeta if !self.options.parallel_root => {
                alpha_beta_root(&context, game, root, &actions)?
            }
            SearchVariant::AlphaBeta => {
                let values = self.root_values(&context, game, root, &actions)?;
                let chosen = first_best(&values);

                (values, chosen)
            }
            SearchVariant::Minimax | SearchVariant::Expectimax => {
                let values = self.root_values(&context, game, root, &actions)?;
                let chosen = random_best(&values, rng);

                (values, chosen)
            }
        };

        for (action, value) in actions.iter().zip(&values) {
            debug!(?action, value, "scored root action");
        }

        let decision = RootDecision::new(
            variant,
            depth,
            actions.into_iter().zip(values).collect(),
            chosen,
        );

        span.record("chosen_value", decision.value());
        span.record(
            "chosen_action",
            format!("{:?}", decision.chosen_action()).as_str(),
        );

        Ok(decision)
    }

    /// The utility of every root successor, in root action order
    fn root_values<GameType>(
        &self,
        context: &SearchContext<ScorableType, InstrumentsType>,
        game: &GameType,
        root: TurnCursor,
        actions: &[GameType::Action],
    ) -> Result<Vec<Utility>, SearchError>
    where
        GameType: MultiAgentGame + Sync,
        GameType::Action: Send + Sync,
        ScorableType: Scorable<GameType> + Sync,
    {
        let variant = self.options.variant;
        let below_root = root.next();
        let evaluate = |action: &GameType::Action| {
            context.value(variant, &context.child(game, root, action), below_root)
        };

        if self.options.parallel_root {
            actions.par_iter().map(evaluate).collect()
        } else {
            actions.iter().map(evaluate).collect()
        }
    }
}

/// Alpha-beta at the root. Alpha is carried from one root action to the next, so later actions
/// are searched with a tighter window and may come back as bounds.
fn alpha_beta_root<GameType, ScorableType, InstrumentsType>(
    context: &SearchContext<ScorableType, InstrumentsType>,
    game: &GameType,
    root: TurnCursor,
    actions: &[GameType::Action],
) -> Result<(Vec<Utility>, usize), SearchError>
where
    GameType: MultiAgentGame,
    ScorableType: Scorable<GameType>,
    InstrumentsType: SearchInstruments,
{
    let below_root = root.next();
    let mut alpha = Utility::NEG_INFINITY;
    let mut chosen = 0;
    let mut values = Vec::with_capacity(actions.len());

    for (i, action) in actions.iter().enumerate() {
        let child = context.child(game, root, action);
        let value = context.alpha_beta_value(&child, below_root, alpha, Utility::INFINITY)?;

        if i == 0 || value > alpha {
            alpha = value;
            chosen = i;
        }

        values.push(value);
    }

    Ok((values, chosen))
}

/// The first position holding the highest value
fn first_best(values: &[Utility]) -> usize {
    let mut chosen = 0;

    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[chosen] {
            chosen = i;
        }
    }

    chosen
}

/// A uniformly random position among the ones holding the highest value
fn random_best<RngType: Rng + ?Sized>(values: &[Utility], rng: &mut RngType) -> usize {
    let best = values
        .iter()
        .copied()
        .fold(Utility::NEG_INFINITY, Utility::max);
    let tied = values.iter().positions(|value| *value == best).collect_vec();

    // Only empty when every value is NaN
    tied.choose(rng).copied().unwrap_or(0)
}

/// Pick the protagonist's action for `root`
///
/// Shorthand for an [ActionSelector] with default options apart from `depth` and `variant`.
pub fn select_action<GameType, ScorableType, RngType>(
    root: &GameType,
    depth: usize,
    evaluation: ScorableType,
    variant: SearchVariant,
    rng: &mut RngType,
) -> Result<GameType::Action, SearchError>
where
    GameType: MultiAgentGame + Sync,
    GameType::Action: Send + Sync,
    ScorableType: Scorable<GameType> + Sync,
    RngType: Rng + ?Sized,
{
    ActionSelector::new(evaluation, SearchOptions::new(variant, depth)).choose_action(root, rng)
}
