use std::{fmt, str::FromStr};

use anyhow::{bail, Result};
use pacman_minimax::{MultiAgentGame, Scorable, Utility, PROTAGONIST};

use crate::{Direction, PacmanObservation, Position};

/// Just the game score
pub fn score_evaluation<G: PacmanObservation>(state: &G) -> Utility {
    state.score()
}

/// The game score, less a penalty for every remaining food pellet and capsule. Staying near the
/// ghosts is rewarded so that eating a capsule usually means eating a ghost right after.
///
/// Being caught is always `-inf`. With no ghosts on the board there is no ghost term.
pub fn better_evaluation<G: PacmanObservation>(state: &G) -> Utility {
    let pacman = state.pacman_position();
    let ghosts = state.ghost_states();

    if ghosts.iter().any(|ghost| ghost.position == pacman) {
        return Utility::NEG_INFINITY;
    }

    let ghost_term = ghosts
        .iter()
        .map(|ghost| Utility::from(pacman.manhattan_distance(&ghost.position)))
        .reduce(Utility::min)
        .map_or(0.0, |closest| closest / ghosts.len() as Utility);

    state.score() - state.num_food() as Utility - ghost_term - state.capsules().len() as Utility
}

/// The reflex agent's evaluation of taking `action` from `current`
///
/// Stopping and walking into a ghost are never worth it. Otherwise this is the score after the
/// move, less the distance to the closest food unless the move itself ate something.
pub fn reflex_evaluation<G>(current: &G, action: &Direction) -> Utility
where
    G: MultiAgentGame<Action = Direction> + PacmanObservation,
{
    if *action == Direction::Stop {
        return Utility::NEG_INFINITY;
    }

    let successor = current.successor(PROTAGONIST, action);
    let pacman = successor.pacman_position();

    if successor
        .ghost_states()
        .iter()
        .any(|ghost| ghost.position == pacman)
    {
        return Utility::NEG_INFINITY;
    }

    let food_distance = if successor.num_food() < current.num_food() {
        0.0
    } else {
        closest_distance(&pacman, &successor.food())
    };

    successor.score() - food_distance
}

/// `inf` when there is nothing to walk to
fn closest_distance(from: &Position, targets: &[Position]) -> Utility {
    targets
        .iter()
        .map(|target| Utility::from(from.manhattan_distance(target)))
        .fold(Utility::INFINITY, Utility::min)
}

/// The state evaluations a search agent can be built with, looked up by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationFunction {
    #[default]
    Score,
    Better,
}

impl EvaluationFunction {
    pub fn all() -> [EvaluationFunction; 2] {
        [EvaluationFunction::Score, EvaluationFunction::Better]
    }
}

impl fmt::Display for EvaluationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationFunction::Score => write!(f, "scoreEvaluationFunction"),
            EvaluationFunction::Better => write!(f, "betterEvaluationFunction"),
        }
    }
}

impl FromStr for EvaluationFunction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scoreEvaluationFunction" | "score" => Ok(EvaluationFunction::Score),
            "betterEvaluationFunction" | "better" => Ok(EvaluationFunction::Better),
            _ => bail!("unknown evaluation function {:?}", s),
        }
    }
}

impl<G: PacmanObservation> Scorable<G> for EvaluationFunction {
    fn score(&self, game: &G) -> Utility {
        match self {
            EvaluationFunction::Score => score_evaluation(game),
            EvaluationFunction::Better => better_evaluation(game),
        }
    }
}
