use std::{fmt, str::FromStr};

use anyhow::{anyhow, Result};
use pacman_minimax::{MultiAgentGame, SearchVariant};
use rand::RngCore;

pub mod evaluation;
pub mod reflex;
pub mod search_agent;

pub use evaluation::EvaluationFunction;
pub use reflex::{ReflexAgent, ReflexAgentFactory};
pub use search_agent::{SearchAgent, SearchAgentFactory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    pub fn all() -> [Direction; 5] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Stop,
        ]
    }

    /// The change in `(x, y)` after taking one step in this direction. North is up, so it
    /// increases `y`.
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };

        write!(f, "{}", s)
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Direction::all()
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("unknown direction {:?}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.vector();

        Position::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostState {
    pub position: Position,
    /// How many more moves this ghost stays scared for. Zero when it isn't scared.
    ///
    /// None of the built-in evaluations read this, it is exposed for callers writing their own.
    pub scared_timer: u32,
}

/// Read-only accessors the evaluation functions need from a Pacman game state
pub trait PacmanObservation {
    fn score(&self) -> f64;
    fn pacman_position(&self) -> Position;
    fn food(&self) -> Vec<Position>;
    fn capsules(&self) -> Vec<Position>;
    fn ghost_states(&self) -> Vec<GhostState>;

    fn num_food(&self) -> usize {
        self.food().len()
    }
}

/// Everything an agent needs from a game: the search contract with [Direction] as the action,
/// plus the Pacman accessors
pub trait PacmanGame: MultiAgentGame<Action = Direction> + PacmanObservation + Sync {}

impl<T> PacmanGame for T where T: MultiAgentGame<Action = Direction> + PacmanObservation + Sync {}

pub type BoxedAgent<G> = Box<dyn PacmanAgent<G> + Send + Sync>;
pub type BoxedFactory<G> = Box<dyn AgentFactory<G> + Send + Sync>;

pub trait PacmanAgent<G> {
    fn name(&self) -> String;
    fn get_action(&self, game: &G, rng: &mut dyn RngCore) -> Result<Direction>;
}

pub trait AgentFactory<G> {
    fn name(&self) -> String;

    /// Build an agent from the same string arguments the command line passes along, an
    /// evaluation function name and a search depth
    fn create(&self, eval_fn: &str, depth: &str) -> Result<BoxedAgent<G>>;
}

pub fn all_factories<G: PacmanGame + 'static>() -> Vec<BoxedFactory<G>> {
    vec![
        Box::new(ReflexAgentFactory {}),
        Box::new(SearchAgentFactory::new(SearchVariant::Minimax)),
        Box::new(SearchAgentFactory::new(SearchVariant::AlphaBeta)),
        Box::new(SearchAgentFactory::new(SearchVariant::Expectimax)),
    ]
}

/// Look up an agent by its name in [all_factories] and build it
pub fn agent_from_args<G: PacmanGame + 'static>(
    name: &str,
    eval_fn: &str,
    depth: &str,
) -> Result<BoxedAgent<G>> {
    let factory = all_factories::<G>()
        .into_iter()
        .find(|f| f.name() == name)
        .ok_or_else(|| anyhow!("no agent named {:?}", name))?;

    factory.create(eval_fn, depth)
}
