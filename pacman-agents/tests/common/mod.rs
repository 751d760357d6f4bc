#![allow(dead_code)]

use pacman_agents::{Direction, GhostState, PacmanObservation, Position};
use pacman_minimax::{AgentIndex, MultiAgentGame, PROTAGONIST};

pub const FOOD_POINTS: f64 = 10.0;
pub const WIN_POINTS: f64 = 500.0;
pub const LOSE_POINTS: f64 = 500.0;

/// A wall-less Pacman board. Every move costs a point, food is worth 10, clearing the board is
/// worth 500 and being caught costs 500.
#[derive(Debug, Clone)]
pub struct GridGame {
    pub width: i32,
    pub height: i32,
    pub pacman: Position,
    pub ghosts: Vec<Position>,
    pub food: Vec<Position>,
    pub capsules: Vec<Position>,
    pub score: f64,
    pub won: bool,
    pub lost: bool,
}

impl GridGame {
    /// Rows are listed top to bottom. `P` is Pacman, `G` a ghost, `.` food and `o` a capsule.
    pub fn from_layout(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as i32;

        let mut game = GridGame {
            width,
            height,
            pacman: Position::new(0, 0),
            ghosts: vec![],
            food: vec![],
            capsules: vec![],
            score: 0.0,
            won: false,
            lost: false,
        };

        for (row, line) in rows.iter().enumerate() {
            let y = height - 1 - row as i32;

            for (x, c) in line.chars().enumerate() {
                let position = Position::new(x as i32, y);

                match c {
                    'P' => game.pacman = position,
                    'G' => game.ghosts.push(position),
                    '.' => game.food.push(position),
                    'o' => game.capsules.push(position),
                    ' ' => {}
                    other => panic!("unknown layout character {:?}", other),
                }
            }
        }

        game
    }

    fn in_bounds(&self, position: &Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    fn moves_from(&self, position: &Position) -> Vec<Direction> {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
        .into_iter()
        .filter(|direction| self.in_bounds(&position.step(*direction)))
        .collect()
    }

    fn check_caught(&mut self) {
        if self.ghosts.contains(&self.pacman) {
            self.score -= LOSE_POINTS;
            self.lost = true;
        }
    }
}

impl MultiAgentGame for GridGame {
    type Action = Direction;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.is_terminal() {
            return vec![];
        }

        if agent == PROTAGONIST {
            let mut moves = self.moves_from(&self.pacman);
            moves.push(Direction::Stop);
            moves
        } else {
            self.moves_from(&self.ghosts[agent - 1])
        }
    }

    fn successor(&self, agent: AgentIndex, action: &Direction) -> Self {
        let mut next = self.clone();

        if agent == PROTAGONIST {
            next.pacman = self.pacman.step(*action);
            next.score -= 1.0;

            if let Some(i) = next.food.iter().position(|f| *f == next.pacman) {
                next.food.remove(i);
                next.score += FOOD_POINTS;

                if next.food.is_empty() {
                    next.score += WIN_POINTS;
                    next.won = true;
                }
            }

            next.capsules.retain(|c| *c != next.pacman);
        } else {
            next.ghosts[agent - 1] = self.ghosts[agent - 1].step(*action);
        }

        if !next.won {
            next.check_caught();
        }

        next
    }

    fn is_win(&self) -> bool {
        self.won
    }

    fn is_lose(&self) -> bool {
        self.lost
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }
}

impl PacmanObservation for GridGame {
    fn score(&self) -> f64 {
        self.score
    }

    fn pacman_position(&self) -> Position {
        self.pacman
    }

    fn food(&self) -> Vec<Position> {
        self.food.clone()
    }

    fn capsules(&self) -> Vec<Position> {
        self.capsules.clone()
    }

    fn ghost_states(&self) -> Vec<GhostState> {
        self.ghosts
            .iter()
            .map(|position| GhostState {
                position: *position,
                scared_timer: 0,
            })
            .collect()
    }
}
