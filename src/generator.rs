use crate::error::MazeError;
use crate::maze::{Cell, Maze};
use log::{debug, info, warn};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WALL_PROBABILITY: f64 = 0.28;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// How walls are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every cell other than start and goal is a wall with a fixed probability.
    #[default]
    RandomFill,
    /// A perfect maze carved by a randomized depth-first walk over every other cell.
    Backtracker,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub wall_probability: f64,
    /// Random fills tried before a corridor is forced through the last one.
    pub max_attempts: usize,
    pub strategy: Strategy,
    /// Fixes the random sequence; [None] seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            wall_probability: DEFAULT_WALL_PROBABILITY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            strategy: Strategy::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<(), MazeError> {
        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(MazeError::InvalidConfig(format!(
                "wall probability {} is outside [0, 1]",
                self.wall_probability
            )));
        }
        if self.max_attempts == 0 {
            return Err(MazeError::InvalidConfig(
                "at least one generation attempt is required".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Produces mazes in which the goal corner is always reachable from the start corner.
pub struct MazeGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl MazeGenerator {
    pub fn new(config: GeneratorConfig) -> MazeGenerator {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MazeGenerator { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a maze with the given dimensions, both of which must be at least 2.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Maze, MazeError> {
        if rows < 2 || cols < 2 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        self.config.validate()?;
        let maze = match self.config.strategy {
            Strategy::RandomFill => self.random_fill(rows, cols),
            Strategy::Backtracker => self.backtracker(rows, cols),
        };
        info!(
            "Generated {}x{} maze ({:?}) with {} walls",
            rows,
            cols,
            self.config.strategy,
            maze.to_rows().iter().flatten().filter(|&&v| v == 1).count()
        );
        Ok(maze)
    }

    fn random_fill(&mut self, rows: usize, cols: usize) -> Maze {
        let mut maze = Maze::filled(rows, cols, false);
        for attempt in 1..=self.config.max_attempts {
            maze = Maze::filled(rows, cols, false);
            let (start, goal) = (maze.start(), maze.goal());
            for r in 0..rows {
                for c in 0..cols {
                    let cell = Cell::new(r, c);
                    if cell != start && cell != goal {
                        let blocked = self.rng.gen_bool(self.config.wall_probability);
                        maze.set(cell, blocked);
                    }
                }
            }
            if maze.reachable(start, goal) {
                debug!("Random fill connected start and goal on attempt {}", attempt);
                return maze;
            }
            debug!("Random fill attempt {} left the goal unreachable", attempt);
        }
        warn!(
            "No connected fill after {} attempts, carving a corridor",
            self.config.max_attempts
        );
        carve_corridor(&mut maze);
        maze
    }

    fn backtracker(&mut self, rows: usize, cols: usize) -> Maze {
        let mut maze = Maze::filled(rows, cols, true);
        let origin = maze.start();
        maze.set(origin, false);
        let mut stack = vec![origin];
        // Walk the lattice of even coordinates, knocking out the wall between lattice cells.
        while let Some(&current) = stack.last() {
            let mut candidates: Vec<Cell> = [(0, 2), (0, -2), (2, 0), (-2, 0)]
                .into_iter()
                .filter_map(|(dr, dc): (isize, isize)| {
                    let row = current.row.checked_add_signed(dr)?;
                    let col = current.col.checked_add_signed(dc)?;
                    let next = Cell::new(row, col);
                    (maze.in_bounds(next) && !maze.is_open(next)).then_some(next)
                })
                .collect();
            candidates.shuffle(&mut self.rng);
            match candidates.first() {
                Some(&next) => {
                    let between = Cell::new(
                        (current.row + next.row) / 2,
                        (current.col + next.col) / 2,
                    );
                    maze.set(between, false);
                    maze.set(next, false);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }
        let goal = maze.goal();
        maze.set(goal, false);
        if !maze.reachable(origin, goal) {
            debug!("Goal {} lies off the carved lattice, connecting it", goal);
            connect_to_lattice(&mut maze, goal);
        }
        if !maze.reachable(origin, goal) {
            warn!("Goal {} still unreachable, carving a corridor", goal);
            carve_corridor(&mut maze);
        }
        maze
    }
}

/// Opens the top row and then the rightmost column, joining the two corners.
fn carve_corridor(maze: &mut Maze) {
    for c in 0..maze.cols() {
        maze.set(Cell::new(0, c), false);
    }
    for r in 0..maze.rows() {
        maze.set(Cell::new(r, maze.cols() - 1), false);
    }
}

/// Opens cells from `cell` up to the nearest even row and then left to the nearest even column,
/// ending on a lattice cell that the backtracker always carves.
fn connect_to_lattice(maze: &mut Maze, cell: Cell) {
    let lattice = Cell::new(cell.row & !1, cell.col & !1);
    for r in lattice.row..=cell.row {
        maze.set(Cell::new(r, cell.col), false);
    }
    for c in lattice.col..=cell.col {
        maze.set(Cell::new(lattice.row, c), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::CellState;

    fn seeded(strategy: Strategy, seed: u64) -> MazeGenerator {
        MazeGenerator::new(GeneratorConfig {
            strategy,
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
    }

    #[test]
    fn rejects_small_dimensions() {
        let mut generator = seeded(Strategy::RandomFill, 0);
        for (rows, cols) in [(1, 5), (5, 1), (0, 0)] {
            assert_eq!(
                generator.generate(rows, cols),
                Err(MazeError::InvalidDimensions { rows, cols })
            );
        }
    }

    #[test]
    fn rejects_invalid_config() {
        for config in [
            GeneratorConfig {
                wall_probability: 1.5,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                max_attempts: 0,
                ..GeneratorConfig::default()
            },
        ] {
            let mut generator = MazeGenerator::new(config);
            assert!(matches!(
                generator.generate(4, 4),
                Err(MazeError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn generated_mazes_connect_corners() {
        for strategy in [Strategy::RandomFill, Strategy::Backtracker] {
            for seed in 0..50 {
                let mut generator = seeded(strategy, seed);
                for (rows, cols) in [(2, 2), (5, 8), (8, 5), (25, 35), (10, 10)] {
                    let maze = generator.generate(rows, cols).unwrap();
                    assert_eq!((maze.rows(), maze.cols()), (rows, cols));
                    assert_eq!(maze.state(maze.start()), Ok(CellState::Open));
                    assert_eq!(maze.state(maze.goal()), Ok(CellState::Open));
                    assert!(maze.reachable(maze.start(), maze.goal()), "{}", maze);
                }
            }
        }
    }

    #[test]
    fn full_walls_fall_back_to_corridor() {
        let mut generator = MazeGenerator::new(GeneratorConfig {
            wall_probability: 1.0,
            max_attempts: 3,
            seed: Some(1),
            ..GeneratorConfig::default()
        });
        let maze = generator.generate(4, 6).unwrap();
        assert_eq!(
            maze.to_rows(),
            vec![
                vec![0, 0, 0, 0, 0, 0],
                vec![1, 1, 1, 1, 1, 0],
                vec![1, 1, 1, 1, 1, 0],
                vec![1, 1, 1, 1, 1, 0],
            ]
        );
    }

    #[test]
    fn zero_probability_leaves_maze_open() {
        let mut generator = MazeGenerator::new(GeneratorConfig {
            wall_probability: 0.0,
            ..GeneratorConfig::default()
        });
        let maze = generator.generate(3, 4).unwrap();
        assert_eq!(maze, Maze::new(3, 4).unwrap());
    }

    #[test]
    fn seeds_are_reproducible() {
        for strategy in [Strategy::RandomFill, Strategy::Backtracker] {
            let a = seeded(strategy, 42).generate(15, 21).unwrap();
            let b = seeded(strategy, 42).generate(15, 21).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn backtracker_carves_the_lattice() {
        let maze = seeded(Strategy::Backtracker, 7).generate(9, 11).unwrap();
        for r in (0..9).step_by(2) {
            for c in (0..11).step_by(2) {
                assert!(maze.is_open(Cell::new(r, c)));
            }
        }
        // Odd-odd cells are never carved in a perfect maze on odd dimensions.
        for r in (1..9).step_by(2) {
            for c in (1..11).step_by(2) {
                assert!(!maze.is_open(Cell::new(r, c)));
            }
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"strategy": "backtracker", "seed": 3}"#).unwrap();
        assert_eq!(config.strategy, Strategy::Backtracker);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.wall_probability, DEFAULT_WALL_PROBABILITY);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }
}
