//! # maze_solver
//!
//! Random grid mazes solved with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) or
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Movement is
//! 4-connected with unit step costs. Besides the path, every solve reports the order in which
//! cells were expanded so that a front end can animate the search.
//!
//! ```
//! use maze_solver::{Algorithm, GeneratorConfig, MazeGenerator};
//!
//! let mut generator = MazeGenerator::new(GeneratorConfig {
//!     seed: Some(7),
//!     ..GeneratorConfig::default()
//! });
//! let maze = generator.generate(10, 12).unwrap();
//! let result = Algorithm::Astar.solve(&maze, maze.start(), maze.goal()).unwrap();
//! assert_eq!(result.path.first(), Some(&maze.start()));
//! assert_eq!(result.path.last(), Some(&maze.goal()));
//! ```
pub mod error;
pub mod generator;
pub mod maze;
pub mod search;
pub mod solver;
pub mod wire;

pub use error::{CoordinateFault, MazeError};
pub use generator::{GeneratorConfig, MazeGenerator, Strategy};
pub use maze::{Cell, CellState, Maze};
pub use solver::{astar::AstarSolver, bfs::BfsSolver, Algorithm, GridSolver, SearchResult};
