use crate::error::MazeError;
use crate::maze::{Cell, Maze};
use crate::search::{search, Exploration, Frontier};
use core::fmt;
use log::info;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod astar;
pub mod bfs;

use astar::AstarSolver;
use bfs::BfsSolver;

/// Cost of a single step between 4-adjacent cells.
pub const STEP_COST: u32 = 1;

/// The cells a solve expanded, in order, and the path it found. An empty path means the goal
/// could not be reached from the start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub explored: Vec<Cell>,
    /// Cells in the order they first entered the frontier, starting with the start cell.
    #[serde(default)]
    pub discovered: Vec<Cell>,
    pub path: Vec<Cell>,
}

impl SearchResult {
    pub fn is_unreachable(&self) -> bool {
        self.path.is_empty()
    }
    /// Number of steps along the path, or [None] if there is no path.
    pub fn path_length(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

pub trait GridSolver {
    /// Decides the expansion order of discovered cells.
    type Frontier: Frontier<u32> + Default;

    fn name(&self) -> &'static str;

    /// Estimated remaining cost from a cell to the goal.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> u32;

    /// Runs the search without validating the endpoints or logging the outcome. The start must
    /// lie inside the maze.
    fn explore(&self, maze: &Maze, start: Cell, goal: Cell) -> Exploration<Cell, u32> {
        search(
            &start,
            Self::Frontier::default(),
            |cell| {
                maze.open_neighbours(*cell)
                    .into_iter()
                    .map(|n| (n, STEP_COST))
            },
            |cell| self.heuristic(cell, &goal),
            |cell| *cell == goal,
        )
    }

    /// Searches a path from start to goal with unit step costs. Both endpoints must be open
    /// cells inside the maze; the check happens before any cell is expanded.
    fn solve(&self, maze: &Maze, start: Cell, goal: Cell) -> Result<SearchResult, MazeError> {
        maze.check_endpoint(start)?;
        maze.check_endpoint(goal)?;
        let exploration = self.explore(maze, start, goal);
        match exploration.cost {
            Some(cost) => info!(
                "{}: path from {} to {} costs {} after expanding {} cells",
                self.name(),
                start,
                goal,
                cost,
                exploration.trace.len()
            ),
            None => info!(
                "{}: {} is not reachable from {} ({} cells expanded)",
                self.name(),
                goal,
                start,
                exploration.trace.len()
            ),
        }
        Ok(SearchResult {
            explored: exploration.trace,
            discovered: exploration.discovered,
            path: exploration.path,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    #[default]
    Astar,
}

impl Algorithm {
    pub fn solve(self, maze: &Maze, start: Cell, goal: Cell) -> Result<SearchResult, MazeError> {
        match self {
            Algorithm::Bfs => BfsSolver.solve(maze, start, goal),
            Algorithm::Astar => AstarSolver::new().solve(maze, start, goal),
        }
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "astar" | "a*" => Ok(Algorithm::Astar),
            _ => Err(MazeError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Algorithm::Bfs => "bfs",
                Algorithm::Astar => "astar",
            }
        )
    }
}
