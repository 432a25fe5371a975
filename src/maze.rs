use crate::error::{CoordinateFault, MazeError};
use crate::solver::{bfs::BfsSolver, GridSolver};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A (row, column) position, 0-indexed with rows increasing downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
    /// Neighbour candidates in the fixed expansion order up, down, left, right. Candidates that
    /// would underflow are left out; the upper bound is checked by the [Maze].
    fn neumann_neighborhood(&self) -> SmallVec<[Cell; 4]> {
        let mut out = SmallVec::new();
        if self.row > 0 {
            out.push(Cell::new(self.row - 1, self.col));
        }
        out.push(Cell::new(self.row + 1, self.col));
        if self.col > 0 {
            out.push(Cell::new(self.row, self.col - 1));
        }
        out.push(Cell::new(self.row, self.col + 1));
        out
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell::new(row, col)
    }
}

impl From<[usize; 2]> for Cell {
    fn from([row, col]: [usize; 2]) -> Cell {
        Cell::new(row, col)
    }
}

impl From<Cell> for [usize; 2] {
    fn from(cell: Cell) -> [usize; 2] {
        [cell.row, cell.col]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Open,
    Wall,
}

impl CellState {
    pub fn as_u8(self) -> u8 {
        match self {
            CellState::Open => 0,
            CellState::Wall => 1,
        }
    }
}

/// [Maze] is a rectangular grid of open and wall cells backed by a [BoolGrid], where [true] marks
/// a wall. The start is the top-left corner and the goal the bottom-right one. Once handed out a
/// maze is read-only; only the generator in this crate writes cells while building one.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: BoolGrid,
}

impl Maze {
    /// Creates a maze without any walls.
    pub fn new(rows: usize, cols: usize) -> Result<Maze, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Maze::filled(rows, cols, false))
    }

    /// Builds a maze from a row-major matrix where 0 is open and 1 is a wall.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Maze, MazeError> {
        let height = rows.len();
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(MazeError::MalformedInput("maze has no cells".to_owned())),
        };
        let mut maze = Maze::filled(height, width, false);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::MalformedInput(format!(
                    "row {r} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                let blocked = match value {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(MazeError::MalformedInput(format!(
                            "cell ({r}, {c}) has value {other}, expected 0 or 1"
                        )))
                    }
                };
                maze.set(Cell::new(r, c), blocked);
            }
        }
        Ok(maze)
    }

    pub(crate) fn filled(rows: usize, cols: usize, blocked: bool) -> Maze {
        Maze {
            grid: BoolGrid::new(cols, rows, blocked),
        }
    }

    pub(crate) fn set(&mut self, cell: Cell, blocked: bool) {
        debug_assert!(self.in_bounds(cell));
        self.grid.set(cell.col as i32, cell.row as i32, blocked);
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }
    pub fn cols(&self) -> usize {
        self.grid.width()
    }
    pub fn start(&self) -> Cell {
        Cell::new(0, 0)
    }
    pub fn goal(&self) -> Cell {
        Cell::new(self.rows() - 1, self.cols() - 1)
    }
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    fn blocked(&self, cell: Cell) -> bool {
        self.grid.get(cell.col as i32, cell.row as i32)
    }

    pub fn state(&self, cell: Cell) -> Result<CellState, MazeError> {
        if !self.in_bounds(cell) {
            return Err(MazeError::InvalidCoordinate {
                cell,
                fault: CoordinateFault::OutOfBounds,
            });
        }
        Ok(if self.blocked(cell) {
            CellState::Wall
        } else {
            CellState::Open
        })
    }

    /// Out-of-bounds cells count as not open.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked(cell)
    }

    /// Open 4-neighbours of a cell, ordered up, down, left, right. Fails for cells outside the
    /// maze.
    pub fn neighbours(&self, cell: Cell) -> Result<SmallVec<[Cell; 4]>, MazeError> {
        if !self.in_bounds(cell) {
            return Err(MazeError::InvalidCoordinate {
                cell,
                fault: CoordinateFault::OutOfBounds,
            });
        }
        Ok(self.open_neighbours(cell))
    }

    /// [neighbours](Self::neighbours) without the bounds check, for cells already known to lie
    /// inside the maze.
    pub(crate) fn open_neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        debug_assert!(self.in_bounds(cell));
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|&n| self.is_open(n))
            .collect()
    }

    /// Checks that a cell can be used as the start or goal of a search.
    pub fn check_endpoint(&self, cell: Cell) -> Result<(), MazeError> {
        match self.state(cell)? {
            CellState::Open => Ok(()),
            CellState::Wall => Err(MazeError::InvalidCoordinate {
                cell,
                fault: CoordinateFault::Wall,
            }),
        }
    }

    /// Checks whether goal can be reached from start by running a breadth-first search.
    /// Invalid endpoints are never reachable.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        self.is_open(start)
            && self.is_open(goal)
            && !BfsSolver.explore(self, start, goal).path.is_empty()
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| {
                (0..self.cols())
                    .map(|c| u8::from(self.blocked(Cell::new(r, c))))
                    .collect()
            })
            .collect()
    }
}

impl PartialEq for Maze {
    fn eq(&self, other: &Maze) -> bool {
        self.rows() == other.rows() && self.cols() == other.cols() && self.to_rows() == other.to_rows()
    }
}

impl Eq for Maze {}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..self.rows() {
            let line = (0..self.cols())
                .map(|c| if self.blocked(Cell::new(r, c)) { '#' } else { '.' })
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
