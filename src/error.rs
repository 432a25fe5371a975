use crate::maze::Cell;
use core::fmt;

/// Why a coordinate was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateFault {
    OutOfBounds,
    Wall,
}

/// Failures raised synchronously at the start of an operation. An unreachable goal is not
/// among them: it is reported as a [SearchResult](crate::solver::SearchResult) with an empty path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimensions { rows: usize, cols: usize },
    InvalidCoordinate { cell: Cell, fault: CoordinateFault },
    InvalidConfig(String),
    MalformedInput(String),
    UnknownAlgorithm(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid maze dimensions {rows}x{cols}")
            }
            Self::InvalidCoordinate {
                cell,
                fault: CoordinateFault::OutOfBounds,
            } => write!(f, "coordinate {cell} is outside the maze"),
            Self::InvalidCoordinate {
                cell,
                fault: CoordinateFault::Wall,
            } => write!(f, "coordinate {cell} is a wall"),
            Self::InvalidConfig(msg) => write!(f, "invalid generator configuration: {msg}"),
            Self::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
            Self::UnknownAlgorithm(name) => {
                write!(f, "unknown algorithm '{name}' (expected 'bfs' or 'astar')")
            }
        }
    }
}

impl std::error::Error for MazeError {}
