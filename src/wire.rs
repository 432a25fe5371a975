//! Conversion between the core types and the JSON shapes exchanged with presentation layers:
//! mazes as 0/1 matrices and search results as lists of `[row, column]` pairs.
use crate::error::MazeError;
use crate::maze::{Cell, Maze};
use crate::solver::{Algorithm, SearchResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// A `[row, column]` pair.
pub type Coordinate = [usize; 2];

/// A solve request as sent by a client. Missing endpoints default to the top-left and
/// bottom-right corners, a missing algorithm to A*. Setting `frontier` adds the discovery order
/// to the response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub maze: Vec<Vec<u8>>,
    #[serde(default)]
    pub start: Option<Coordinate>,
    #[serde(default)]
    pub end: Option<Coordinate>,
    #[serde(default)]
    pub algo: Option<String>,
    #[serde(default)]
    pub frontier: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub explored: Vec<Coordinate>,
    pub path: Vec<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered: Option<Vec<Coordinate>>,
}

pub fn format_maze(maze: &Maze) -> Vec<Vec<u8>> {
    maze.to_rows()
}

pub fn format_cells(cells: &[Cell]) -> Vec<Coordinate> {
    cells.iter().map(|&cell| cell.into()).collect()
}

pub fn format_result(result: &SearchResult) -> SolveResponse {
    SolveResponse {
        explored: format_cells(&result.explored),
        path: format_cells(&result.path),
        discovered: None,
    }
}

/// Validates a request and runs the requested search. The maze is checked first, then the
/// algorithm name, then the endpoints.
pub fn handle_solve(request: SolveRequest) -> Result<SolveResponse, MazeError> {
    let maze = Maze::from_rows(request.maze)?;
    let algorithm = match request.algo.as_deref() {
        Some(name) => name.parse::<Algorithm>()?,
        None => Algorithm::default(),
    };
    let start = request.start.map_or(maze.start(), Cell::from);
    let goal = request.end.map_or(maze.goal(), Cell::from);
    debug!(
        "Solving {}x{} maze from {} to {} with {}",
        maze.rows(),
        maze.cols(),
        start,
        goal,
        algorithm
    );
    let result = algorithm.solve(&maze, start, goal)?;
    let mut response = format_result(&result);
    if request.frontier {
        response.discovered = Some(format_cells(&result.discovered));
    }
    Ok(response)
}

/// JSON in, JSON out variant of [handle_solve].
pub fn handle_solve_json(body: &str) -> Result<String, MazeError> {
    let request: SolveRequest =
        serde_json::from_str(body).map_err(|e| MazeError::MalformedInput(e.to_string()))?;
    let response = handle_solve(request)?;
    serde_json::to_string(&response).map_err(|e| MazeError::MalformedInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoordinateFault;

    #[test]
    fn result_becomes_coordinate_lists() {
        let result = SearchResult {
            explored: vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)],
            path: vec![Cell::new(0, 0), Cell::new(0, 1)],
            ..SearchResult::default()
        };
        let response = format_result(&result);
        assert_eq!(response.explored, vec![[0, 0], [1, 0], [0, 1]]);
        assert_eq!(response.path, vec![[0, 0], [0, 1]]);
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"explored":[[0,0],[1,0],[0,1]],"path":[[0,0],[0,1]]}"#
        );
    }

    #[test]
    fn request_defaults_to_corners_and_astar() {
        let response = handle_solve_json(r#"{"maze": [[0, 0], [1, 0]]}"#).unwrap();
        assert_eq!(
            response,
            r#"{"explored":[[0,0],[0,1],[1,1]],"path":[[0,0],[0,1],[1,1]]}"#
        );
    }

    #[test]
    fn explicit_endpoints_and_algorithm() {
        let request = SolveRequest {
            maze: vec![vec![0, 0, 0], vec![0, 1, 0]],
            start: Some([1, 0]),
            end: Some([1, 2]),
            algo: Some("bfs".to_owned()),
            frontier: false,
        };
        let response = handle_solve(request).unwrap();
        assert_eq!(response.path, vec![[1, 0], [0, 0], [0, 1], [0, 2], [1, 2]]);
        assert_eq!(response.discovered, None);
    }

    #[test]
    fn frontier_order_is_opt_in() {
        let body = r#"{"maze": [[0, 0], [0, 0]], "algo": "bfs", "frontier": true}"#;
        assert_eq!(
            handle_solve_json(body).unwrap(),
            r#"{"explored":[[0,0],[1,0],[0,1],[1,1]],"path":[[0,0],[1,0],[1,1]],"discovered":[[0,0],[1,0],[0,1],[1,1]]}"#
        );
        let quiet = handle_solve_json(r#"{"maze": [[0, 0], [0, 0]], "algo": "bfs"}"#).unwrap();
        assert!(!quiet.contains("discovered"));
    }

    #[test]
    fn unreachable_goal_is_an_empty_path() {
        let response = handle_solve_json(r#"{"maze": [[0, 1], [1, 0]], "algo": "bfs"}"#).unwrap();
        assert_eq!(response, r#"{"explored":[[0,0]],"path":[]}"#);
    }

    #[test]
    fn malformed_requests_are_rejected() {
        for body in [
            "not json",
            r#"{"algo": "bfs"}"#,
            r#"{"maze": [[0, 0], [0]]}"#,
            r#"{"maze": [[0, 3]]}"#,
            r#"{"maze": [[0, -1]]}"#,
        ] {
            assert!(
                matches!(handle_solve_json(body), Err(MazeError::MalformedInput(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert_eq!(
            handle_solve_json(r#"{"maze": [[0, 0]], "algo": "dfs"}"#),
            Err(MazeError::UnknownAlgorithm("dfs".to_owned()))
        );
    }

    #[test]
    fn wall_endpoint_is_rejected() {
        assert_eq!(
            handle_solve_json(r#"{"maze": [[0, 1]], "end": [0, 1]}"#),
            Err(MazeError::InvalidCoordinate {
                cell: Cell::new(0, 1),
                fault: CoordinateFault::Wall
            })
        );
    }

    #[test]
    fn maze_serializes_row_major() {
        let maze = Maze::from_rows(vec![vec![0, 1, 1], vec![0, 0, 0]]).unwrap();
        assert_eq!(
            serde_json::to_string(&format_maze(&maze)).unwrap(),
            "[[0,1,1],[0,0,0]]"
        );
    }
}
