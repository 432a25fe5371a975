use crate::maze::Cell;
use crate::search::PriorityFrontier;
use crate::solver::GridSolver;

/// A* with the Manhattan distance to the goal as heuristic. Among cells with equal estimated
/// cost the one pushed to the frontier first is expanded first.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplies the heuristic. At 1.0 the heuristic is admissible and paths are optimal;
    /// larger values trade optimality for fewer expansions.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier<u32>;

    fn name(&self) -> &'static str {
        "A*"
    }

    /// The Manhattan distance times the heuristic factor.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> u32 {
        (cell.manhattan_distance(goal) as f32 * self.heuristic_factor) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;
    use crate::solver::bfs::BfsSolver;

    #[test]
    fn heuristic_is_manhattan_distance() {
        let solver = AstarSolver::new();
        assert_eq!(solver.heuristic(&Cell::new(0, 0), &Cell::new(2, 3)), 5);
        assert_eq!(solver.heuristic(&Cell::new(4, 1), &Cell::new(2, 3)), 4);
        let weighted = AstarSolver {
            heuristic_factor: 2.0,
        };
        assert_eq!(weighted.heuristic(&Cell::new(0, 0), &Cell::new(2, 3)), 10);
    }

    #[test]
    fn open_grid_ties_resolve_in_insertion_order() {
        let maze = Maze::new(3, 3).unwrap();
        let result = AstarSolver::new()
            .solve(&maze, maze.start(), maze.goal())
            .unwrap();
        assert_eq!(result.path_length(), Some(4));
        // Without walls every cell has the same estimate, so insertion order alone decides and
        // the expansion order falls back to breadth-first.
        let bfs = BfsSolver.solve(&maze, maze.start(), maze.goal()).unwrap();
        assert_eq!(result, bfs);
    }

    #[test]
    fn test_complex() {
        let mut rows = vec![vec![0u8; 10]; 10];
        rows[1][1] = 1;
        rows[0][5] = 1;
        rows[5][0] = 1;
        rows[8][8] = 1;
        for row in rows.iter_mut().take(7) {
            row[3] = 1;
        }
        let maze = Maze::from_rows(rows).unwrap();
        let goal = Cell::new(7, 7);
        let astar = AstarSolver::new().solve(&maze, maze.start(), goal).unwrap();
        let bfs = BfsSolver.solve(&maze, maze.start(), goal).unwrap();
        assert_eq!(astar.path_length(), Some(14));
        assert_eq!(astar.path_length(), bfs.path_length());
        assert!(astar.explored.len() < bfs.explored.len());
    }

    #[test]
    fn repeated_solves_are_identical() {
        let maze = Maze::from_rows(vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 0, 1],
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
        ])
        .unwrap();
        let solver = AstarSolver::new();
        let first = solver.solve(&maze, maze.start(), maze.goal()).unwrap();
        let second = solver.solve(&maze, maze.start(), maze.goal()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.path_length(), Some(6));
    }
}
