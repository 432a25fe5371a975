use maze_solver::{AstarSolver, Cell, GridSolver, Maze};

// The goal in the bottom-right corner is sealed off:
//  ___
// |S  |
// |  #|
// | #E|
//  ___
// The search still reports every cell it expanded, but the path is empty.

fn main() {
    let maze = Maze::from_rows(vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 0]]).unwrap();
    let result = AstarSolver::new()
        .solve(&maze, Cell::new(0, 0), Cell::new(2, 2))
        .unwrap();
    println!("Expanded {} cells", result.explored.len());
    println!("Path found: {}", !result.is_unreachable());
}
