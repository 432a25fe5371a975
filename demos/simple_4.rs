use maze_solver::{BfsSolver, GridSolver, Maze};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let maze = Maze::from_rows(vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
    println!("{}", maze);
    let result = BfsSolver.solve(&maze, maze.start(), maze.goal()).unwrap();
    println!("Explored:");
    for p in &result.explored {
        println!("{}", p);
    }
    println!("Path:");
    for p in &result.path {
        println!("{}", p);
    }
}
