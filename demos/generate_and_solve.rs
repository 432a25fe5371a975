use maze_solver::{wire, Algorithm, GeneratorConfig, MazeGenerator, Strategy};

// Generates a backtracker maze and prints how many cells BFS and A* expand before reaching the
// goal, followed by the A* result in the JSON form a front end would animate.

fn main() {
    let mut generator = MazeGenerator::new(GeneratorConfig {
        strategy: Strategy::Backtracker,
        seed: Some(3),
        ..GeneratorConfig::default()
    });
    let maze = generator.generate(15, 21).unwrap();
    println!("{}", maze);
    for algorithm in [Algorithm::Bfs, Algorithm::Astar] {
        let result = algorithm.solve(&maze, maze.start(), maze.goal()).unwrap();
        println!(
            "{algorithm}: expanded {} cells, path of {} steps",
            result.explored.len(),
            result.path_length().unwrap()
        );
        if algorithm == Algorithm::Astar {
            println!("{}", serde_json::to_string(&wire::format_result(&result)).unwrap());
        }
    }
}
