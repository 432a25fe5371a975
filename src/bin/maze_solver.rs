//! Command-line front end: generates mazes and answers solve requests as JSON.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use log::info;
use maze_solver::wire::{self, SolveRequest};
use maze_solver::{Algorithm, Cell, GeneratorConfig, Maze, MazeGenerator, Strategy};
use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

/// Maze generator and BFS / A* solver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a generated maze as a JSON matrix (0 = open, 1 = wall)
    Generate(GenerateArgs),
    /// Read a solve request as JSON and print the explored cells and path
    Solve {
        /// Overrides the algorithm named in the request
        #[arg(long)]
        algo: Option<Algorithm>,
        /// Also print the order in which cells were discovered
        #[arg(long)]
        frontier: bool,
        /// Request file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Generate a maze and draw the solution in the terminal
    Show {
        #[command(flatten)]
        generate: GenerateArgs,
        #[arg(long, default_value_t = Algorithm::Astar)]
        algo: Algorithm,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of rows
    #[arg(long, default_value_t = 25)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 35)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Chance that a cell becomes a wall (random fill only)
    #[arg(long, default_value_t = maze_solver::generator::DEFAULT_WALL_PROBABILITY)]
    wall_probability: f64,

    /// Random fills tried before a corridor is forced
    #[arg(long, default_value_t = maze_solver::generator::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    #[arg(long, value_enum, default_value_t = StrategyArg::RandomFill)]
    strategy: StrategyArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    RandomFill,
    Backtracker,
}

impl GenerateArgs {
    fn generate(&self) -> anyhow::Result<Maze> {
        let config = GeneratorConfig {
            wall_probability: self.wall_probability,
            max_attempts: self.max_attempts,
            strategy: match self.strategy {
                StrategyArg::RandomFill => Strategy::RandomFill,
                StrategyArg::Backtracker => Strategy::Backtracker,
            },
            seed: self.seed,
        };
        MazeGenerator::new(config)
            .generate(self.rows, self.cols)
            .with_context(|| format!("could not generate a {}x{} maze", self.rows, self.cols))
    }
}

fn read_request(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("could not read request from stdin")?;
            Ok(body)
        }
    }
}

/// Draws walls as `#`, expanded cells as `o` and the path as `*`.
fn render(maze: &Maze, explored: &[Cell], path: &[Cell]) -> String {
    let explored: HashSet<&Cell> = explored.iter().collect();
    let path: HashSet<&Cell> = path.iter().collect();
    (0..maze.rows())
        .map(|r| {
            (0..maze.cols())
                .map(|c| {
                    let cell = Cell::new(r, c);
                    if cell == maze.start() {
                        'S'
                    } else if cell == maze.goal() {
                        'G'
                    } else if !maze.is_open(cell) {
                        '#'
                    } else if path.contains(&cell) {
                        '*'
                    } else if explored.contains(&cell) {
                        'o'
                    } else {
                        '.'
                    }
                })
                .join("")
        })
        .join("\n")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => {
            let maze = args.generate()?;
            println!("{}", serde_json::to_string(&wire::format_maze(&maze))?);
        }
        Command::Solve {
            algo,
            frontier,
            file,
        } => {
            let body = read_request(file)?;
            let mut request: SolveRequest =
                serde_json::from_str(&body).context("request is not a valid solve payload")?;
            if let Some(algo) = algo {
                request.algo = Some(algo.to_string());
            }
            request.frontier |= frontier;
            let response = wire::handle_solve(request)?;
            println!("{}", serde_json::to_string(&response)?);
        }
        Command::Show { generate, algo } => {
            let maze = generate.generate()?;
            let result = algo.solve(&maze, maze.start(), maze.goal())?;
            info!(
                "{} expanded {} cells, path length {:?}",
                algo,
                result.explored.len(),
                result.path_length()
            );
            println!("{}", render(&maze, &result.explored, &result.path));
        }
    }
    Ok(())
}
