use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use serde_json::Value;

use coin_bot::graph::{Graph, Tour};
use coin_bot::solvers::{AStarSolver, BruteForceSolver, NearestNeighborSolver, RandomSolver, Solver, UniformCostSolver};

#[derive(ValueEnum, Clone)]
enum SolverName {
    /// Shuffled baseline, only useful for comparisons.
    Random,
    /// Greedy nearest-neighbor solver.
    NearestNeighbor,
    /// Exact solver, scores every permutation of the coins.
    BruteForce,
    /// Best-first search with no heuristic. Optimal.
    UniformCost,
    /// Best-first search guided by a spanning-tree lower bound. Optimal.
    AStar,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Solver implementation to use to plan the tour.
    #[arg(short, long, value_enum, default_value_t = SolverName::AStar)]
    solver: SolverName,

    /// JSON file holding the cost matrix, as an NxN array of arrays of
    /// non-negative costs. Row 0 is the depot.
    #[arg(short, long)]
    matrix: String,

    /// When using the random solver, seed to make shuffles reproducible.
    #[arg(long)]
    seed: Option<u64>,
}

fn new_solver(cli: &Cli) -> Box<dyn Solver> {
    match cli.solver {
        SolverName::Random => {
            match cli.seed {
                Some(seed) => Box::new(RandomSolver::new(seed)),
                None => Box::new(RandomSolver::from_entropy()),
            }
        },
        SolverName::NearestNeighbor => Box::new(NearestNeighborSolver),
        SolverName::BruteForce => Box::new(BruteForceSolver),
        SolverName::UniformCost => Box::new(UniformCostSolver),
        SolverName::AStar => Box::new(AStarSolver),
    }
}

fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    // Init logger with default value of info
    // This can be overriden with RUST_LOG env var
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let matrix_data = std::fs::read_to_string(&cli.matrix)
        .expect("failed to read matrix file");
    let parsed: Value = serde_json::from_str(&matrix_data)
        .expect("invalid json");
    let matrix: Vec<Vec<f64>> = serde_json::from_value(parsed)
        .expect("invalid cost matrix");
    let graph = Graph::from_matrix(matrix).expect("malformed cost matrix");

    let mut solver = new_solver(&cli);
    let tour = solver.solve(&graph);
    summarize_tour(&tour, &graph);
    println!("{}", serde_json::to_string(&tour).expect("tour should serialize"));
}

fn summarize_tour(tour: &Tour, graph: &Graph) {
    info!("Our plan is the following ({} coins, total cost {}):",
          tour.vertices.len() - 2, tour.cost);
    for leg in tour.vertices.windows(2) {
        if leg[0] == leg[1] {
            continue;  // depot-only tour, the agent never moves
        }
        info!("  go from {} to {} at a cost of {}",
              leg[0], leg[1], graph.cost(leg[0], leg[1]));
    }
}
