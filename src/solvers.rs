// Different solver implementations to plan the order the coins get
// picked up in.
//
// Solver                 | Optimal? | Cost
// -------------------------------------------------------
// RandomSolver           |    N     | O(N)
// NearestNeighborSolver  |    N     | O(N^2)
// BruteForceSolver       |    Y     | O((N-1)!)
// UniformCostSolver      |    Y     | exponential
// AStarSolver            |    Y     | exponential, fewer expansions

use log::info;
use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::time::Instant;

use crate::brute_force::brute_force;
use crate::graph::{DEPOT, Graph, Tour, VertexId};
use crate::search;

pub trait Solver {
    // Name to display for this solver.
    fn name(&self) -> &str;

    // Implementation of the solver.
    fn do_solve(&mut self, graph: &Graph) -> Tour;

    // Wrapper to do_solve, to log timing and cost information.
    fn solve(&mut self, graph: &Graph) -> Tour {
        let start = Instant::now();
        let tour = self.do_solve(graph);
        info!("Solver {} took {:?}", self.name(), start.elapsed());
        info!("Solver {} found a tour of cost {}, picking up {} coins",
              self.name(), tour.cost, tour.vertices.len() - 2);
        debug_assert!(tour.is_valid(graph));
        tour
    }
}

// Baseline that visits the coins in a shuffled order. Only useful as a
// floor to compare the real solvers against.
pub struct RandomSolver {
    rng: SmallRng,
}

// Greedy algorithm that repeatedly goes to the nearest coin not picked
// up yet, then heads home. The way back is not part of the greedy
// choices, so the tour is valid but not necessarily optimal.
pub struct NearestNeighborSolver;

// Exact solver that scores every permutation of the coins. See
// brute_force.rs.
pub struct BruteForceSolver;

// Best-first search over partial tours with no heuristic. Optimal for
// any non-negative cost matrix. See search.rs.
pub struct UniformCostSolver;

// Best-first search guided by a minimum-spanning-tree lower bound over
// the coins left. Optimal, and expands fewer prefixes than
// UniformCostSolver. See search.rs and mst.rs.
pub struct AStarSolver;

impl RandomSolver {
    pub fn new(seed: u64) -> Self {
        RandomSolver { rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        RandomSolver { rng: SmallRng::from_entropy() }
    }
}

impl Solver for RandomSolver {
    fn name(&self) -> &str {
        "random"
    }

    fn do_solve(&mut self, graph: &Graph) -> Tour {
        if graph.num_vertices() == 1 {
            return Tour::depot_only();
        }
        let mut coins: Vec<VertexId> = graph.others(DEPOT).collect();
        coins.shuffle(&mut self.rng);
        let mut vertices = Vec::with_capacity(graph.num_vertices() + 1);
        vertices.push(DEPOT);
        vertices.extend(coins);
        vertices.push(DEPOT);
        let cost = graph.tour_cost(&vertices);
        Tour { vertices, cost }
    }
}

impl Solver for NearestNeighborSolver {
    fn name(&self) -> &str {
        "nearest-neighbor"
    }

    fn do_solve(&mut self, graph: &Graph) -> Tour {
        if graph.num_vertices() == 1 {
            return Tour::depot_only();
        }
        let num_vertices = graph.num_vertices();
        let mut seen = vec![false; num_vertices];
        seen[DEPOT] = true;
        let mut current = DEPOT;
        let mut vertices = Vec::with_capacity(num_vertices + 1);
        vertices.push(DEPOT);
        let mut cost = 0.0;
        loop {
            let options = (0..num_vertices).filter(|&v| !seen[v]);
            // min_by_key keeps the first minimum, so ties go to the
            // lowest index.
            let closest = match options.min_by_key(
                |&option| OrderedFloat(graph.cost(current, option))) {
                Some(option) => option,
                None => break,  // No coins left. Head home.
            };
            cost += graph.cost(current, closest);
            seen[closest] = true;
            vertices.push(closest);
            current = closest;
        }
        cost += graph.cost(current, DEPOT);
        vertices.push(DEPOT);
        Tour { vertices, cost }
    }
}

impl Solver for BruteForceSolver {
    fn name(&self) -> &str {
        "brute-force"
    }

    fn do_solve(&mut self, graph: &Graph) -> Tour {
        brute_force(graph)
    }
}

impl Solver for UniformCostSolver {
    fn name(&self) -> &str {
        "uniform-cost"
    }

    fn do_solve(&mut self, graph: &Graph) -> Tour {
        search::uniform_cost(graph)
    }
}

impl Solver for AStarSolver {
    fn name(&self) -> &str {
        "a-star"
    }

    fn do_solve(&mut self, graph: &Graph) -> Tour {
        search::a_star(graph)
    }
}
