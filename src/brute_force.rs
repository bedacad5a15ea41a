// Exact solver that scores every possible visiting order.
//
// Enumerates the (N-1)! permutations of the coins in lexicographic
// order and keeps the first one reaching the minimal cost, so the
// result is both optimal and reproducible. Only viable for small N;
// the search solvers reach the same cost with fewer expansions.

use itertools::Itertools;
use log::debug;

use crate::graph::{DEPOT, Graph, Tour, VertexId};

pub fn brute_force(graph: &Graph) -> Tour {
    if graph.num_vertices() == 1 {
        return Tour::depot_only();
    }
    let coins: Vec<VertexId> = graph.others(DEPOT).collect();
    let num_coins = coins.len();
    let mut best: Option<Tour> = None;
    for permutation in coins.into_iter().permutations(num_coins) {
        let mut vertices = Vec::with_capacity(num_coins + 2);
        vertices.push(DEPOT);
        vertices.extend(permutation);
        vertices.push(DEPOT);
        let cost = graph.tour_cost(&vertices);
        let better = match &best {
            Some(tour) => cost < tour.cost,
            None => true,
        };
        if better {
            debug!("New best tour! {:?} cost={}", vertices, cost);
            best = Some(Tour { vertices, cost });
        }
    }
    best.unwrap()
}
