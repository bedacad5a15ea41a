// Best-first search over partial tours, shared by the uniform-cost and
// A* solvers.
//
// A state is the prefix of vertices committed so far. Extending a
// prefix by one unvisited coin is an edge in the search space; once
// every coin is in the prefix, the only extension left is closing back
// on the depot. The first closed tour popped is returned: with
// non-negative costs and an admissible heuristic, pop keys never
// decrease, so nothing cheaper can still be in the frontier.
//
// No closed set is kept. Correctness rests on the pop order alone, at
// the price of re-expanding prefixes, so memory grows with the
// branching factor rather than the state count.

use log::debug;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::hash::{Hash, Hasher};

use crate::graph::{DEPOT, Graph, Tour, VertexId};
use crate::mst::spanning_cost;

/// Prefix of a tour, with the cost spent so far and an estimate of
/// what is left to spend.
#[derive(Debug, Clone)]
struct PartialTour {
    visited: Vec<VertexId>,
    cost: f64,
    heuristic: f64,
}

// Identity of a partial tour is its prefix: within one search run every
// generated prefix is distinct, so the frontier never aliases two
// entries.
impl PartialEq for PartialTour {
    fn eq(&self, other: &Self) -> bool {
        self.visited == other.visited
    }
}

impl Eq for PartialTour {}

impl Hash for PartialTour {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.visited.hash(state);
    }
}

impl PartialTour {
    fn last(&self) -> VertexId {
        self.visited[self.visited.len() - 1]
    }

    fn is_closed(&self) -> bool {
        self.visited.len() > 1 && self.last() == DEPOT
    }
}

/// Frontier ordering: cheapest estimated total first, then deepest
/// prefix, then lowest last vertex, then insertion order. The counter
/// makes the order total, so ties cannot make two runs diverge.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SearchKey {
    estimated_total: OrderedFloat<f64>,
    depth: Reverse<usize>,
    last: VertexId,
    seq: u64,
}

type Frontier = PriorityQueue<PartialTour, Reverse<SearchKey>>;

/// Exhaustive shortest-tour search, no heuristic.
pub fn uniform_cost(graph: &Graph) -> Tour {
    best_first_search(graph, |_, _| 0.0)
}

/// Search guided by the spanning-tree lower bound over the coins not
/// yet picked up.
pub fn a_star(graph: &Graph) -> Tour {
    best_first_search(graph, spanning_cost)
}

fn best_first_search<H>(graph: &Graph, heuristic: H) -> Tour
where
    H: Fn(&Graph, &[VertexId]) -> f64,
{
    if graph.num_vertices() == 1 {
        return Tour::depot_only();
    }
    let mut frontier = Frontier::new();
    let mut seq = 0u64;
    let coins: Vec<VertexId> = graph.others(DEPOT).collect();
    let root = PartialTour {
        visited: vec![DEPOT],
        cost: 0.0,
        heuristic: heuristic(graph, &coins),
    };
    push(&mut frontier, root, &mut seq);

    loop {
        // Every expansion pushes at least one successor, so the
        // frontier cannot drain before a closed tour pops.
        let (tour, _) = frontier.pop().unwrap();
        if tour.is_closed() {
            debug!("Found a tour of cost {} after {} pushes", tour.cost, seq);
            return Tour { vertices: tour.visited, cost: tour.cost };
        }

        let visited: FxHashSet<VertexId> = tour.visited.iter().copied().collect();
        let remaining: Vec<VertexId> = (0..graph.num_vertices())
            .filter(|v| !visited.contains(v))
            .collect();

        if remaining.is_empty() {
            // Every coin picked up. Close the loop back home.
            let mut vertices = tour.visited.clone();
            vertices.push(DEPOT);
            let closed = PartialTour {
                cost: tour.cost + graph.cost(tour.last(), DEPOT),
                heuristic: 0.0,
                visited: vertices,
            };
            push(&mut frontier, closed, &mut seq);
            continue;
        }

        for &next in &remaining {
            let mut vertices = tour.visited.clone();
            vertices.push(next);
            let left: Vec<VertexId> = remaining.iter().copied()
                .filter(|&v| v != next)
                .collect();
            let extended = PartialTour {
                cost: tour.cost + graph.cost(tour.last(), next),
                heuristic: heuristic(graph, &left),
                visited: vertices,
            };
            push(&mut frontier, extended, &mut seq);
        }
    }
}

fn push(frontier: &mut Frontier, tour: PartialTour, seq: &mut u64) {
    let key = SearchKey {
        estimated_total: OrderedFloat(tour.cost + tour.heuristic),
        depth: Reverse(tour.visited.len()),
        last: tour.last(),
        seq: *seq,
    };
    *seq += 1;
    frontier.push(tour, Reverse(key));
}

#[cfg(test)]
mod tests {
    use crate::brute_force::brute_force;
    use super::*;

    fn example_graph() -> Graph {
        Graph::from_matrix(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ]).unwrap()
    }

    // A handful of instances small enough to brute-force against.
    fn test_graphs() -> Vec<Graph> {
        vec![
            example_graph(),
            // Asymmetric, 5 vertices.
            Graph::from_matrix(vec![
                vec![0.0, 3.0, 8.0, 1.0, 9.0],
                vec![5.0, 0.0, 2.0, 7.0, 4.0],
                vec![6.0, 9.0, 0.0, 3.0, 2.0],
                vec![2.0, 8.0, 5.0, 0.0, 6.0],
                vec![7.0, 1.0, 4.0, 8.0, 0.0],
            ]).unwrap(),
            // Clustered distances, 6 vertices.
            Graph::from_matrix(vec![
                vec![0.0, 2.0, 2.5, 9.0, 8.5, 9.5],
                vec![2.0, 0.0, 1.0, 8.0, 7.5, 8.5],
                vec![2.5, 1.0, 0.0, 7.0, 6.5, 7.5],
                vec![9.0, 8.0, 7.0, 0.0, 1.5, 2.0],
                vec![8.5, 7.5, 6.5, 1.5, 0.0, 1.0],
                vec![9.5, 8.5, 7.5, 2.0, 1.0, 0.0],
            ]).unwrap(),
            // Zero-cost edges mixed in, 4 vertices.
            Graph::from_matrix(vec![
                vec![0.0, 0.0, 4.0, 2.0],
                vec![3.0, 0.0, 0.0, 5.0],
                vec![4.0, 1.0, 0.0, 0.0],
                vec![0.0, 6.0, 2.0, 0.0],
            ]).unwrap(),
        ]
    }

    #[test]
    fn test_uniform_cost_finds_optimal_cost() {
        let graph = example_graph();
        let tour = uniform_cost(&graph);
        assert!(tour.is_valid(&graph));
        assert_eq!(tour.cost, 80.0);
    }

    #[test]
    fn test_a_star_finds_optimal_cost() {
        let graph = example_graph();
        let tour = a_star(&graph);
        assert!(tour.is_valid(&graph));
        assert_eq!(tour.cost, 80.0);
    }

    #[test]
    fn test_uniform_cost_matches_brute_force() {
        for graph in test_graphs() {
            let exact = brute_force(&graph);
            let tour = uniform_cost(&graph);
            assert!(tour.is_valid(&graph));
            assert_eq!(tour.cost, exact.cost);
        }
    }

    #[test]
    fn test_a_star_matches_brute_force() {
        for graph in test_graphs() {
            let exact = brute_force(&graph);
            let tour = a_star(&graph);
            assert!(tour.is_valid(&graph));
            assert_eq!(tour.cost, exact.cost);
        }
    }

    #[test]
    fn test_two_vertices_asymmetric() {
        let graph = Graph::from_matrix(vec![
            vec![0.0, 3.0],
            vec![7.0, 0.0],
        ]).unwrap();
        assert_eq!(uniform_cost(&graph).vertices, vec![0, 1, 0]);
        assert_eq!(uniform_cost(&graph).cost, 10.0);
        assert_eq!(a_star(&graph).vertices, vec![0, 1, 0]);
        assert_eq!(a_star(&graph).cost, 10.0);
    }

    #[test]
    fn test_depot_only() {
        let graph = Graph::from_matrix(vec![vec![0.0]]).unwrap();
        assert_eq!(uniform_cost(&graph), Tour::depot_only());
        assert_eq!(a_star(&graph), Tour::depot_only());
    }

    // With every edge at cost 1 all tours tie, so the result is decided
    // purely by the (estimated total, depth, last vertex, insertion)
    // key. The expected sequence is worked out by hand from that order.
    #[test]
    fn test_tie_breaking_is_deterministic() {
        let graph = Graph::from_matrix(vec![vec![1.0; 4]; 4]).unwrap();
        let tour = uniform_cost(&graph);
        assert_eq!(tour.vertices, vec![0, 3, 2, 1, 0]);
        assert_eq!(tour.cost, 4.0);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        for graph in test_graphs() {
            assert_eq!(uniform_cost(&graph), uniform_cost(&graph));
            assert_eq!(a_star(&graph), a_star(&graph));
        }
    }
}
