// Minimum-spanning-tree lower bound for the A* solver.
//
// Any completion of a partial tour has to connect every remaining coin,
// so it contains at least a spanning tree's worth of edges over them.
// The MST cost over that subset therefore never overestimates the true
// remaining cost, which keeps the heuristic admissible.

use ordered_float::OrderedFloat;

use crate::graph::{Graph, VertexId};

/// Disjoint-set over the full vertex universe.
///
/// One instance lives for the duration of a single spanning cost
/// computation. Callers must not reuse it across computations: stale
/// merges would bias later estimates.
pub struct DisjointSet {
    parent: Vec<VertexId>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        DisjointSet { parent: (0..size).collect() }
    }

    pub fn find(&mut self, vertex: VertexId) -> VertexId {
        let mut root = vertex;
        while self.parent[root] != root {
            // Path halving, keeps later lookups short.
            self.parent[root] = self.parent[self.parent[root]];
            root = self.parent[root];
        }
        root
    }

    /// Merges the components of 'a' and 'b'. Returns false if they were
    /// already in the same component.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        true
    }
}

/// Cost of a minimum spanning tree over 'vertices', Kruskal-style.
/// An asymmetric pair counts as the cheaper of its two directions.
pub fn spanning_cost(graph: &Graph, vertices: &[VertexId]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }
    let mut edges = Vec::with_capacity(vertices.len() * (vertices.len() - 1) / 2);
    for (i, &u) in vertices.iter().enumerate() {
        for &v in &vertices[i + 1..] {
            let weight = f64::min(graph.cost(u, v), graph.cost(v, u));
            edges.push((u, v, weight));
        }
    }
    // Sort by (weight, endpoints) so tied weights resolve the same way
    // on every run.
    edges.sort_by_key(|&(u, v, weight)| (OrderedFloat(weight), u, v));

    let mut components = DisjointSet::new(graph.num_vertices());
    let mut merges_left = vertices.len() - 1;
    let mut total = 0.0;
    for (u, v, weight) in edges {
        if components.union(u, v) {
            total += weight;
            merges_left -= 1;
            if merges_left == 0 {
                break;
            }
        }
    }
    total
}
