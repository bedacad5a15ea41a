// Cost matrix between the depot and the coins, plus the tour contract
// that every solver must satisfy.

use log::info;
use serde::Serialize;
use thiserror::Error;

pub type VertexId = usize;

/// The depot, where every tour starts and ends.
pub const DEPOT: VertexId = 0;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("negative cost at ({row}, {column})")]
    NegativeCost { row: usize, column: usize },
    #[error("non-finite cost at ({row}, {column})")]
    NonFiniteCost { row: usize, column: usize },
    #[error("empty cost matrix")]
    Empty,
}

/// Pairwise travel costs between the depot (vertex 0) and the coins.
/// Costs may be asymmetric. The diagonal is never read.
pub struct Graph {
    // costs[from * num_vertices + to]
    costs: Vec<f64>,
    num_vertices: usize,
}

impl Graph {
    /// Validates and adopts a square matrix of non-negative finite costs.
    /// Solvers assume a valid graph, so all checks happen here.
    pub fn from_matrix(matrix: Vec<Vec<f64>>) -> Result<Self, Error> {
        let num_vertices = matrix.len();
        if num_vertices == 0 {
            return Err(Error::Empty);
        }
        let mut costs = Vec::with_capacity(num_vertices * num_vertices);
        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != num_vertices {
                return Err(Error::NotSquare {
                    row, len: entries.len(), expected: num_vertices,
                });
            }
            for (column, &cost) in entries.iter().enumerate() {
                if !cost.is_finite() {
                    return Err(Error::NonFiniteCost { row, column });
                }
                if cost < 0.0 {
                    return Err(Error::NegativeCost { row, column });
                }
                costs.push(cost);
            }
        }
        info!("Graph created: {} vertices", num_vertices);
        Ok(Graph { costs, num_vertices })
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    pub fn cost(&self, from: VertexId, to: VertexId) -> f64 {
        self.costs[from * self.num_vertices + to]
    }

    #[inline]
    pub fn others(&self, from: VertexId) -> impl Iterator<Item=VertexId> + '_ {
        (0..self.num_vertices).filter(move |&v| v != from)
    }

    /// Total cost of following 'vertices' edge by edge.
    pub fn tour_cost(&self, vertices: &[VertexId]) -> f64 {
        vertices.windows(2).map(|leg| self.cost(leg[0], leg[1])).sum()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Tour {
    pub vertices: Vec<VertexId>,
    pub cost: f64,
}

impl Tour {
    /// Tour that never leaves the depot, for a graph with no coins.
    pub fn depot_only() -> Self {
        Tour { vertices: vec![DEPOT, DEPOT], cost: 0.0 }
    }

    /// Whether this is a closed depot-to-depot tour picking up every
    /// coin exactly once.
    pub fn is_valid(&self, graph: &Graph) -> bool {
        let num_vertices = graph.num_vertices();
        if self.vertices.len() != num_vertices + 1 {
            return false;
        }
        if self.vertices[0] != DEPOT || self.vertices[num_vertices] != DEPOT {
            return false;
        }
        let mut seen = vec![false; num_vertices];
        for &vertex in &self.vertices[1..num_vertices] {
            if vertex == DEPOT || vertex >= num_vertices || seen[vertex] {
                return false;
            }
            seen[vertex] = true;
        }
        true
    }
}
