//! Keyed SSSP - Dijkstra shortest-path distances over label-keyed graphs
//!
//! Given a graph whose nodes are arbitrary hashable labels and a start node,
//! computes the minimum cumulative edge weight from the start to every node
//! listed as a key of the graph. Unreachable nodes keep the infinite sentinel.
//!
//! Two solvers are provided behind the [`ShortestPathAlgorithm`] trait:
//! [`Dijkstra`] selects the next node with a linear scan of the distance table
//! (O(V²)), and [`HeapDijkstra`] uses a min-heap with lazy deletion
//! (O((V+E) log V)). Both report identical distances.
//!
//! Edge weights must be non-negative. The solvers do not check this; see
//! [`graph::validate`] for opt-in precondition checks.

pub mod algorithm;
pub mod cli;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, heap_dijkstra::HeapDijkstra, Distance, DistanceTable,
    ShortestPathAlgorithm, SolverKind,
};
/// Re-export main types for convenient use
pub use graph::labelled::LabelledGraph;

use std::fmt::Debug;
use std::hash::Hash;

use graph::Graph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Edge from {from} targets {to}, which is not a node of the graph")]
    DanglingTarget { from: String, to: String },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes shortest distances from `start` to every node of `graph` with the
/// reference linear-scan solver.
///
/// `start` should be a node of the graph. If it is not, the returned table
/// holds every graph node as infinite and `start` itself at zero.
pub fn solve<N, W, G>(graph: &G, start: &N) -> DistanceTable<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: algorithm::Weight,
    G: Graph<N, W>,
{
    Dijkstra::new().compute_distances(graph, start)
}
