use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{DistanceTable, Weight};
use crate::graph::Graph;

/// Trait for single-source shortest distance algorithms
///
/// Implementations are total: an unreachable node is reported as
/// [`Distance::Infinite`](crate::Distance::Infinite), never as an error.
/// Edge weights are assumed non-negative; results are unspecified otherwise.
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest distances from a start node to every node of the graph
    fn compute_distances(&self, graph: &G, start: &N) -> DistanceTable<N, W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
