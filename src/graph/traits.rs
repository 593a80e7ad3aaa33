use std::fmt::Debug;
use std::hash::Hash;

/// Trait representing a static weighted directed graph keyed by node labels
///
/// Only the nodes yielded by [`Graph::nodes`] belong to the graph. An edge may
/// point at a label that is not a node; solvers skip such targets.
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash,
    W: Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the nodes in insertion order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing edges from a node,
    /// empty if the node is not part of the graph
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if the label is a node of the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}
