//! Opt-in precondition checks
//!
//! The solvers accept any graph and never call these. They exist for callers
//! who want to reject input the solvers would treat loosely: negative weights
//! (results undefined) and edges pointing at labels that are not nodes
//! (silently skipped during relaxation).

use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::Zero;
use std::fmt::Debug;
use std::hash::Hash;

/// Returns every edge `(from, to)` whose target is not a node of the graph
pub fn dangling_targets<N, W, G>(graph: &G) -> Vec<(N, N)>
where
    N: Clone + Eq + Hash,
    W: Copy,
    G: Graph<N, W>,
{
    let mut dangling = Vec::new();
    for node in graph.nodes() {
        for (target, _) in graph.neighbors(node) {
            if !graph.contains_node(target) {
                dangling.push((node.clone(), target.clone()));
            }
        }
    }
    dangling
}

/// Validate that the graph doesn't have negative weights
pub fn has_non_negative_weights<N, W, G>(graph: &G) -> bool
where
    N: Eq + Hash,
    W: Copy + Zero + PartialOrd,
    G: Graph<N, W>,
{
    graph
        .nodes()
        .all(|node| graph.neighbors(node).all(|(_, weight)| weight >= W::zero()))
}

/// Checks both preconditions, reporting the first violation in node order
pub fn check_preconditions<N, W, G>(graph: &G) -> Result<()>
where
    N: Eq + Hash + Debug,
    W: Copy + Zero + PartialOrd + Debug,
    G: Graph<N, W>,
{
    for node in graph.nodes() {
        for (target, weight) in graph.neighbors(node) {
            if weight < W::zero() {
                return Err(Error::NegativeWeight {
                    from: format!("{:?}", node),
                    to: format!("{:?}", target),
                    weight: format!("{:?}", weight),
                });
            }
            if !graph.contains_node(target) {
                return Err(Error::DanglingTarget {
                    from: format!("{:?}", node),
                    to: format!("{:?}", target),
                });
            }
        }
    }
    Ok(())
}
