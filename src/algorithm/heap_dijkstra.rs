use log::debug;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{Distance, DistanceTable, ShortestPathAlgorithm, Weight};
use crate::data_structures::MinHeap;
use crate::graph::Graph;

/// Dijkstra's algorithm driven by a binary min-heap
///
/// Runs in O((V + E) log V). Improved distances are pushed as new heap
/// entries rather than decreasing existing ones; outdated entries are
/// discarded when popped. Distances match [`Dijkstra`](crate::Dijkstra)
/// exactly, but nodes at equal distance may be settled in a different order.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapDijkstra;

impl HeapDijkstra {
    /// Creates a new heap-based Dijkstra instance
    pub fn new() -> Self {
        HeapDijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for HeapDijkstra
where
    N: Clone + Eq + Hash + Debug,
    W: Weight + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "HeapDijkstra"
    }

    fn compute_distances(&self, graph: &G, start: &N) -> DistanceTable<N, W> {
        let mut table = DistanceTable::initialise(graph, start);
        let mut settled = vec![false; table.len()];
        let mut queue = MinHeap::with_capacity(table.len());
        let mut stale = 0usize;

        if let Some(source) = table.slot_of(start) {
            queue.push(source, W::zero());
        }

        while let Some((u, dist_u)) = queue.pop() {
            // A shorter entry for u was already popped
            if settled[u] {
                stale += 1;
                continue;
            }
            settled[u] = true;

            for (neighbor, weight) in graph.neighbors(table.node_at(u)) {
                let Some(v) = table.slot_of(neighbor) else {
                    continue;
                };
                if settled[v] {
                    continue;
                }

                let Some(candidate) = dist_u.checked_sum(weight) else {
                    continue;
                };
                if Distance::Finite(candidate) < table.distance_at(v) {
                    table.set_at(v, candidate);
                    queue.push(v, candidate);
                }
            }
        }

        debug!(
            "HeapDijkstra from {:?} settled {} of {} nodes ({} stale heap entries)",
            start,
            settled.iter().filter(|s| **s).count(),
            table.len(),
            stale
        );

        table
    }
}
