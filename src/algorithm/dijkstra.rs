use log::{debug, trace};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{Distance, DistanceTable, ShortestPathAlgorithm, Weight};
use crate::graph::Graph;

/// Classic Dijkstra's algorithm with linear-scan node selection
///
/// After settling a node, the whole distance table is scanned for the
/// unvisited node with the strictly smallest finite distance; the first one
/// in key order wins ties. That makes the run O(V²) regardless of edge count,
/// which suits small graphs. See [`HeapDijkstra`](crate::HeapDijkstra) for
/// large sparse ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_distances(&self, graph: &G, start: &N) -> DistanceTable<N, W> {
        let mut table = DistanceTable::initialise(graph, start);
        let mut visited = vec![false; table.len()];
        let mut current = table.slot_of(start);
        let mut settled = 0usize;

        debug!(
            "Dijkstra from {:?}: {} nodes, {} edges",
            start,
            graph.node_count(),
            graph.edge_count()
        );

        while let Some(u) = current {
            // Only finite nodes are ever selected
            let Distance::Finite(dist_u) = table.distance_at(u) else {
                break;
            };

            // Relax all outgoing edges
            for (neighbor, weight) in graph.neighbors(table.node_at(u)) {
                // Targets that are not graph nodes have no slot
                let Some(v) = table.slot_of(neighbor) else {
                    continue;
                };
                if visited[v] {
                    continue;
                }

                // A sum that overflows is no improvement
                let Some(candidate) = dist_u.checked_sum(weight) else {
                    continue;
                };
                if Distance::Finite(candidate) < table.distance_at(v) {
                    table.set_at(v, candidate);
                }
            }

            visited[u] = true;
            settled += 1;
            trace!("settled {:?} at {:?}", table.node_at(u), dist_u);

            current = closest_unvisited(&table, &visited);
        }

        debug!(
            "Dijkstra from {:?} settled {} of {} nodes",
            start,
            settled,
            table.len()
        );

        table
    }
}

/// Scans the table in key order for the unvisited node with the strictly
/// smallest finite distance
fn closest_unvisited<N, W>(table: &DistanceTable<N, W>, visited: &[bool]) -> Option<usize>
where
    N: Eq + Hash,
    W: Weight,
{
    let mut closest: Option<(usize, W)> = None;

    for (slot, (_, distance)) in table.iter().enumerate() {
        if visited[slot] {
            continue;
        }
        if let Distance::Finite(d) = distance {
            let closer = match closest {
                None => true,
                Some((_, smallest)) => d < smallest,
            };
            if closer {
                closest = Some((slot, d));
            }
        }
    }

    closest.map(|(slot, _)| slot)
}
