use crate::graph::LabelledGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// The four-city road map used throughout the docs and tests
///
/// Symmetric: `A-B 4, A-C 2, B-C 5, B-D 10, C-D 3`. From `A` the distances are
/// `{A: 0, B: 4, C: 2, D: 5}`.
pub fn reference_graph() -> LabelledGraph<&'static str, u32> {
    LabelledGraph::from_iter([
        ("A", vec![("B", 4), ("C", 2)]),
        ("B", vec![("A", 4), ("C", 5), ("D", 10)]),
        ("C", vec![("A", 2), ("B", 5), ("D", 3)]),
        ("D", vec![("B", 10), ("C", 3)]),
    ])
}

/// Label used for the i-th node of generated graphs
pub fn node_label(i: usize) -> String {
    format!("n{}", i)
}

/// Generates a random directed graph with `n` nodes labelled `n0..`
/// and roughly `edge_factor * n` edges with integer weights in `0..=max_weight`
///
/// Self-loops are skipped. Every node is present even if it has no edges.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_weight: u32,
) -> LabelledGraph<String, u32> {
    random_graph_with(rng, n, edge_factor, |rng| rng.gen_range(0..=max_weight))
}

/// Same as [`random_graph`] with floating weights in `[1.0, 100.0)`
pub fn random_float_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
) -> LabelledGraph<String, OrderedFloat<f64>> {
    random_graph_with(rng, n, edge_factor, |rng| {
        OrderedFloat(rng.gen_range(1.0..100.0))
    })
}

fn random_graph_with<R, W, F>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    mut weight: F,
) -> LabelledGraph<String, W>
where
    R: Rng,
    F: FnMut(&mut R) -> W,
{
    let mut graph = LabelledGraph::with_capacity(n);
    for i in 0..n {
        graph.add_node(node_label(i));
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let w = weight(rng);
            graph.add_edge(node_label(u), node_label(v), w);
        }
    }

    graph
}
