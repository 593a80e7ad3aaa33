use crate::graph::traits::Graph;
use crate::Result;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use std::io::Read;

/// A directed graph stored as an insertion-ordered adjacency mapping
///
/// `node -> (neighbor -> weight)`. Iteration over nodes and over each node's
/// neighbors follows insertion order, which is also the order in which a JSON
/// object is read. The JSON shape is `{"A": {"B": 4, "C": 2}, "B": {}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize + Eq + Hash, W: Serialize",
    deserialize = "N: Deserialize<'de> + Eq + Hash, W: Deserialize<'de>"
))]
pub struct LabelledGraph<N, W> {
    /// Outgoing edges for each node: node -> {target -> weight}
    adjacency: IndexMap<N, IndexMap<N, W>>,
}

impl<N, W> LabelledGraph<N, W>
where
    N: Eq + Hash,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        LabelledGraph {
            adjacency: IndexMap::new(),
        }
    }

    /// Creates a new graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        LabelledGraph {
            adjacency: IndexMap::with_capacity(nodes),
        }
    }

    /// Adds a node without edges. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, IndexMap::new());
        true
    }

    /// Adds a directed edge, inserting `from` as a node if needed
    ///
    /// `to` is not added as a node. An edge whose target never becomes a node
    /// is ignored by the solvers. Returns the previous weight of the edge, if any.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> Option<W> {
        self.adjacency.entry(from).or_default().insert(to, weight)
    }

    /// Adds edges in both directions with the same weight, inserting both nodes
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: W)
    where
        N: Clone,
        W: Copy,
    {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Borrows the underlying adjacency mapping
    pub fn adjacency(&self) -> &IndexMap<N, IndexMap<N, W>> {
        &self.adjacency
    }

    /// Consumes the graph, returning the adjacency mapping
    pub fn into_inner(self) -> IndexMap<N, IndexMap<N, W>> {
        self.adjacency
    }
}

impl<N, W> LabelledGraph<N, W>
where
    N: DeserializeOwned + Eq + Hash,
    W: DeserializeOwned,
{
    /// Parses a graph from its JSON object form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a graph in JSON object form
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl<N, W> Default for LabelledGraph<N, W>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> From<IndexMap<N, IndexMap<N, W>>> for LabelledGraph<N, W> {
    fn from(adjacency: IndexMap<N, IndexMap<N, W>>) -> Self {
        LabelledGraph { adjacency }
    }
}

/// Builds a graph from `(node, [(neighbor, weight), ..])` entries, in order
impl<N, W, E> FromIterator<(N, E)> for LabelledGraph<N, W>
where
    N: Eq + Hash,
    E: IntoIterator<Item = (N, W)>,
{
    fn from_iter<T: IntoIterator<Item = (N, E)>>(iter: T) -> Self {
        let mut graph = LabelledGraph::new();
        for (node, edges) in iter {
            let targets = graph.adjacency.entry(node).or_default();
            targets.extend(edges);
        }
        graph
    }
}

impl<N, W> Graph<N, W> for LabelledGraph<N, W>
where
    N: Eq + Hash + Debug,
    W: Copy + Debug,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }
}
