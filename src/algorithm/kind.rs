use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::heap_dijkstra::HeapDijkstra;
use crate::algorithm::{DistanceTable, ShortestPathAlgorithm, Weight};
use crate::graph::Graph;
use crate::Error;

/// Selects one of the solvers by name, as used by the CLI and HTTP layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    /// [`Dijkstra`]: linear-scan selection, O(V²)
    #[default]
    Linear,
    /// [`HeapDijkstra`]: binary heap with lazy deletion, O((V + E) log V)
    Heap,
}

impl SolverKind {
    pub const ALL: [SolverKind; 2] = [SolverKind::Linear, SolverKind::Heap];

    pub fn as_str(self) -> &'static str {
        match self {
            SolverKind::Linear => "linear",
            SolverKind::Heap => "heap",
        }
    }

    /// Display name of the solver, as reported by its `name()`
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Linear => "Dijkstra",
            SolverKind::Heap => "HeapDijkstra",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            SolverKind::Linear => "O(V^2)",
            SolverKind::Heap => "O((V + E) log V)",
        }
    }

    /// Runs the selected solver
    pub fn run<N, W, G>(self, graph: &G, start: &N) -> DistanceTable<N, W>
    where
        N: Clone + Eq + Hash + Debug,
        W: Weight + Ord,
        G: Graph<N, W>,
    {
        match self {
            SolverKind::Linear => Dijkstra::new().compute_distances(graph, start),
            SolverKind::Heap => HeapDijkstra::new().compute_distances(graph, start),
        }
    }
}

impl Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "dijkstra" => Ok(SolverKind::Linear),
            "heap" | "heap-dijkstra" => Ok(SolverKind::Heap),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
