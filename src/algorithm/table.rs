use indexmap::IndexMap;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::ops::Index;

use crate::algorithm::Weight;
use crate::graph::Graph;

/// Serialized form of [`Distance::Infinite`]
pub const INFINITE_MARKER: &str = "infinite";

/// Best known cumulative distance from the start node
///
/// Every finite distance orders before `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    /// No path from the start has been found
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// Returns the finite value, or None for `Infinite`
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Distance::Infinite)
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => Display::fmt(w, f),
            Distance::Infinite => f.write_str(INFINITE_MARKER),
        }
    }
}

impl<W: Serialize> Serialize for Distance<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(w) => w.serialize(serializer),
            Distance::Infinite => serializer.serialize_str(INFINITE_MARKER),
        }
    }
}

impl<'de, W: Deserialize<'de>> Deserialize<'de> for Distance<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<W> {
            Finite(W),
            Marker(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Finite(w) => Ok(Distance::Finite(w)),
            Repr::Marker(marker) if marker == INFINITE_MARKER => Ok(Distance::Infinite),
            Repr::Marker(marker) => Err(de::Error::invalid_value(
                Unexpected::Str(&marker),
                &"a number or \"infinite\"",
            )),
        }
    }
}

/// Distances from one start node to every node of a graph
///
/// Keys are the graph's nodes in insertion order, followed by the start node
/// when it is not itself a node of the graph. Slot `i` is the i-th key; the
/// solvers address nodes by slot.
#[derive(Debug, Clone)]
pub struct DistanceTable<N, W> {
    start: N,
    distances: IndexMap<N, Distance<W>>,
}

impl<N, W> DistanceTable<N, W>
where
    N: Clone + Eq + Hash,
    W: Weight,
{
    /// Every node of `graph` at `Infinite`, then `start` at zero
    pub(crate) fn initialise<G: Graph<N, W>>(graph: &G, start: &N) -> Self {
        let mut distances = IndexMap::with_capacity(graph.node_count() + 1);
        for node in graph.nodes() {
            distances.insert(node.clone(), Distance::Infinite);
        }
        distances.insert(start.clone(), Distance::Finite(W::zero()));

        DistanceTable {
            start: start.clone(),
            distances,
        }
    }

    pub(crate) fn slot_of(&self, node: &N) -> Option<usize> {
        self.distances.get_index_of(node)
    }

    pub(crate) fn node_at(&self, slot: usize) -> &N {
        self.distances
            .get_index(slot)
            .map(|(node, _)| node)
            .unwrap_or_else(|| panic!("distance table slot {} out of range", slot))
    }

    pub(crate) fn distance_at(&self, slot: usize) -> Distance<W> {
        self.distances[slot]
    }

    pub(crate) fn set_at(&mut self, slot: usize, distance: W) {
        self.distances[slot] = Distance::Finite(distance);
    }
}

impl<N, W> DistanceTable<N, W>
where
    N: Eq + Hash,
    W: Copy,
{
    /// The node distances were measured from
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Distance to `node`, or None if it is not a key of the table
    pub fn get(&self, node: &N) -> Option<Distance<W>> {
        self.distances.get(node).copied()
    }

    /// Finite distance to `node`, or None if unreachable or absent
    pub fn distance_to(&self, node: &N) -> Option<W> {
        self.get(node).and_then(Distance::finite)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance_to(node).is_some()
    }

    /// Iterates over `(node, distance)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (&N, Distance<W>)> + '_ {
        self.distances.iter().map(|(node, distance)| (node, *distance))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of nodes with a finite distance, the start included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    pub fn as_map(&self) -> &IndexMap<N, Distance<W>> {
        &self.distances
    }

    pub fn into_inner(self) -> IndexMap<N, Distance<W>> {
        self.distances
    }
}

impl<N, W> Index<&N> for DistanceTable<N, W>
where
    N: Eq + Hash + Debug,
{
    type Output = Distance<W>;

    fn index(&self, node: &N) -> &Distance<W> {
        match self.distances.get(node) {
            Some(distance) => distance,
            None => panic!("{:?} is not in the distance table", node),
        }
    }
}

/// Tables are equal when measured from the same start with the same distances.
/// Key order is not compared.
impl<N, W> PartialEq for DistanceTable<N, W>
where
    N: Eq + Hash,
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.distances == other.distances
    }
}

impl<N, W> Serialize for DistanceTable<N, W>
where
    N: Serialize + Eq + Hash,
    W: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.distances.serialize(serializer)
    }
}

impl<N, W> Display for DistanceTable<N, W>
where
    N: Display,
    W: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (node, distance)) in self.distances.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", node, distance)?;
        }
        f.write_str("}")
    }
}
