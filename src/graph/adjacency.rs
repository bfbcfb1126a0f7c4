//! Undirected adjacency-set graph
//!
//! Ordered maps/sets keep every iteration order deterministic, which in turn
//! makes the refiner's max-edge tie-break reproducible across runs.
//!
//! # Representation
//!
//! ```text
//! Graph: 0 - 1, 0 - 2
//!
//! adjacency:
//!   0 -> {1, 2}
//!   1 -> {0}
//!   2 -> {0}
//! ```
//!
//! Symmetry invariant: u ∈ neighbors(v) iff v ∈ neighbors(u).

use anyhow::{bail, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Node identifier (opaque, non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical undirected edge: endpoints are stored as `(min, max)` so that
/// `(u, v)` and `(v, u)` compare and hash identically.
///
/// # Example
///
/// ```
/// use edgecut::{Edge, NodeId};
///
/// assert_eq!(Edge::new(NodeId(3), NodeId(1)), Edge::new(NodeId(1), NodeId(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    lo: NodeId,
    hi: NodeId,
}

impl Edge {
    /// Build the canonical form of the undirected edge `(u, v)`.
    #[must_use]
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { lo: u, hi: v }
        } else {
            Self { lo: v, hi: u }
        }
    }

    /// Smaller endpoint.
    #[must_use]
    pub const fn lo(&self) -> NodeId {
        self.lo
    }

    /// Larger endpoint.
    #[must_use]
    pub const fn hi(&self) -> NodeId {
        self.hi
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// Mutable undirected graph over [`NodeId`]s
///
/// Supports the three operations the partition refiner needs: symmetric edge
/// insertion, symmetric edge removal, and deterministic edge/neighbor
/// iteration. Nodes are never deleted; removing every edge of a node leaves
/// it present with an empty neighbor set, so it still shows up as a
/// singleton in connectivity analysis.
///
/// # Example
///
/// ```
/// use edgecut::{AdjacencyGraph, NodeId};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge(NodeId(0), NodeId(1)).unwrap();
/// graph.add_edge(NodeId(1), NodeId(2)).unwrap();
///
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.degree(NodeId(1)), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    num_edges: usize,
}

impl AdjacencyGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an undirected edge list.
    ///
    /// Duplicate edges (in either orientation) collapse to one.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge is a self-loop.
    pub fn from_edge_list(edges: &[(NodeId, NodeId)]) -> Result<Self> {
        let mut graph = Self::new();
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Register a node without any edges.
    ///
    /// Idempotent; existing adjacency is untouched.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Insert the undirected edge `(u, v)`.
    ///
    /// Both directions are recorded; inserting an existing edge is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error on a self-loop (`u == v`).
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        if u == v {
            bail!("self-loop on node {u} rejected");
        }
        let inserted = self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
        if inserted {
            self.num_edges += 1;
        }
        Ok(())
    }

    /// Remove the undirected edge `(u, v)`.
    ///
    /// Deletes both directions. Removing an absent edge is a no-op, not an
    /// error. Endpoints stay registered even when their last edge goes.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) {
        let removed = self
            .adjacency
            .get_mut(&u)
            .is_some_and(|set| set.remove(&v));
        if let Some(set) = self.adjacency.get_mut(&v) {
            set.remove(&u);
        }
        if removed {
            self.num_edges -= 1;
        }
    }

    /// Whether the undirected edge `(u, v)` is present.
    #[must_use]
    pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency.get(&u).is_some_and(|set| set.contains(&v))
    }

    /// Neighbors of `node`, in ascending order.
    ///
    /// Empty for unknown or isolated nodes.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.get(&node).into_iter().flatten().copied()
    }

    /// Degree of `node` (0 for unknown or isolated nodes).
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeSet::len)
    }

    /// All registered nodes, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each undirected edge once, in ascending canonical order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&u, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| Edge::new(u, v))
        })
    }

    /// Number of registered nodes (including isolated ones).
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }
}
