//! Girvan-Newman partition refinement
//!
//! Girvan & Newman (2002): repeatedly remove the edge with the highest
//! betweenness and read communities off the connected components. The
//! refiner takes exclusive ownership of the graph and yields one partition
//! per removed edge, which lets a caller score every intermediate partition
//! (e.g. by modularity) and keep the best.

use crate::algorithms::components::{connected_components, Partition};
use crate::algorithms::edge_betweenness;
use crate::algorithms::modularity::modularity;
use crate::graph::{AdjacencyGraph, Edge};
use log::debug;

/// Iterative edge-removal refiner
///
/// A finite lazy sequence of partitions: each `next()` recomputes edge
/// betweenness on the current graph state, removes the highest-scoring edge
/// (ties broken by the first edge in canonical order), and yields the
/// resulting connected components. The sequence ends when the graph has no
/// edges left, after at most |E| items.
///
/// Community counts along the sequence are non-decreasing: removing an edge
/// can split a component but never merge two.
///
/// # Example
///
/// ```
/// use edgecut::{AdjacencyGraph, GirvanNewman, NodeId};
///
/// let graph = AdjacencyGraph::from_edge_list(&[
///     (NodeId(0), NodeId(1)),
///     (NodeId(2), NodeId(3)),
/// ])
/// .unwrap();
///
/// let partitions: Vec<_> = GirvanNewman::new(graph).collect();
/// assert_eq!(partitions.len(), 2); // One per removed edge
/// assert_eq!(partitions.last().map(edgecut::Partition::len), Some(4));
/// ```
#[derive(Debug)]
pub struct GirvanNewman {
    graph: AdjacencyGraph,
    iteration: usize,
}

impl GirvanNewman {
    /// Start a refinement run, taking ownership of the graph.
    #[must_use]
    pub fn new(graph: AdjacencyGraph) -> Self {
        Self {
            graph,
            iteration: 0,
        }
    }

    /// Connected components of the graph as it currently stands.
    ///
    /// Before the first `next()` this is the input graph's own partition.
    #[must_use]
    pub fn current_partition(&self) -> Partition {
        connected_components(&self.graph)
    }

    /// Edges still present in the working graph.
    #[must_use]
    pub fn remaining_edges(&self) -> usize {
        self.graph.num_edges()
    }
}

impl Iterator for GirvanNewman {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let scores = edge_betweenness(&self.graph);

        // Empty table means no edges remain: refinement is done.
        // Only a strictly greater score displaces the candidate, so ties go
        // to the first edge in canonical order.
        let mut best: Option<(Edge, f64)> = None;
        for (&edge, &value) in &scores {
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((edge, value));
            }
        }
        let (target, score) = best?;

        self.graph.remove_edge(target.lo(), target.hi());
        self.iteration += 1;
        debug!(
            "iteration {}: removed edge {target} (betweenness {score:.3}), {} edges left",
            self.iteration,
            self.graph.num_edges()
        );

        Some(connected_components(&self.graph))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Exactly one partition per remaining edge
        let edges = self.graph.num_edges();
        (edges, Some(edges))
    }
}

impl ExactSizeIterator for GirvanNewman {}

/// Run refinement to exhaustion and return the final partition
///
/// This is the finest partition: once every edge is removed, each node forms
/// its own community. An edgeless input yields its initial components
/// immediately. Callers who want a quality-selected partition should iterate
/// [`GirvanNewman`] themselves (or use [`girvan_newman_best`]).
///
/// # Example
///
/// ```
/// use edgecut::{girvan_newman, AdjacencyGraph, NodeId};
///
/// let graph = AdjacencyGraph::from_edge_list(&[(NodeId(0), NodeId(1))]).unwrap();
/// let partition = girvan_newman(graph);
/// assert_eq!(partition.len(), 2); // Two singletons
/// ```
#[must_use]
pub fn girvan_newman(graph: AdjacencyGraph) -> Partition {
    let refiner = GirvanNewman::new(graph);
    let initial = refiner.current_partition();
    refiner.last().unwrap_or(initial)
}

/// Run refinement and return the intermediate partition with the highest
/// modularity against the original graph
///
/// The initial partition (before any removal) participates in the
/// comparison. Earlier partitions win ties, so a graph with no community
/// structure comes back unsplit.
///
/// # Example
///
/// ```
/// use edgecut::{girvan_newman_best, AdjacencyGraph, NodeId};
///
/// // Two triangles joined by a bridge: best split is the two triangles.
/// let graph = AdjacencyGraph::from_edge_list(&[
///     (NodeId(0), NodeId(1)),
///     (NodeId(1), NodeId(2)),
///     (NodeId(2), NodeId(0)),
///     (NodeId(3), NodeId(4)),
///     (NodeId(4), NodeId(5)),
///     (NodeId(5), NodeId(3)),
///     (NodeId(2), NodeId(3)),
/// ])
/// .unwrap();
///
/// let best = girvan_newman_best(graph);
/// assert_eq!(best.len(), 2);
/// ```
#[must_use]
pub fn girvan_newman_best(graph: AdjacencyGraph) -> Partition {
    let original = graph.clone();
    let refiner = GirvanNewman::new(graph);

    let mut best = refiner.current_partition();
    let mut best_score = modularity(&original, &best);

    for partition in refiner {
        let score = modularity(&original, &partition);
        if score > best_score {
            best_score = score;
            best = partition;
        }
    }

    debug!("best partition: {} communities, Q = {best_score:.4}", best.len());
    best
}
