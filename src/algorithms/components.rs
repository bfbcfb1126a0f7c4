//! Connected-component extraction
//!
//! Traversal uses an explicit stack rather than recursion so component
//! discovery cannot hit recursion-depth limits on long path graphs.

use crate::graph::{AdjacencyGraph, NodeId};
use std::collections::{BTreeSet, HashSet};

/// Disjoint, exhaustive grouping of a graph's nodes into communities
///
/// Every node known to the source graph appears in exactly one community.
/// Communities are ordered (discovery order) and each is an ascending set
/// of node identifiers.
///
/// # Example
///
/// ```
/// use edgecut::{connected_components, AdjacencyGraph, NodeId};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge(NodeId(0), NodeId(1)).unwrap();
/// graph.add_node(NodeId(5));
///
/// let partition = connected_components(&graph);
/// assert_eq!(partition.len(), 2); // {0, 1} and {5}
/// assert_eq!(partition.community_of(NodeId(1)), partition.community_of(NodeId(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    communities: Vec<BTreeSet<NodeId>>,
}

impl Partition {
    /// Build a partition from pre-formed communities.
    #[must_use]
    pub fn new(communities: Vec<BTreeSet<NodeId>>) -> Self {
        Self { communities }
    }

    /// Number of communities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    /// Whether the partition has no communities (empty source graph).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    /// The communities, in discovery order.
    #[must_use]
    pub fn communities(&self) -> &[BTreeSet<NodeId>] {
        &self.communities
    }

    /// Iterate over communities.
    pub fn iter(&self) -> impl Iterator<Item = &BTreeSet<NodeId>> {
        self.communities.iter()
    }

    /// Index of the community containing `node`, if any.
    #[must_use]
    pub fn community_of(&self, node: NodeId) -> Option<usize> {
        self.communities
            .iter()
            .position(|community| community.contains(&node))
    }

    /// Total number of nodes across all communities.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.communities.iter().map(BTreeSet::len).sum()
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a BTreeSet<NodeId>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.communities.iter()
    }
}

/// Compute the connected components of the current graph state
///
/// Each community is a maximal set of mutually reachable nodes. Every node
/// the graph knows about lands in exactly one community; isolated nodes form
/// singletons. Runs in O(V + E).
///
/// # Example
///
/// ```
/// use edgecut::{connected_components, AdjacencyGraph, NodeId};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge(NodeId(0), NodeId(1)).unwrap();
/// graph.add_edge(NodeId(2), NodeId(3)).unwrap();
///
/// assert_eq!(connected_components(&graph).len(), 2);
/// ```
#[must_use]
pub fn connected_components(graph: &AdjacencyGraph) -> Partition {
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(graph.num_nodes());
    let mut communities = Vec::new();

    for start in graph.nodes() {
        if visited.contains(&start) {
            continue;
        }

        // Iterative DFS from the first unvisited node
        let mut component = BTreeSet::new();
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(node) = stack.pop() {
            component.insert(node);
            for neighbor in graph.neighbors(node) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        communities.push(component);
    }

    Partition::new(communities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = AdjacencyGraph::new();
        let partition = connected_components(&graph);
        assert!(partition.is_empty());
        assert_eq!(partition.num_nodes(), 0);
    }

    #[test]
    fn test_single_edge_one_component() {
        let graph = AdjacencyGraph::from_edge_list(&[(NodeId(0), NodeId(1))]).unwrap();
        let partition = connected_components(&graph);

        assert_eq!(partition.len(), 1);
        assert_eq!(partition.num_nodes(), 2);
    }

    #[test]
    fn test_two_disconnected_edges() {
        let graph =
            AdjacencyGraph::from_edge_list(&[(NodeId(0), NodeId(1)), (NodeId(2), NodeId(3))])
                .unwrap();
        let partition = connected_components(&graph);

        assert_eq!(partition.len(), 2);
        assert_ne!(
            partition.community_of(NodeId(0)),
            partition.community_of(NodeId(2))
        );
    }

    #[test]
    fn test_isolated_nodes_are_singletons() {
        let mut graph = AdjacencyGraph::new();
        for id in 0..5 {
            graph.add_node(NodeId(id));
        }

        let partition = connected_components(&graph);
        assert_eq!(partition.len(), 5);
        assert!(partition.iter().all(|community| community.len() == 1));
    }

    #[test]
    fn test_chain_is_one_component() {
        let edges: Vec<_> = (0..99).map(|i| (NodeId(i), NodeId(i + 1))).collect();
        let graph = AdjacencyGraph::from_edge_list(&edges).unwrap();

        let partition = connected_components(&graph);
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.num_nodes(), 100);
    }

    #[test]
    fn test_partition_covers_all_nodes_exactly_once() {
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(4), NodeId(5)),
        ])
        .unwrap();

        let partition = connected_components(&graph);
        let mut seen = BTreeSet::new();
        for community in &partition {
            for &node in community {
                assert!(seen.insert(node), "node {node} appears twice");
            }
        }
        let all: BTreeSet<NodeId> = graph.nodes().collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_idempotent() {
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(2), NodeId(3)),
            (NodeId(3), NodeId(4)),
        ])
        .unwrap();

        let first = connected_components(&graph);
        let second = connected_components(&graph);
        assert_eq!(first, second);
    }

    #[test]
    fn test_node_left_isolated_by_removal() {
        let mut graph = AdjacencyGraph::from_edge_list(&[(NodeId(0), NodeId(1))]).unwrap();
        graph.remove_edge(NodeId(0), NodeId(1));

        let partition = connected_components(&graph);
        assert_eq!(partition.len(), 2);
        assert!(partition.iter().all(|community| community.len() == 1));
    }
}
