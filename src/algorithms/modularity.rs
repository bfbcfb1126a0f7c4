//! Modularity scoring for partitions
//!
//! Newman & Girvan (2004): Q = (1/2m) Σ_{ij in same community}
//! (A_ij − k_i k_j / 2m), where m is the edge count and k_i the degree of
//! node i. Scores a partition against the *original* graph, independent of
//! any edges the refiner has since removed.

use crate::algorithms::components::Partition;
use crate::graph::AdjacencyGraph;

/// Compute the modularity Q of `partition` with respect to `graph`
///
/// Positive values indicate denser-than-expected intra-community edges;
/// an edgeless graph scores 0 by convention. Q lies in [-1/2, 1).
///
/// The double sum collapses per community c to
/// `2·L_c − (Σ_i∈c k_i)² / 2m`, where `L_c` is the number of edges with
/// both endpoints inside c.
///
/// # Example
///
/// ```
/// use edgecut::{connected_components, modularity, AdjacencyGraph, NodeId};
///
/// // Two disconnected triangles split into their components
/// let graph = AdjacencyGraph::from_edge_list(&[
///     (NodeId(0), NodeId(1)),
///     (NodeId(1), NodeId(2)),
///     (NodeId(2), NodeId(0)),
///     (NodeId(3), NodeId(4)),
///     (NodeId(4), NodeId(5)),
///     (NodeId(5), NodeId(3)),
/// ])
/// .unwrap();
///
/// let partition = connected_components(&graph);
/// assert!((modularity(&graph, &partition) - 0.5).abs() < 1e-9);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // Graphs beyond 2^52 edges are out of scope
pub fn modularity(graph: &AdjacencyGraph, partition: &Partition) -> f64 {
    let m = graph.num_edges() as f64;
    if m == 0.0 {
        return 0.0;
    }

    let mut q = 0.0;
    for community in partition {
        let mut intra_endpoints = 0usize; // Σ A_ij over ordered pairs = 2·L_c
        let mut degree_sum = 0usize;

        for &node in community {
            degree_sum += graph.degree(node);
            intra_endpoints += graph
                .neighbors(node)
                .filter(|neighbor| community.contains(neighbor))
                .count();
        }

        let degree_sum = degree_sum as f64;
        q += intra_endpoints as f64 - degree_sum * degree_sum / (2.0 * m);
    }

    q / (2.0 * m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::components::connected_components;
    use crate::graph::NodeId;
    use std::collections::BTreeSet;

    fn community(nodes: &[u32]) -> BTreeSet<NodeId> {
        nodes.iter().map(|&n| NodeId(n)).collect()
    }

    #[test]
    fn test_edgeless_graph_is_zero() {
        let mut graph = AdjacencyGraph::new();
        graph.add_node(NodeId(0));
        let partition = connected_components(&graph);

        assert_eq!(modularity(&graph, &partition), 0.0);
    }

    #[test]
    fn test_whole_graph_one_community_is_zero() {
        // With everything in one community, observed minus expected cancels
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(0)),
        ])
        .unwrap();
        let partition = Partition::new(vec![community(&[0, 1, 2])]);

        assert!(modularity(&graph, &partition).abs() < 1e-9);
    }

    #[test]
    fn test_disconnected_triangles_half() {
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(0)),
            (NodeId(3), NodeId(4)),
            (NodeId(4), NodeId(5)),
            (NodeId(5), NodeId(3)),
        ])
        .unwrap();
        let partition = Partition::new(vec![community(&[0, 1, 2]), community(&[3, 4, 5])]);

        // Each community: 2·3 intra endpoints, degree sum 6, m = 6
        // Q = 2 · (6 − 36/12) / 12 = 0.5
        assert!((modularity(&graph, &partition) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_all_singletons_negative() {
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(0)),
        ])
        .unwrap();
        let partition = Partition::new(vec![
            community(&[0]),
            community(&[1]),
            community(&[2]),
        ]);

        // No intra edges at all, only the expected-density penalty remains
        assert!(modularity(&graph, &partition) < 0.0);
    }

    #[test]
    fn test_good_split_beats_bad_split() {
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(0)),
            (NodeId(3), NodeId(4)),
            (NodeId(4), NodeId(5)),
            (NodeId(5), NodeId(3)),
            (NodeId(2), NodeId(3)),
        ])
        .unwrap();

        let triangles = Partition::new(vec![community(&[0, 1, 2]), community(&[3, 4, 5])]);
        let lopsided = Partition::new(vec![community(&[0]), community(&[1, 2, 3, 4, 5])]);

        assert!(modularity(&graph, &triangles) > modularity(&graph, &lopsided));
    }
}
