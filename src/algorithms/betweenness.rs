//! Edge betweenness via Brandes' algorithm
//!
//! Brandes (2001): one unweighted BFS per source recording shortest-path
//! distance, path count and predecessors, followed by a reverse-discovery
//! pass that accumulates each edge's share of shortest paths. O(V + E) per
//! source, O(V·(V + E)) total.

use crate::graph::{AdjacencyGraph, Edge, NodeId};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Compute the betweenness score of every edge in the graph
///
/// The score of an edge is the number of shortest paths between unordered
/// node pairs that traverse it. Each source contributes once for every
/// ordered pair, so the accumulated totals are halved at the end.
///
/// Disconnected graphs need no special handling: a BFS source simply never
/// reaches other components and contributes nothing to their edges. A graph
/// with no edges yields an empty table.
///
/// # Example
///
/// ```
/// use edgecut::{edge_betweenness, AdjacencyGraph, Edge, NodeId};
///
/// // Path 0 - 1 - 2: the middle node sits on both edges,
/// // and the pair (0, 2) routes through each edge once.
/// let graph = AdjacencyGraph::from_edge_list(&[
///     (NodeId(0), NodeId(1)),
///     (NodeId(1), NodeId(2)),
/// ])
/// .unwrap();
///
/// let scores = edge_betweenness(&graph);
/// assert_eq!(scores[&Edge::new(NodeId(0), NodeId(1))], 2.0); // pairs (0,1), (0,2)
/// assert_eq!(scores[&Edge::new(NodeId(1), NodeId(2))], 2.0); // pairs (1,2), (0,2)
/// ```
#[must_use]
pub fn edge_betweenness(graph: &AdjacencyGraph) -> BTreeMap<Edge, f64> {
    let mut scores: BTreeMap<Edge, f64> = graph.edges().map(|edge| (edge, 0.0)).collect();
    if scores.is_empty() {
        return scores;
    }

    let nodes: Vec<NodeId> = graph.nodes().collect();
    let index: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, &node)| (node, i))
        .collect();
    let n = nodes.len();

    // Per-source state, reset between sources instead of reallocated
    let mut dist: Vec<i32> = vec![-1; n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut delta: Vec<f64> = vec![0.0; n];
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut queue: VecDeque<usize> = VecDeque::new();

    for source in 0..n {
        dist.fill(-1);
        sigma.fill(0.0);
        delta.fill(0.0);
        for pred in &mut preds {
            pred.clear();
        }
        order.clear();

        // Pass 1: BFS from the source, counting shortest paths
        dist[source] = 0;
        sigma[source] = 1.0;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            for neighbor in graph.neighbors(nodes[v]) {
                let w = index[&neighbor];
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    preds[w].push(v);
                }
            }
        }

        // Pass 2: accumulate dependencies in reverse discovery order
        for &w in order.iter().rev() {
            for &v in &preds[w] {
                if sigma[w] == 0.0 {
                    // BFS bookkeeping guarantees a positive path count for
                    // every discovered node; a zero here is a broken invariant.
                    debug_assert!(sigma[w] > 0.0, "zero path count for discovered node");
                    continue;
                }
                let credit = (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                let edge = Edge::new(nodes[v], nodes[w]);
                if let Some(score) = scores.get_mut(&edge) {
                    *score += credit;
                }
                delta[v] += credit;
            }
        }
    }

    // Each unordered pair was counted from both endpoints
    for score in scores.values_mut() {
        *score /= 2.0;
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(u: u32, v: u32) -> Edge {
        Edge::new(NodeId(u), NodeId(v))
    }

    #[test]
    fn test_edgeless_graph_empty_table() {
        let mut graph = AdjacencyGraph::new();
        graph.add_node(NodeId(0));
        graph.add_node(NodeId(1));

        assert!(edge_betweenness(&graph).is_empty());
    }

    #[test]
    fn test_single_edge() {
        let graph = AdjacencyGraph::from_edge_list(&[(NodeId(0), NodeId(1))]).unwrap();
        let scores = edge_betweenness(&graph);

        assert_eq!(scores.len(), 1);
        assert!((scores[&edge(0, 1)] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_path_graph() {
        // 0 - 1 - 2 - 3: middle edge carries pairs (0,2), (0,3), (1,2), (1,3)
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(3)),
        ])
        .unwrap();
        let scores = edge_betweenness(&graph);

        assert!((scores[&edge(0, 1)] - 3.0).abs() < 1e-9);
        assert!((scores[&edge(1, 2)] - 4.0).abs() < 1e-9);
        assert!((scores[&edge(2, 3)] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_four_cycle_symmetric() {
        // All four edges of a 4-cycle are equivalent by symmetry
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(3)),
            (NodeId(3), NodeId(0)),
        ])
        .unwrap();
        let scores = edge_betweenness(&graph);

        assert_eq!(scores.len(), 4);
        let first = scores[&edge(0, 1)];
        for (&e, &score) in &scores {
            assert!((score - first).abs() < 1e-9, "edge {e} diverges: {score}");
        }
    }

    #[test]
    fn test_bridge_dominates_triangles() {
        // Two triangles joined by the bridge (2, 3): every cross pair
        // routes through the bridge, so it must score strictly highest.
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
        let scores = edge_betweenness(&graph);

        let bridge = scores[&edge(2, 3)];
        for (&e, &score) in &scores {
            if e != edge(2, 3) {
                assert!(bridge > score, "bridge not strictly above {e} ({score})");
            }
        }
        // All 3x3 cross pairs traverse the bridge, each along a unique path
        assert!((bridge - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_disconnected_components_independent() {
        // Two separate edges: each behaves like an isolated single edge
        let graph =
            AdjacencyGraph::from_edge_list(&[(NodeId(0), NodeId(1)), (NodeId(2), NodeId(3))])
                .unwrap();
        let scores = edge_betweenness(&graph);

        assert!((scores[&edge(0, 1)] - 1.0).abs() < 1e-9);
        assert!((scores[&edge(2, 3)] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_star_center_edges_equal() {
        // Star around node 0: each spoke carries its leaf's paths to
        // everything else.
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(0), NodeId(2)),
            (NodeId(0), NodeId(3)),
            (NodeId(0), NodeId(4)),
        ])
        .unwrap();
        let scores = edge_betweenness(&graph);

        for &score in scores.values() {
            // Spoke (0, i): pair (i, 0) plus pairs (i, j) for the 3 other
            // leaves, each via the unique path i-0-j. 1 + 3 = 4.
            assert!((score - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_all_scores_nonnegative() {
        let graph = AdjacencyGraph::from_edge_list(&[
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(3)),
            (NodeId(3), NodeId(1)),
        ])
        .unwrap();

        assert!(edge_betweenness(&graph).values().all(|&s| s >= 0.0));
    }
}
