//! Node centrality measures (degree, closeness, betweenness)
//!
//! Auxiliary primitives alongside the community pipeline. Betweenness is the
//! node form of the Brandes pass the edge engine uses; closeness follows the
//! component-local convention: (reachable − 1) / distance sum, 0 for
//! isolated nodes.

use crate::graph::{AdjacencyGraph, NodeId};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Degree of every node.
///
/// # Example
///
/// ```
/// use edgecut::{degree_centrality, AdjacencyGraph, NodeId};
///
/// let graph = AdjacencyGraph::from_edge_list(&[
///     (NodeId(0), NodeId(1)),
///     (NodeId(0), NodeId(2)),
/// ])
/// .unwrap();
///
/// let degrees = degree_centrality(&graph);
/// assert_eq!(degrees[&NodeId(0)], 2);
/// assert_eq!(degrees[&NodeId(1)], 1);
/// ```
#[must_use]
pub fn degree_centrality(graph: &AdjacencyGraph) -> BTreeMap<NodeId, usize> {
    graph
        .nodes()
        .map(|node| (node, graph.degree(node)))
        .collect()
}

/// Closeness centrality of every node.
///
/// For each source a BFS measures hop distances within its component;
/// closeness is (reachable − 1) divided by the sum of those distances.
/// Nodes reaching nothing score 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(graph: &AdjacencyGraph) -> BTreeMap<NodeId, f64> {
    let mut scores = BTreeMap::new();

    for source in graph.nodes() {
        let mut dist: HashMap<NodeId, usize> = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(source, 0);
        queue.push_back(source);

        let mut sum = 0usize;
        while let Some(node) = queue.pop_front() {
            let d = dist[&node];
            sum += d;
            for neighbor in graph.neighbors(node) {
                if !dist.contains_key(&neighbor) {
                    dist.insert(neighbor, d + 1);
                    queue.push_back(neighbor);
                }
            }
        }

        let reachable = dist.len(); // Includes the source itself
        let score = if reachable > 1 && sum > 0 {
            (reachable - 1) as f64 / sum as f64
        } else {
            0.0
        };
        scores.insert(source, score);
    }

    scores
}

/// Betweenness centrality of every node (Brandes' algorithm).
///
/// Counts, for each node, the shortest paths between other node pairs that
/// pass through it, halved for the undirected double count. Endpoints do
/// not accumulate their own paths.
///
/// # Example
///
/// ```
/// use edgecut::{betweenness_centrality, AdjacencyGraph, NodeId};
///
/// // Path 0 - 1 - 2: only the middle node lies between a pair
/// let graph = AdjacencyGraph::from_edge_list(&[
///     (NodeId(0), NodeId(1)),
///     (NodeId(1), NodeId(2)),
/// ])
/// .unwrap();
///
/// let scores = betweenness_centrality(&graph);
/// assert_eq!(scores[&NodeId(1)], 1.0);
/// assert_eq!(scores[&NodeId(0)], 0.0);
/// ```
#[must_use]
pub fn betweenness_centrality(graph: &AdjacencyGraph) -> BTreeMap<NodeId, f64> {
    let nodes: Vec<NodeId> = graph.nodes().collect();
    let index: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, &node)| (node, i))
        .collect();
    let n = nodes.len();

    let mut centrality = vec![0.0f64; n];
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

        for &w in order.iter().rev() {
            for &v in &preds[w] {
                if sigma[w] == 0.0 {
                    debug_assert!(sigma[w] > 0.0, "zero path count for discovered node");
                    continue;
                }
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != source {
                centrality[w] += delta[w];
            }
        }
    }

    nodes
        .iter()
        .zip(centrality)
        .map(|(&node, score)| (node, score / 2.0))
        .collect()
}
