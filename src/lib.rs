//! edgecut: Girvan-Newman community detection on undirected networks
//!
//! # Overview
//!
//! edgecut partitions small undirected graphs into communities by iterative
//! edge removal: recompute edge betweenness (Brandes, one BFS pass per
//! source), remove the highest-scoring edge, and read communities off the
//! connected components. The refiner yields every intermediate partition so
//! callers can score them (e.g. by modularity) and keep the best.
//!
//! # Quick Start
//!
//! ```
//! use edgecut::{girvan_newman_best, AdjacencyGraph, NodeId};
//!
//! // Two triangles joined by a bridge
//! let graph = AdjacencyGraph::from_edge_list(&[
//!     (NodeId(0), NodeId(1)),
//!     (NodeId(1), NodeId(2)),
//!     (NodeId(2), NodeId(0)),
//!     (NodeId(3), NodeId(4)),
//!     (NodeId(4), NodeId(5)),
//!     (NodeId(5), NodeId(3)),
//!     (NodeId(2), NodeId(3)),
//! ])
//! .unwrap();
//!
//! let best = girvan_newman_best(graph);
//! assert_eq!(best.len(), 2);
//! ```
//!
//! # Architecture
//!
//! - **Graph store**: ordered adjacency sets, symmetric edge insert/remove
//! - **Connectivity**: iterative-stack component extraction
//! - **Betweenness**: Brandes' algorithm adapted to edges, O(V·(V + E))
//! - **Refiner**: [`GirvanNewman`], a lazy sequence of partitions
//!
//! The full loop is O(|E| · V · (V + E)): betweenness is rebuilt from
//! scratch after every removal, which is why the method only suits small
//! demonstration graphs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod graph;
pub mod io;

// Re-export core types
pub use algorithms::{
    betweenness_centrality, closeness_centrality, connected_components, degree_centrality,
    edge_betweenness, girvan_newman, girvan_newman_best, modularity, GirvanNewman, Partition,
};
pub use graph::{AdjacencyGraph, Edge, NodeId};
pub use io::{parse_edge_list, write_partition, ParseError};

// Error type
pub use anyhow::{Error, Result};
