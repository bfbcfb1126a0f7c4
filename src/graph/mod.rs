//! Graph storage (adjacency sets over integer node identifiers)

mod adjacency;

pub use adjacency::{AdjacencyGraph, Edge, NodeId};
